//! Tests for asset models: decimal-as-string wire format and validation.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::assets::{Asset, NewAsset};
    use crate::errors::{Error, ValidationError};

    fn structured_note_json() -> &'static str {
        r#"{
            "id": "a-42",
            "symbol": "XS123",
            "name": "Capital Protected Note on SPX",
            "isin": "XS0123456789",
            "figi": null,
            "cusip": null,
            "asset_class_code": "SP",
            "asset_sub_class_code": "NOTE",
            "currency": "USD",
            "exchange_code": null,
            "notes": null,
            "issuer": "Example Bank",
            "maturity_date": "2027-06-30",
            "coupon_rate": "4.25",
            "barrier_level": "0.70",
            "protection_level": "0.90",
            "underlying_symbol": "SPX"
        }"#
    }

    // ==================== Wire Format ====================

    #[test]
    fn test_structured_note_decimals_arrive_as_strings() {
        let asset: Asset = serde_json::from_str(structured_note_json()).unwrap();
        assert_eq!(asset.coupon_rate, Some(dec!(4.25)));
        assert_eq!(asset.barrier_level, Some(dec!(0.70)));
        assert_eq!(asset.protection_level, Some(dec!(0.90)));
        assert_eq!(
            asset.maturity_date.unwrap().to_string(),
            "2027-06-30".to_string()
        );
    }

    #[test]
    fn test_decimal_fields_serialize_back_as_strings() {
        let asset: Asset = serde_json::from_str(structured_note_json()).unwrap();
        let value = serde_json::to_value(&asset).unwrap();
        // Monetary values stay strings on the wire; no float rounding.
        assert_eq!(value["coupon_rate"], "4.25");
        assert_eq!(value["barrier_level"], "0.70");
    }

    #[test]
    fn test_vanilla_asset_omits_derivative_fields() {
        let json = r#"{
            "id": "a-1",
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "isin": null,
            "figi": null,
            "cusip": null,
            "asset_class_code": "EQ",
            "asset_sub_class_code": null,
            "currency": "USD",
            "exchange_code": "NASDAQ",
            "notes": null,
            "issuer": null,
            "maturity_date": null,
            "underlying_symbol": null
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert!(asset.coupon_rate.is_none());
        assert!(asset.barrier_level.is_none());
    }

    // ==================== Draft Validation ====================

    #[test]
    fn test_new_asset_requires_symbol_name_currency() {
        let err = NewAsset::default().validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "symbol"
        ));

        let draft = NewAsset {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            currency: " ".to_string(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "currency"
        ));
    }

    #[test]
    fn test_new_asset_minimum_fields_pass() {
        let draft = NewAsset {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            currency: "USD".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }
}
