//! Tests for catalog models: wire format and draft validation.

#[cfg(test)]
mod tests {
    use crate::catalogs::{
        AssetClass, Exchange, NewAssetClass, NewAssetSubClass, NewCurrency, NewExchange,
        NewInvestmentStrategy,
    };
    use crate::errors::{Error, ValidationError};

    // ==================== Wire Format ====================

    #[test]
    fn test_exchange_deserializes_from_backend_json() {
        let json = r#"{
            "code": "NYSE",
            "name": "New York Stock Exchange",
            "country_code": "US",
            "timezone": "America/New_York",
            "operating_mic": "XNYS"
        }"#;
        let exchange: Exchange = serde_json::from_str(json).unwrap();
        assert_eq!(exchange.code, "NYSE");
        assert_eq!(exchange.country_code, "US");
        assert_eq!(exchange.timezone.as_deref(), Some("America/New_York"));
    }

    #[test]
    fn test_exchange_optional_fields_may_be_absent() {
        let json = r#"{"code":"LSE","name":"London Stock Exchange","country_code":"GB","timezone":null,"operating_mic":null}"#;
        let exchange: Exchange = serde_json::from_str(json).unwrap();
        assert!(exchange.operating_mic.is_none());
    }

    #[test]
    fn test_asset_class_sub_classes_default_to_empty() {
        let json = r#"{"code":"EQ","name":"Equities","description":null}"#;
        let class: AssetClass = serde_json::from_str(json).unwrap();
        assert!(class.sub_classes.is_empty());
    }

    #[test]
    fn test_asset_class_nests_sub_classes() {
        let json = r#"{
            "code": "FI",
            "name": "Fixed Income",
            "description": "Bonds and notes",
            "sub_classes": [
                {"code": "GOVT", "name": "Government", "description": null},
                {"code": "CORP", "name": "Corporate", "description": null}
            ]
        }"#;
        let class: AssetClass = serde_json::from_str(json).unwrap();
        assert_eq!(class.sub_classes.len(), 2);
        assert_eq!(class.sub_classes[1].code, "CORP");
    }

    #[test]
    fn test_new_exchange_serializes_snake_case() {
        let draft = NewExchange {
            code: "NYSE".to_string(),
            name: "New York Stock Exchange".to_string(),
            country_code: "US".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["country_code"], "US");
    }

    // ==================== Draft Validation ====================

    #[test]
    fn test_new_exchange_blank_code_blocks_submission() {
        let draft = NewExchange {
            code: "   ".to_string(),
            name: "New York Stock Exchange".to_string(),
            country_code: "US".to_string(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "code"
        ));
    }

    #[test]
    fn test_new_exchange_blank_name_blocks_submission() {
        let draft = NewExchange {
            code: "NYSE".to_string(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "name"
        ));
    }

    #[test]
    fn test_new_exchange_complete_draft_passes() {
        let draft = NewExchange {
            code: "LSE".to_string(),
            name: "London Stock Exchange".to_string(),
            country_code: "GB".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_new_currency_rejects_negative_decimal_places() {
        let draft = NewCurrency {
            code: "USD".to_string(),
            name: "US Dollar".to_string(),
            decimal_places: -1,
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_new_strategy_rejects_out_of_range_risk_level() {
        let draft = NewInvestmentStrategy {
            code: "GROWTH".to_string(),
            name: "Growth".to_string(),
            risk_level: Some(9),
            ..Default::default()
        };
        assert!(draft.validate().is_err());

        let draft = NewInvestmentStrategy {
            code: "GROWTH".to_string(),
            name: "Growth".to_string(),
            risk_level: Some(3),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_new_asset_class_validates_nested_sub_classes() {
        let draft = NewAssetClass {
            code: "EQ".to_string(),
            name: "Equities".to_string(),
            sub_classes: vec![NewAssetSubClass {
                code: String::new(),
                name: "Large Cap".to_string(),
                description: None,
            }],
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }
}
