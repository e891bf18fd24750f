//! Tests for analytics models.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::analytics::{FilterOptions, GroupBy, MoverDirection, PositionsReport};
    use crate::paging::Paginated;

    #[test]
    fn test_positions_report_round_trips_backend_shape() {
        let json = r#"{
            "group_by": "asset_class",
            "rows": [
                {
                    "group_key": "EQ",
                    "market_value": "150000.00",
                    "cost_basis": "120000.00",
                    "gain_loss": "30000.00",
                    "gain_loss_pct": "25.00",
                    "weight_pct": "60.00"
                }
            ],
            "totals": {
                "market_value": "250000.00",
                "cost_basis": "230000.00",
                "gain_loss": "20000.00"
            }
        }"#;
        let report: PositionsReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.group_by, GroupBy::AssetClass);
        assert_eq!(report.rows[0].gain_loss_pct, dec!(25.00));
        assert_eq!(report.totals.market_value, dec!(250000.00));
    }

    #[test]
    fn test_movers_envelope_deserializes() {
        let json = r#"{
            "data": [
                {
                    "symbol": "NVDA",
                    "name": "NVIDIA Corp",
                    "last_price": "901.50",
                    "change_pct": "8.13",
                    "market_value": "45075.00"
                }
            ],
            "pagination": {"total": 37, "has_more": true}
        }"#;
        let page: Paginated<crate::analytics::Mover> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.has_more());
        assert_eq!(page.data[0].change_pct, dec!(8.13));
    }

    #[test]
    fn test_filter_options_tolerate_missing_lists() {
        let options: FilterOptions = serde_json::from_str("{}").unwrap();
        assert!(options.portfolios.is_empty());
        assert!(options.currencies.is_empty());
    }

    #[test]
    fn test_group_by_wire_values() {
        assert_eq!(GroupBy::AssetClass.as_str(), "asset_class");
        assert_eq!("portfolio".parse::<GroupBy>().unwrap(), GroupBy::Portfolio);
        assert!("sector".parse::<GroupBy>().is_err());
    }

    #[test]
    fn test_mover_direction_wire_values() {
        assert_eq!(MoverDirection::Losers.as_str(), "losers");
        assert_eq!(
            "gainers".parse::<MoverDirection>().unwrap(),
            MoverDirection::Gainers
        );
    }
}
