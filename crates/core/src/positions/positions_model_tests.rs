//! Tests for position models: exact decimal wire format.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::listing::{ListState, Listable, SortValue};
    use crate::positions::Position;

    fn position_json(symbol: &str, quantity: &str, pnl: &str) -> String {
        format!(
            r#"{{
                "account_id": "acc-1",
                "symbol": "{}",
                "quantity": "{}",
                "mark_price": "101.25",
                "cost_basis": "10000.00",
                "market_value": "10125.00",
                "pnl": "{}",
                "fx_rate": "1.0842",
                "currency": "USD",
                "as_of_date": "2025-03-31"
            }}"#,
            symbol, quantity, pnl
        )
    }

    #[test]
    fn test_position_decimals_survive_the_wire_exactly() {
        let position: Position =
            serde_json::from_str(&position_json("AAPL", "100.000001", "125.00")).unwrap();
        assert_eq!(position.quantity, dec!(100.000001));
        assert_eq!(position.fx_rate, dec!(1.0842));

        let value = serde_json::to_value(&position).unwrap();
        assert_eq!(value["quantity"], "100.000001");
        assert_eq!(value["fx_rate"], "1.0842");
    }

    #[test]
    fn test_position_rejects_numeric_quantity() {
        // The backend contract is strings; a bare number is a decode error.
        let json = r#"{
            "account_id": "acc-1",
            "symbol": "AAPL",
            "quantity": 100,
            "mark_price": "1",
            "cost_basis": "1",
            "market_value": "1",
            "pnl": "1",
            "fx_rate": "1",
            "currency": "USD",
            "as_of_date": "2025-03-31"
        }"#;
        assert!(serde_json::from_str::<Position>(json).is_err());
    }

    #[test]
    fn test_positions_sort_numerically_not_lexicographically() {
        let rows: Vec<Position> = [("A", "9", "0.1"), ("B", "10", "0.2"), ("C", "2", "0.3")]
            .iter()
            .map(|(s, q, p)| serde_json::from_str(&position_json(s, q, p)).unwrap())
            .collect();

        let mut state = ListState::new();
        state.toggle_sort("quantity");
        let view = state.apply(&rows);
        let symbols: Vec<&str> = view.rows.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_position_sort_values_cover_monetary_columns() {
        let position: Position =
            serde_json::from_str(&position_json("AAPL", "100", "125.00")).unwrap();
        assert_eq!(
            position.sort_value("pnl"),
            Some(SortValue::Number(dec!(125.00)))
        );
        assert!(position.sort_value("nonexistent").is_none());
    }
}
