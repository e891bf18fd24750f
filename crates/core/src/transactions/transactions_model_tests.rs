//! Tests for transaction models: enums, wire format, and validation.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::transactions::{
        ActionType, CashEntryType, NewCashJournal, NewCorporateAction, NewFxTransaction,
        NewTrade, Trade, TradeSide,
    };

    // ==================== Enum Serialization ====================

    #[test]
    fn test_trade_side_serialization() {
        assert_eq!(serde_json::to_string(&TradeSide::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&TradeSide::Sell).unwrap(), "\"SELL\"");
    }

    #[test]
    fn test_cash_entry_type_serialization() {
        assert_eq!(
            serde_json::to_string(&CashEntryType::Withdrawal).unwrap(),
            "\"WITHDRAWAL\""
        );
    }

    #[test]
    fn test_action_type_deserialization() {
        assert_eq!(
            serde_json::from_str::<ActionType>("\"DIVIDEND\"").unwrap(),
            ActionType::Dividend
        );
    }

    // ==================== Wire Format ====================

    #[test]
    fn test_trade_amounts_are_decimal_strings() {
        let json = r#"{
            "id": "t-1",
            "account_id": "acc-1",
            "symbol": "AAPL",
            "side": "BUY",
            "quantity": "12.5",
            "price": "187.33",
            "fees": "1.95",
            "currency": "USD",
            "trade_date": "2025-02-14",
            "settle_date": "2025-02-18"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.quantity, dec!(12.5));
        assert_eq!(trade.fees, Some(dec!(1.95)));

        let value = serde_json::to_value(&trade).unwrap();
        assert_eq!(value["price"], "187.33");
    }

    // ==================== Draft Validation ====================

    fn valid_trade() -> NewTrade {
        NewTrade {
            account_id: "acc-1".to_string(),
            symbol: "AAPL".to_string(),
            side: TradeSide::Buy,
            quantity: dec!(10),
            price: dec!(187.33),
            currency: "USD".to_string(),
            trade_date: NaiveDate::from_ymd_opt(2025, 2, 14),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_trade_requires_positive_quantity() {
        let mut draft = valid_trade();
        assert!(draft.validate().is_ok());

        draft.quantity = Decimal::ZERO;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_new_trade_requires_trade_date() {
        let mut draft = valid_trade();
        draft.trade_date = None;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_new_cash_journal_requires_positive_amount() {
        let draft = NewCashJournal {
            account_id: "acc-1".to_string(),
            entry_type: CashEntryType::Deposit,
            amount: dec!(-50),
            currency: "USD".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_new_fx_rejects_same_currency_pair() {
        let draft = NewFxTransaction {
            account_id: "acc-1".to_string(),
            sell_currency: "USD".to_string(),
            buy_currency: "USD".to_string(),
            sell_amount: dec!(100),
            buy_amount: dec!(100),
            trade_date: NaiveDate::from_ymd_opt(2025, 1, 31),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_dividend_requires_amount_split_requires_ratio() {
        let dividend = NewCorporateAction {
            symbol: "AAPL".to_string(),
            action_type: ActionType::Dividend,
            ex_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Default::default()
        };
        assert!(dividend.validate().is_err());

        let split = NewCorporateAction {
            symbol: "AAPL".to_string(),
            action_type: ActionType::Split,
            ratio: Some(dec!(4)),
            ex_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Default::default()
        };
        assert!(split.validate().is_ok());
    }
}
