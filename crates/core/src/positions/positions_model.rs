//! Position domain models.
//!
//! All monetary and quantity fields are decimals transmitted as strings to
//! avoid float rounding on the wire.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};

/// A holding in one account, marked by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub account_id: String,
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub mark_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost_basis: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub market_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub pnl: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fx_rate: Decimal,
    pub currency: String,
    pub as_of_date: NaiveDate,
}

/// A cash balance in one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_id: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    pub as_of_date: NaiveDate,
}

/// Server-side narrowing for position listings.
#[derive(Debug, Clone, Default)]
pub struct PositionFilter {
    pub portfolio_id: Option<String>,
    pub account_id: Option<String>,
}

impl Listable for Position {
    fn search_values(&self) -> Vec<String> {
        vec![self.symbol.clone(), self.account_id.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "symbol" => Some(SortValue::Text(self.symbol.clone())),
            "account_id" => Some(SortValue::Text(self.account_id.clone())),
            "quantity" => Some(SortValue::Number(self.quantity)),
            "mark_price" => Some(SortValue::Number(self.mark_price)),
            "market_value" => Some(SortValue::Number(self.market_value)),
            "pnl" => Some(SortValue::Number(self.pnl)),
            "as_of_date" => Some(SortValue::Date(self.as_of_date)),
            _ => None,
        }
    }
}

impl Listable for AccountBalance {
    fn search_values(&self) -> Vec<String> {
        vec![self.account_id.clone(), self.currency.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "account_id" => Some(SortValue::Text(self.account_id.clone())),
            "currency" => Some(SortValue::Text(self.currency.clone())),
            "balance" => Some(SortValue::Number(self.balance)),
            _ => None,
        }
    }
}
