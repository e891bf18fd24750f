//! Performance domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};

/// Time-weighted return summary for one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwrSummary {
    pub portfolio_id: String,
    pub portfolio_name: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub ytd_pct: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub one_year_pct: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub since_inception_pct: Option<Decimal>,
}

impl Listable for TwrSummary {
    fn search_values(&self) -> Vec<String> {
        vec![self.portfolio_name.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "portfolio_name" => Some(SortValue::Text(self.portfolio_name.clone())),
            "ytd_pct" => self.ytd_pct.map(SortValue::Number),
            "one_year_pct" => self.one_year_pct.map(SortValue::Number),
            "since_inception_pct" => self.since_inception_pct.map(SortValue::Number),
            _ => None,
        }
    }
}
