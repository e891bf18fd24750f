//! Asset domain models.
//!
//! Assets carry a cluster of optional identifier and structured-note fields;
//! only plain-vanilla instruments fill in the minimum set.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{require_field, Result};
use crate::listing::{Listable, SortValue};

/// An instrument known to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub isin: Option<String>,
    pub figi: Option<String>,
    pub cusip: Option<String>,
    pub asset_class_code: Option<String>,
    pub asset_sub_class_code: Option<String>,
    pub currency: String,
    pub exchange_code: Option<String>,
    pub notes: Option<String>,
    // Structured-note fields; absent for vanilla instruments.
    pub issuer: Option<String>,
    pub maturity_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub coupon_rate: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub barrier_level: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub protection_level: Option<Decimal>,
    pub underlying_symbol: Option<String>,
}

/// Data for creating a new asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAsset {
    pub symbol: String,
    pub name: String,
    pub isin: Option<String>,
    pub figi: Option<String>,
    pub cusip: Option<String>,
    pub asset_class_code: Option<String>,
    pub asset_sub_class_code: Option<String>,
    pub currency: String,
    pub exchange_code: Option<String>,
    pub notes: Option<String>,
    pub issuer: Option<String>,
    pub maturity_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub coupon_rate: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub barrier_level: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub protection_level: Option<Decimal>,
    pub underlying_symbol: Option<String>,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        require_field("symbol", &self.symbol)?;
        require_field("name", &self.name)?;
        require_field("currency", &self.currency)?;
        Ok(())
    }
}

/// Data for updating an existing asset (keyed by id).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetUpdate {
    pub name: String,
    pub isin: Option<String>,
    pub figi: Option<String>,
    pub cusip: Option<String>,
    pub asset_class_code: Option<String>,
    pub asset_sub_class_code: Option<String>,
    pub exchange_code: Option<String>,
    pub notes: Option<String>,
    pub issuer: Option<String>,
    pub maturity_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub coupon_rate: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub barrier_level: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub protection_level: Option<Decimal>,
    pub underlying_symbol: Option<String>,
}

impl AssetUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        Ok(())
    }
}

impl Listable for Asset {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.symbol.clone(), self.name.clone()];
        if let Some(isin) = &self.isin {
            values.push(isin.clone());
        }
        if let Some(issuer) = &self.issuer {
            values.push(issuer.clone());
        }
        values
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "symbol" => Some(SortValue::Text(self.symbol.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "currency" => Some(SortValue::Text(self.currency.clone())),
            "asset_class_code" => self.asset_class_code.clone().map(SortValue::Text),
            "maturity_date" => self.maturity_date.map(SortValue::Date),
            "coupon_rate" => self.coupon_rate.map(SortValue::Number),
            _ => None,
        }
    }
}
