//! Domain models for catalog reference data.
//!
//! Each catalog kind is a flat DTO mirrored from the backend; the client
//! holds no authoritative copy and performs no reconciliation beyond
//! refetching after a mutation.

use serde::{Deserialize, Serialize};

use crate::errors::{require_field, Result, ValidationError};
use crate::listing::{Listable, SortValue};

/// A stock exchange (e.g. NYSE, LSE).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub code: String,
    pub name: String,
    pub country_code: String,
    pub timezone: Option<String>,
    pub operating_mic: Option<String>,
}

/// Data for creating a new exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewExchange {
    pub code: String,
    pub name: String,
    pub country_code: String,
    pub timezone: Option<String>,
    pub operating_mic: Option<String>,
}

impl NewExchange {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        require_field("country_code", &self.country_code)?;
        Ok(())
    }
}

/// Data for updating an existing exchange (keyed by code).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeUpdate {
    pub name: String,
    pub country_code: String,
    pub timezone: Option<String>,
    pub operating_mic: Option<String>,
}

impl ExchangeUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("country_code", &self.country_code)?;
        Ok(())
    }
}

impl Listable for Exchange {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.country_code.clone(),
        ]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "code" => Some(SortValue::Text(self.code.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "country_code" => Some(SortValue::Text(self.country_code.clone())),
            _ => None,
        }
    }
}

/// A country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub region: Option<String>,
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCountry {
    pub code: String,
    pub name: String,
    pub region: Option<String>,
    pub currency_code: Option<String>,
}

impl NewCountry {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryUpdate {
    pub name: String,
    pub region: Option<String>,
    pub currency_code: Option<String>,
}

impl CountryUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        Ok(())
    }
}

impl Listable for Country {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.code.clone(), self.name.clone()];
        if let Some(region) = &self.region {
            values.push(region.clone());
        }
        values
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "code" => Some(SortValue::Text(self.code.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "region" => self.region.clone().map(SortValue::Text),
            _ => None,
        }
    }
}

/// An industry classification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    pub code: String,
    pub name: String,
    pub sector_code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIndustry {
    pub code: String,
    pub name: String,
    pub sector_code: Option<String>,
    pub description: Option<String>,
}

impl NewIndustry {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryUpdate {
    pub name: String,
    pub sector_code: Option<String>,
    pub description: Option<String>,
}

impl IndustryUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        Ok(())
    }
}

impl Listable for Industry {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.code.clone(), self.name.clone()];
        if let Some(sector) = &self.sector_code {
            values.push(sector.clone());
        }
        values
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "code" => Some(SortValue::Text(self.code.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "sector_code" => self.sector_code.clone().map(SortValue::Text),
            _ => None,
        }
    }
}

/// A market index (e.g. SPX).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIndex {
    pub code: String,
    pub name: String,
    pub currency_code: Option<String>,
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMarketIndex {
    pub code: String,
    pub name: String,
    pub currency_code: Option<String>,
    pub provider: Option<String>,
}

impl NewMarketIndex {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketIndexUpdate {
    pub name: String,
    pub currency_code: Option<String>,
    pub provider: Option<String>,
}

impl MarketIndexUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        Ok(())
    }
}

impl Listable for MarketIndex {
    fn search_values(&self) -> Vec<String> {
        vec![self.code.clone(), self.name.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "code" => Some(SortValue::Text(self.code.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "provider" => self.provider.clone().map(SortValue::Text),
            _ => None,
        }
    }
}

/// A currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: Option<String>,
    pub decimal_places: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCurrency {
    pub code: String,
    pub name: String,
    pub symbol: Option<String>,
    pub decimal_places: i32,
}

impl Default for NewCurrency {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            symbol: None,
            decimal_places: 2,
        }
    }
}

impl NewCurrency {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        if self.decimal_places < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "decimal_places must be non-negative, got {}",
                self.decimal_places
            ))
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyUpdate {
    pub name: String,
    pub symbol: Option<String>,
    pub decimal_places: i32,
}

impl Default for CurrencyUpdate {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: None,
            decimal_places: 2,
        }
    }
}

impl CurrencyUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        if self.decimal_places < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "decimal_places must be non-negative, got {}",
                self.decimal_places
            ))
            .into());
        }
        Ok(())
    }
}

impl Listable for Currency {
    fn search_values(&self) -> Vec<String> {
        vec![self.code.clone(), self.name.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "code" => Some(SortValue::Text(self.code.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "decimal_places" => Some(SortValue::Number(self.decimal_places.into())),
            _ => None,
        }
    }
}

/// A broad asset class with its nested subclasses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetClass {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sub_classes: Vec<AssetSubClass>,
}

/// A subclass within an asset class (one-to-many).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSubClass {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAssetClass {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sub_classes: Vec<NewAssetSubClass>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAssetSubClass {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl NewAssetClass {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        for sub in &self.sub_classes {
            sub.validate()?;
        }
        Ok(())
    }
}

impl NewAssetSubClass {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetClassUpdate {
    pub name: String,
    pub description: Option<String>,
}

impl AssetClassUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        Ok(())
    }
}

impl Listable for AssetClass {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.code.clone(), self.name.clone()];
        values.extend(self.sub_classes.iter().map(|sub| sub.name.clone()));
        values
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "code" => Some(SortValue::Text(self.code.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "sub_classes" => Some(SortValue::Number((self.sub_classes.len() as i64).into())),
            _ => None,
        }
    }
}

/// An investment strategy (e.g. income, growth).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentStrategy {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub risk_level: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewInvestmentStrategy {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub risk_level: Option<i32>,
}

impl NewInvestmentStrategy {
    pub fn validate(&self) -> Result<()> {
        require_field("code", &self.code)?;
        require_field("name", &self.name)?;
        validate_risk_level(self.risk_level)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestmentStrategyUpdate {
    pub name: String,
    pub description: Option<String>,
    pub risk_level: Option<i32>,
}

impl InvestmentStrategyUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        validate_risk_level(self.risk_level)
    }
}

// Risk levels are a 1-5 scale set by the backend's catalog schema.
fn validate_risk_level(level: Option<i32>) -> Result<()> {
    if let Some(level) = level {
        if !(1..=5).contains(&level) {
            return Err(ValidationError::InvalidInput(format!(
                "risk_level must be between 1 and 5, got {}",
                level
            ))
            .into());
        }
    }
    Ok(())
}

impl Listable for InvestmentStrategy {
    fn search_values(&self) -> Vec<String> {
        vec![self.code.clone(), self.name.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "code" => Some(SortValue::Text(self.code.clone())),
            "name" => Some(SortValue::Text(self.name.clone())),
            "risk_level" => self.risk_level.map(|level| SortValue::Number(level.into())),
            _ => None,
        }
    }
}
