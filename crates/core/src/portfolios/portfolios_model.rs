//! Portfolio domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{require_field, Result, ValidationError};
use crate::listing::{Listable, SortValue};

/// A client portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    pub owner_user_id: String,
    pub currency: String,
    pub country_code: Option<String>,
    pub inception_date: NaiveDate,
    pub strategy_code: Option<String>,
}

/// The reduced shape served by `/portfolios/simple` for dropdowns and cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSimple {
    pub id: String,
    pub name: String,
}

/// Data for creating a new portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPortfolio {
    pub name: String,
    pub owner_user_id: String,
    pub currency: String,
    pub country_code: Option<String>,
    pub inception_date: Option<NaiveDate>,
    pub strategy_code: Option<String>,
}

impl NewPortfolio {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("owner_user_id", &self.owner_user_id)?;
        require_field("currency", &self.currency)?;
        if self.inception_date.is_none() {
            return Err(ValidationError::MissingField("inception_date".to_string()).into());
        }
        Ok(())
    }
}

/// Data for updating an existing portfolio (keyed by id).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioUpdate {
    pub name: String,
    pub currency: String,
    pub country_code: Option<String>,
    pub strategy_code: Option<String>,
}

impl PortfolioUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("currency", &self.currency)?;
        Ok(())
    }
}

impl Listable for Portfolio {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.owner_user_id.clone(),
            self.currency.clone(),
        ]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "currency" => Some(SortValue::Text(self.currency.clone())),
            "inception_date" => Some(SortValue::Date(self.inception_date)),
            _ => None,
        }
    }
}
