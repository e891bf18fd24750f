//! Account domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{require_field, Result};
use crate::listing::{Listable, SortValue};

/// A custody account within a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub portfolio_id: String,
    pub name: String,
    pub institution: String,
    pub currency: String,
    pub account_type: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Data for creating a new account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAccount {
    pub portfolio_id: String,
    pub name: String,
    pub institution: String,
    pub currency: String,
    pub account_type: Option<String>,
}

impl NewAccount {
    pub fn validate(&self) -> Result<()> {
        require_field("portfolio_id", &self.portfolio_id)?;
        require_field("name", &self.name)?;
        require_field("institution", &self.institution)?;
        require_field("currency", &self.currency)?;
        Ok(())
    }
}

/// Data for updating an existing account (keyed by id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: String,
    pub institution: String,
    pub account_type: Option<String>,
    pub is_active: bool,
}

impl Default for AccountUpdate {
    fn default() -> Self {
        Self {
            name: String::new(),
            institution: String::new(),
            account_type: None,
            is_active: true,
        }
    }
}

impl AccountUpdate {
    pub fn validate(&self) -> Result<()> {
        require_field("name", &self.name)?;
        require_field("institution", &self.institution)?;
        Ok(())
    }
}

impl Listable for Account {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.institution.clone(),
            self.currency.clone(),
        ]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "name" => Some(SortValue::Text(self.name.clone())),
            "institution" => Some(SortValue::Text(self.institution.clone())),
            "currency" => Some(SortValue::Text(self.currency.clone())),
            _ => None,
        }
    }
}
