//! Transaction domain models.
//!
//! Four journals feed the backend's position engine: trades, cash entries,
//! FX conversions, and corporate actions. Amounts are decimal strings on the
//! wire.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{require_field, Result, ValidationError};
use crate::listing::{Listable, SortValue};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A buy or sell execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub account_id: String,
    pub symbol: String,
    pub side: TradeSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub fees: Option<Decimal>,
    pub currency: String,
    pub trade_date: NaiveDate,
    pub settle_date: Option<NaiveDate>,
}

/// Data for recording a new trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrade {
    pub account_id: String,
    pub symbol: String,
    pub side: TradeSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub fees: Option<Decimal>,
    pub currency: String,
    pub trade_date: Option<NaiveDate>,
    pub settle_date: Option<NaiveDate>,
}

impl Default for NewTrade {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            symbol: String::new(),
            side: TradeSide::Buy,
            quantity: Decimal::ZERO,
            price: Decimal::ZERO,
            fees: None,
            currency: String::new(),
            trade_date: None,
            settle_date: None,
        }
    }
}

impl NewTrade {
    pub fn validate(&self) -> Result<()> {
        require_field("account_id", &self.account_id)?;
        require_field("symbol", &self.symbol)?;
        require_field("currency", &self.currency)?;
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "quantity must be positive, got {}",
                self.quantity
            ))
            .into());
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "price must be non-negative, got {}",
                self.price
            ))
            .into());
        }
        if self.trade_date.is_none() {
            return Err(ValidationError::MissingField("trade_date".to_string()).into());
        }
        Ok(())
    }
}

/// Kind of cash journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashEntryType {
    Deposit,
    Withdrawal,
    Fee,
    Interest,
}

/// A cash movement in an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashJournal {
    pub id: String,
    pub account_id: String,
    pub entry_type: CashEntryType,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub entry_date: NaiveDate,
    pub memo: Option<String>,
}

/// Data for recording a new cash entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCashJournal {
    pub account_id: String,
    pub entry_type: CashEntryType,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub entry_date: Option<NaiveDate>,
    pub memo: Option<String>,
}

impl Default for NewCashJournal {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            entry_type: CashEntryType::Deposit,
            amount: Decimal::ZERO,
            currency: String::new(),
            entry_date: None,
            memo: None,
        }
    }
}

impl NewCashJournal {
    pub fn validate(&self) -> Result<()> {
        require_field("account_id", &self.account_id)?;
        require_field("currency", &self.currency)?;
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        if self.entry_date.is_none() {
            return Err(ValidationError::MissingField("entry_date".to_string()).into());
        }
        Ok(())
    }
}

/// A currency conversion within an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxTransaction {
    pub id: String,
    pub account_id: String,
    pub sell_currency: String,
    pub buy_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub sell_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub buy_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    pub trade_date: NaiveDate,
}

/// Data for recording a new FX conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFxTransaction {
    pub account_id: String,
    pub sell_currency: String,
    pub buy_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub sell_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub buy_amount: Decimal,
    pub trade_date: Option<NaiveDate>,
}

impl Default for NewFxTransaction {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            sell_currency: String::new(),
            buy_currency: String::new(),
            sell_amount: Decimal::ZERO,
            buy_amount: Decimal::ZERO,
            trade_date: None,
        }
    }
}

impl NewFxTransaction {
    pub fn validate(&self) -> Result<()> {
        require_field("account_id", &self.account_id)?;
        require_field("sell_currency", &self.sell_currency)?;
        require_field("buy_currency", &self.buy_currency)?;
        if self.sell_currency.trim() == self.buy_currency.trim() {
            return Err(ValidationError::InvalidInput(
                "sell and buy currencies must differ".to_string(),
            )
            .into());
        }
        if self.sell_amount <= Decimal::ZERO || self.buy_amount <= Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("amounts must be positive".to_string()).into(),
            );
        }
        if self.trade_date.is_none() {
            return Err(ValidationError::MissingField("trade_date".to_string()).into());
        }
        Ok(())
    }
}

/// Kind of corporate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Dividend,
    Split,
    Merger,
}

/// A corporate action affecting holders of a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateAction {
    pub id: String,
    pub symbol: String,
    pub action_type: ActionType,
    /// Cash amount per share for dividends.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    /// New-for-old share ratio for splits and mergers.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub ratio: Option<Decimal>,
    pub ex_date: NaiveDate,
    pub pay_date: Option<NaiveDate>,
}

/// Data for recording a new corporate action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCorporateAction {
    pub symbol: String,
    pub action_type: ActionType,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub ratio: Option<Decimal>,
    pub ex_date: Option<NaiveDate>,
    pub pay_date: Option<NaiveDate>,
}

impl Default for NewCorporateAction {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            action_type: ActionType::Dividend,
            amount: None,
            ratio: None,
            ex_date: None,
            pay_date: None,
        }
    }
}

impl NewCorporateAction {
    pub fn validate(&self) -> Result<()> {
        require_field("symbol", &self.symbol)?;
        match self.action_type {
            ActionType::Dividend if self.amount.is_none() => {
                return Err(ValidationError::MissingField("amount".to_string()).into());
            }
            ActionType::Split | ActionType::Merger if self.ratio.is_none() => {
                return Err(ValidationError::MissingField("ratio".to_string()).into());
            }
            _ => {}
        }
        if self.ex_date.is_none() {
            return Err(ValidationError::MissingField("ex_date".to_string()).into());
        }
        Ok(())
    }
}

impl Listable for Trade {
    fn search_values(&self) -> Vec<String> {
        vec![self.symbol.clone(), self.account_id.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "symbol" => Some(SortValue::Text(self.symbol.clone())),
            "quantity" => Some(SortValue::Number(self.quantity)),
            "price" => Some(SortValue::Number(self.price)),
            "trade_date" => Some(SortValue::Date(self.trade_date)),
            _ => None,
        }
    }
}

impl Listable for CashJournal {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.account_id.clone(), self.currency.clone()];
        if let Some(memo) = &self.memo {
            values.push(memo.clone());
        }
        values
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "account_id" => Some(SortValue::Text(self.account_id.clone())),
            "amount" => Some(SortValue::Number(self.amount)),
            "entry_date" => Some(SortValue::Date(self.entry_date)),
            _ => None,
        }
    }
}

impl Listable for FxTransaction {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.account_id.clone(),
            self.sell_currency.clone(),
            self.buy_currency.clone(),
        ]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "account_id" => Some(SortValue::Text(self.account_id.clone())),
            "sell_amount" => Some(SortValue::Number(self.sell_amount)),
            "rate" => Some(SortValue::Number(self.rate)),
            "trade_date" => Some(SortValue::Date(self.trade_date)),
            _ => None,
        }
    }
}

impl Listable for CorporateAction {
    fn search_values(&self) -> Vec<String> {
        vec![self.symbol.clone()]
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "symbol" => Some(SortValue::Text(self.symbol.clone())),
            "ex_date" => Some(SortValue::Date(self.ex_date)),
            "amount" => self.amount.map(SortValue::Number),
            _ => None,
        }
    }
}
