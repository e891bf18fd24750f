//! Analytics domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::portfolios::PortfolioSimple;

/// Choices offered by the analytics filter bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub portfolios: Vec<PortfolioSimple>,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub asset_classes: Vec<String>,
}

/// Dimension the backend groups the positions report by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    AssetClass,
    Currency,
    Portfolio,
    Symbol,
}

impl GroupBy {
    /// Wire value used in the `group_by` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            GroupBy::AssetClass => "asset_class",
            GroupBy::Currency => "currency",
            GroupBy::Portfolio => "portfolio",
            GroupBy::Symbol => "symbol",
        }
    }
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asset_class" => Ok(GroupBy::AssetClass),
            "currency" => Ok(GroupBy::Currency),
            "portfolio" => Ok(GroupBy::Portfolio),
            "symbol" => Ok(GroupBy::Symbol),
            other => Err(format!(
                "unknown group key '{}', expected one of asset_class, currency, portfolio, symbol",
                other
            )),
        }
    }
}

/// One aggregated row of the positions report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub group_key: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub market_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost_basis: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub gain_loss: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub gain_loss_pct: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub weight_pct: Decimal,
}

/// Report-wide totals, computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    #[serde(with = "rust_decimal::serde::str")]
    pub market_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost_basis: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub gain_loss: Decimal,
}

/// The grouped positions report as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionsReport {
    pub group_by: GroupBy,
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
}

/// Direction of the movers ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MoverDirection {
    #[default]
    Gainers,
    Losers,
}

impl MoverDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            MoverDirection::Gainers => "gainers",
            MoverDirection::Losers => "losers",
        }
    }
}

impl std::str::FromStr for MoverDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gainers" => Ok(MoverDirection::Gainers),
            "losers" => Ok(MoverDirection::Losers),
            other => Err(format!(
                "unknown direction '{}', expected gainers or losers",
                other
            )),
        }
    }
}

/// One entry of the movers ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub symbol: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub change_pct: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub market_value: Decimal,
}

/// Query for one page of the movers ranking. Pagination is backend-driven
/// here, unlike the drained list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct MoversQuery {
    pub direction: MoverDirection,
    pub skip: i64,
    pub limit: i64,
}

impl Default for MoversQuery {
    fn default() -> Self {
        Self {
            direction: MoverDirection::Gainers,
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
