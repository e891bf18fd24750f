//! Traits for the portfolio API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::{NewPortfolio, Portfolio, PortfolioSimple, PortfolioUpdate};

/// Gateway trait for portfolio REST endpoints.
#[async_trait]
pub trait PortfolioApiTrait: Send + Sync {
    async fn list_portfolios(&self, page: PageRequest) -> Result<Vec<Portfolio>>;
    async fn list_portfolios_simple(&self, page: PageRequest) -> Result<Vec<PortfolioSimple>>;
    async fn create_portfolio(&self, draft: NewPortfolio) -> Result<Portfolio>;
    async fn update_portfolio(&self, id: &str, update: PortfolioUpdate) -> Result<Portfolio>;
    async fn delete_portfolio(&self, id: &str) -> Result<()>;
}

/// Service trait for the portfolios screen.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn get_portfolios(&self) -> Result<Vec<Portfolio>>;
    /// Reduced listing for dropdowns and cards.
    async fn get_portfolios_simple(&self) -> Result<Vec<PortfolioSimple>>;
    /// Portfolios owned by one user, filtered client-side.
    async fn get_portfolios_for_owner(&self, owner_user_id: &str) -> Result<Vec<Portfolio>>;
    async fn create_portfolio(&self, draft: NewPortfolio) -> Result<Portfolio>;
    async fn update_portfolio(&self, id: &str, update: PortfolioUpdate) -> Result<Portfolio>;
    async fn delete_portfolio(&self, id: &str) -> Result<()>;
}
