//! Portfolio endpoints: `/api/v1/portfolios`.

use async_trait::async_trait;

use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::portfolios::{
    NewPortfolio, Portfolio, PortfolioApiTrait, PortfolioSimple, PortfolioUpdate,
};
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl PortfolioApiTrait for ApiClient {
    async fn list_portfolios(&self, page: PageRequest) -> Result<Vec<Portfolio>> {
        self.get_with_query("/portfolios", &Self::paged_query(page))
            .await
    }

    async fn list_portfolios_simple(&self, page: PageRequest) -> Result<Vec<PortfolioSimple>> {
        self.get_with_query("/portfolios/simple", &Self::paged_query(page))
            .await
    }

    async fn create_portfolio(&self, draft: NewPortfolio) -> Result<Portfolio> {
        self.post("/portfolios", &draft).await
    }

    async fn update_portfolio(&self, id: &str, update: PortfolioUpdate) -> Result<Portfolio> {
        self.put(&format!("/portfolios/{}", id), &update).await
    }

    async fn delete_portfolio(&self, id: &str) -> Result<()> {
        self.delete(&format!("/portfolios/{}", id)).await
    }
}
