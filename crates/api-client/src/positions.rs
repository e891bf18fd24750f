//! Position endpoints: `/api/v1/positions`.

use async_trait::async_trait;

use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::positions::{AccountBalance, Position, PositionApiTrait, PositionFilter};
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl PositionApiTrait for ApiClient {
    async fn list_positions(
        &self,
        filter: &PositionFilter,
        page: PageRequest,
    ) -> Result<Vec<Position>> {
        let mut query = Self::paged_query(page);
        if let Some(portfolio_id) = &filter.portfolio_id {
            query.push(("portfolio_id", portfolio_id.clone()));
        }
        if let Some(account_id) = &filter.account_id {
            query.push(("account_id", account_id.clone()));
        }
        self.get_with_query("/positions", &query).await
    }

    async fn list_account_balances(&self, page: PageRequest) -> Result<Vec<AccountBalance>> {
        self.get_with_query("/positions/account-balances", &Self::paged_query(page))
            .await
    }
}
