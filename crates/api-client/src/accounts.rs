//! Account endpoints: `/api/v1/accounts`.

use async_trait::async_trait;

use wealthdesk_core::accounts::{Account, AccountApiTrait, AccountUpdate, NewAccount};
use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl AccountApiTrait for ApiClient {
    async fn list_accounts(
        &self,
        portfolio_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Account>> {
        let mut query = Self::paged_query(page);
        if let Some(portfolio_id) = portfolio_id {
            query.push(("portfolio_id", portfolio_id.to_string()));
        }
        self.get_with_query("/accounts", &query).await
    }

    async fn create_account(&self, draft: NewAccount) -> Result<Account> {
        self.post("/accounts", &draft).await
    }

    async fn update_account(&self, id: &str, update: AccountUpdate) -> Result<Account> {
        self.put(&format!("/accounts/{}", id), &update).await
    }

    async fn delete_account(&self, id: &str) -> Result<()> {
        self.delete(&format!("/accounts/{}", id)).await
    }
}
