//! Traits for the account API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::{Account, AccountUpdate, NewAccount};

/// Gateway trait for account REST endpoints.
#[async_trait]
pub trait AccountApiTrait: Send + Sync {
    /// `portfolio_id` narrows the listing server-side when given.
    async fn list_accounts(
        &self,
        portfolio_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Account>>;
    async fn create_account(&self, draft: NewAccount) -> Result<Account>;
    async fn update_account(&self, id: &str, update: AccountUpdate) -> Result<Account>;
    async fn delete_account(&self, id: &str) -> Result<()>;
}

/// Service trait for account listings.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn get_accounts(&self, portfolio_id: Option<&str>) -> Result<Vec<Account>>;
    async fn create_account(&self, draft: NewAccount) -> Result<Account>;
    async fn update_account(&self, id: &str, update: AccountUpdate) -> Result<Account>;
    async fn delete_account(&self, id: &str) -> Result<()>;
}
