//! Account service implementation.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{Account, AccountApiTrait, AccountServiceTrait, AccountUpdate, NewAccount};

/// Service for custody accounts.
pub struct AccountService {
    api: Arc<dyn AccountApiTrait>,
    pager: Pager,
}

impl AccountService {
    pub fn new(api: Arc<dyn AccountApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn AccountApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn get_accounts(&self, portfolio_id: Option<&str>) -> Result<Vec<Account>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_accounts(portfolio_id, page))
            .await
    }

    async fn create_account(&self, draft: NewAccount) -> Result<Account> {
        draft.validate()?;
        debug!("Creating account {} at {}", draft.name, draft.institution);
        self.api.create_account(draft).await
    }

    async fn update_account(&self, id: &str, update: AccountUpdate) -> Result<Account> {
        update.validate()?;
        debug!("Updating account {}", id);
        self.api.update_account(id, update).await
    }

    async fn delete_account(&self, id: &str) -> Result<()> {
        debug!("Deleting account {}", id);
        self.api.delete_account(id).await
    }
}
