//! Position service implementation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{AccountBalance, Position, PositionApiTrait, PositionFilter, PositionServiceTrait};

/// Service for holdings and balances. Read-only: positions are derived by
/// the backend from transaction journals.
pub struct PositionService {
    api: Arc<dyn PositionApiTrait>,
    pager: Pager,
}

impl PositionService {
    pub fn new(api: Arc<dyn PositionApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn PositionApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl PositionServiceTrait for PositionService {
    async fn get_positions(&self, filter: &PositionFilter) -> Result<Vec<Position>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_positions(filter, page))
            .await
    }

    async fn get_account_balances(&self) -> Result<Vec<AccountBalance>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_account_balances(page))
            .await
    }
}
