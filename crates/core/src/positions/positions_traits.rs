//! Traits for the position API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::{AccountBalance, Position, PositionFilter};

/// Gateway trait for position REST endpoints.
#[async_trait]
pub trait PositionApiTrait: Send + Sync {
    async fn list_positions(
        &self,
        filter: &PositionFilter,
        page: PageRequest,
    ) -> Result<Vec<Position>>;
    async fn list_account_balances(&self, page: PageRequest) -> Result<Vec<AccountBalance>>;
}

/// Service trait for the positions screen.
#[async_trait]
pub trait PositionServiceTrait: Send + Sync {
    async fn get_positions(&self, filter: &PositionFilter) -> Result<Vec<Position>>;
    async fn get_account_balances(&self) -> Result<Vec<AccountBalance>>;
}
