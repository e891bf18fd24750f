//! Traits for the analytics API gateway and service.

use async_trait::async_trait;

use crate::paging::Paginated;
use crate::Result;

use super::{FilterOptions, GroupBy, Mover, MoversQuery, PositionsReport};

/// Gateway trait for analytics REST endpoints.
#[async_trait]
pub trait AnalyticsApiTrait: Send + Sync {
    async fn get_filter_options(&self) -> Result<FilterOptions>;
    async fn get_positions_report(
        &self,
        group_by: GroupBy,
        portfolio_id: Option<&str>,
    ) -> Result<PositionsReport>;
    async fn get_movers(&self, query: MoversQuery) -> Result<Paginated<Mover>>;
}

/// Service trait for the analytics views.
#[async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    async fn get_filter_options(&self) -> Result<FilterOptions>;
    async fn get_positions_report(
        &self,
        group_by: GroupBy,
        portfolio_id: Option<&str>,
    ) -> Result<PositionsReport>;
    async fn get_movers(&self, query: MoversQuery) -> Result<Paginated<Mover>>;
}
