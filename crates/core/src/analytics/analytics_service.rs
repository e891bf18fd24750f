//! Analytics service implementation.
//!
//! A straight proxy: every aggregate is computed server-side and rendered
//! verbatim.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::paging::Paginated;
use crate::Result;

use super::{
    AnalyticsApiTrait, AnalyticsServiceTrait, FilterOptions, GroupBy, Mover, MoversQuery,
    PositionsReport,
};

pub struct AnalyticsService {
    api: Arc<dyn AnalyticsApiTrait>,
}

impl AnalyticsService {
    pub fn new(api: Arc<dyn AnalyticsApiTrait>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn get_filter_options(&self) -> Result<FilterOptions> {
        self.api.get_filter_options().await
    }

    async fn get_positions_report(
        &self,
        group_by: GroupBy,
        portfolio_id: Option<&str>,
    ) -> Result<PositionsReport> {
        debug!("Fetching positions report grouped by {}", group_by.as_str());
        self.api.get_positions_report(group_by, portfolio_id).await
    }

    async fn get_movers(&self, query: MoversQuery) -> Result<Paginated<Mover>> {
        debug!(
            "Fetching {} (skip {}, limit {})",
            query.direction.as_str(),
            query.skip,
            query.limit
        );
        self.api.get_movers(query).await
    }
}
