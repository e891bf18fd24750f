//! Analytics endpoints: `/api/v1/analytics/*`.

use async_trait::async_trait;

use wealthdesk_core::analytics::{
    AnalyticsApiTrait, FilterOptions, GroupBy, Mover, MoversQuery, PositionsReport,
};
use wealthdesk_core::paging::Paginated;
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl AnalyticsApiTrait for ApiClient {
    async fn get_filter_options(&self) -> Result<FilterOptions> {
        self.get("/analytics/filter-options").await
    }

    async fn get_positions_report(
        &self,
        group_by: GroupBy,
        portfolio_id: Option<&str>,
    ) -> Result<PositionsReport> {
        let mut query = vec![("group_by", group_by.as_str().to_string())];
        if let Some(portfolio_id) = portfolio_id {
            query.push(("portfolio_id", portfolio_id.to_string()));
        }
        self.get_with_query("/analytics/positions-report", &query)
            .await
    }

    async fn get_movers(&self, query: MoversQuery) -> Result<Paginated<Mover>> {
        let params = vec![
            ("direction", query.direction.as_str().to_string()),
            ("skip", query.skip.to_string()),
            ("limit", query.limit.to_string()),
        ];
        self.get_with_query("/analytics/movers", &params).await
    }
}
