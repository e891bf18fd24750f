//! Performance endpoints: `/api/v1/twr/*`.

use async_trait::async_trait;

use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::performance::{PerformanceApiTrait, TwrSummary};
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl PerformanceApiTrait for ApiClient {
    async fn list_twr_summaries(&self, page: PageRequest) -> Result<Vec<TwrSummary>> {
        self.get_with_query("/twr/portfolios/summaries", &Self::paged_query(page))
            .await
    }
}
