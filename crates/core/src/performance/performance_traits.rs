//! Traits for the performance API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::TwrSummary;

/// Gateway trait for performance REST endpoints.
#[async_trait]
pub trait PerformanceApiTrait: Send + Sync {
    async fn list_twr_summaries(&self, page: PageRequest) -> Result<Vec<TwrSummary>>;
}

/// Service trait for the performance view.
#[async_trait]
pub trait PerformanceServiceTrait: Send + Sync {
    async fn get_twr_summaries(&self) -> Result<Vec<TwrSummary>>;
}
