//! Performance service implementation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{PerformanceApiTrait, PerformanceServiceTrait, TwrSummary};

/// Service for portfolio performance summaries.
pub struct PerformanceService {
    api: Arc<dyn PerformanceApiTrait>,
    pager: Pager,
}

impl PerformanceService {
    pub fn new(api: Arc<dyn PerformanceApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn PerformanceApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl PerformanceServiceTrait for PerformanceService {
    async fn get_twr_summaries(&self) -> Result<Vec<TwrSummary>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_twr_summaries(page)).await
    }
}
