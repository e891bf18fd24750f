//! Application context: one API client shared by every service.

use std::sync::Arc;

use wealthdesk_api_client::{ApiClient, ApiConfig};
use wealthdesk_core::accounts::{AccountService, AccountServiceTrait};
use wealthdesk_core::analytics::{AnalyticsService, AnalyticsServiceTrait};
use wealthdesk_core::assets::{AssetService, AssetServiceTrait};
use wealthdesk_core::catalogs::{CatalogService, CatalogServiceTrait};
use wealthdesk_core::paging::Pager;
use wealthdesk_core::performance::{PerformanceService, PerformanceServiceTrait};
use wealthdesk_core::portfolios::{PortfolioService, PortfolioServiceTrait};
use wealthdesk_core::positions::{PositionService, PositionServiceTrait};
use wealthdesk_core::transactions::{TransactionService, TransactionServiceTrait};
use wealthdesk_core::users::{UserService, UserServiceTrait};
use wealthdesk_core::Result;

pub struct AppContext {
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
    pub asset_service: Arc<dyn AssetServiceTrait>,
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub position_service: Arc<dyn PositionServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub performance_service: Arc<dyn PerformanceServiceTrait>,
}

impl AppContext {
    pub fn build(config: &ApiConfig) -> Result<Self> {
        let client = Arc::new(ApiClient::new(config)?);
        let pager = Pager::new(config.page_limit);

        Ok(Self {
            catalog_service: Arc::new(CatalogService::with_pager(client.clone(), pager)),
            asset_service: Arc::new(AssetService::with_pager(client.clone(), pager)),
            account_service: Arc::new(AccountService::with_pager(client.clone(), pager)),
            user_service: Arc::new(UserService::with_pager(client.clone(), pager)),
            portfolio_service: Arc::new(PortfolioService::with_pager(client.clone(), pager)),
            position_service: Arc::new(PositionService::with_pager(client.clone(), pager)),
            transaction_service: Arc::new(TransactionService::with_pager(client.clone(), pager)),
            analytics_service: Arc::new(AnalyticsService::new(client.clone())),
            performance_service: Arc::new(PerformanceService::with_pager(client, pager)),
        })
    }
}
