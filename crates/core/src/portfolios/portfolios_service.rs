//! Portfolio service implementation.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{
    NewPortfolio, Portfolio, PortfolioApiTrait, PortfolioServiceTrait, PortfolioSimple,
    PortfolioUpdate,
};

/// Service for client portfolios.
pub struct PortfolioService {
    api: Arc<dyn PortfolioApiTrait>,
    pager: Pager,
}

impl PortfolioService {
    pub fn new(api: Arc<dyn PortfolioApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn PortfolioApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolios(&self) -> Result<Vec<Portfolio>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_portfolios(page)).await
    }

    async fn get_portfolios_simple(&self) -> Result<Vec<PortfolioSimple>> {
        let api = &self.api;
        self.pager
            .drain(|page| api.list_portfolios_simple(page))
            .await
    }

    async fn get_portfolios_for_owner(&self, owner_user_id: &str) -> Result<Vec<Portfolio>> {
        let portfolios = self.get_portfolios().await?;
        Ok(portfolios
            .into_iter()
            .filter(|p| p.owner_user_id == owner_user_id)
            .collect())
    }

    async fn create_portfolio(&self, draft: NewPortfolio) -> Result<Portfolio> {
        draft.validate()?;
        debug!("Creating portfolio {}", draft.name);
        self.api.create_portfolio(draft).await
    }

    async fn update_portfolio(&self, id: &str, update: PortfolioUpdate) -> Result<Portfolio> {
        update.validate()?;
        debug!("Updating portfolio {}", id);
        self.api.update_portfolio(id, update).await
    }

    async fn delete_portfolio(&self, id: &str) -> Result<()> {
        debug!("Deleting portfolio {}", id);
        self.api.delete_portfolio(id).await
    }
}
