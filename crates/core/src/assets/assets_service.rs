//! Asset service implementation.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{Asset, AssetApiTrait, AssetServiceTrait, AssetUpdate, NewAsset};

/// Service for instrument reference data.
pub struct AssetService {
    api: Arc<dyn AssetApiTrait>,
    pager: Pager,
}

impl AssetService {
    pub fn new(api: Arc<dyn AssetApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn AssetApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl AssetServiceTrait for AssetService {
    async fn get_assets(&self) -> Result<Vec<Asset>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_assets(page)).await
    }

    async fn get_asset(&self, id: &str) -> Result<Asset> {
        self.api.get_asset(id).await
    }

    async fn create_asset(&self, draft: NewAsset) -> Result<Asset> {
        draft.validate()?;
        debug!("Creating asset {}", draft.symbol);
        self.api.create_asset(draft).await
    }

    async fn update_asset(&self, id: &str, update: AssetUpdate) -> Result<Asset> {
        update.validate()?;
        debug!("Updating asset {}", id);
        self.api.update_asset(id, update).await
    }

    async fn delete_asset(&self, id: &str) -> Result<()> {
        debug!("Deleting asset {}", id);
        self.api.delete_asset(id).await
    }
}
