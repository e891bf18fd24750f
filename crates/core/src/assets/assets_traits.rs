//! Traits for the asset API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::{Asset, AssetUpdate, NewAsset};

/// Gateway trait for asset REST endpoints.
#[async_trait]
pub trait AssetApiTrait: Send + Sync {
    async fn list_assets(&self, page: PageRequest) -> Result<Vec<Asset>>;
    async fn get_asset(&self, id: &str) -> Result<Asset>;
    async fn create_asset(&self, draft: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, id: &str, update: AssetUpdate) -> Result<Asset>;
    async fn delete_asset(&self, id: &str) -> Result<()>;
}

/// Service trait for the assets screen.
#[async_trait]
pub trait AssetServiceTrait: Send + Sync {
    async fn get_assets(&self) -> Result<Vec<Asset>>;
    async fn get_asset(&self, id: &str) -> Result<Asset>;
    async fn create_asset(&self, draft: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, id: &str, update: AssetUpdate) -> Result<Asset>;
    async fn delete_asset(&self, id: &str) -> Result<()>;
}
