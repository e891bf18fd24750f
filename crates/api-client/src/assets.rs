//! Asset endpoints: `/api/v1/assets`.

use async_trait::async_trait;

use wealthdesk_core::assets::{Asset, AssetApiTrait, AssetUpdate, NewAsset};
use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl AssetApiTrait for ApiClient {
    async fn list_assets(&self, page: PageRequest) -> Result<Vec<Asset>> {
        self.get_with_query("/assets", &Self::paged_query(page))
            .await
    }

    async fn get_asset(&self, id: &str) -> Result<Asset> {
        self.get(&format!("/assets/{}", id)).await
    }

    async fn create_asset(&self, draft: NewAsset) -> Result<Asset> {
        self.post("/assets", &draft).await
    }

    async fn update_asset(&self, id: &str, update: AssetUpdate) -> Result<Asset> {
        self.put(&format!("/assets/{}", id), &update).await
    }

    async fn delete_asset(&self, id: &str) -> Result<()> {
        self.delete(&format!("/assets/{}", id)).await
    }
}
