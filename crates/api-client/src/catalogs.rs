//! Catalog endpoints: `/api/v1/catalogs/*`.

use async_trait::async_trait;

use wealthdesk_core::catalogs::{
    AssetClass, AssetClassUpdate, CatalogApiTrait, Country, CountryUpdate, Currency,
    CurrencyUpdate, Exchange, ExchangeUpdate, Industry, IndustryUpdate, InvestmentStrategy,
    InvestmentStrategyUpdate, MarketIndex, MarketIndexUpdate, NewAssetClass, NewCountry,
    NewCurrency, NewExchange, NewIndustry, NewInvestmentStrategy, NewMarketIndex,
};
use wealthdesk_core::paging::PageRequest;
use wealthdesk_core::Result;

use crate::client::ApiClient;

#[async_trait]
impl CatalogApiTrait for ApiClient {
    // ==================== Exchanges ====================

    async fn list_exchanges(&self, page: PageRequest) -> Result<Vec<Exchange>> {
        self.get_with_query("/catalogs/exchanges", &Self::paged_query(page))
            .await
    }

    async fn create_exchange(&self, draft: NewExchange) -> Result<Exchange> {
        self.post("/catalogs/exchanges", &draft).await
    }

    async fn update_exchange(&self, code: &str, update: ExchangeUpdate) -> Result<Exchange> {
        self.put(&format!("/catalogs/exchanges/{}", code), &update)
            .await
    }

    async fn delete_exchange(&self, code: &str) -> Result<()> {
        self.delete(&format!("/catalogs/exchanges/{}", code)).await
    }

    // ==================== Countries ====================

    async fn list_countries(&self, page: PageRequest) -> Result<Vec<Country>> {
        self.get_with_query("/catalogs/countries", &Self::paged_query(page))
            .await
    }

    async fn create_country(&self, draft: NewCountry) -> Result<Country> {
        self.post("/catalogs/countries", &draft).await
    }

    async fn update_country(&self, code: &str, update: CountryUpdate) -> Result<Country> {
        self.put(&format!("/catalogs/countries/{}", code), &update)
            .await
    }

    async fn delete_country(&self, code: &str) -> Result<()> {
        self.delete(&format!("/catalogs/countries/{}", code)).await
    }

    // ==================== Industries ====================

    async fn list_industries(&self, page: PageRequest) -> Result<Vec<Industry>> {
        self.get_with_query("/catalogs/industries", &Self::paged_query(page))
            .await
    }

    async fn create_industry(&self, draft: NewIndustry) -> Result<Industry> {
        self.post("/catalogs/industries", &draft).await
    }

    async fn update_industry(&self, code: &str, update: IndustryUpdate) -> Result<Industry> {
        self.put(&format!("/catalogs/industries/{}", code), &update)
            .await
    }

    async fn delete_industry(&self, code: &str) -> Result<()> {
        self.delete(&format!("/catalogs/industries/{}", code)).await
    }

    // ==================== Indices ====================

    async fn list_indices(&self, page: PageRequest) -> Result<Vec<MarketIndex>> {
        self.get_with_query("/catalogs/indices", &Self::paged_query(page))
            .await
    }

    async fn create_index(&self, draft: NewMarketIndex) -> Result<MarketIndex> {
        self.post("/catalogs/indices", &draft).await
    }

    async fn update_index(&self, code: &str, update: MarketIndexUpdate) -> Result<MarketIndex> {
        self.put(&format!("/catalogs/indices/{}", code), &update)
            .await
    }

    async fn delete_index(&self, code: &str) -> Result<()> {
        self.delete(&format!("/catalogs/indices/{}", code)).await
    }

    // ==================== Currencies ====================

    async fn list_currencies(&self, page: PageRequest) -> Result<Vec<Currency>> {
        self.get_with_query("/catalogs/currencies", &Self::paged_query(page))
            .await
    }

    async fn create_currency(&self, draft: NewCurrency) -> Result<Currency> {
        self.post("/catalogs/currencies", &draft).await
    }

    async fn update_currency(&self, code: &str, update: CurrencyUpdate) -> Result<Currency> {
        self.put(&format!("/catalogs/currencies/{}", code), &update)
            .await
    }

    async fn delete_currency(&self, code: &str) -> Result<()> {
        self.delete(&format!("/catalogs/currencies/{}", code)).await
    }

    // ==================== Asset Classes ====================

    async fn list_asset_classes(&self, page: PageRequest) -> Result<Vec<AssetClass>> {
        self.get_with_query("/catalogs/asset-classes", &Self::paged_query(page))
            .await
    }

    async fn create_asset_class(&self, draft: NewAssetClass) -> Result<AssetClass> {
        self.post("/catalogs/asset-classes", &draft).await
    }

    async fn update_asset_class(
        &self,
        code: &str,
        update: AssetClassUpdate,
    ) -> Result<AssetClass> {
        self.put(&format!("/catalogs/asset-classes/{}", code), &update)
            .await
    }

    async fn delete_asset_class(&self, code: &str) -> Result<()> {
        self.delete(&format!("/catalogs/asset-classes/{}", code))
            .await
    }

    // ==================== Investment Strategies ====================

    async fn list_strategies(&self, page: PageRequest) -> Result<Vec<InvestmentStrategy>> {
        self.get_with_query("/catalogs/investment-strategies", &Self::paged_query(page))
            .await
    }

    async fn create_strategy(&self, draft: NewInvestmentStrategy) -> Result<InvestmentStrategy> {
        self.post("/catalogs/investment-strategies", &draft).await
    }

    async fn update_strategy(
        &self,
        code: &str,
        update: InvestmentStrategyUpdate,
    ) -> Result<InvestmentStrategy> {
        self.put(&format!("/catalogs/investment-strategies/{}", code), &update)
            .await
    }

    async fn delete_strategy(&self, code: &str) -> Result<()> {
        self.delete(&format!("/catalogs/investment-strategies/{}", code))
            .await
    }
}
