//! Catalog service implementation.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::paging::Pager;
use crate::Result;

use super::{
    AssetClass, AssetClassUpdate, CatalogApiTrait, CatalogServiceTrait, Country, CountryUpdate,
    Currency, CurrencyUpdate, Exchange, ExchangeUpdate, Industry, IndustryUpdate,
    InvestmentStrategy, InvestmentStrategyUpdate, MarketIndex, MarketIndexUpdate, NewAssetClass,
    NewCountry, NewCurrency, NewExchange, NewIndustry, NewInvestmentStrategy, NewMarketIndex,
};

/// Service for catalog reference data.
pub struct CatalogService {
    api: Arc<dyn CatalogApiTrait>,
    pager: Pager,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApiTrait>) -> Self {
        Self {
            api,
            pager: Pager::default(),
        }
    }

    pub fn with_pager(api: Arc<dyn CatalogApiTrait>, pager: Pager) -> Self {
        Self { api, pager }
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    // ==================== Exchanges ====================

    async fn get_exchanges(&self) -> Result<Vec<Exchange>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_exchanges(page)).await
    }

    async fn create_exchange(&self, draft: NewExchange) -> Result<Exchange> {
        draft.validate()?;
        debug!("Creating exchange {}", draft.code);
        self.api.create_exchange(draft).await
    }

    async fn update_exchange(&self, code: &str, update: ExchangeUpdate) -> Result<Exchange> {
        update.validate()?;
        debug!("Updating exchange {}", code);
        self.api.update_exchange(code, update).await
    }

    async fn delete_exchange(&self, code: &str) -> Result<()> {
        debug!("Deleting exchange {}", code);
        self.api.delete_exchange(code).await
    }

    // ==================== Countries ====================

    async fn get_countries(&self) -> Result<Vec<Country>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_countries(page)).await
    }

    async fn create_country(&self, draft: NewCountry) -> Result<Country> {
        draft.validate()?;
        debug!("Creating country {}", draft.code);
        self.api.create_country(draft).await
    }

    async fn update_country(&self, code: &str, update: CountryUpdate) -> Result<Country> {
        update.validate()?;
        self.api.update_country(code, update).await
    }

    async fn delete_country(&self, code: &str) -> Result<()> {
        self.api.delete_country(code).await
    }

    // ==================== Industries ====================

    async fn get_industries(&self) -> Result<Vec<Industry>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_industries(page)).await
    }

    async fn create_industry(&self, draft: NewIndustry) -> Result<Industry> {
        draft.validate()?;
        debug!("Creating industry {}", draft.code);
        self.api.create_industry(draft).await
    }

    async fn update_industry(&self, code: &str, update: IndustryUpdate) -> Result<Industry> {
        update.validate()?;
        self.api.update_industry(code, update).await
    }

    async fn delete_industry(&self, code: &str) -> Result<()> {
        self.api.delete_industry(code).await
    }

    // ==================== Indices ====================

    async fn get_indices(&self) -> Result<Vec<MarketIndex>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_indices(page)).await
    }

    async fn create_index(&self, draft: NewMarketIndex) -> Result<MarketIndex> {
        draft.validate()?;
        debug!("Creating index {}", draft.code);
        self.api.create_index(draft).await
    }

    async fn update_index(&self, code: &str, update: MarketIndexUpdate) -> Result<MarketIndex> {
        update.validate()?;
        self.api.update_index(code, update).await
    }

    async fn delete_index(&self, code: &str) -> Result<()> {
        self.api.delete_index(code).await
    }

    // ==================== Currencies ====================

    async fn get_currencies(&self) -> Result<Vec<Currency>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_currencies(page)).await
    }

    async fn create_currency(&self, draft: NewCurrency) -> Result<Currency> {
        draft.validate()?;
        debug!("Creating currency {}", draft.code);
        self.api.create_currency(draft).await
    }

    async fn update_currency(&self, code: &str, update: CurrencyUpdate) -> Result<Currency> {
        update.validate()?;
        self.api.update_currency(code, update).await
    }

    async fn delete_currency(&self, code: &str) -> Result<()> {
        self.api.delete_currency(code).await
    }

    // ==================== Asset Classes ====================

    async fn get_asset_classes(&self) -> Result<Vec<AssetClass>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_asset_classes(page)).await
    }

    async fn create_asset_class(&self, draft: NewAssetClass) -> Result<AssetClass> {
        draft.validate()?;
        debug!("Creating asset class {}", draft.code);
        self.api.create_asset_class(draft).await
    }

    async fn update_asset_class(
        &self,
        code: &str,
        update: AssetClassUpdate,
    ) -> Result<AssetClass> {
        update.validate()?;
        self.api.update_asset_class(code, update).await
    }

    async fn delete_asset_class(&self, code: &str) -> Result<()> {
        self.api.delete_asset_class(code).await
    }

    // ==================== Investment Strategies ====================

    async fn get_strategies(&self) -> Result<Vec<InvestmentStrategy>> {
        let api = &self.api;
        self.pager.drain(|page| api.list_strategies(page)).await
    }

    async fn create_strategy(&self, draft: NewInvestmentStrategy) -> Result<InvestmentStrategy> {
        draft.validate()?;
        debug!("Creating strategy {}", draft.code);
        self.api.create_strategy(draft).await
    }

    async fn update_strategy(
        &self,
        code: &str,
        update: InvestmentStrategyUpdate,
    ) -> Result<InvestmentStrategy> {
        update.validate()?;
        self.api.update_strategy(code, update).await
    }

    async fn delete_strategy(&self, code: &str) -> Result<()> {
        self.api.delete_strategy(code).await
    }
}
