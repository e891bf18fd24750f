//! Traits for the catalog API gateway and service.

use async_trait::async_trait;

use crate::paging::PageRequest;
use crate::Result;

use super::{
    AssetClass, AssetClassUpdate, Country, CountryUpdate, Currency, CurrencyUpdate, Exchange,
    ExchangeUpdate, Industry, IndustryUpdate, InvestmentStrategy, InvestmentStrategyUpdate,
    MarketIndex, MarketIndexUpdate, NewAssetClass, NewCountry, NewCurrency, NewExchange,
    NewIndustry, NewInvestmentStrategy, NewMarketIndex,
};

/// Gateway trait for catalog REST endpoints.
///
/// One page per call; draining is the service's job.
#[async_trait]
pub trait CatalogApiTrait: Send + Sync {
    // Exchanges
    async fn list_exchanges(&self, page: PageRequest) -> Result<Vec<Exchange>>;
    async fn create_exchange(&self, draft: NewExchange) -> Result<Exchange>;
    async fn update_exchange(&self, code: &str, update: ExchangeUpdate) -> Result<Exchange>;
    async fn delete_exchange(&self, code: &str) -> Result<()>;

    // Countries
    async fn list_countries(&self, page: PageRequest) -> Result<Vec<Country>>;
    async fn create_country(&self, draft: NewCountry) -> Result<Country>;
    async fn update_country(&self, code: &str, update: CountryUpdate) -> Result<Country>;
    async fn delete_country(&self, code: &str) -> Result<()>;

    // Industries
    async fn list_industries(&self, page: PageRequest) -> Result<Vec<Industry>>;
    async fn create_industry(&self, draft: NewIndustry) -> Result<Industry>;
    async fn update_industry(&self, code: &str, update: IndustryUpdate) -> Result<Industry>;
    async fn delete_industry(&self, code: &str) -> Result<()>;

    // Indices
    async fn list_indices(&self, page: PageRequest) -> Result<Vec<MarketIndex>>;
    async fn create_index(&self, draft: NewMarketIndex) -> Result<MarketIndex>;
    async fn update_index(&self, code: &str, update: MarketIndexUpdate) -> Result<MarketIndex>;
    async fn delete_index(&self, code: &str) -> Result<()>;

    // Currencies
    async fn list_currencies(&self, page: PageRequest) -> Result<Vec<Currency>>;
    async fn create_currency(&self, draft: NewCurrency) -> Result<Currency>;
    async fn update_currency(&self, code: &str, update: CurrencyUpdate) -> Result<Currency>;
    async fn delete_currency(&self, code: &str) -> Result<()>;

    // Asset classes
    async fn list_asset_classes(&self, page: PageRequest) -> Result<Vec<AssetClass>>;
    async fn create_asset_class(&self, draft: NewAssetClass) -> Result<AssetClass>;
    async fn update_asset_class(&self, code: &str, update: AssetClassUpdate)
        -> Result<AssetClass>;
    async fn delete_asset_class(&self, code: &str) -> Result<()>;

    // Investment strategies
    async fn list_strategies(&self, page: PageRequest) -> Result<Vec<InvestmentStrategy>>;
    async fn create_strategy(&self, draft: NewInvestmentStrategy) -> Result<InvestmentStrategy>;
    async fn update_strategy(
        &self,
        code: &str,
        update: InvestmentStrategyUpdate,
    ) -> Result<InvestmentStrategy>;
    async fn delete_strategy(&self, code: &str) -> Result<()>;
}

/// Service trait for catalog screens.
///
/// `get_*` drains every page of the kind; mutations validate the draft
/// before it reaches the wire and return the backend's authoritative record.
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    // Exchanges
    async fn get_exchanges(&self) -> Result<Vec<Exchange>>;
    async fn create_exchange(&self, draft: NewExchange) -> Result<Exchange>;
    async fn update_exchange(&self, code: &str, update: ExchangeUpdate) -> Result<Exchange>;
    async fn delete_exchange(&self, code: &str) -> Result<()>;

    // Countries
    async fn get_countries(&self) -> Result<Vec<Country>>;
    async fn create_country(&self, draft: NewCountry) -> Result<Country>;
    async fn update_country(&self, code: &str, update: CountryUpdate) -> Result<Country>;
    async fn delete_country(&self, code: &str) -> Result<()>;

    // Industries
    async fn get_industries(&self) -> Result<Vec<Industry>>;
    async fn create_industry(&self, draft: NewIndustry) -> Result<Industry>;
    async fn update_industry(&self, code: &str, update: IndustryUpdate) -> Result<Industry>;
    async fn delete_industry(&self, code: &str) -> Result<()>;

    // Indices
    async fn get_indices(&self) -> Result<Vec<MarketIndex>>;
    async fn create_index(&self, draft: NewMarketIndex) -> Result<MarketIndex>;
    async fn update_index(&self, code: &str, update: MarketIndexUpdate) -> Result<MarketIndex>;
    async fn delete_index(&self, code: &str) -> Result<()>;

    // Currencies
    async fn get_currencies(&self) -> Result<Vec<Currency>>;
    async fn create_currency(&self, draft: NewCurrency) -> Result<Currency>;
    async fn update_currency(&self, code: &str, update: CurrencyUpdate) -> Result<Currency>;
    async fn delete_currency(&self, code: &str) -> Result<()>;

    // Asset classes
    async fn get_asset_classes(&self) -> Result<Vec<AssetClass>>;
    async fn create_asset_class(&self, draft: NewAssetClass) -> Result<AssetClass>;
    async fn update_asset_class(&self, code: &str, update: AssetClassUpdate)
        -> Result<AssetClass>;
    async fn delete_asset_class(&self, code: &str) -> Result<()>;

    // Investment strategies
    async fn get_strategies(&self) -> Result<Vec<InvestmentStrategy>>;
    async fn create_strategy(&self, draft: NewInvestmentStrategy) -> Result<InvestmentStrategy>;
    async fn update_strategy(
        &self,
        code: &str,
        update: InvestmentStrategyUpdate,
    ) -> Result<InvestmentStrategy>;
    async fn delete_strategy(&self, code: &str) -> Result<()>;
}
