//! Catalogs module - reference data models, services, and traits.
//!
//! Catalogs are the backend's reference-data resources (exchanges,
//! countries, industries, indices, currencies, asset classes, investment
//! strategies). The Basic Data screen is a thin CRUD surface over them.

mod catalogs_model;
mod catalogs_service;
mod catalogs_traits;

#[cfg(test)]
mod catalogs_model_tests;

#[cfg(test)]
mod catalogs_service_tests;

// Re-export the public interface
pub use catalogs_model::{
    AssetClass, AssetClassUpdate, AssetSubClass, Country, CountryUpdate, Currency, CurrencyUpdate,
    Exchange, ExchangeUpdate, Industry, IndustryUpdate, InvestmentStrategy,
    InvestmentStrategyUpdate, MarketIndex, MarketIndexUpdate, NewAssetClass, NewAssetSubClass,
    NewCountry, NewCurrency, NewExchange, NewIndustry, NewInvestmentStrategy, NewMarketIndex,
};
pub use catalogs_service::CatalogService;
pub use catalogs_traits::{CatalogApiTrait, CatalogServiceTrait};
