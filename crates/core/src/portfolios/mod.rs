//! Portfolios module - portfolio models, services, and traits.

mod portfolios_model;
mod portfolios_service;
mod portfolios_traits;

#[cfg(test)]
mod portfolios_model_tests;

// Re-export the public interface
pub use portfolios_model::{NewPortfolio, Portfolio, PortfolioSimple, PortfolioUpdate};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::{PortfolioApiTrait, PortfolioServiceTrait};
