//! Analytics module - backend-computed report models, services, and traits.
//!
//! Grouping, percentage change, and movers pagination all happen on the
//! backend; the client only renders the response.

mod analytics_model;
mod analytics_service;
mod analytics_traits;

#[cfg(test)]
mod analytics_model_tests;

// Re-export the public interface
pub use analytics_model::{
    FilterOptions, GroupBy, Mover, MoverDirection, MoversQuery, PositionsReport, ReportRow,
    ReportTotals,
};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::{AnalyticsApiTrait, AnalyticsServiceTrait};
