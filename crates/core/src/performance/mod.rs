//! Performance module - TWR summary models, services, and traits.
//!
//! Time-weighted returns are computed by the backend; the client only
//! displays them.

mod performance_model;
mod performance_service;
mod performance_traits;


// Re-export the public interface
pub use performance_model::TwrSummary;
pub use performance_service::PerformanceService;
pub use performance_traits::{PerformanceApiTrait, PerformanceServiceTrait};
