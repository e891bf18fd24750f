//! Positions module - holdings and balance models, services, and traits.

mod positions_model;
mod positions_service;
mod positions_traits;

#[cfg(test)]
mod positions_model_tests;

// Re-export the public interface
pub use positions_model::{AccountBalance, Position, PositionFilter};
pub use positions_service::PositionService;
pub use positions_traits::{PositionApiTrait, PositionServiceTrait};
