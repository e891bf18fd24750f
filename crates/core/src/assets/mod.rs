//! Assets module - instrument models, services, and traits.

mod assets_model;
mod assets_service;
mod assets_traits;

#[cfg(test)]
mod assets_model_tests;

// Re-export the public interface
pub use assets_model::{Asset, AssetUpdate, NewAsset};
pub use assets_service::AssetService;
pub use assets_traits::{AssetApiTrait, AssetServiceTrait};
