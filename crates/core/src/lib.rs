//! Wealthdesk Core - Domain entities, services, and traits.
//!
//! This crate contains the client-side business logic for the Wealthdesk
//! back-office: typed API models, draft validation, pagination draining,
//! and the table behavior (search/sort/page) shared by every screen.
//! It is transport-agnostic and defines traits that are implemented
//! by the `api-client` crate.

pub mod accounts;
pub mod analytics;
pub mod assets;
pub mod catalogs;
pub mod constants;
pub mod errors;
pub mod listing;
pub mod paging;
pub mod performance;
pub mod portfolios;
pub mod positions;
pub mod transactions;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
