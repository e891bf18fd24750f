//! HTTP gateway for the Wealthdesk REST backend.
//!
//! This crate implements the `*ApiTrait` seams defined by `wealthdesk-core`
//! over a shared [`ApiClient`]: request plumbing, backend `detail` error
//! extraction, `skip`/`limit` query handling, and abort guards for in-flight
//! requests.

mod abort;
mod client;
mod config;

mod accounts;
mod analytics;
mod assets;
mod catalogs;
mod performance;
mod portfolios;
mod positions;
mod transactions;
mod users;

pub use abort::{abortable, AbortGuard};
pub use client::ApiClient;
pub use config::{resolve_base_url, ApiConfig, Environment, DEFAULT_API_URL};
