//! Client-side table behavior - filter, sort, and page rows already
//! fetched into memory.
//!
//! Every screen drains its list endpoint in full and then applies the same
//! in-memory pipeline: case-insensitive substring search over a fixed set of
//! fields, column sort with direction toggling, and a page window.

mod listing_model;

#[cfg(test)]
mod listing_model_tests;

pub use listing_model::{
    matches_query, ListState, ListView, Listable, SortConfig, SortDirection, SortValue,
};
