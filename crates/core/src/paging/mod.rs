//! Pagination plumbing for `skip`/`limit` list endpoints.
//!
//! Every list endpoint on the backend is paginated the same way: the client
//! passes `skip` and `limit`, the server answers with a plain JSON array, and
//! a page shorter than `limit` means the listing is exhausted. [`Pager::drain`]
//! loops over that contract and concatenates the pages.
//!
//! Analytics endpoints that paginate server-side (movers) use the
//! [`Paginated`] envelope instead and are rendered one page at a time.

use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGES};
use crate::errors::{Error, Result, ValidationError};

#[cfg(test)]
mod paging_tests;

/// A single page window over a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: i64,
    pub limit: i64,
}

impl PageRequest {
    /// The first window of a drain.
    pub fn first(limit: i64) -> Self {
        Self { skip: 0, limit }
    }

    /// The window following this one, advanced by the number of rows
    /// actually received.
    pub fn next(self, received: i64) -> Self {
        Self {
            skip: self.skip + received,
            limit: self.limit,
        }
    }
}

/// Server-side pagination metadata for envelope responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub has_more: bool,
}

/// Envelope for endpoints that paginate on the backend (e.g. movers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PageInfo>,
}

impl<T> Paginated<T> {
    pub fn has_more(&self) -> bool {
        self.pagination.as_ref().map(|p| p.has_more).unwrap_or(false)
    }
}

/// Drains a paginated list endpoint into a single `Vec`.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    /// Number of rows to request per page.
    pub limit: i64,
    /// Safety cap on pages fetched per drain.
    pub max_pages: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            max_pages: MAX_PAGES,
        }
    }
}

impl Pager {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Fetch every page and return the concatenation, in order.
    ///
    /// Terminates on the first page shorter than `limit` without issuing a
    /// further request. Errors out if the drain exceeds `max_pages`, or if two
    /// consecutive non-empty pages lead with the same row (a backend that
    /// ignores `skip` would otherwise loop forever).
    pub async fn drain<T, F, Fut>(&self, mut fetch_page: F) -> Result<Vec<T>>
    where
        T: Clone + PartialEq,
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        if self.limit <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "Page limit must be positive, got {}",
                self.limit
            ))
            .into());
        }

        let mut all: Vec<T> = Vec::new();
        let mut page = PageRequest::first(self.limit);
        let mut pages_fetched: usize = 0;
        let mut last_page_first: Option<T> = None;

        loop {
            if pages_fetched >= self.max_pages {
                return Err(Error::Unexpected(format!(
                    "Pagination exceeded max pages ({})",
                    self.max_pages
                )));
            }

            let data = fetch_page(page).await?;
            pages_fetched += 1;
            let received = data.len() as i64;
            debug!(
                "[Pager] Fetched {} rows (skip {}, limit {})",
                received, page.skip, page.limit
            );

            if let Some(first) = data.first() {
                if page.skip > 0 {
                    if let Some(prev) = &last_page_first {
                        if prev == first {
                            return Err(Error::Unexpected(
                                "Pagination appears stuck (same leading row returned for multiple pages)"
                                    .to_string(),
                            ));
                        }
                    }
                }
                last_page_first = Some(first.clone());
            }

            all.extend(data);

            // A short page ends the listing; never request past it.
            if received < self.limit {
                break;
            }
            page = page.next(received);
        }

        Ok(all)
    }
}

/// Drain a list endpoint with the default safety caps.
pub async fn fetch_all_pages<T, F, Fut>(limit: i64, fetch_page: F) -> Result<Vec<T>>
where
    T: Clone + PartialEq,
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    Pager::new(limit).drain(fetch_page).await
}
