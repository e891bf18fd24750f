/// REST path prefix shared by every backend endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Default number of rows requested per page when draining list endpoints.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Safety cap on pages fetched per drain.
pub const MAX_PAGES: usize = 10_000;

/// Default number of rows shown per rendered table page.
pub const DISPLAY_PAGE_SIZE: usize = 25;

/// Decimal precision for display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
