//! Core error types for the Wealthdesk client.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest, serde_json, etc.) are converted to these types by the
//! api-client crate.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the back-office client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the underlying request was cancelled rather than failed.
    ///
    /// Call sites ignore aborted fetches instead of reporting them.
    pub fn is_abort(&self) -> bool {
        matches!(self, Error::Api(ApiError::Aborted))
    }
}

/// Transport and backend errors for REST calls.
///
/// Any non-2xx response becomes [`ApiError::Http`]; everything else maps to
/// the failure mode of the transport itself. There is no retry tier: callers
/// surface these directly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. `detail` carries the backend's `detail` message when
    /// the error body parses as JSON, otherwise a snippet of the raw body.
    #[error("API error ({status}): {detail}")]
    Http { status: u16, detail: String },

    /// Connection-level failure (DNS, refused, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// A 2xx body that failed to deserialize into the expected model.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request future was cancelled before completion.
    #[error("Request aborted")]
    Aborted,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create an HTTP error from status and detail message.
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self::Http {
            status,
            detail: detail.into(),
        }
    }
}

/// Validation errors for draft form data.
///
/// A draft that fails validation never reaches the wire.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is blank")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] chrono::ParseError),
}

/// Guard for required draft fields: blank (empty or whitespace-only) values
/// block submission.
pub fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(name.to_string()).into());
    }
    Ok(())
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
