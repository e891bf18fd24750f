//! Shared HTTP client for the Wealthdesk REST backend.
//!
//! Every gateway module in this crate goes through [`ApiClient`]: one
//! reqwest client with a configured timeout, JSON in and out, and uniform
//! non-2xx-as-error semantics carrying the backend's `detail` message.

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use wealthdesk_core::constants::API_PREFIX;
use wealthdesk_core::errors::{ApiError, Error, Result};
use wealthdesk_core::paging::PageRequest;

use crate::config::ApiConfig;

/// Longest slice of a raw error body quoted back in error messages.
const MAX_BODY_SNIPPET: usize = 200;

/// HTTP client for the back-office REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("wealthdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// `skip`/`limit` pair for paginated list endpoints.
    pub(crate) fn paged_query(page: PageRequest) -> Vec<(&'static str, String)> {
        vec![
            ("skip", page.skip.to_string()),
            ("limit", page.limit.to_string()),
        ]
    }

    /// Make a GET request and parse the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Make a GET request with query parameters and parse the response.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[Api] GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        parse_response(response).await
    }

    /// Make a POST request with a JSON body and parse the response.
    pub(crate) async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[Api] POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        parse_response(response).await
    }

    /// Make a PUT request with a JSON body and parse the response.
    pub(crate) async fn put<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[Api] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        parse_response(response).await
    }

    /// Make a DELETE request. Success bodies (usually `204 No Content`) are
    /// discarded.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("[Api] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status, &body).into());
        }
        Ok(())
    }
}

/// Classify a reqwest transport failure.
fn map_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Api(ApiError::Timeout)
    } else {
        Error::Api(ApiError::Network(err.to_string()))
    }
}

/// Parse an HTTP response, handling errors appropriately.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Api(ApiError::Network(format!("Failed to read response: {}", e))))?;

    if !status.is_success() {
        return Err(error_from_response(status, &body).into());
    }

    serde_json::from_str(&body)
        .map_err(|e| Error::Api(ApiError::Decode(format!("{} - {}", e, snippet(&body)))))
}

/// Shape of the backend's error bodies; `detail` may be a plain message or a
/// structured validation payload.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Build an [`ApiError::Http`] from a non-2xx response, preferring the
/// backend's `detail` message over the raw body.
fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            let message = match detail {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            };
            return ApiError::http(status.as_u16(), message);
        }
    }
    ApiError::http(status.as_u16(), snippet(body))
}

fn snippet(body: &str) -> String {
    body.chars().take(MAX_BODY_SNIPPET).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_extracted() {
        let err = error_from_response(
            StatusCode::NOT_FOUND,
            r#"{"detail": "Exchange not found"}"#,
        );
        match err {
            ApiError::Http { status, detail } => {
                assert_eq!(status, 404);
                assert_eq!(detail, "Exchange not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        let err = error_from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body", "code"], "msg": "field required"}]}"#,
        );
        match err {
            ApiError::Http { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("field required"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_json_body_falls_back_to_snippet() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "<html>nginx</html>");
        match err {
            ApiError::Http { status, detail } => {
                assert_eq!(status, 502);
                assert_eq!(detail, "<html>nginx</html>");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(1000);
        let err = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            ApiError::Http { detail, .. } => assert_eq!(detail.len(), MAX_BODY_SNIPPET),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_json_body_without_detail_uses_snippet() {
        let err = error_from_response(StatusCode::BAD_REQUEST, r#"{"message": "nope"}"#);
        match err {
            ApiError::Http { detail, .. } => assert!(detail.contains("message")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_paged_query_carries_skip_and_limit() {
        let query = ApiClient::paged_query(PageRequest { skip: 200, limit: 100 });
        assert_eq!(
            query,
            vec![
                ("skip", "200".to_string()),
                ("limit", "100".to_string()),
            ]
        );
    }
}
