//! Client configuration.
//!
//! The backend base URL is resolved from the environment with hostname-based
//! HTTPS enforcement: in production, a plain-http URL pointing at anything
//! other than loopback is upgraded to https.

use std::time::Duration;

use log::warn;
use reqwest::Url;
use wealthdesk_core::constants::DEFAULT_PAGE_LIMIT;
use wealthdesk_core::errors::{Error, Result};

/// Fallback base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment environment the client runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn from_env() -> Self {
        match std::env::var("WD_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Settings for the API client, resolved from `WD_*` environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub page_limit: i64,
    pub environment: Environment,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_limit: DEFAULT_PAGE_LIMIT,
            environment: Environment::Development,
        }
    }
}

impl ApiConfig {
    /// Build the configuration from the process environment.
    ///
    /// * `WD_API_URL` - backend base URL (default `http://localhost:8000`)
    /// * `WD_ENV` - `production` or `development`
    /// * `WD_HTTP_TIMEOUT_SECS` - request timeout in seconds
    /// * `WD_PAGE_LIMIT` - page size for list endpoint draining
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_env();
        let raw_url = std::env::var("WD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url = resolve_base_url(&raw_url, environment)?;

        let timeout_secs = parse_env_var("WD_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let page_limit = parse_env_var("WD_PAGE_LIMIT", DEFAULT_PAGE_LIMIT)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            page_limit,
            environment,
        })
    }
}

fn parse_env_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|_| {
            Error::InvalidConfigValue(format!("{} must be a number, got '{}'", key, value))
        }),
        Err(_) => Ok(default),
    }
}

/// Normalize the configured base URL.
///
/// Trailing slashes are trimmed. In production, an `http` URL whose host is
/// not loopback is upgraded to `https` with a warning; loopback hosts are
/// left untouched in any environment.
pub fn resolve_base_url(raw: &str, environment: Environment) -> Result<String> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| Error::InvalidConfigValue(format!("WD_API_URL '{}': {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidConfigValue(format!(
            "WD_API_URL must be http or https, got '{}'",
            url.scheme()
        )));
    }

    let loopback = matches!(
        url.host_str(),
        Some("localhost") | Some("127.0.0.1") | Some("::1") | Some("[::1]")
    );

    if environment.is_production() && url.scheme() == "http" && !loopback {
        warn!(
            "Upgrading insecure API base URL to https for host {}",
            url.host_str().unwrap_or("<none>")
        );
        url.set_scheme("https")
            .map_err(|_| Error::InvalidConfigValue("Could not enforce https".to_string()))?;
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let url = resolve_base_url("http://localhost:8000/", Environment::Development).unwrap();
        assert_eq!(url, "http://localhost:8000");
    }

    #[test]
    fn test_production_upgrades_http_for_remote_hosts() {
        let url = resolve_base_url("http://api.example.com", Environment::Production).unwrap();
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn test_production_leaves_loopback_untouched() {
        let url = resolve_base_url("http://localhost:8000", Environment::Production).unwrap();
        assert_eq!(url, "http://localhost:8000");

        let url = resolve_base_url("http://127.0.0.1:8000", Environment::Production).unwrap();
        assert_eq!(url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_development_never_rewrites_scheme() {
        let url = resolve_base_url("http://api.example.com", Environment::Development).unwrap();
        assert_eq!(url, "http://api.example.com");
    }

    #[test]
    fn test_https_is_kept_as_is() {
        let url = resolve_base_url("https://api.example.com/", Environment::Production).unwrap();
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn test_invalid_url_is_a_config_error() {
        assert!(resolve_base_url("not a url", Environment::Development).is_err());
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        assert!(resolve_base_url("ftp://api.example.com", Environment::Development).is_err());
    }
}
