// web_app/config.rs - Catalog configuration
//
// Read from the process environment (the server binary loads `.env` with
// dotenv first). Leptos site options are configured separately through
// [package.metadata.leptos].

use std::time::Duration;

use crate::web_app::errors::ConfigError;

/// Base URL of the catalog backend, e.g. `http://localhost:3333`
pub const API_URL_VAR: &str = "BOOKWISE_API_URL";
/// Optional request timeout in whole seconds
pub const API_TIMEOUT_VAR: &str = "BOOKWISE_API_TIMEOUT_SECS";

/// Where the server reads books from
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog backend; `None` serves the built-in sample catalog
    pub api_url: Option<String>,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl CatalogConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let request_timeout = match lookup(API_TIMEOUT_VAR) {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => {
                // Zero counts as invalid: every request would time out at once
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        key: API_TIMEOUT_VAR,
                        value: raw.clone(),
                    })?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            api_url,
            request_timeout,
        })
    }
}
