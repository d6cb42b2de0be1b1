//! Provider configuration read from the environment.
//!
//! The API key is a secret: it is only ever read from `FMP_API_KEY` (or a
//! `.env` file loaded at startup) and is redacted from `Debug` output.
use std::fmt;

use momentum_common::net::DEFAULT_BASE_URL;
use momentum_common::{Result, ScanError};

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "FMP_API_KEY";
/// Environment variable overriding the provider base URL.
pub const BASE_URL_VAR: &str = "FMP_BASE_URL";

/// Where and how to reach the market-data provider.
pub struct ProviderConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// API key appended to every request.
    pub api_key: String,
}

impl ProviderConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ScanError::Config(format!("{API_KEY_VAR} is not set")))?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(ProviderConfig { base_url, api_key })
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
