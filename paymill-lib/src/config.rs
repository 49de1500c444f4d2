//! Client configuration.
//!
//! # Environment Variables
//!
//! [`PaymillConfig::from_env`] reads:
//! - `PAYMILL_PRIVATE_KEY` - private API key (required)
//! - `PAYMILL_API_URL` - API root, defaults to `https://api.paymill.de/v2/`
//! - `PAYMILL_DEFAULT_CURRENCY` - ISO 4217 code, defaults to `EUR`
//! - `PAYMILL_TIMEOUT` - request timeout in seconds

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PaymillError, Result};

/// Production API root.
pub const DEFAULT_API_URL: &str = "https://api.paymill.de/v2/";

/// Currency used when a create call does not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Configuration for a [`Paymill`](crate::Paymill) client.
#[derive(Clone, Serialize, Deserialize)]
pub struct PaymillConfig {
    /// Private API key, sent as the Basic auth username.
    #[serde(default)]
    pub private_key: String,

    /// Versioned API root.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Currency used when a create call omits one.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Extra headers merged into every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl PaymillConfig {
    /// Create a configuration for `private_key` with production defaults.
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
            api_url: default_api_url(),
            default_currency: default_currency(),
            headers: BTreeMap::new(),
            timeout_secs: default_timeout(),
        }
    }

    /// Load the configuration from `PAYMILL_*` environment variables.
    ///
    /// Fails with [`PaymillError::Config`] when `PAYMILL_PRIVATE_KEY` is unset.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var("PAYMILL_PRIVATE_KEY")
            .map_err(|_| PaymillError::Config("PAYMILL_PRIVATE_KEY is not set".to_string()))?;

        let mut config = Self::new(key);

        if let Ok(url) = std::env::var("PAYMILL_API_URL") {
            config = config.with_api_url(url);
        }

        if let Ok(currency) = std::env::var("PAYMILL_DEFAULT_CURRENCY") {
            config = config.with_default_currency(currency);
        }

        if let Ok(timeout) = std::env::var("PAYMILL_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config = config.with_timeout(secs);
            }
        }

        Ok(config)
    }

    /// Set the API root.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the default currency.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Check the configuration and normalise the API root to end in `/`.
    pub(crate) fn validated(mut self) -> Result<Self> {
        if self.private_key.trim().is_empty() {
            return Err(PaymillError::Config("private key should be set".to_string()));
        }

        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(PaymillError::Config(format!(
                "api url should be an http(s) url, got '{url}'"
            )));
        }
        self.api_url = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        };

        self.default_currency = crate::endpoints::normalize_currency(&self.default_currency)
            .map_err(|e| PaymillError::Config(e.to_string()))?;

        Ok(self)
    }

    /// Private key with everything past the first four characters hidden.
    pub fn masked_key(&self) -> String {
        let visible: String = self.private_key.chars().take(4).collect();
        format!("{visible}…")
    }
}

impl fmt::Debug for PaymillConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymillConfig")
            .field("private_key", &self.masked_key())
            .field("api_url", &self.api_url)
            .field("default_currency", &self.default_currency)
            .field("headers", &self.headers)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = PaymillConfig::new("key_123")
            .with_api_url("https://sandbox.example.com/v2")
            .with_default_currency("usd")
            .with_header("X-Trace", "1")
            .with_timeout(5);

        assert_eq!(config.private_key, "key_123");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.headers.get("X-Trace").map(String::as_str), Some("1"));

        let config = config.validated().unwrap();
        assert_eq!(config.api_url, "https://sandbox.example.com/v2/");
        assert_eq!(config.default_currency, "USD");
    }

    #[test]
    fn test_defaults() {
        let config = PaymillConfig::new("key_123");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PaymillConfig =
            serde_json::from_str(r#"{"private_key": "abc"}"#).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.default_currency, "EUR");
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_missing_key_rejected() {
        let err = PaymillConfig::new("  ").validated().unwrap_err();
        assert!(matches!(err, PaymillError::Config(_)));
    }

    #[test]
    fn test_bad_url_and_currency_rejected() {
        let err = PaymillConfig::new("k")
            .with_api_url("ftp://nope")
            .validated()
            .unwrap_err();
        assert!(matches!(err, PaymillError::Config(_)));

        let err = PaymillConfig::new("k")
            .with_default_currency("EURO")
            .validated()
            .unwrap_err();
        assert!(matches!(err, PaymillError::Config(_)));
    }

    #[test]
    fn test_debug_masks_key() {
        let config = PaymillConfig::new("secret_key_value");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret_key_value"));
        assert!(debug.contains("secr…"));
    }
}
