//! Store configuration.

use crate::FetchError;
use shop_commerce::money::{Currency, Money};

/// Flat shipping charged when none is configured, in minor units.
const DEFAULT_FLAT_SHIPPING_MINOR: i64 = 25000;

/// Connection and pricing configuration for the commerce backend.
///
/// The shipping amount lives here because it is configuration, not
/// computation: a single flat rate independent of cart contents.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the commerce backend (e.g., "https://shop.example.com").
    pub store_url: String,
    /// API consumer key.
    pub consumer_key: String,
    /// API consumer secret.
    pub consumer_secret: String,
    /// REST API version path segment.
    pub api_version: String,
    /// Currency the store sells in.
    pub currency: Currency,
    /// Flat-rate shipping charge.
    pub flat_shipping: Money,
}

impl StoreConfig {
    /// Create a configuration with default API version, currency, and
    /// shipping rate.
    pub fn new(
        store_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        let currency = Currency::default();
        Self {
            store_url: store_url.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            api_version: "wc/v3".to_string(),
            currency,
            flat_shipping: Money::from_minor(DEFAULT_FLAT_SHIPPING_MINOR, currency),
        }
    }

    /// Read configuration from the environment.
    ///
    /// Required: `STORE_URL`, `STORE_CONSUMER_KEY`, `STORE_CONSUMER_SECRET`.
    /// Optional: `STORE_CURRENCY` (code), `STORE_FLAT_SHIPPING` (minor
    /// units).
    pub fn from_env() -> Result<Self, FetchError> {
        let store_url = require_env("STORE_URL")?;
        let consumer_key = require_env("STORE_CONSUMER_KEY")?;
        let consumer_secret = require_env("STORE_CONSUMER_SECRET")?;

        let mut config = Self::new(store_url, consumer_key, consumer_secret);

        if let Ok(code) = std::env::var("STORE_CURRENCY") {
            let currency = Currency::from_code(&code)
                .ok_or_else(|| FetchError::Config(format!("Unknown currency: {}", code)))?;
            config.currency = currency;
            config.flat_shipping = Money::from_minor(config.flat_shipping.minor, currency);
        }
        if let Ok(raw) = std::env::var("STORE_FLAT_SHIPPING") {
            let minor: i64 = raw
                .parse()
                .map_err(|_| FetchError::Config(format!("Invalid STORE_FLAT_SHIPPING: {}", raw)))?;
            config.flat_shipping = Money::from_minor(minor, config.currency);
        }

        Ok(config)
    }

    /// Root of the commerce REST API (e.g., ".../wp-json/wc/v3").
    pub fn api_base(&self) -> String {
        format!(
            "{}/wp-json/{}",
            self.store_url.trim_end_matches('/'),
            self.api_version
        )
    }

    /// Root of the token auth API (e.g., ".../wp-json/jwt-auth/v1").
    pub fn auth_base(&self) -> String {
        format!(
            "{}/wp-json/jwt-auth/v1",
            self.store_url.trim_end_matches('/')
        )
    }
}

fn require_env(name: &str) -> Result<String, FetchError> {
    std::env::var(name).map_err(|_| FetchError::Config(format!("{} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig::new("https://shop.example.com/", "ck_abc", "cs_def")
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        assert_eq!(
            config().api_base(),
            "https://shop.example.com/wp-json/wc/v3"
        );
    }

    #[test]
    fn test_auth_base() {
        assert_eq!(
            config().auth_base(),
            "https://shop.example.com/wp-json/jwt-auth/v1"
        );
    }

    #[test]
    fn test_defaults() {
        let c = config();
        assert_eq!(c.api_version, "wc/v3");
        assert_eq!(c.flat_shipping.minor, DEFAULT_FLAT_SHIPPING_MINOR);
        assert_eq!(c.flat_shipping.currency, c.currency);
    }
}
