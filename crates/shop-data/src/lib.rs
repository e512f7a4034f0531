//! Commerce backend REST client for the storefront.
//!
//! Thin, synchronous HTTP plumbing plus the typed clients built on it:
//!
//! - [`FetchClient`] — request builder with base URL, default headers,
//!   and JSON handling
//! - [`CatalogClient`] — products and variations
//! - [`OrderClient`] — order placement and history
//! - [`AuthClient`] — token auth against the platform's JWT endpoint
//!
//! All boundary parsing of backend JSON lives in this crate: raw records
//! are validated and converted into `shop-commerce` domain types, and
//! malformed records are rejected instead of leaking defaults into
//! comparisons downstream.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::{CatalogClient, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let catalog = CatalogClient::new(config);
//!
//! let product = catalog.product("blue-hoodie")?;
//! let variations = catalog.variations(&product)?;
//! ```

mod auth;
mod catalog;
mod config;
mod error;
mod orders;
mod request;
mod response;

pub use auth::{AuthClient, AuthSession, AuthUser};
pub use catalog::CatalogClient;
pub use config::StoreConfig;
pub use error::FetchError;
pub use orders::OrderClient;
pub use request::{Method, RequestBuilder};
pub use response::Response;

/// HTTP client for making outbound requests to the commerce backend.
///
/// A lightweight wrapper around the platform's HTTP host call with a
/// builder API. Construct one per backend via [`FetchClient::for_store`]
/// to get the base URL and consumer credentials applied to every request.
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: Vec::new(),
        }
    }

    /// Create a client for the configured store's commerce API: base URL
    /// set to the API root, consumer key/secret applied as Basic auth.
    pub fn for_store(config: &StoreConfig) -> Self {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let credentials = format!("{}:{}", config.consumer_key, config.consumer_secret);
        Self::new()
            .with_base_url(config.api_base())
            .with_default_header(
                "Authorization",
                format!("Basic {}", STANDARD.encode(credentials.as_bytes())),
            )
    }

    /// Set a base URL that will be prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match self.builder.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Delete => SpinMethod::Delete,
        };

        let mut request = Request::builder();
        request.method(method);
        request.uri(&self.builder.url);
        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }
        let request = if let Some(body) = self.builder.body {
            request
                .body(body)
                .map_err(|e| FetchError::RequestError(e.to_string()))?
        } else {
            request.build()
        };

        let url = self.builder.url.clone();
        let response = spin_sdk::http::send(request).map_err(|e| {
            tracing::warn!(%url, error = %e, "outbound request failed");
            FetchError::RequestError(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(%url, status, "outbound request completed");

        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, FetchError> {
        // Off-platform builds have no outbound HTTP host; development and
        // tests exercise the parsing paths against fixtures instead.
        tracing::debug!(url = %self.builder.url, "outbound request stubbed off-platform");
        Ok(Response::new(
            200,
            std::collections::HashMap::new(),
            Vec::new(),
        ))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AuthClient, AuthSession, AuthUser, CatalogClient, FetchClient, FetchError, Method,
        OrderClient, Response, StoreConfig,
    };
}
