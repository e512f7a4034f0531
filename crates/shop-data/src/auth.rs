//! Token authentication against the platform's JWT endpoint.
//!
//! The storefront never verifies passwords itself; it exchanges
//! credentials for a token and validates that token on startup.

use crate::{FetchClient, FetchError, StoreConfig};
use serde::{Deserialize, Serialize};
use shop_commerce::ids::CustomerId;

/// The authenticated user, as reported by the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: CustomerId,
    pub email: String,
    pub display_name: String,
    pub username: String,
}

/// An authenticated session: the bearer token plus the user it belongs
/// to. Persisted client-side by `shop-cache`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}

/// Client for the token auth endpoints.
pub struct AuthClient {
    client: FetchClient,
    auth_base: String,
}

impl AuthClient {
    /// Create an auth client for the configured store. Token endpoints
    /// take user credentials, not the API consumer pair, so no default
    /// Authorization header is applied.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: FetchClient::new(),
            auth_base: config.auth_base(),
        }
    }

    /// Exchange credentials for a session token.
    pub fn login(&self, username: &str, password: &str) -> Result<AuthSession, FetchError> {
        let response = self
            .client
            .post(format!("{}/token", self.auth_base))
            .json(&CredentialsPayload { username, password })?
            .send()?
            .error_for_status()?;
        let record: TokenRecord = response.json()?;
        Ok(AuthSession {
            token: record.token,
            user: AuthUser {
                id: CustomerId::new(record.user_id),
                email: record.user_email,
                display_name: record.user_display_name,
                username: record.user_nicename,
            },
        })
    }

    /// Check whether a stored token is still valid.
    ///
    /// A rejected token is `Ok(false)`; only transport failure is an
    /// error.
    pub fn validate(&self, token: &str) -> Result<bool, FetchError> {
        let response = self
            .client
            .post(format!("{}/token/validate", self.auth_base))
            .bearer_auth(token)
            .send()?;
        Ok(response.is_success())
    }
}

#[derive(Debug, Serialize)]
struct CredentialsPayload<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenRecord {
    token: String,
    user_id: i64,
    user_email: String,
    user_display_name: String,
    user_nicename: String,
}
