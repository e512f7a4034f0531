//! Data layer error types.

use thiserror::Error;

/// Errors that can occur when talking to the commerce backend.
///
/// Network failures surface to the caller and leave prior state
/// unchanged; this layer performs no automatic retry.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Non-success HTTP response from the backend.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A response record failed boundary validation (malformed price,
    /// unknown enum value, missing identifier).
    #[error("Invalid record from backend: {0}")]
    InvalidRecord(String),

    /// Missing or malformed store configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<shop_commerce::CommerceError> for FetchError {
    fn from(e: shop_commerce::CommerceError) -> Self {
        FetchError::InvalidRecord(e.to_string())
    }
}
