//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the key-value store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform a store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}

/// Errors from the persisted cart container: either the domain rejected
/// the mutation or the write-through failed.
#[derive(Error, Debug)]
pub enum CartStoreError {
    #[error(transparent)]
    Commerce(#[from] shop_commerce::CommerceError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}
