//! Persisted session slot.

use crate::{Cache, CacheError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A generated identifier for this browser/client session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    /// Create a client ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random client ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("cid_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the client ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single persisted slot for session data (the authenticated session
/// in the storefront: token plus user details).
///
/// Generic over the stored type so the cache layer stays free of wire
/// concerns; the data layer's `AuthSession` is the intended occupant.
/// Last write wins — session scope is a single client with no
/// multi-writer reconciliation.
pub struct SessionStore<T> {
    cache: Cache,
    key: String,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> SessionStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Default storage key.
    pub const DEFAULT_KEY: &'static str = "session";

    /// Open the slot under the default key.
    pub fn open(cache: Cache) -> Self {
        Self::open_at(cache, Self::DEFAULT_KEY)
    }

    /// Open the slot under a specific key.
    pub fn open_at(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// The current session, if one is stored.
    pub fn current(&self) -> Result<Option<T>, CacheError> {
        self.cache.get(&self.key)
    }

    /// Store a session, replacing any prior one.
    pub fn save(&self, session: &T) -> Result<(), CacheError> {
        self.cache.set(&self.key, session)
    }

    /// Drop the stored session (logout).
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }
}
