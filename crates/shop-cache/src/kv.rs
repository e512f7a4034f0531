//! Key-Value store wrapper with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache backed by the platform's Key-Value store.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. On wasm32 this is the durable
/// platform store; elsewhere it is a process-wide registry of named
/// in-memory stores with the same visibility semantics (two opens of the
/// same name observe each other's writes), which is what lets tests
/// exercise reload behavior off-platform.
#[derive(Clone)]
pub struct Cache {
    #[cfg(target_arch = "wasm32")]
    store: SpinStore,
    #[cfg(not(target_arch = "wasm32"))]
    store: local::Store,
}

impl Cache {
    /// Open the default store.
    pub fn open_default() -> Result<Self, CacheError> {
        Self::open("default")
    }

    /// Open a named store.
    pub fn open(name: &str) -> Result<Self, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            let store = spin_sdk::key_value::Store::open(name)
                .map_err(|e| CacheError::OpenError(e.to_string()))?;
            Ok(Self {
                store: SpinStore(std::rc::Rc::new(store)),
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Self {
                store: local::Store::open(name)?,
            })
        }
    }

    /// Get a value; `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, bytes)
    }

    /// Delete a value. Deleting an absent key is not an error.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.store
                .0
                .delete(key)
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.store.delete(key)
        }
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.store
                .0
                .exists(key)
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.store.exists(key)
        }
    }

    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.store
                .0
                .get(key)
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.store.get(key)
        }
    }

    fn set_raw(&self, key: &str, bytes: Vec<u8>) -> Result<(), CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.store
                .0
                .set(key, &bytes)
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.store.set(key, bytes)
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
struct SpinStore(std::rc::Rc<spin_sdk::key_value::Store>);

#[cfg(not(target_arch = "wasm32"))]
mod local {
    use crate::CacheError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, OnceLock};

    type Slots = Arc<Mutex<HashMap<String, Vec<u8>>>>;

    static REGISTRY: OnceLock<Mutex<HashMap<String, Slots>>> = OnceLock::new();

    /// In-process stand-in for the platform store.
    #[derive(Clone)]
    pub(crate) struct Store {
        slots: Slots,
    }

    impl Store {
        pub(crate) fn open(name: &str) -> Result<Self, CacheError> {
            let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
            let mut registry = registry
                .lock()
                .map_err(|_| CacheError::OpenError("store registry poisoned".to_string()))?;
            let slots = registry
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(HashMap::new())))
                .clone();
            Ok(Self { slots })
        }

        pub(crate) fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Ok(self.lock()?.get(key).cloned())
        }

        pub(crate) fn set(&self, key: &str, bytes: Vec<u8>) -> Result<(), CacheError> {
            self.lock()?.insert(key.to_string(), bytes);
            Ok(())
        }

        pub(crate) fn delete(&self, key: &str) -> Result<(), CacheError> {
            self.lock()?.remove(key);
            Ok(())
        }

        pub(crate) fn exists(&self, key: &str) -> Result<bool, CacheError> {
            Ok(self.lock()?.contains_key(key))
        }

        fn lock(
            &self,
        ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, CacheError> {
            self.slots
                .lock()
                .map_err(|_| CacheError::StoreError("store lock poisoned".to_string()))
        }
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = cache_key!("cart", client_id);
/// // Returns "cart:cid_abc123"
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
