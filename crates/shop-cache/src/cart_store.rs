//! Write-through persisted cart.

use crate::{Cache, CacheError, CartStoreError};
use shop_commerce::cart::{Cart, CartLine};
use shop_commerce::ids::ItemId;
use shop_commerce::money::Money;
use shop_commerce::CommerceError;

/// The cart's persistent state container.
///
/// Owns the live [`Cart`] and a slot in the client's durable store.
/// Every mutation persists the updated cart synchronously before
/// returning, so a page reload never loses state. Constructed and
/// injected explicitly — there is no process-global cart.
///
/// A rejected domain mutation performs no write; a failed write restores
/// the in-memory cart to its pre-mutation value, so memory and storage
/// never drift apart silently.
pub struct CartStore {
    cache: Cache,
    key: String,
    cart: Cart,
}

impl CartStore {
    /// Default storage key.
    pub const DEFAULT_KEY: &'static str = "cart";

    /// Hydrate the cart from durable storage. An absent slot yields a
    /// fresh empty cart; an unreadable one is an error for the caller to
    /// decide on.
    pub fn load(cache: Cache) -> Result<Self, CacheError> {
        Self::load_at(cache, Self::DEFAULT_KEY)
    }

    /// Hydrate from a specific storage key.
    pub fn load_at(cache: Cache, key: impl Into<String>) -> Result<Self, CacheError> {
        let key = key.into();
        let cart = cache.get::<Cart>(&key)?.unwrap_or_default();
        Ok(Self { cache, key, cart })
    }

    /// The current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total item count (sum of quantities).
    pub fn total_quantity(&self) -> i64 {
        self.cart.total_quantity()
    }

    /// Exact subtotal of the current contents.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.cart.subtotal()
    }

    /// Add a line (merging quantities by item ID) and persist.
    pub fn add(&mut self, line: CartLine) -> Result<(), CartStoreError> {
        let previous = self.cart.clone();
        self.cart.add(line)?;
        self.persist_or_restore(previous)
    }

    /// Add `quantity` units of a line and persist.
    pub fn add_with_quantity(
        &mut self,
        line: CartLine,
        quantity: i64,
    ) -> Result<(), CartStoreError> {
        let previous = self.cart.clone();
        self.cart.add_with_quantity(line, quantity)?;
        self.persist_or_restore(previous)
    }

    /// Set a line's quantity (<= 0 removes it) and persist. Returns
    /// whether a line was touched.
    pub fn update_quantity(
        &mut self,
        item_id: ItemId,
        quantity: i64,
    ) -> Result<bool, CartStoreError> {
        let previous = self.cart.clone();
        let touched = self.cart.update_quantity(item_id, quantity)?;
        self.persist_or_restore(previous)?;
        Ok(touched)
    }

    /// Remove a line and persist. Idempotent.
    pub fn remove(&mut self, item_id: ItemId) -> Result<bool, CartStoreError> {
        let previous = self.cart.clone();
        let removed = self.cart.remove(item_id);
        self.persist_or_restore(previous)?;
        Ok(removed)
    }

    /// Empty the cart and persist. Called once per successful order
    /// placement.
    pub fn clear(&mut self) -> Result<(), CartStoreError> {
        let previous = self.cart.clone();
        self.cart.clear();
        self.persist_or_restore(previous)
    }

    fn persist_or_restore(&mut self, previous: Cart) -> Result<(), CartStoreError> {
        match self.cache.set(&self.key, &self.cart) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.cart = previous;
                Err(e.into())
            }
        }
    }
}
