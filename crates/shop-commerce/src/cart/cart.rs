//! Cart and line item types.

use crate::catalog::{Product, Variation};
use crate::error::CommerceError;
use crate::ids::{ItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A line in the cart: one purchasable entity and its quantity.
///
/// The line key is the variation ID for variable purchases and the
/// product ID otherwise. A variation line always carries its parent
/// product ID, since order placement needs both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Purchasable unit identifier (variation ID or product ID).
    pub item_id: ItemId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Variation label (e.g., "Red / M"), for variation lines.
    pub variation_label: Option<String>,
    /// Unit price charged.
    pub unit_price: Money,
    /// Regular price, for strike-through display while on sale.
    pub regular_price: Option<Money>,
    /// Image URL.
    pub image: Option<String>,
    /// Parent product ID (always set for variation lines).
    pub parent_id: Option<ProductId>,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Build a line for a simple product.
    pub fn simple(product: &Product) -> Self {
        Self {
            item_id: product.id.into(),
            name: product.name.clone(),
            variation_label: None,
            unit_price: product.effective_price(),
            regular_price: Some(product.regular_price),
            image: product.image.clone(),
            parent_id: None,
            quantity: 1,
        }
    }

    /// Build a line for a resolved variation of a variable product.
    pub fn variable(product: &Product, variation: &Variation) -> Self {
        Self {
            item_id: variation.id.into(),
            name: product.name.clone(),
            variation_label: Some(variation.label()),
            unit_price: variation.effective_price(),
            regular_price: Some(variation.regular_price),
            image: variation.image.clone().or_else(|| product.image.clone()),
            parent_id: Some(variation.product_id),
            quantity: 1,
        }
    }

    /// Build a line from a resolver outcome. An unresolved selection
    /// blocks the add entirely rather than falling back to the parent.
    pub fn from_resolution(
        product: &Product,
        resolved: Option<&Variation>,
    ) -> Result<Self, CommerceError> {
        match resolved {
            Some(variation) => Ok(Self::variable(product, variation)),
            None => Err(CommerceError::UnresolvedSelection),
        }
    }

    /// Whether this line references a variation.
    pub fn is_variation(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Total for this line (`unit_price * quantity`), checked.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// An ordered collection of cart lines, owned by a single client session.
///
/// All mutators validate before touching state, so a rejected operation
/// leaves the cart exactly as it was.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of last mutation.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            updated_at: current_timestamp(),
        }
    }

    /// Add a line with its own quantity (>= 1). If a line with the same
    /// item ID exists, its quantity is incremented instead.
    pub fn add(&mut self, line: CartLine) -> Result<(), CommerceError> {
        let quantity = line.quantity;
        self.add_with_quantity(line, quantity)
    }

    /// Add `quantity` units of `line` (the line's own quantity field is
    /// ignored in favor of `quantity`).
    pub fn add_with_quantity(
        &mut self,
        mut line: CartLine,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if line.unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: line.unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.item_id == line.item_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            self.updated_at = current_timestamp();
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        line.quantity = quantity;
        self.items.push(line);
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Set a line's quantity directly. A quantity <= 0 removes the line.
    /// Returns `false` for an unknown item ID; no new line is created.
    pub fn update_quantity(
        &mut self,
        item_id: ItemId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(item_id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.item_id == item_id) {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line unconditionally. Idempotent.
    pub fn remove(&mut self, item_id: ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.item_id != item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Empty the cart (used once per successful order placement).
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get a line by item ID.
    pub fn get(&self, item_id: ItemId) -> Option<&CartLine> {
        self.items.iter().find(|i| i.item_id == item_id)
    }

    /// Total item count (sum of quantities).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_lines(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `unit_price * quantity` over all lines, checked.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let mut acc = Money::zero(self.currency);
        for item in &self.items {
            acc = acc
                .try_add(&item.line_total()?)
                .ok_or(CommerceError::Overflow)?;
        }
        Ok(acc)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn line(id: i64, minor: i64) -> CartLine {
        CartLine {
            item_id: ItemId::new(id),
            name: format!("Item {}", id),
            variation_label: None,
            unit_price: Money::from_minor(minor, Currency::USD),
            regular_price: None,
            image: None,
            parent_id: None,
            quantity: 1,
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::default();
        cart.add_with_quantity(line(1, 1000), 2).unwrap();
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.unique_lines(), 1);
    }

    #[test]
    fn test_add_same_item_merges_quantity() {
        let mut cart = Cart::default();
        cart.add_with_quantity(line(7, 1999), 2).unwrap();
        cart.add_with_quantity(line(7, 1999), 3).unwrap();

        assert_eq!(cart.unique_lines(), 1);
        assert_eq!(cart.get(ItemId::new(7)).unwrap().quantity, 5);
        assert_eq!(cart.subtotal().unwrap().minor, 9995);
    }

    #[test]
    fn test_add_rejects_nonpositive_quantity() {
        let mut cart = Cart::default();
        assert!(cart.add_with_quantity(line(1, 1000), 0).is_err());
        assert!(cart.add_with_quantity(line(1, 1000), -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        let mut l = line(1, 1000);
        l.unit_price = Money::from_minor(1000, Currency::EUR);
        assert!(cart.add(l).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        cart.add(line(1, 1000)).unwrap();
        assert!(cart.update_quantity(ItemId::new(1), 5).unwrap());
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add(line(1, 1000)).unwrap();
        cart.update_quantity(ItemId::new(1), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::default();
        cart.add(line(1, 1000)).unwrap();
        let touched = cart.update_quantity(ItemId::new(99), 5).unwrap();
        assert!(!touched);
        assert_eq!(cart.unique_lines(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::default();
        cart.add(line(1, 1000)).unwrap();
        assert!(cart.remove(ItemId::new(1)));
        assert!(!cart.remove(ItemId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(line(1, 1000)).unwrap();
        cart.add(line(2, 2000)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_is_exact_across_cycles() {
        let mut cart = Cart::default();
        // 0.10 + 0.20 style amounts that drift under binary floats.
        for _ in 0..100 {
            cart.add_with_quantity(line(1, 10), 1).unwrap();
            cart.add_with_quantity(line(2, 20), 1).unwrap();
        }
        cart.update_quantity(ItemId::new(1), 3).unwrap();
        cart.remove(ItemId::new(2));
        cart.add_with_quantity(line(2, 20), 7).unwrap();
        assert_eq!(cart.subtotal().unwrap().minor, 3 * 10 + 7 * 20);
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::default();
        assert!(cart
            .add_with_quantity(line(1, 1000), MAX_QUANTITY_PER_ITEM + 1)
            .is_err());
        cart.add_with_quantity(line(1, 1000), MAX_QUANTITY_PER_ITEM)
            .unwrap();
        assert!(cart.add_with_quantity(line(1, 1000), 1).is_err());
        assert_eq!(cart.total_quantity(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_from_resolution_blocks_unresolved() {
        use crate::catalog::{Product, Variation};
        let product = Product::new(10, "Shirt", "shirt", Money::from_minor(1000, Currency::USD));
        let err = CartLine::from_resolution(&product, None).unwrap_err();
        assert!(matches!(err, CommerceError::UnresolvedSelection));

        let variation = Variation::new(101, 10, Money::from_minor(1200, Currency::USD))
            .with_choice("Color", "Red");
        let l = CartLine::from_resolution(&product, Some(&variation)).unwrap();
        assert_eq!(l.item_id, ItemId::new(101));
        assert_eq!(l.parent_id, Some(ProductId::new(10)));
        assert_eq!(l.variation_label.as_deref(), Some("Red"));
    }
}
