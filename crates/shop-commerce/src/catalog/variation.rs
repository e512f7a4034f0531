//! Concrete variations of a variable product.

use crate::catalog::StockStatus;
use crate::ids::{ProductId, VariationId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One recorded (attribute name, option value) pair on a variation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AttributeChoice {
    /// Attribute name (e.g., "Color").
    pub name: String,
    /// Chosen option value (e.g., "Red").
    pub option: String,
}

impl AttributeChoice {
    pub fn new(name: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            option: option.into(),
        }
    }

    /// Check whether this choice is for the given attribute name.
    pub(crate) fn is_for(&self, name: &str) -> bool {
        super::fold(&self.name) == super::fold(name)
    }

    /// Check whether this choice carries the given option value.
    pub(crate) fn has_option(&self, value: &str) -> bool {
        super::fold(&self.option) == super::fold(value)
    }
}

/// A concrete purchasable unit of a variable product. Variations are
/// fetched from the backend, never derived locally, and belong to exactly
/// one parent product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variation {
    /// Unique variation identifier.
    pub id: VariationId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Stock keeping unit for this variation.
    pub sku: String,
    /// Current price (the sale price while a sale is running).
    pub price: Money,
    /// Regular price.
    pub regular_price: Money,
    /// Sale price, when one is set.
    pub sale_price: Option<Money>,
    /// Whether a sale is currently active.
    pub on_sale: bool,
    /// Stock availability.
    pub stock_status: StockStatus,
    /// Variation-specific image URL.
    pub image: Option<String>,
    /// The attribute choices that define this variation, in the parent's
    /// attribute order.
    pub attributes: Vec<AttributeChoice>,
}

impl Variation {
    /// Create a new in-stock variation.
    pub fn new(
        id: impl Into<VariationId>,
        product_id: impl Into<ProductId>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            sku: String::new(),
            price,
            regular_price: price,
            sale_price: None,
            on_sale: false,
            stock_status: StockStatus::InStock,
            image: None,
            attributes: Vec::new(),
        }
    }

    /// Add an attribute choice (builder style).
    pub fn with_choice(mut self, name: impl Into<String>, option: impl Into<String>) -> Self {
        self.attributes.push(AttributeChoice::new(name, option));
        self
    }

    /// Display label built from the option values (e.g., "Red / M").
    pub fn label(&self) -> String {
        if self.attributes.is_empty() {
            "Default".to_string()
        } else {
            self.attributes
                .iter()
                .map(|c| c.option.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }

    /// Check if this variation is available for purchase.
    pub fn is_in_stock(&self) -> bool {
        self.stock_status != StockStatus::OutOfStock
    }

    /// The price to charge right now.
    pub fn effective_price(&self) -> Money {
        match (self.on_sale, self.sale_price) {
            (true, Some(sale)) => sale,
            _ => self.price,
        }
    }

    /// The case-folded choice set, sorted by attribute name. Two
    /// variations with equal keys are indistinguishable to the resolver.
    pub(crate) fn choice_key(&self) -> Vec<(String, String)> {
        let mut key: Vec<_> = self
            .attributes
            .iter()
            .map(|c| (super::fold(&c.name), super::fold(&c.option)))
            .collect();
        key.sort();
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_variation_creation() {
        let v = Variation::new(101, 10, Money::from_minor(1000, Currency::USD));
        assert_eq!(v.id.value(), 101);
        assert_eq!(v.product_id.value(), 10);
        assert!(v.is_in_stock());
    }

    #[test]
    fn test_label_joins_options() {
        let v = Variation::new(101, 10, Money::from_minor(1000, Currency::USD))
            .with_choice("Color", "Red")
            .with_choice("Size", "M");
        assert_eq!(v.label(), "Red / M");
    }

    #[test]
    fn test_label_default_without_choices() {
        let v = Variation::new(101, 10, Money::from_minor(1000, Currency::USD));
        assert_eq!(v.label(), "Default");
    }

    #[test]
    fn test_effective_price() {
        let mut v = Variation::new(101, 10, Money::from_minor(1200, Currency::USD));
        v.sale_price = Some(Money::from_minor(999, Currency::USD));
        v.on_sale = true;
        assert_eq!(v.effective_price().minor, 999);
    }

    #[test]
    fn test_choice_key_is_order_insensitive() {
        let a = Variation::new(1, 10, Money::zero(Currency::USD))
            .with_choice("Color", "Red")
            .with_choice("Size", "M");
        let b = Variation::new(2, 10, Money::zero(Currency::USD))
            .with_choice("size", "m")
            .with_choice("COLOR", "RED");
        assert_eq!(a.choice_key(), b.choice_key());
    }
}
