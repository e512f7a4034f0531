//! Order placement types.

use crate::cart::Cart;
use crate::checkout::{compute_totals, Address, OrderTotals};
use crate::error::CommerceError;
use crate::ids::{CustomerId, OrderId, ProductId, VariationId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Payment methods the storefront offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Backend payment method code.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    /// Human-readable title sent with the order.
    pub fn title(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// One order line, keyed the way the backend expects: the parent product
/// plus the variation when the purchase is variable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub variation_id: Option<VariationId>,
    pub quantity: i64,
}

/// Everything order placement needs, assembled client-side. The backend
/// owns tax, inventory, and payment capture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Billing address.
    pub billing: Address,
    /// Shipping address.
    pub shipping: Address,
    /// Selected payment method.
    pub payment: PaymentMethod,
    /// Order lines.
    pub items: Vec<OrderItem>,
    /// Totals at order time.
    pub totals: OrderTotals,
    /// Authenticated customer, when known.
    pub customer_id: Option<CustomerId>,
}

impl OrderRequest {
    /// Assemble an order from the cart's current contents.
    ///
    /// Fails on an empty cart or an invalid address; the cart itself is
    /// left untouched either way (the caller clears it only after the
    /// backend acknowledges the order).
    pub fn from_cart(
        cart: &Cart,
        address: Address,
        payment: PaymentMethod,
        shipping_flat_rate: Money,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        address.validate()?;

        let totals = compute_totals(cart, shipping_flat_rate)?;
        let items = cart
            .items
            .iter()
            .map(|line| match line.parent_id {
                // Variation line: the backend wants (parent, variation).
                Some(parent) => OrderItem {
                    product_id: parent,
                    variation_id: Some(VariationId::new(line.item_id.value())),
                    quantity: line.quantity,
                },
                None => OrderItem {
                    product_id: ProductId::new(line.item_id.value()),
                    variation_id: None,
                    quantity: line.quantity,
                },
            })
            .collect();

        Ok(Self {
            shipping: address.clone(),
            billing: address,
            payment,
            items,
            totals,
            customer_id: None,
        })
    }

    /// Attach the authenticated customer.
    pub fn for_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }
}

/// The backend's acknowledgment of a created order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedOrder {
    /// Backend order ID.
    pub id: OrderId,
    /// Human-readable order number.
    pub number: String,
    /// Backend status string (e.g., "processing").
    pub status: String,
    /// Grand total charged.
    pub total: Money,
    /// Order currency.
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::catalog::{Product, Variation};
    use crate::money::Currency;

    fn address() -> Address {
        Address {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            address_1: "123 Main Street".to_string(),
            country: "US".to_string(),
            postcode: "94102".to_string(),
            phone: "+1 415 555 0100".to_string(),
        }
    }

    fn mixed_cart() -> Cart {
        let simple = Product::new(20, "Mug", "mug", Money::from_minor(500, Currency::USD));
        let parent = Product::new(10, "Shirt", "shirt", Money::from_minor(1000, Currency::USD));
        let variation = Variation::new(101, 10, Money::from_minor(1200, Currency::USD))
            .with_choice("Color", "Red");

        let mut cart = Cart::default();
        cart.add(CartLine::simple(&simple)).unwrap();
        cart.add_with_quantity(CartLine::variable(&parent, &variation), 2)
            .unwrap();
        cart
    }

    #[test]
    fn test_from_cart_maps_line_keys() {
        let cart = mixed_cart();
        let order = OrderRequest::from_cart(
            &cart,
            address(),
            PaymentMethod::CashOnDelivery,
            Money::from_minor(250, Currency::USD),
        )
        .unwrap();

        assert_eq!(order.items.len(), 2);

        let simple = &order.items[0];
        assert_eq!(simple.product_id, ProductId::new(20));
        assert_eq!(simple.variation_id, None);

        let variable = &order.items[1];
        assert_eq!(variable.product_id, ProductId::new(10));
        assert_eq!(variable.variation_id, Some(VariationId::new(101)));
        assert_eq!(variable.quantity, 2);
    }

    #[test]
    fn test_from_cart_totals() {
        let cart = mixed_cart();
        let order = OrderRequest::from_cart(
            &cart,
            address(),
            PaymentMethod::CashOnDelivery,
            Money::from_minor(250, Currency::USD),
        )
        .unwrap();
        // 500 + 2 * 1200 + 250 shipping
        assert_eq!(order.totals.subtotal.minor, 2900);
        assert_eq!(order.totals.total.minor, 3150);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = OrderRequest::from_cart(
            &Cart::default(),
            address(),
            PaymentMethod::CashOnDelivery,
            Money::from_minor(250, Currency::USD),
        )
        .unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_invalid_address_rejected() {
        let mut bad = address();
        bad.email = "nope".to_string();
        let err = OrderRequest::from_cart(
            &mixed_cart(),
            bad,
            PaymentMethod::CashOnDelivery,
            Money::from_minor(250, Currency::USD),
        )
        .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));
    }

    #[test]
    fn test_payment_method_codes() {
        assert_eq!(PaymentMethod::CashOnDelivery.code(), "cod");
        assert_eq!(PaymentMethod::CashOnDelivery.title(), "Cash on Delivery");
    }
}
