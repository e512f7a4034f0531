//! Storefront domain types and logic.
//!
//! This crate holds the storefront's client-side commerce core:
//!
//! - **Catalog**: products, attributes, variations, and the selection /
//!   resolution machinery for variable products
//! - **Cart**: line items with quantity-based de-duplication and exact
//!   minor-unit totals
//! - **Checkout**: address validation, flat-rate totals, order assembly
//!
//! The commerce backend remains the source of truth for inventory, tax,
//! and payment; everything here reshapes or aggregates what it returns.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! // Resolve the user's selection against the loaded variations
//! let mut selection = Selection::new();
//! selection.select("Color", "Red");
//! selection.select("Size", "M");
//! let variation = resolve(&variations, &selection);
//!
//! // Put the resolved variation in the cart
//! let line = CartLine::from_resolution(&product, variation)?;
//! cart.add(line)?;
//!
//! // Totals at checkout
//! let totals = compute_totals(&cart, flat_rate)?;
//! println!("{}", totals.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        resolve, Attribute, AttributeChoice, Category, Product, ProductKind, ProductStatus,
        Selection, StockStatus, Variation,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};

    // Checkout
    pub use crate::checkout::{
        compute_totals, Address, OrderItem, OrderRequest, OrderTotals, PaymentMethod, PlacedOrder,
    };
}
