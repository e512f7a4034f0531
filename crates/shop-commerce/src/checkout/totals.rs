//! Order total calculation.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The amounts an order is placed with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat-rate shipping charge.
    pub shipping: Money,
    /// `subtotal + shipping`.
    pub total: Money,
}

/// Derive order totals from the cart's current contents.
///
/// Shipping is a fixed, externally configured flat amount; this system
/// does no rate shopping. Pure and independently testable — no cart
/// persistence or network state involved.
pub fn compute_totals(cart: &Cart, shipping_flat_rate: Money) -> Result<OrderTotals, CommerceError> {
    let subtotal = cart.subtotal()?;
    let total = subtotal.try_add(&shipping_flat_rate).ok_or_else(|| {
        if subtotal.currency != shipping_flat_rate.currency {
            CommerceError::CurrencyMismatch {
                expected: subtotal.currency.code().to_string(),
                got: shipping_flat_rate.currency.code().to_string(),
            }
        } else {
            CommerceError::Overflow
        }
    })?;

    Ok(OrderTotals {
        subtotal,
        shipping: shipping_flat_rate,
        total,
    })
}
