//! Checkout: address, totals, order placement types.

mod address;
mod order;
mod totals;

pub use address::Address;
pub use order::{OrderItem, OrderRequest, PaymentMethod, PlacedOrder};
pub use totals::{compute_totals, OrderTotals};
