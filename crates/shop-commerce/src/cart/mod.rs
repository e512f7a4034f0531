//! Shopping cart.

mod cart;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
