//! Newtype IDs for type-safe identifiers.
//!
//! The commerce backend assigns numeric identifiers to everything it owns.
//! Wrapping them in newtypes prevents accidentally mixing up different ID
//! kinds, e.g. passing a ProductId where a VariationId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs over the backend's numeric IDs.
macro_rules! define_id {
    ($name:ident) => {
        /// A backend-assigned identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend ID.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw numeric value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(VariationId);
define_id!(ItemId);
define_id!(OrderId);
define_id!(CustomerId);

// A cart line is keyed by the purchasable unit: the variation when the
// product is variable, the product itself otherwise.
impl From<ProductId> for ItemId {
    fn from(id: ProductId) -> Self {
        Self(id.0)
    }
}

impl From<VariationId> for ItemId {
    fn from(id: VariationId) -> Self {
        Self(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_id_from_i64() {
        let id: VariationId = 77.into();
        assert_eq!(id.value(), 77);
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new(1001);
        assert_eq!(format!("{}", id), "1001");
    }

    #[test]
    fn test_item_id_from_either_kind() {
        let from_product: ItemId = ProductId::new(5).into();
        let from_variation: ItemId = VariationId::new(5).into();
        assert_eq!(from_product, from_variation);
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = ProductId::new(9);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");
        let back: ProductId = serde_json::from_str("9").unwrap();
        assert_eq!(back, id);
    }
}
