//! Product attribute axes.

use serde::{Deserialize, Serialize};

/// A named axis of choice on a product (e.g. "Color") with its ordered
/// option values. Only attributes flagged `variation` participate in
/// variation matching; the rest are descriptive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    /// Backend attribute ID (0 for product-local attributes).
    pub id: i64,
    /// Attribute name (e.g., "Color", "Storage").
    pub name: String,
    /// Ordered option values (e.g., ["Red", "Blue"]).
    pub options: Vec<String>,
    /// Whether this attribute is used for variations.
    pub variation: bool,
    /// Whether the attribute is shown on the product page.
    pub visible: bool,
    /// Sort order position.
    pub position: i32,
}

impl Attribute {
    /// Create a descriptive attribute.
    pub fn new(id: i64, name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            options,
            variation: false,
            visible: true,
            position: 0,
        }
    }

    /// Create an attribute that participates in variation matching.
    pub fn for_variation(id: i64, name: impl Into<String>, options: Vec<String>) -> Self {
        let mut attr = Self::new(id, name, options);
        attr.variation = true;
        attr
    }

    /// Check whether this attribute is named `name`, case-insensitively.
    pub fn is_named(&self, name: &str) -> bool {
        super::fold(&self.name) == super::fold(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_creation() {
        let attr = Attribute::new(1, "Material", vec!["Cotton".to_string()]);
        assert!(!attr.variation);
        assert!(attr.visible);
    }

    #[test]
    fn test_variation_attribute() {
        let attr = Attribute::for_variation(2, "Color", vec!["Red".into(), "Blue".into()]);
        assert!(attr.variation);
        assert_eq!(attr.options.len(), 2);
    }

    #[test]
    fn test_is_named_ignores_case() {
        let attr = Attribute::new(1, "Color", vec![]);
        assert!(attr.is_named("color"));
        assert!(attr.is_named("COLOR"));
        assert!(!attr.is_named("Size"));
    }
}
