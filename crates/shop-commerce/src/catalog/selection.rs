//! Attribute selection state for a product page visit.

use crate::catalog::Attribute;
use serde::{Deserialize, Serialize};

/// The user's current choice across attribute axes, built incrementally
/// and never required to be complete. Created fresh per product page and
/// discarded on navigation.
///
/// Axis identity is case-insensitive and last-write-wins; the casing of
/// the latest write is kept for display. No validation against the
/// catalog happens here — impossible combinations simply fail to resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    choices: Vec<(String, String)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose an option for an attribute, overwriting any prior choice
    /// for that axis.
    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let folded = super::fold(&name);
        match self
            .choices
            .iter_mut()
            .find(|(n, _)| super::fold(n) == folded)
        {
            Some(entry) => *entry = (name, value),
            None => self.choices.push((name, value)),
        }
    }

    /// The chosen value for an attribute, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        let folded = super::fold(name);
        self.choices
            .iter()
            .find(|(n, _)| super::fold(n) == folded)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn clear(&mut self) {
        self.choices.clear();
    }

    /// Iterate over (attribute name, chosen value) pairs in the order the
    /// axes were first selected.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Check whether every variation attribute in `attributes` has a
    /// chosen value.
    pub fn covers<'a>(&self, attributes: impl IntoIterator<Item = &'a Attribute>) -> bool {
        attributes
            .into_iter()
            .filter(|a| a.variation)
            .all(|a| self.get(&a.name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_get() {
        let mut sel = Selection::new();
        sel.select("Color", "Red");
        assert_eq!(sel.get("Color"), Some("Red"));
        assert_eq!(sel.get("Size"), None);
    }

    #[test]
    fn test_last_write_wins_per_axis() {
        let mut sel = Selection::new();
        sel.select("Color", "Red");
        sel.select("color", "Blue");
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.get("COLOR"), Some("Blue"));
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let mut sel = Selection::new();
        sel.select("Storage Size", "256GB");
        assert_eq!(sel.get("storage size"), Some("256GB"));
    }

    #[test]
    fn test_iteration_keeps_axis_order() {
        let mut sel = Selection::new();
        sel.select("Color", "Red");
        sel.select("Size", "M");
        sel.select("Color", "Blue");
        let names: Vec<_> = sel.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Color", "Size"]);
    }

    #[test]
    fn test_covers() {
        let attrs = vec![
            Attribute::for_variation(1, "Color", vec![]),
            Attribute::for_variation(2, "Size", vec![]),
            Attribute::new(3, "Material", vec![]),
        ];
        let mut sel = Selection::new();
        sel.select("color", "Red");
        assert!(!sel.covers(&attrs));
        sel.select("SIZE", "M");
        // Descriptive "Material" is not a constraint.
        assert!(sel.covers(&attrs));
    }

    #[test]
    fn test_clear() {
        let mut sel = Selection::new();
        sel.select("Color", "Red");
        sel.clear();
        assert!(sel.is_empty());
    }
}
