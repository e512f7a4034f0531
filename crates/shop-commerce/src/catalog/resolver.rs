//! Variation resolution.
//!
//! Pure, synchronous matching of the user's attribute selection against a
//! loaded variation catalog. Callers recompute on every selection or
//! catalog change; no asynchronous work belongs here.

use crate::catalog::{Selection, Variation};

/// Find the variation matching the current selection, if any.
///
/// A variation matches when, for every (attribute, value) pair in the
/// selection, it records that attribute with an equal option value under
/// case-insensitive comparison. Axes absent from the selection are not
/// constraints.
///
/// The first match in catalog order wins. When the backend returns two
/// variations with an identical choice set the duplicate is logged and
/// the earlier one is kept. An empty selection resolves to nothing unless
/// the catalog is exactly one variation with no attribute choices.
///
/// `None` means unresolved: dependent UI falls back to the parent
/// product's price and image, and add-to-cart stays blocked.
pub fn resolve<'a>(variations: &'a [Variation], selection: &Selection) -> Option<&'a Variation> {
    if selection.is_empty() {
        return match variations {
            [only] if only.attributes.is_empty() => Some(only),
            _ => None,
        };
    }

    let mut matches = variations.iter().filter(|v| matches_selection(v, selection));
    let first = matches.next()?;

    if let Some(duplicate) = matches.find(|v| v.choice_key() == first.choice_key()) {
        tracing::warn!(
            kept = first.id.value(),
            duplicate = duplicate.id.value(),
            "variations share one attribute combination; keeping catalog order"
        );
    }

    Some(first)
}

fn matches_selection(variation: &Variation, selection: &Selection) -> bool {
    selection.iter().all(|(name, value)| {
        variation
            .attributes
            .iter()
            .any(|choice| choice.is_for(name) && choice.has_option(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Vec<Variation> {
        vec![
            Variation::new(1, 10, Money::from_minor(1000, Currency::USD))
                .with_choice("Color", "Red")
                .with_choice("Size", "M"),
            Variation::new(2, 10, Money::from_minor(1200, Currency::USD))
                .with_choice("Color", "Blue")
                .with_choice("Size", "M"),
        ]
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let variations = catalog();
        let mut sel = Selection::new();
        sel.select("Color", "Blue");
        sel.select("Size", "M");
        let a = resolve(&variations, &sel).map(|v| v.id);
        let b = resolve(&variations, &sel).map(|v| v.id);
        assert_eq!(a, b);
        assert_eq!(a.unwrap().value(), 2);
    }

    #[test]
    fn test_case_insensitive_incremental_selection() {
        let variations = catalog();
        let mut sel = Selection::new();

        sel.select("Color", "red");
        let matched = resolve(&variations, &sel).unwrap();
        assert_eq!(matched.id.value(), 1);

        sel.select("Size", "m");
        let matched = resolve(&variations, &sel).unwrap();
        assert_eq!(matched.id.value(), 1);
        assert_eq!(matched.price.minor, 1000);
    }

    #[test]
    fn test_partial_selection_takes_first_match() {
        let variations = catalog();
        let mut sel = Selection::new();
        sel.select("Size", "M");
        // Both variations are size M; catalog order decides.
        assert_eq!(resolve(&variations, &sel).unwrap().id.value(), 1);
    }

    #[test]
    fn test_no_match_is_unresolved() {
        let variations = catalog();
        let mut sel = Selection::new();
        sel.select("Color", "Green");
        assert!(resolve(&variations, &sel).is_none());
    }

    #[test]
    fn test_empty_selection_resolves_nothing() {
        let variations = catalog();
        assert!(resolve(&variations, &Selection::new()).is_none());
    }

    #[test]
    fn test_empty_selection_single_choiceless_variation() {
        let variations = vec![Variation::new(7, 10, Money::from_minor(500, Currency::USD))];
        let matched = resolve(&variations, &Selection::new()).unwrap();
        assert_eq!(matched.id.value(), 7);
    }

    #[test]
    fn test_empty_catalog() {
        let mut sel = Selection::new();
        sel.select("Color", "Red");
        assert!(resolve(&[], &sel).is_none());
    }

    #[test]
    fn test_duplicate_combination_keeps_first() {
        let variations = vec![
            Variation::new(1, 10, Money::from_minor(1000, Currency::USD))
                .with_choice("Color", "Red"),
            Variation::new(2, 10, Money::from_minor(900, Currency::USD))
                .with_choice("color", "RED"),
        ];
        let mut sel = Selection::new();
        sel.select("Color", "Red");
        assert_eq!(resolve(&variations, &sel).unwrap().id.value(), 1);
    }
}
