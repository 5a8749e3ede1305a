//! Color-bearing CSS properties.
//!
//! One static table answers both questions the scanner asks about a
//! property: can it carry a color, and which longhand does its color
//! belong to. Shorthands like `border` collapse onto their `-color`
//! longhand; every other entry maps to itself.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Allow-listed property name paired with its aggregation key.
const COLOR_PROPERTIES: &[(&str, &str)] = &[
    ("color", "color"),
    ("background", "background"),
    ("background-color", "background-color"),
    ("background-image", "background-image"),
    ("border", "border-color"),
    ("border-top", "border-top-color"),
    ("border-right", "border-right-color"),
    ("border-bottom", "border-bottom-color"),
    ("border-left", "border-left-color"),
    ("border-color", "border-color"),
    ("border-top-color", "border-top-color"),
    ("border-right-color", "border-right-color"),
    ("border-bottom-color", "border-bottom-color"),
    ("border-left-color", "border-left-color"),
    ("outline", "outline-color"),
    ("outline-color", "outline-color"),
    ("text-shadow", "text-shadow"),
    ("box-shadow", "box-shadow"),
];

static NORMALIZED: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COLOR_PROPERTIES.iter().copied().collect());

/// Check if a property can carry a color.
///
/// Property names are expected in lowercase, as produced by the
/// stylesheet reader.
pub fn is_color_property(name: &str) -> bool {
    NORMALIZED.contains_key(name)
}

/// The property a color match is aggregated under, or `None` if the
/// property is not color-bearing.
pub fn normalize_property(name: &str) -> Option<&'static str> {
    NORMALIZED.get(name).copied()
}

/// Whether the property is a shorthand whose color lands on another key.
pub fn is_shorthand(name: &str) -> bool {
    normalize_property(name).is_some_and(|key| key != name)
}

/// All allow-listed property names, in table order.
pub fn color_properties() -> impl Iterator<Item = &'static str> {
    COLOR_PROPERTIES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_allow_list() {
        assert!(is_color_property("color"));
        assert!(is_color_property("background-image"));
        assert!(is_color_property("box-shadow"));
        assert!(!is_color_property("margin"));
        assert!(!is_color_property("fill"));
        assert!(!is_color_property("border-width"));
        assert!(!is_color_property(""));
    }

    #[test]
    fn test_shorthands_normalize_to_longhand() {
        assert_eq!(normalize_property("border"), Some("border-color"));
        assert_eq!(normalize_property("border-top"), Some("border-top-color"));
        assert_eq!(normalize_property("border-right"), Some("border-right-color"));
        assert_eq!(
            normalize_property("border-bottom"),
            Some("border-bottom-color")
        );
        assert_eq!(normalize_property("border-left"), Some("border-left-color"));
        assert_eq!(normalize_property("outline"), Some("outline-color"));
    }

    #[test]
    fn test_longhands_map_to_themselves() {
        for name in color_properties().filter(|name| !is_shorthand(name)) {
            assert_eq!(normalize_property(name), Some(name));
        }
        assert_eq!(normalize_property("background"), Some("background"));
        assert_eq!(normalize_property("padding"), None);
    }

    #[test]
    fn test_shorthand_count() {
        assert_eq!(color_properties().filter(|name| is_shorthand(name)).count(), 6);
        assert_eq!(color_properties().count(), 18);
    }

    proptest! {
        #[test]
        fn prop_normalized_key_is_color_property(idx in 0usize..18) {
            let name = color_properties().nth(idx).unwrap();
            let key = normalize_property(name).unwrap();
            prop_assert!(is_color_property(key));
            prop_assert_eq!(normalize_property(key), Some(key));
        }

        #[test]
        fn prop_unknown_properties_rejected(name in "[a-z-]{1,24}") {
            let listed = color_properties().any(|p| p == name);
            prop_assert_eq!(is_color_property(&name), listed);
        }
    }
}
