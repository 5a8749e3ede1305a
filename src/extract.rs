//! Declaration scanning and selector aggregation.
//!
//! A single pass over the stylesheet collects, for every normalized color
//! property, the selectors whose declarations carry the target color.

use indexmap::IndexMap;

use crate::color::{ColorToken, MatchPolicy};
use crate::properties::{is_shorthand, normalize_property};
use crate::stylesheet::Stylesheet;

/// Selectors sharing one normalized property and resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRule {
    pub property: &'static str,
    /// Owning selector text of each matching declaration, in encounter
    /// order. Repeats are kept.
    pub selectors: Vec<String>,
    pub value: String,
}

/// Aggregated color rules keyed by normalized property.
///
/// Iteration follows the order in which each property was first matched.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    rules: IndexMap<&'static str, ColorRule>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one matching declaration.
    ///
    /// The selector is appended to the property's list and the resolved
    /// value replaces any earlier one.
    pub fn record(&mut self, property: &'static str, selector: String, value: String) {
        let rule = self.rules.entry(property).or_insert_with(|| ColorRule {
            property,
            selectors: Vec::new(),
            value: String::new(),
        });
        rule.selectors.push(selector);
        rule.value = value;
    }

    pub fn get(&self, property: &str) -> Option<&ColorRule> {
        self.rules.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorRule> {
        self.rules.values()
    }

    /// Number of output rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColorTable {
    type Item = &'a ColorRule;
    type IntoIter = indexmap::map::Values<'a, &'static str, ColorRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.values()
    }
}

/// Scan every declaration of `sheet` once and aggregate the color matches.
pub fn extract(sheet: &Stylesheet, color: &ColorToken, policy: MatchPolicy) -> ColorTable {
    let mut table = ColorTable::new();

    for (rule, decl) in sheet.declarations() {
        let Some(key) = normalize_property(&decl.property) else {
            continue;
        };
        if !policy.matches(&decl.value, color) {
            continue;
        }

        let selector = rule.selector_text();
        log::debug!(
            "line {}: {} {{ {}: {} }} -> {}",
            decl.line,
            selector,
            decl.property,
            decl.value,
            key
        );

        let value = policy.resolve(&decl.value, color, is_shorthand(&decl.property));
        table.record(key, selector, value);
    }

    table
}

/// Parse `css` and extract the rules carrying `color`.
pub fn extract_str(css: &str, color: &ColorToken, policy: MatchPolicy) -> ColorTable {
    extract(&Stylesheet::parse(css), color, policy)
}
