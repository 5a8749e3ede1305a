//! Serialization of the aggregated color rules back into CSS text.

use crate::extract::{ColorRule, ColorTable};

pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

impl ToCss for ColorRule {
    /// `<selectors> { <property>: <value> }`, selectors joined by `,`.
    fn to_css(&self, buf: &mut String) {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                buf.push(',');
            }
            buf.push_str(selector);
        }
        buf.push_str(" { ");
        buf.push_str(self.property);
        buf.push_str(": ");
        buf.push_str(&self.value);
        buf.push_str(" }");
    }
}

impl ToCss for ColorTable {
    /// One rule per entry, each followed by a blank line. Empty tables
    /// produce no output.
    fn to_css(&self, buf: &mut String) {
        for rule in self {
            rule.to_css(buf);
            buf.push_str("\n\n");
        }
    }
}
