//! Style normalization for generated CSS.
//!
//! Reprints a stylesheet in one canonical layout: one declaration per
//! line, a blank line between rules and a single trailing newline. Values
//! are left alone apart from whitespace and hex color case, so feeding the
//! output back into the extractor finds the same rules.

use crate::stylesheet::{StyleRule, Stylesheet};

/// Letter case applied to hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorCase {
    #[default]
    Lower,
    Upper,
    Preserve,
}

/// Layout options for [`format_css`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indentation before each declaration.
    pub indent: String,
    /// Separator placed between the selectors of a rule.
    pub selector_delimiter: String,
    pub color_case: ColorCase,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            selector_delimiter: ",".to_string(),
            color_case: ColorCase::Lower,
        }
    }
}

impl FormatOptions {
    /// Indent declarations with `width` spaces.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    pub fn with_color_case(mut self, case: ColorCase) -> Self {
        self.color_case = case;
        self
    }
}

/// Reformat a stylesheet.
///
/// Only style rules survive; at-rule wrappers are flattened away.
pub fn format_css(css: &str, options: &FormatOptions) -> String {
    let sheet = Stylesheet::parse(css);
    let mut out = String::with_capacity(css.len());

    for (i, rule) in sheet.rules().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_rule(&mut out, rule, options);
    }

    out
}

fn write_rule(buf: &mut String, rule: &StyleRule, options: &FormatOptions) {
    buf.push_str(&rule.selectors.join(&options.selector_delimiter));
    buf.push_str(" {\n");
    for decl in &rule.declarations {
        buf.push_str(&options.indent);
        buf.push_str(&decl.property);
        buf.push_str(": ");
        buf.push_str(&apply_color_case(&decl.value, options.color_case));
        if decl.important {
            buf.push_str(" !important");
        }
        buf.push_str(";\n");
    }
    buf.push_str("}\n");
}

/// Change the case of `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` colors.
///
/// Strings and `url()` arguments are copied verbatim.
fn apply_color_case(value: &str, case: ColorCase) -> String {
    if case == ColorCase::Preserve {
        return value.to_string();
    }

    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'"' | b'\'') => {
                let end = skip_string(bytes, i, quote);
                out.push_str(&value[i..end]);
                i = end;
            }
            b'u' | b'U' if bytes.len() - i >= 4 && bytes[i..i + 4].eq_ignore_ascii_case(b"url(") => {
                let end = value[i..].find(')').map_or(bytes.len(), |p| i + p + 1);
                out.push_str(&value[i..end]);
                i = end;
            }
            b'#' => {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
                    end += 1;
                }
                let terminated = end == bytes.len() || !is_name_byte(bytes[end]);
                let hex = &value[start..end];
                out.push('#');
                if terminated && matches!(hex.len(), 3 | 4 | 6 | 8) {
                    match case {
                        ColorCase::Upper => out.push_str(&hex.to_ascii_uppercase()),
                        _ => out.push_str(&hex.to_ascii_lowercase()),
                    }
                } else {
                    out.push_str(hex);
                }
                i = end;
            }
            _ => {
                let ch = value[i..].chars().next().unwrap_or_default();
                out.push(ch);
                i += ch.len_utf8().max(1);
            }
        }
    }

    out
}

/// Index just past the string starting at `start`.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80
}
