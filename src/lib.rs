//! # colorsift
//!
//! Extract the declarations that use one color from a CSS stylesheet and
//! regroup them into a minimal stylesheet holding only those color rules.
//!
//! ## Quick Start
//!
//! ```
//! use colorsift::{ColorToken, MatchPolicy, ToCss, extract_str};
//!
//! let css = ".a, .b { color: #ff0000; } .c { color: #00ff00; }";
//! let color = ColorToken::parse("ff0000").unwrap();
//! let table = extract_str(css, &color, MatchPolicy::Exact);
//!
//! assert_eq!(table.to_css_string(), ".a, .b { color: #ff0000 }\n\n");
//! ```
//!
//! ## Shorthands
//!
//! `border`, `border-top`, `border-right`, `border-bottom`, `border-left`
//! and `outline` are collected under their `-color` longhand:
//!
//! ```
//! use colorsift::{ColorToken, MatchPolicy, extract_str};
//!
//! let css = ".x { border: #abc } .y { border-top-color: #abc }";
//! let color = ColorToken::parse("abc").unwrap();
//! let table = extract_str(css, &color, MatchPolicy::Exact);
//!
//! let keys: Vec<_> = table.iter().map(|rule| rule.property).collect();
//! assert_eq!(keys, ["border-color", "border-top-color"]);
//! ```

pub mod color;
pub mod driver;
pub mod error;
pub mod extract;
pub mod format;
pub mod properties;
pub mod stylesheet;
pub mod to_css;

pub use color::{ColorToken, MatchPolicy};
pub use driver::{Invocation, Outcome, render, run};
pub use error::{Error, Result};
pub use extract::{ColorRule, ColorTable, extract, extract_str};
pub use format::{ColorCase, FormatOptions, format_css};
pub use properties::{is_color_property, normalize_property};
pub use stylesheet::{Declaration, StyleRule, Stylesheet};
pub use to_css::ToCss;
