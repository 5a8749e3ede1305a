//! Target color token and the policy for matching declaration values.

use std::fmt;

use crate::error::{Error, Result};

/// The color being searched for, without its leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken(String);

impl ColorToken {
    /// Validate a user-supplied color token.
    ///
    /// A leading `#` is accepted and stripped. What remains must be
    /// non-empty ASCII alphanumerics so that `#<token>` is always a
    /// well-formed CSS value.
    pub fn parse(raw: &str) -> Result<Self> {
        let token = raw.trim();
        let token = token.strip_prefix('#').unwrap_or(token);
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::InvalidColor(raw.to_string()));
        }
        Ok(Self(token.to_string()))
    }

    /// The bare token, e.g. `ff0000`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token as a CSS hash value, e.g. `#ff0000`.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a declaration value is compared against the target color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The value must be exactly `#<color>` (ASCII case-insensitive).
    #[default]
    Exact,
    /// The value only needs to contain the token somewhere.
    ///
    /// Legacy behavior: a short token such as `00` also matches
    /// unrelated colors like `#ff0000`.
    Substring,
}

impl MatchPolicy {
    /// Check whether a declaration value carries the target color.
    ///
    /// `value` is the declaration value without `!important`.
    pub fn matches(self, value: &str, color: &ColorToken) -> bool {
        let value = value.trim();
        match self {
            MatchPolicy::Exact => value
                .strip_prefix('#')
                .is_some_and(|hex| hex.eq_ignore_ascii_case(color.as_str())),
            MatchPolicy::Substring => value
                .to_ascii_lowercase()
                .contains(&color.as_str().to_ascii_lowercase()),
        }
    }

    /// The value written to the output rule for a matching declaration.
    ///
    /// Shorthand colors are always rewritten to the bare hash; in substring
    /// mode longhands keep the declaration's own value.
    pub fn resolve(self, value: &str, color: &ColorToken, shorthand: bool) -> String {
        match self {
            MatchPolicy::Substring if !shorthand => value.trim().to_string(),
            _ => color.to_hash(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> ColorToken {
        ColorToken::parse(s).unwrap()
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(token("ff0000").as_str(), "ff0000");
        assert_eq!(token("#abc").as_str(), "abc");
        assert_eq!(token(" fff ").to_hash(), "#fff");
        assert_eq!(token("abc").to_string(), "#abc");
    }

    #[test]
    fn test_parse_token_rejects_garbage() {
        assert!(matches!(ColorToken::parse(""), Err(Error::InvalidColor(_))));
        assert!(matches!(ColorToken::parse("#"), Err(Error::InvalidColor(_))));
        assert!(matches!(
            ColorToken::parse("ff 00"),
            Err(Error::InvalidColor(_))
        ));
        assert!(matches!(
            ColorToken::parse("f}f"),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn test_exact_match() {
        let red = token("ff0000");
        assert!(MatchPolicy::Exact.matches("#ff0000", &red));
        assert!(MatchPolicy::Exact.matches("  #FF0000 ", &red));
        assert!(!MatchPolicy::Exact.matches("ff0000", &red));
        assert!(!MatchPolicy::Exact.matches("1px solid #ff0000", &red));
        assert!(!MatchPolicy::Exact.matches("#ff00001", &red));
    }

    #[test]
    fn test_exact_has_no_false_positives() {
        let short = token("00");
        assert!(!MatchPolicy::Exact.matches("#ff0000", &short));
        assert!(MatchPolicy::Substring.matches("#ff0000", &short));
    }

    #[test]
    fn test_substring_match() {
        let red = token("ff0000");
        assert!(MatchPolicy::Substring.matches("1px solid #FF0000", &red));
        assert!(MatchPolicy::Substring.matches("0 0 2px #ff0000aa", &red));
        assert!(!MatchPolicy::Substring.matches("red", &red));
    }

    #[test]
    fn test_resolve() {
        let red = token("ff0000");
        assert_eq!(
            MatchPolicy::Exact.resolve("#FF0000", &red, false),
            "#ff0000"
        );
        assert_eq!(
            MatchPolicy::Substring.resolve(" 0 0 2px #ff0000 ", &red, false),
            "0 0 2px #ff0000"
        );
        assert_eq!(
            MatchPolicy::Substring.resolve("1px solid #ff0000", &red, true),
            "#ff0000"
        );
    }
}
