//! CSS stylesheet reading.
//!
//! Built on `cssparser`: rules are kept as raw selector text plus a list of
//! declarations with their value text. No selector matching or cascade is
//! performed. Rules inside conditional group at-rules (`@media`,
//! `@supports`, ...) are flattened into the top-level rule list.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser, Token,
};

/// At-rules whose block holds ordinary style rules.
const GROUPING_AT_RULES: &[&str] = &["media", "supports", "document", "layer", "container"];

/// A parsed CSS stylesheet.
#[derive(Debug, Default, Clone)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

/// A style rule with its selector list and declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Comma-separated selectors, each trimmed with comments removed.
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name (custom properties keep their case).
    pub property: String,
    /// Value text without `!important`, whitespace collapsed.
    pub value: String,
    pub important: bool,
    /// 1-based source line of the property name.
    pub line: u32,
}

impl StyleRule {
    /// The selector list as written, e.g. `.a, .b`.
    pub fn selector_text(&self) -> String {
        self.selectors.join(", ")
    }
}

impl Stylesheet {
    /// Parse a CSS stylesheet from a string.
    ///
    /// Parsing is lenient: invalid rules and declarations are skipped.
    pub fn parse(css: &str) -> Self {
        let css = css.strip_prefix('\u{feff}').unwrap_or(css);
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut rules = Vec::new();
        parse_rule_list(&mut parser, &mut rules);
        Self { rules }
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Every declaration in document order, paired with its owning rule.
    pub fn declarations(&self) -> impl Iterator<Item = (&StyleRule, &Declaration)> {
        self.rules
            .iter()
            .flat_map(|rule| rule.declarations.iter().map(move |decl| (rule, decl)))
    }

    /// Check if the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn parse_rule_list(input: &mut Parser<'_, '_>, rules: &mut Vec<StyleRule>) {
    let mut rule_parser = TopLevelRuleParser { rules };
    for result in StyleSheetParser::new(input, &mut rule_parser) {
        // Lenient parsing: skip the rule and carry on
        if let Err((error, slice)) = result {
            log::debug!(
                "skipping rule at line {}: {:?} ({:?})",
                error.location.line + 1,
                slice.trim(),
                error.kind
            );
        }
    }
}

/// Parser for stylesheet-level rules.
struct TopLevelRuleParser<'a> {
    rules: &'a mut Vec<StyleRule>,
}

impl<'i> AtRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if GROUPING_AT_RULES
            .iter()
            .any(|rule| name.eq_ignore_ascii_case(rule))
        {
            // The condition itself is irrelevant, only the nested rules matter
            while input.next().is_ok() {}
            Ok(())
        } else {
            Err(input.new_custom_error(()))
        }
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        parse_rule_list(input, self.rules);
        Ok(())
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = Vec<String>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        input.parse_comma_separated(parse_selector)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut declarations = Vec::new();
        let mut decl_parser = DeclarationListParser {
            declarations: &mut declarations,
        };

        for result in RuleBodyParser::new(input, &mut decl_parser) {
            if let Err((error, slice)) = result {
                log::debug!(
                    "skipping declaration at line {}: {:?}",
                    error.location.line + 1,
                    slice.trim()
                );
            }
        }

        self.rules.push(StyleRule {
            selectors: prelude,
            declarations,
        });

        Ok(())
    }
}

/// Collect one selector of a comma-separated list as cleaned source text.
fn parse_selector<'i>(input: &mut Parser<'i, '_>) -> Result<String, ParseError<'i, ()>> {
    let start = input.position();
    while input.next().is_ok() {}
    let text = clean_text(input.slice_from(start));
    if text.is_empty() {
        return Err(input.new_custom_error(()));
    }
    Ok(text)
}

struct DeclarationListParser<'a> {
    declarations: &'a mut Vec<Declaration>,
}

impl<'i> AtRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();
}

impl<'i> DeclarationParser<'i> for DeclarationListParser<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let value_start = input.position();
        let mut value_end = value_start;
        let mut important = false;

        loop {
            if input.try_parse(cssparser::parse_important).is_ok() {
                important = true;
                break;
            }
            let opens_block = match input.next() {
                Ok(token) => matches!(
                    token,
                    Token::Function(_)
                        | Token::ParenthesisBlock
                        | Token::SquareBracketBlock
                        | Token::CurlyBracketBlock
                ),
                Err(_) => break,
            };
            if opens_block {
                input.parse_nested_block(|nested| {
                    while nested.next().is_ok() {}
                    Ok::<(), ParseError<'i, ()>>(())
                })?;
            }
            value_end = input.position();
        }
        input.expect_exhausted()?;

        let value = clean_text(input.slice(value_start..value_end));
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }

        let property = if name.starts_with("--") {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        };

        self.declarations.push(Declaration {
            property,
            value,
            important,
            line: start.source_location().line + 1,
        });
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationListParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Strip comments and collapse whitespace runs outside of strings.
pub(crate) fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if c == '/' && chars.as_str().starts_with('*') {
            chars.next();
            let mut prev = '\0';
            for c in chars.by_ref() {
                if prev == '*' && c == '/' {
                    break;
                }
                prev = c;
            }
            pending_space = true;
            continue;
        }

        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);

        match c {
            '"' | '\'' => quote = Some(c),
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            _ => {}
        }
    }

    out
}
