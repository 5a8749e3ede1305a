//! The read → extract → format → write pipeline behind the command line.

use std::fs;
use std::path::{Path, PathBuf};

use crate::color::{ColorToken, MatchPolicy};
use crate::error::{Error, Result};
use crate::extract::{ColorTable, extract_str};
use crate::format::{FormatOptions, format_css};
use crate::to_css::ToCss;

/// One run of the tool, as requested on the command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub color: Option<String>,
    pub input: Option<PathBuf>,
    /// Print to stdout when absent.
    pub output: Option<PathBuf>,
    pub policy: MatchPolicy,
    /// `None` emits the assembled CSS without normalization.
    pub format: Option<FormatOptions>,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            color: None,
            input: None,
            output: None,
            policy: MatchPolicy::default(),
            format: Some(FormatOptions::default()),
        }
    }
}

impl Invocation {
    pub fn new(color: impl Into<String>, input: impl Into<PathBuf>) -> Self {
        Self {
            color: Some(color.into()),
            input: Some(input.into()),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing matched; nothing was written.
    NoMatches,
    /// CSS for standard output.
    Generated(String),
    Written { path: PathBuf, rules: usize },
}

/// Execute an invocation.
///
/// Arguments are checked before any I/O: the color first, then the input
/// path. A missing or unreadable input file is reported by name.
pub fn run(invocation: &Invocation) -> Result<Outcome> {
    let color = invocation
        .color
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or(Error::MissingColor)?;
    let color = ColorToken::parse(color)?;

    let input = invocation
        .input
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(Error::MissingInput)?;

    let css = read_input(input)?;
    let table = extract_str(&css, &color, invocation.policy);
    log::info!(
        "{}: {} color rule(s) for {}",
        input.display(),
        table.len(),
        color
    );

    let Some(output_css) = render(&table, invocation.format.as_ref()) else {
        return Ok(Outcome::NoMatches);
    };

    match &invocation.output {
        Some(path) => {
            fs::write(path, &output_css).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {}", path.display());
            Ok(Outcome::Written {
                path: path.clone(),
                rules: table.len(),
            })
        }
        None => Ok(Outcome::Generated(output_css)),
    }
}

/// Serialize the table and normalize it, or `None` when it is empty.
pub fn render(table: &ColorTable, format: Option<&FormatOptions>) -> Option<String> {
    if table.is_empty() {
        return None;
    }
    let raw = table.to_css_string();
    Some(match format {
        Some(options) => format_css(&raw, options),
        None => raw,
    })
}

/// Read the stylesheet, decoding invalid UTF-8 lossily.
fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
