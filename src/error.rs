//! Error types for colorsift operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting colors from a stylesheet.
#[derive(Error, Debug)]
pub enum Error {
    #[error("You need to specify the color to look for")]
    MissingColor,

    #[error("Invalid color token: {0}")]
    InvalidColor(String),

    #[error("No input file specified.")]
    MissingInput,

    #[error("No file named {} found in the directory!", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
