//! Error types for the text replacement library.
//!
//! Construction-time failures (bad patterns, contract violations, unreadable
//! configuration) are reported through [`TextGuardError`]. Validator
//! rejections are not errors of the library and have their own violation
//! types in [`crate::validation`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations.
pub type TextGuardResult<T> = Result<T, TextGuardError>;

/// Error type for everything that can go wrong while building patterns,
/// replacers and validators.
#[derive(Debug, Error)]
pub enum TextGuardError {
    /// Pattern construction or regex compilation error
    #[error("Pattern error for '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// Configuration file could not be interpreted
    #[error("Configuration error in '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TextGuardError {
    pub(crate) fn invalid_input(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<regex::Error> for TextGuardError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}
