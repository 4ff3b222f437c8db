//! Error types for finform.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FinformError>;

#[derive(Error, Debug)]
pub enum FinformError {
    #[error("malformed rule on line {line}: expected MATCH SEARCH REPLACEMENT, got {content:?}")]
    MalformedRule { line: usize, content: String },

    #[error("invalid pattern {pattern:?} on line {line}: {source}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("lemma {lemma:?} has no usable paradigm code")]
    EmptyParadigmSet { lemma: String },

    #[error("malformed word list on line {line}: {message}")]
    MalformedWordList { line: usize, message: String },

    #[error("invalid option: {message}")]
    InvalidOption { message: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FinformError {
    pub fn invalid_option(message: impl Into<String>) -> Self {
        FinformError::InvalidOption { message: message.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FinformError::Io { path: path.into(), source }
    }
}
