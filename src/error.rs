//! Error types for the Wikistem library.
//!
//! All errors are represented by the [`WikistemError`] enum. Dump reading is
//! the only fallible surface: a malformed container, a corrupt compressed
//! stream, or an unparseable timestamp aborts the whole run. The analysis
//! functions (cleanser, tokenizer, stemmer) are total over any string input
//! and never fail.
//!
//! # Examples
//!
//! ```
//! use wikistem::error::{Result, WikistemError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WikistemError::format("bad timestamp"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// The main error type for Wikistem operations.
#[derive(Error, Debug)]
pub enum WikistemError {
    /// I/O errors (unreadable file, truncated or corrupt compressed stream)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed container markup
    #[error("Parse error: {0}")]
    Parse(String),

    /// A field value that does not match its required text format
    #[error("Format error: {0}")]
    Format(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WikistemError.
pub type Result<T> = std::result::Result<T, WikistemError>;

impl WikistemError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        WikistemError::Parse(msg.into())
    }

    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        WikistemError::Format(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WikistemError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WikistemError::Other(msg.into())
    }
}

impl From<quick_xml::Error> for WikistemError {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(e) => match Arc::try_unwrap(e) {
                Ok(inner) => WikistemError::Io(inner),
                Err(shared) => WikistemError::Io(io::Error::new(shared.kind(), shared.to_string())),
            },
            other => WikistemError::Parse(other.to_string()),
        }
    }
}
