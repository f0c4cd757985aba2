//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer and a filter chain into the complete
//! text-processing pipeline:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → … → Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use wikistem::analysis::analyzer::Analyzer;
//! use wikistem::analysis::token::TokenStream;
//! use wikistem::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so analyzers can be shared across threads; the
/// provided implementations are stateless and referentially transparent.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of processed tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
