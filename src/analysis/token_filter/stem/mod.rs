//! Stemming filter implementations.
//!
//! Stemming reduces words to their morphological root so that different
//! inflections of the same word index to the same term.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Reduce a word to its stem.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual stemmer modules
pub mod porter;

// Re-export for convenient access
pub use porter::PorterStemmer;

/// A filter that replaces each token's text with its stem.
///
/// # Examples
///
/// ```
/// use wikistem::analysis::token::Token;
/// use wikistem::analysis::token_filter::{Filter, StemFilter};
///
/// let filter = StemFilter::new(); // Porter stemmer by default
/// let tokens = vec![Token::new("running", 0)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "run");
/// ```
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    /// Create a new stem filter using the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(Box::new(tokens.map(move |token| {
            let stem = stemmer.stem(&token.text);
            token.with_text(stem)
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
