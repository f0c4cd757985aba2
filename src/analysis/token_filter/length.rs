//! Length filter implementation.
//!
//! Removes tokens shorter than a minimum number of characters. Single-letter
//! tokens rarely carry index-worthy meaning, so the default minimum is 2.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens below a minimum character count.
///
/// # Examples
///
/// ```
/// use wikistem::analysis::token::Token;
/// use wikistem::analysis::token_filter::{Filter, LengthFilter};
///
/// let filter = LengthFilter::new();
/// let tokens = vec![Token::new("a", 0), Token::new("is", 1), Token::new("dog", 2)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result[0].text, "is");
/// ```
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    /// Create a new length filter with the default minimum of 2 characters.
    pub fn new() -> Self {
        LengthFilter { min_length: 2 }
    }

    /// Create a new length filter with a custom minimum.
    pub fn with_min_length(min_length: usize) -> Self {
        LengthFilter { min_length }
    }

    /// Get the minimum token length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        Ok(Box::new(tokens.filter(move |token| {
            token.text.chars().count() >= min_length
        })))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
