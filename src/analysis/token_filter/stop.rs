//! Stop filter implementation.
//!
//! Removes high-frequency words that typically don't contribute to search
//! relevance. Membership is delegated to a [`StopwordOracle`], so the word
//! list itself is swappable; a `HashSet`-backed implementation with a default
//! English list is provided.
//!
//! # Examples
//!
//! ```
//! use wikistem::analysis::token::Token;
//! use wikistem::analysis::token_filter::{Filter, StopFilter};
//!
//! let filter = StopFilter::new(); // default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Membership oracle consulted once per candidate token.
pub trait StopwordOracle: Send + Sync {
    /// Return true when the given lowercased term is a stopword.
    fn is_stopword(&self, term: &str) -> bool;
}

/// A `HashSet`-backed stopword oracle.
#[derive(Clone, Debug)]
pub struct SetStopwords {
    words: HashSet<String>,
}

impl SetStopwords {
    /// Create an oracle over the default English stop words.
    pub fn english() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create an oracle from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SetStopwords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordOracle for SetStopwords {
    fn is_stopword(&self, term: &str) -> bool {
        self.words.contains(term)
    }
}

/// A filter that removes tokens whose text the oracle reports as a stopword.
#[derive(Clone)]
pub struct StopFilter {
    oracle: Arc<dyn StopwordOracle>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            oracle: Arc::new(SetStopwords::english()),
        }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            oracle: Arc::new(SetStopwords::from_words(words)),
        }
    }

    /// Create a stop filter backed by an external oracle.
    pub fn with_oracle(oracle: Arc<dyn StopwordOracle>) -> Self {
        StopFilter { oracle }
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let oracle = Arc::clone(&self.oracle);
        Ok(Box::new(
            tokens.filter(move |token| !oracle.is_stopword(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
