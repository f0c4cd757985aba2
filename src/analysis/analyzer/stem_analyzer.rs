//! Stem analyzer: the full normalization pipeline for article prose.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    Filter, LengthFilter, LowercaseFilter, StemFilter, StopFilter, StopwordOracle,
};
use crate::analysis::tokenizer::{LetterTokenizer, Tokenizer};
use crate::error::Result;

/// The standard analyzer for cleansed article prose.
///
/// Chains letter-run tokenization, lowercasing, a 2-character minimum
/// length, stopword removal, and Porter stemming, producing stems lazily in
/// left-to-right order with no deduplication.
///
/// # Examples
///
/// ```
/// use wikistem::analysis::analyzer::{Analyzer, StemAnalyzer};
///
/// let analyzer = StemAnalyzer::new();
/// let stems: Vec<String> = analyzer.stems("The dog is a furry animal.").unwrap().collect();
///
/// assert_eq!(stems, vec!["dog", "furri", "animal"]);
/// ```
#[derive(Clone)]
pub struct StemAnalyzer {
    tokenizer: LetterTokenizer,
    filters: Vec<Arc<dyn Filter>>,
}

impl StemAnalyzer {
    /// Create a stem analyzer with the default English stopword set.
    pub fn new() -> Self {
        Self::build(StopFilter::new())
    }

    /// Create a stem analyzer consulting an external stopword oracle.
    pub fn with_stopwords(oracle: Arc<dyn StopwordOracle>) -> Self {
        Self::build(StopFilter::with_oracle(oracle))
    }

    fn build(stop: StopFilter) -> Self {
        StemAnalyzer {
            tokenizer: LetterTokenizer::new(),
            filters: vec![
                Arc::new(LowercaseFilter::new()),
                Arc::new(LengthFilter::new()),
                Arc::new(stop),
                Arc::new(StemFilter::new()),
            ],
        }
    }

    /// Analyze text and yield just the stem strings.
    pub fn stems(&self, text: &str) -> Result<Box<dyn Iterator<Item = String>>> {
        Ok(Box::new(self.analyze(text)?.map(|token| token.text)))
    }
}

impl Default for StemAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StemAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
