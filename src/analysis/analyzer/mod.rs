//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod stem_analyzer;

pub use analyzer::Analyzer;
pub use stem_analyzer::StemAnalyzer;
