//! Text analysis module for Wikistem.
//!
//! This module provides the core text analysis functionality: tokenization,
//! token filtering, and the composed stemming pipeline that turns cleansed
//! prose into index-ready stems.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
