//! # Wikistem
//!
//! A streaming text-normalization pipeline for compressed MediaWiki dumps.
//!
//! ## Features
//!
//! - Memory-bounded streaming extraction of articles from bzip2-compressed
//!   XML dumps
//! - Best-effort wiki-markup stripping down to prose
//! - Flexible text analysis pipeline (tokenizer + filter chain)
//! - Multi-stage morphological stemming
//!
//! The produced artifact is a lazy sequence of [`dump::Article`] records
//! and, per article, a lazy sequence of stems suitable for consumption by an
//! external indexer.

pub mod analysis;
pub mod dump;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
