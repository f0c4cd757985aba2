//! Streaming extraction of articles from compressed MediaWiki dumps.
//!
//! [`DumpReader`] pulls `<page>` records one at a time out of a
//! bzip2-compressed XML dump, [`WikiTextCleanser`] strips wiki markup from
//! each page body, and the result is a lazy sequence of [`Article`] values.

pub mod article;
pub mod reader;
pub mod wikitext;

// Re-export commonly used types
pub use article::Article;
pub use reader::DumpReader;
pub use wikitext::WikiTextCleanser;
