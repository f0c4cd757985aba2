//! Wiki markup cleanser.
//!
//! Strips wiki-specific syntax down to prose through a fixed sequence of
//! regex rewrites. This is a best-effort syntactic stripper, not a markup
//! compiler: nested templates are not balanced (an inner `}}` closes the
//! match early, leaving trailing fragments), which is an accepted
//! approximation for indexing purposes.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Table blocks `{| ... |}`, first-to-matching-close.
static TABLES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{\|.*?\|\}").unwrap());

/// Template invocations `{{ ... }}`, non-greedy.
static TEMPLATES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{\{.*?\}\}").unwrap());

/// Reference blocks `<ref ...>...</ref>`, attributes ignored, tag name
/// case-insensitive.
static REFS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<ref[^>]*>.*?</ref>").unwrap());

/// Internal links `[[target|label]]` / `[[target]]`.
static LINKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

/// Leftover table punctuation: row delimiters, double pipes, single pipes.
static TABLE_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\|-|\|\||\|").unwrap());

/// Section headings `== Heading ==` (single-line).
static HEADINGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"={2,}.*?={2,}").unwrap());

/// Runs of two or more whitespace characters.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Cleanser turning raw wiki markup into plain prose.
///
/// Pure and stateless; `cleanse` is a total function over any string.
///
/// # Examples
///
/// ```
/// use wikistem::dump::WikiTextCleanser;
///
/// let cleanser = WikiTextCleanser::new();
/// let prose = cleanser.cleanse("The '''dog''' is a [[mammal|furry animal]].");
/// assert_eq!(prose, "The '''dog''' is a furry animal.");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WikiTextCleanser;

impl WikiTextCleanser {
    /// Create a new cleanser.
    pub fn new() -> Self {
        WikiTextCleanser
    }

    /// Strip wiki markup from the given text.
    ///
    /// The rewrites run in a fixed order, each applied once over the whole
    /// running result of the previous step; matches may span line breaks.
    pub fn cleanse(&self, text: &str) -> String {
        let text = TABLES.replace_all(text, "");
        let text = TEMPLATES.replace_all(&text, "");
        let text = REFS.replace_all(&text, "");
        // Keep a link's display text: the part after the last pipe, or the
        // whole target when there is none.
        let text = LINKS.replace_all(&text, |caps: &Captures| {
            let target = &caps[1];
            target.rsplit('|').next().unwrap_or(target).to_string()
        });
        let text = TABLE_PUNCT.replace_all(&text, " ");
        let text = HEADINGS.replace_all(&text, "");
        let text = WHITESPACE.replace_all(&text, " ");
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleanse(text: &str) -> String {
        WikiTextCleanser::new().cleanse(text)
    }

    #[test]
    fn test_removes_tables() {
        let raw = "before {| class=\"wikitable\"\n|-\n| cell\n|} after";
        assert_eq!(cleanse(raw), "before after");
    }

    #[test]
    fn test_removes_templates() {
        assert_eq!(cleanse("a {{cite web|url=x}} b"), "a b");
    }

    #[test]
    fn test_nested_templates_close_early() {
        // The inner }} ends the match; the trailing fragment survives and
        // its braces are left in place. Accepted approximation.
        assert_eq!(cleanse("{{outer {{inner}} tail}}"), "tail}}");
    }

    #[test]
    fn test_removes_references() {
        assert_eq!(cleanse("fact<ref name=\"x\">source</ref> here"), "fact here");
        assert_eq!(cleanse("fact<REF>source</ref> here"), "fact here");
    }

    #[test]
    fn test_references_span_lines() {
        assert_eq!(cleanse("a<ref>line one\nline two</ref> b"), "a b");
    }

    #[test]
    fn test_link_display_text() {
        assert_eq!(cleanse("[[mammal]]"), "mammal");
        assert_eq!(cleanse("[[mammal|furry animal]]"), "furry animal");
        // Multiple pipes: the part after the last one wins.
        assert_eq!(cleanse("[[File:Dog.jpg|thumb|a good dog]]"), "a good dog");
    }

    #[test]
    fn test_collapses_table_punctuation() {
        assert_eq!(cleanse("a |- b || c | d"), "a b c d");
    }

    #[test]
    fn test_removes_headings() {
        assert_eq!(cleanse("== History ==\nSome text"), "Some text");
        assert_eq!(cleanse("=== Deep ===\nMore"), "More");
    }

    #[test]
    fn test_whitespace_collapse_and_trim() {
        assert_eq!(cleanse("  a \t\n  b  "), "a b");
    }

    #[test]
    fn test_step_order_tables_before_pipes() {
        // The table block goes away whole before pipe collapse would have
        // broken its delimiters up.
        assert_eq!(cleanse("x {|\n| a || b\n|} y"), "x y");
    }

    #[test]
    fn test_idempotent_on_clean_prose() {
        let inputs = [
            "The dog is a furry animal.",
            "plain   text with  runs",
            "",
        ];
        for input in inputs {
            let once = cleanse(input);
            assert_eq!(cleanse(&once), once);
        }
    }

    #[test]
    fn test_total_on_empty_and_whitespace() {
        assert_eq!(cleanse(""), "");
        assert_eq!(cleanse("   \n\t "), "");
    }
}
