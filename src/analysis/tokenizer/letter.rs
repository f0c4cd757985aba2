//! Letter-run tokenizer implementation.

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// One letter followed by any run of letters or digits.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}[\p{L}\p{Nd}]*").unwrap());

/// A tokenizer that extracts maximal letter-led alphanumeric runs.
///
/// A token starts with a letter and continues through letters and digits.
/// Punctuation and underscores break tokens, and digit-only runs are never
/// emitted.
///
/// # Examples
///
/// ```
/// use wikistem::analysis::tokenizer::{LetterTokenizer, Tokenizer};
///
/// let tokenizer = LetterTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("MP3 files, 100 songs").unwrap().collect();
///
/// assert_eq!(tokens[0].text, "MP3");
/// assert_eq!(tokens[1].text, "files");
/// assert_eq!(tokens[2].text, "songs");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LetterTokenizer;

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Self {
        LetterTokenizer
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(LetterTokenStream {
            text: text.to_owned(),
            at: 0,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}

/// Pull-based stream over an owned copy of the input.
///
/// Each `next` finds one match; nothing is buffered ahead of the consumer.
struct LetterTokenStream {
    text: String,
    at: usize,
    position: usize,
}

impl Iterator for LetterTokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mat = TOKEN_PATTERN.find(&self.text[self.at..])?;
        let start = self.at + mat.start();
        let end = self.at + mat.end();
        let token = Token::with_offsets(mat.as_str(), self.position, start, end);
        self.at = end;
        self.position += 1;
        Some(token)
    }
}
