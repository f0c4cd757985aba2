//! Porter-style stemmer implementation.
//!
//! Reduces English words to their morphological roots through seven ordered
//! reduction stages: plural suffixes, past-tense/progressive suffixes,
//! terminal-y normalization, two tiers of derivational suffix rules, and a
//! residual `e`/`l` cleanup applied twice.
//!
//! Suffix rules are gated by the *measure* of the residual stem: the number
//! of consonant-run to vowel-run transitions (the start of the word counts
//! as consonant context) minus one. A suffix is only stripped when the stem
//! left behind is morphologically complex enough for the reduction to be
//! safe.
//!
//! # Examples
//!
//! ```
//! use wikistem::analysis::token_filter::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("running"), "run");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Tier-1 derivational suffix rules.
///
/// Matched in declared order; the first suffix match whose residual stem
/// passes the measure gate wins. Never longest-match-first.
const TIER1_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("biliti", "ble"),
];

/// Tier-2 derivational suffix rules, same matching semantics as tier 1.
const TIER2_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Porter-style stemming algorithm.
///
/// Pure and deterministic: lowercases on entry, returns words shorter than
/// 3 characters unchanged, and applies the reduction stages strictly in
/// order, each over the output of the previous one.
#[derive(Clone, Debug, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().count() < 3 {
            return word.to_string();
        }

        let word = word.to_lowercase();

        let word = strip_plural(&word);
        let word = strip_past_tense(&word);
        let word = normalize_terminal_y(&word);
        let word = apply_rules(&word, TIER1_RULES);
        let word = apply_rules(&word, TIER2_RULES);
        // The residual cleanup runs twice: stripping a trailing `e` in the
        // first pass can expose a double-l ending the second pass removes.
        let word = strip_residual(&word);
        strip_residual(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Check if a character is a vowel. Exactly `a`, `e`, `i`, `o`, `u`;
/// `y` always counts as a consonant.
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Measure of a word: vowel-run starts (scanning left to right, the start
/// of the word acting as consonant context) minus one.
fn measure(word: &str) -> i32 {
    let mut count = 0;
    let mut prev_vowel = false;

    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    count - 1
}

/// Check if the word contains at least one vowel.
fn contains_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Check if the word ends with a doubled consonant.
fn ends_double_consonant(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(last), Some(prev)) => last == prev && !is_vowel(last),
        _ => false,
    }
}

/// Check if the word ends consonant-vowel-consonant, where the final
/// consonant is not `w`, `x`, or `y`.
fn is_cvc(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next(), rev.next()) {
        (Some(last), Some(mid), Some(prior)) => {
            !is_vowel(last)
                && is_vowel(mid)
                && !is_vowel(prior)
                && !matches!(last, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

/// Drop the final character.
fn drop_last(word: &str) -> String {
    let mut out = word.to_string();
    out.pop();
    out
}

/// Stage 1: plural suffix reduction.
///
/// `sses` and `ies` both lose their final two characters, a bare `ss` is
/// left untouched, and otherwise a trailing `s` is dropped. First match
/// wins, in that priority order.
fn strip_plural(word: &str) -> String {
    if word.ends_with("sses") || word.ends_with("ies") {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("ss") {
        return word.to_string();
    }
    if word.ends_with('s') {
        return drop_last(word);
    }
    word.to_string()
}

/// Stage 2: past-tense and progressive suffix reduction.
fn strip_past_tense(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("eed") {
        if measure(stem) > 0 {
            return drop_last(word);
        }
        return word.to_string();
    }

    let stem = if word.ends_with("ed") && contains_vowel(&word[..word.len() - 2]) {
        &word[..word.len() - 2]
    } else if word.ends_with("ing") && contains_vowel(&word[..word.len() - 3]) {
        &word[..word.len() - 3]
    } else {
        return word.to_string();
    };

    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    if ends_double_consonant(stem) && !stem.ends_with(['l', 's', 'z']) {
        return drop_last(stem);
    }
    if measure(stem) == 1 && is_cvc(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

/// Stage 3: a trailing `y` preceded by a vowel anywhere becomes `i`.
fn normalize_terminal_y(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        if contains_vowel(stem) {
            return format!("{stem}i");
        }
    }
    word.to_string()
}

/// Stages 4 and 5: scan a rule table in declared order; the first suffix
/// match whose residual stem has measure > 0 fires, and at most one rule
/// fires per table.
fn apply_rules(word: &str, rules: &[(&str, &str)]) -> String {
    for (suffix, replacement) in rules {
        if let Some(stem) = word.strip_suffix(suffix) {
            if measure(stem) > 0 {
                return format!("{stem}{replacement}");
            }
        }
    }
    word.to_string()
}

/// Stages 6 and 7: residual suffix cleanup.
///
/// A trailing `e` is dropped when the remaining stem's measure is above 1,
/// or equals 1 with the stem not CVC-shaped. Failing that, a trailing `l`
/// on a doubled consonant is dropped when the stem-minus-one's measure is
/// above 1.
fn strip_residual(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem);
        if m > 1 || (m == 1 && !is_cvc(stem)) {
            return stem.to_string();
        }
    }
    if word.ends_with('l') && ends_double_consonant(word) && measure(&word[..word.len() - 1]) > 1 {
        return drop_last(word);
    }
    word.to_string()
}
