//! Whole-sentence negation detection.

use unicode_segmentation::UnicodeSegmentation;

/// Tokens that trigger the negation override. Matching is exact and case-sensitive.
pub const NEGATION_TOKENS: [&str; 3] = ["not", "never", "no"];

/// True if any word-boundary token of `text` is a negation token.
///
/// The scope is the whole sentence: a negation anywhere counts, whatever it
/// modifies.
pub fn contains_negation(text: &str) -> bool {
    text.split_word_bounds()
        .any(|token| NEGATION_TOKENS.contains(&token))
}
