//! Word frequency extraction from raw text.
//!
//! The layout engine sizes words by frequency; this module provides the
//! counting step for callers that start from a block of text rather than
//! a precomputed frequency list.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Tokens are word characters, at least two long, with embedded
/// apostrophes allowed ("don't").
fn token_pattern() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"\w[\w']+").unwrap())
}

/// Counts unigram frequencies in `text`.
///
/// Tokens are lowercased, a trailing "'s" is stripped, and purely numeric
/// tokens are dropped. The result is ordered by descending count; ties
/// keep first-appearance order, so output is fully deterministic.
///
/// # Examples
///
/// ```
/// use wordtint::text::word_frequencies;
///
/// let counts = word_frequencies("Simple is better. Simple wins.");
/// assert_eq!(counts[0], ("simple".to_string(), 2));
/// ```
#[must_use]
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for token in token_pattern().find_iter(text) {
        let lowered = token.as_str().to_lowercase();
        let word = lowered.strip_suffix("'s").unwrap_or(&lowered);
        if word.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }

    let mut ordered: Vec<(String, usize)> = counts.into_iter().collect();
    // Stable sort keeps first-appearance order for equal counts
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered
}
