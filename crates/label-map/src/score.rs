//! Token-sort similarity scoring.
//!
//! Both strings are reduced to lowercase alphanumeric tokens, the tokens are
//! sorted and re-joined, and the Indel-normalized similarity of the two
//! sorted strings is reported on a 0–100 scale.

use rapidfuzz::fuzz;

/// Sorted-token form of `raw` used for comparison.
///
/// Non-alphanumeric characters act as separators.
pub fn token_sort_key(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    let mut tokens: Vec<_> = spaced.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Token-sort similarity of `left` and `right`, rounded to an integer.
///
/// Identical sorted forms score 100; otherwise an empty side scores 0.
pub fn token_sort_ratio(left: &str, right: &str) -> u8 {
    score_keys(&token_sort_key(left), &token_sort_key(right))
}

pub(crate) fn score_keys(left: &str, right: &str) -> u8 {
    if left == right {
        return 100;
    }
    if left.is_empty() || right.is_empty() {
        return 0;
    }
    let ratio = fuzz::ratio(left.chars(), right.chars());
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
