//! Token-set similarity for fuzzy matching.
//!
//! The score is the Sørensen–Dice coefficient over deduplicated token sets:
//! `2·|A∩B| / (|A| + |B|)`. Symmetric and deterministic by construction,
//! `1.0` for identical texts, word order and repeated words do not affect
//! the score. Tokenization follows the same rule as title tokenization.

use std::collections::BTreeSet;

use crate::normalizer::tokenize;

/// Normalized similarity in `[0, 1]` between two texts.
///
/// Two empty texts are identical (`1.0`); one-sided emptiness scores `0.0`.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<String> = tokenize(a).into_iter().collect();
    let set_b: BTreeSet<String> = tokenize(b).into_iter().collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let shared = set_a.intersection(&set_b).count();
    2.0 * shared as f64 / (set_a.len() + set_b.len()) as f64
}
