//! Deterministic frequency ranking.

use std::collections::HashMap;

/// Order counted items by descending frequency, breaking ties by ascending
/// key order (byte/codepoint comparison for strings).
///
/// The comparator is a total order, so the result is identical regardless of
/// hash-map iteration order; this ordering is externally observable and must
/// not change.
pub fn rank_by_frequency<K: Ord>(counts: HashMap<K, usize>) -> Vec<(K, usize)> {
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
