//! N-gram counting over filtered lemma streams.

use std::collections::HashMap;

use annotext::models::NgramCount;

use super::ranking::rank_by_frequency;

/// Count every contiguous window of `n` lemmas (sliding by one).
///
/// Windows are order-sensitive: `(a, b)` and `(b, a)` are distinct. A
/// sequence shorter than `n` yields no windows.
pub fn count_ngrams(lemmas: &[String], n: usize) -> HashMap<Vec<String>, usize> {
    let mut counts = HashMap::new();
    if n == 0 || lemmas.len() < n {
        return counts;
    }
    for window in lemmas.windows(n) {
        *counts.entry(window.to_vec()).or_insert(0) += 1;
    }
    counts
}

/// Count and rank n-grams by `(-frequency, lexicographic window)`.
pub fn ranked_ngrams(lemmas: &[String], n: usize) -> Vec<NgramCount> {
    rank_by_frequency(count_ngrams(lemmas, n))
        .into_iter()
        .map(|(ngram, frequency)| NgramCount { ngram, frequency })
        .collect()
}
