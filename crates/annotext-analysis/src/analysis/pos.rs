//! Coarse part-of-speech tagging.
//!
//! Closed-class word tables plus suffix heuristics, in the same
//! pattern-table style as the NER module. Tags follow the Universal
//! Dependencies coarse tag set. Precision on open-class words is heuristic;
//! closed-class words (which dominate running text) are exact.

use std::collections::HashSet;
use std::sync::LazyLock;

static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
        "some", "any", "no", "both", "all", "half", "such", "what", "which", "whose",
    ]
    .into_iter()
    .collect()
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
        "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who",
        "whom", "something", "anything", "nothing", "everything",
    ]
    .into_iter()
    .collect()
});

static ADPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
        "over", "under", "near", "across", "behind", "beyond", "within", "without",
    ]
    .into_iter()
    .collect()
});

static COORDINATING: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["and", "or", "but", "nor", "yet"].into_iter().collect());

static SUBORDINATING: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "if", "because", "although", "while", "whereas", "unless", "since", "until", "though",
        "whether",
    ]
    .into_iter()
    .collect()
});

static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can",
        "could",
    ]
    .into_iter()
    .collect()
});

static COMMON_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "very", "too", "also", "just", "never", "always", "often", "quite", "rather", "not",
        "now", "then", "here", "there", "well", "so", "again", "soon",
    ]
    .into_iter()
    .collect()
});

/// Tag one word token (callers handle punctuation and whitespace, which get
/// "PUNCT" and "SPACE" respectively).
pub fn coarse_tag(surface: &str) -> &'static str {
    let lower = surface.to_lowercase();
    let word = lower.as_str();

    if is_numeric(surface) {
        return "NUM";
    }
    if DETERMINERS.contains(word) {
        return "DET";
    }
    if PRONOUNS.contains(word) {
        return "PRON";
    }
    if AUXILIARIES.contains(word) {
        return "AUX";
    }
    if COORDINATING.contains(word) {
        return "CCONJ";
    }
    if SUBORDINATING.contains(word) {
        return "SCONJ";
    }
    if ADPOSITIONS.contains(word) {
        return "ADP";
    }
    if COMMON_ADVERBS.contains(word) {
        return "ADV";
    }
    if word.len() > 3 && word.ends_with("ly") {
        return "ADV";
    }
    if word.len() > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
        return "VERB";
    }
    if word.len() > 4
        && ["ous", "ful", "ive", "able", "ible", "ical"]
            .iter()
            .any(|s| word.ends_with(s))
    {
        return "ADJ";
    }
    if surface.chars().next().is_some_and(char::is_uppercase) {
        return "PROPN";
    }
    "NOUN"
}

fn is_numeric(surface: &str) -> bool {
    surface.chars().any(|c| c.is_ascii_digit())
        && surface
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class_words() {
        assert_eq!(coarse_tag("the"), "DET");
        assert_eq!(coarse_tag("The"), "DET");
        assert_eq!(coarse_tag("on"), "ADP");
        assert_eq!(coarse_tag("and"), "CCONJ");
        assert_eq!(coarse_tag("because"), "SCONJ");
        assert_eq!(coarse_tag("is"), "AUX");
        assert_eq!(coarse_tag("they"), "PRON");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(coarse_tag("42"), "NUM");
        assert_eq!(coarse_tag("3.14"), "NUM");
        assert_eq!(coarse_tag("1,000"), "NUM");
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(coarse_tag("quickly"), "ADV");
        assert_eq!(coarse_tag("running"), "VERB");
        assert_eq!(coarse_tag("jumped"), "VERB");
        assert_eq!(coarse_tag("famous"), "ADJ");
    }

    #[test]
    fn test_capitalized_defaults_to_proper_noun() {
        assert_eq!(coarse_tag("France"), "PROPN");
    }

    #[test]
    fn test_default_is_noun() {
        assert_eq!(coarse_tag("cat"), "NOUN");
        assert_eq!(coarse_tag("mat"), "NOUN");
    }
}
