//! Annotation models shared between the analysis backends and the aggregator.
//!
//! `AnnotatedToken` and `EntitySpan` are produced by an analysis provider and
//! are immutable once emitted. The remaining types form the aggregated
//! `AnnotationResult` returned to callers; serialized field names are part of
//! the wire contract with the indexing subsystem and must not change.

use serde::{Deserialize, Serialize};

/// A single token from the analysis provider, ordered by appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text as it appears in the input.
    pub text: String,
    /// Base (dictionary) form used for counting.
    pub lemma: String,
    /// Coarse part-of-speech tag (e.g. "NOUN", "VERB", "PUNCT").
    pub pos_tag: String,
    /// Character offset of the token start in the original text.
    pub char_offset: usize,
    pub is_punctuation: bool,
    pub is_whitespace: bool,
    pub is_stopword: bool,
}

impl AnnotatedToken {
    /// True for tokens that count toward `total_length` and POS output.
    pub fn is_word(&self) -> bool {
        !self.is_punctuation && !self.is_whitespace
    }

    /// True for tokens that feed frequency counting and n-gram extraction.
    pub fn is_content(&self) -> bool {
        self.is_word() && !self.is_stopword
    }
}

/// A labeled entity span with half-open character offsets into the source
/// text (`start_offset < end_offset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub surface_text: String,
    pub label: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Entity projection as reported in `AnnotationResult::named_entities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub entity: String,
    #[serde(rename = "type")]
    pub label: String,
    /// `[start_offset, end_offset]` character range.
    pub position: (usize, usize),
}

impl From<&EntitySpan> for NamedEntity {
    fn from(span: &EntitySpan) -> Self {
        Self {
            entity: span.surface_text.clone(),
            label: span.label.clone(),
            position: (span.start_offset, span.end_offset),
        }
    }
}

/// One occurrence of a ranked lemma.
///
/// A lemma with frequency F produces exactly F records, one per occurrence
/// position, all carrying the same frequency value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOccurrence {
    pub token: String,
    pub lemma: String,
    pub frequency: usize,
    pub position: usize,
}

/// A counted n-gram (contiguous lemma window, order-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramCount {
    pub ngram: Vec<String>,
    pub frequency: usize,
}

/// Part-of-speech projection of a non-punctuation, non-whitespace token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosEntry {
    /// Original surface text, not the lemma.
    pub token: String,
    pub pos_tag: String,
    pub position: usize,
}

/// Aggregated annotation output for one input text.
///
/// Constructed fresh per request, handed to the caller immediately, owns no
/// external resources. Ordering of `tokens`, `bigrams`, and `trigrams` is
/// descending frequency with ascending lexicographic tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationResult {
    /// Count of non-punctuation, non-whitespace tokens (stopwords included).
    pub total_length: usize,
    pub tokens: Vec<TokenOccurrence>,
    pub bigrams: Vec<NgramCount>,
    pub trigrams: Vec<NgramCount>,
    pub named_entities: Vec<NamedEntity>,
    pub parts_of_speech: Vec<PosEntry>,
}
