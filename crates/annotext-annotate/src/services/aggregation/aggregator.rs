//! The annotation aggregator.
//!
//! Composes filtering, frequency ranking, n-gram extraction, and the
//! entity/POS projections into one `AnnotationResult`. Pure and synchronous:
//! one provider call in, one result out, no shared state between calls.

use std::collections::HashMap;

use annotext::error::AnnotateError;
use annotext::models::{
    AnnotatedToken, AnnotationResult, NamedEntity, PosEntry, TokenOccurrence,
};
use annotext::provider::{AnalysisProvider, AnalyzedText};

use super::ngram::ranked_ngrams;
use super::ranking::rank_by_frequency;

/// Annotates query or document text through an analysis provider.
pub struct AnnotationAggregator {
    provider: Box<dyn AnalysisProvider>,
}

impl AnnotationAggregator {
    pub fn new(provider: Box<dyn AnalysisProvider>) -> Self {
        Self { provider }
    }

    /// Analyze `text` and aggregate the result.
    ///
    /// Empty or whitespace-only input is rejected before the provider is
    /// invoked; provider failures propagate unchanged.
    pub fn annotate(&self, text: &str) -> Result<AnnotationResult, AnnotateError> {
        if text.trim().is_empty() {
            return Err(AnnotateError::EmptyInput);
        }
        tracing::debug!(
            provider = self.provider.provider_id(),
            chars = text.chars().count(),
            "annotating text"
        );
        let analyzed = self.provider.analyze(text)?;
        Ok(aggregate(&analyzed))
    }
}

/// Lemmas of tokens that feed frequency counting: punctuation, whitespace,
/// and stopwords excluded, original order preserved.
pub fn filter_content_lemmas(tokens: &[AnnotatedToken]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.is_content())
        .map(|t| t.lemma.clone())
        .collect()
}

/// Derive the reported structure from a provider analysis.
pub fn aggregate(analyzed: &AnalyzedText) -> AnnotationResult {
    let tokens = &analyzed.tokens;
    let filtered = filter_content_lemmas(tokens);

    let mut lemma_counts: HashMap<&str, usize> = HashMap::new();
    for lemma in &filtered {
        *lemma_counts.entry(lemma.as_str()).or_insert(0) += 1;
    }

    // Each ranked lemma expands to one occurrence per matching token,
    // scanning the original stream so positions follow document order.
    let mut occurrences = Vec::with_capacity(filtered.len());
    for (lemma, frequency) in rank_by_frequency(lemma_counts) {
        for token in tokens.iter().filter(|t| t.is_content() && t.lemma == lemma) {
            occurrences.push(TokenOccurrence {
                token: lemma.to_string(),
                lemma: lemma.to_string(),
                frequency,
                position: token.char_offset,
            });
        }
    }

    AnnotationResult {
        total_length: tokens.iter().filter(|t| t.is_word()).count(),
        tokens: occurrences,
        bigrams: ranked_ngrams(&filtered, 2),
        trigrams: ranked_ngrams(&filtered, 3),
        named_entities: analyzed.entities.iter().map(NamedEntity::from).collect(),
        parts_of_speech: tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| PosEntry {
                token: t.text.clone(),
                pos_tag: t.pos_tag.clone(),
                position: t.char_offset,
            })
            .collect(),
    }
}
