//! The built-in `AnalysisProvider` backend.
//!
//! Composes segmentation, language detection, stemming-based lemmatization,
//! stopword flagging, coarse POS tagging, and pattern NER into the
//! `AnalyzedText` shape the aggregator consumes.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};

use annotext::config::AnalysisSettings;
use annotext::error::ProviderError;
use annotext::models::AnnotatedToken;
use annotext::provider::{AnalysisProvider, AnalyzedText};

use super::language::detect_language;
use super::ner::extract_entity_spans;
use super::pos::coarse_tag;
use super::tokenize::{segments, sentences, CharIndex};

/// Rule-based analysis backend.
///
/// Stateless apart from its settings; safe for concurrent use.
pub struct LexicalProvider {
    settings: AnalysisSettings,
}

impl LexicalProvider {
    pub fn new() -> Self {
        Self {
            settings: AnalysisSettings::default(),
        }
    }

    pub fn with_settings(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    fn stemmer_for(&self, language: &str) -> Option<Stemmer> {
        let algorithm = match language {
            "en" => Algorithm::English,
            "es" => Algorithm::Spanish,
            "fr" => Algorithm::French,
            "de" => Algorithm::German,
            _ => return None,
        };
        Some(Stemmer::create(algorithm))
    }

    fn stopwords_for(&self, language: &str) -> HashSet<String> {
        let lang = if self.settings.supports_language(language) {
            language
        } else {
            self.settings.stopword_fallback.as_str()
        };
        let list = match lang {
            "es" => stop_words::get(stop_words::LANGUAGE::Spanish),
            "fr" => stop_words::get(stop_words::LANGUAGE::French),
            "de" => stop_words::get(stop_words::LANGUAGE::German),
            _ => stop_words::get(stop_words::LANGUAGE::English),
        };
        list.into_iter().collect()
    }
}

impl Default for LexicalProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProvider for LexicalProvider {
    fn provider_id(&self) -> &str {
        "lexical"
    }

    fn analyze(&self, text: &str) -> Result<AnalyzedText, ProviderError> {
        let language = detect_language(text, &self.settings);
        let stemmer = self.stemmer_for(&language);
        let stopwords = self.stopwords_for(&language);

        let index = CharIndex::new(text);
        let tokens = segments(text, &index)
            .into_iter()
            .map(|seg| {
                let is_whitespace = seg.is_whitespace();
                let is_punctuation = seg.is_punctuation();
                let is_word = !is_whitespace && !is_punctuation;

                let lower = seg.text.to_lowercase();
                let lemma = if is_word {
                    match &stemmer {
                        Some(stemmer) => stemmer.stem(&lower).into_owned(),
                        None => lower.clone(),
                    }
                } else {
                    seg.text.clone()
                };
                let pos_tag = if is_whitespace {
                    "SPACE"
                } else if is_punctuation {
                    "PUNCT"
                } else {
                    coarse_tag(&seg.text)
                };

                AnnotatedToken {
                    is_stopword: is_word && stopwords.contains(&lower),
                    text: seg.text,
                    lemma,
                    pos_tag: pos_tag.to_string(),
                    char_offset: seg.char_offset,
                    is_punctuation,
                    is_whitespace,
                }
            })
            .collect();

        Ok(AnalyzedText {
            tokens,
            entities: extract_entity_spans(text, &index),
            sentences: sentences(text),
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_carry_flags_and_offsets() {
        let provider = LexicalProvider::new();
        let analyzed = provider.analyze("The cat sat.").unwrap();

        let the = &analyzed.tokens[0];
        assert_eq!(the.text, "The");
        assert!(the.is_stopword);
        assert!(!the.is_punctuation);
        assert_eq!(the.char_offset, 0);

        let cat = analyzed.tokens.iter().find(|t| t.text == "cat").unwrap();
        assert_eq!(cat.char_offset, 4);
        assert!(!cat.is_stopword);
        assert_eq!(cat.lemma, "cat");

        let period = analyzed.tokens.iter().find(|t| t.text == ".").unwrap();
        assert!(period.is_punctuation);
        assert_eq!(period.pos_tag, "PUNCT");
    }

    #[test]
    fn test_surface_forms_share_a_lemma() {
        let provider = LexicalProvider::new();
        let analyzed = provider
            .analyze("Running fast, he keeps running while others run slowly every day.")
            .unwrap();
        let running_upper = analyzed.tokens.iter().find(|t| t.text == "Running").unwrap();
        let running_lower = analyzed.tokens.iter().find(|t| t.text == "running").unwrap();
        assert_eq!(running_upper.lemma, running_lower.lemma);
    }

    #[test]
    fn test_unknown_language_skips_stemming() {
        let provider = LexicalProvider::new();
        let analyzed = provider.analyze("zzq").unwrap();
        assert_eq!(analyzed.language, "unknown");
        assert_eq!(analyzed.tokens[0].lemma, "zzq");
    }

    #[test]
    fn test_sentences_and_entities_populated() {
        let provider = LexicalProvider::new();
        let analyzed = provider
            .analyze("OpenAI is located in San Francisco. It was founded in December 2015.")
            .unwrap();
        assert_eq!(analyzed.sentences.len(), 2);
        assert!(analyzed
            .entities
            .iter()
            .any(|e| e.surface_text == "San Francisco" && e.label == "GPE"));
    }

    #[test]
    fn test_provider_id() {
        let provider = LexicalProvider::new();
        assert_eq!(provider.provider_id(), "lexical");
    }
}
