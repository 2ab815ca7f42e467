//! Document processing — raw crawler output to `ProcessedDocument`.

use annotext::error::AnnotateError;
use annotext::models::{ContentType, NamedEntity, ProcessedDocument, RawDocument};
use annotext::provider::{AnalysisProvider, MarkupStripper};

/// Turns raw documents into their structured, analyzed form.
pub struct DocumentProcessor {
    provider: Box<dyn AnalysisProvider>,
    stripper: Option<Box<dyn MarkupStripper>>,
}

impl DocumentProcessor {
    pub fn new(provider: Box<dyn AnalysisProvider>) -> Self {
        Self {
            provider,
            stripper: None,
        }
    }

    /// Attach a markup stripper for HTML documents.
    pub fn with_markup_stripper(mut self, stripper: Box<dyn MarkupStripper>) -> Self {
        self.stripper = Some(stripper);
        self
    }

    /// Validate and analyze one raw document.
    ///
    /// Field validation happens before the provider is invoked; metadata
    /// passes through untouched.
    pub fn process(&self, raw: &RawDocument) -> Result<ProcessedDocument, AnnotateError> {
        if raw.doc_id.trim().is_empty() {
            return Err(AnnotateError::MalformedDocument("doc_id"));
        }
        if raw.content.trim().is_empty() {
            return Err(AnnotateError::MalformedDocument("content"));
        }

        let content = match (raw.content_type, &self.stripper) {
            (ContentType::Html, Some(stripper)) => stripper.strip(&raw.content),
            (ContentType::Html, None) => {
                tracing::warn!(doc_id = %raw.doc_id, "no markup stripper configured, analyzing HTML as-is");
                raw.content.clone()
            }
            (ContentType::Plain, _) => raw.content.clone(),
        };

        let analyzed = self.provider.analyze(&content)?;

        let words: Vec<_> = analyzed
            .tokens
            .iter()
            .filter(|t| !t.is_whitespace)
            .collect();

        Ok(ProcessedDocument {
            doc_id: raw.doc_id.clone(),
            language: analyzed.language.clone(),
            tokens: words.iter().map(|t| t.text.clone()).collect(),
            lemmas: words.iter().map(|t| t.lemma.clone()).collect(),
            pos_tags: words
                .iter()
                .map(|t| (t.text.clone(), t.pos_tag.clone()))
                .collect(),
            entities: analyzed.entities.iter().map(NamedEntity::from).collect(),
            sentences: analyzed.sentences,
            metadata: raw.metadata.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotext::error::ProviderError;
    use annotext::models::AnnotatedToken;
    use annotext::provider::AnalyzedText;

    struct FixedProvider;

    impl AnalysisProvider for FixedProvider {
        fn provider_id(&self) -> &str {
            "fixed"
        }

        fn analyze(&self, text: &str) -> Result<AnalyzedText, ProviderError> {
            let mut tokens = Vec::new();
            let mut offset = 0;
            for word in text.split_whitespace() {
                tokens.push(AnnotatedToken {
                    text: word.to_string(),
                    lemma: word.to_lowercase(),
                    pos_tag: "NOUN".to_string(),
                    char_offset: offset,
                    is_punctuation: false,
                    is_whitespace: false,
                    is_stopword: false,
                });
                offset += word.chars().count() + 1;
            }
            Ok(AnalyzedText {
                tokens,
                entities: vec![],
                sentences: vec![text.to_string()],
                language: "en".to_string(),
            })
        }
    }

    struct FailingProvider;

    impl AnalysisProvider for FailingProvider {
        fn provider_id(&self) -> &str {
            "failing"
        }

        fn analyze(&self, _text: &str) -> Result<AnalyzedText, ProviderError> {
            Err(ProviderError::AnalysisFailed("model unavailable".into()))
        }
    }

    struct TagStripper;

    impl MarkupStripper for TagStripper {
        fn strip(&self, content: &str) -> String {
            content.replace("<p>", "").replace("</p>", "")
        }
    }

    #[test]
    fn test_processes_plain_document() {
        let processor = DocumentProcessor::new(Box::new(FixedProvider));
        let raw = RawDocument::new("doc-1", "Hello World");
        let processed = processor.process(&raw).unwrap();

        assert_eq!(processed.doc_id, "doc-1");
        assert_eq!(processed.language, "en");
        assert_eq!(processed.tokens, vec!["Hello", "World"]);
        assert_eq!(processed.lemmas, vec!["hello", "world"]);
        assert_eq!(processed.sentences.len(), 1);
    }

    #[test]
    fn test_missing_doc_id_rejected_before_analysis() {
        let processor = DocumentProcessor::new(Box::new(FailingProvider));
        let raw = RawDocument::new("  ", "content");
        // FailingProvider would error if reached; validation fires first.
        assert!(matches!(
            processor.process(&raw),
            Err(AnnotateError::MalformedDocument("doc_id"))
        ));
    }

    #[test]
    fn test_missing_content_rejected() {
        let processor = DocumentProcessor::new(Box::new(FixedProvider));
        let raw = RawDocument::new("doc-1", "   ");
        assert!(matches!(
            processor.process(&raw),
            Err(AnnotateError::MalformedDocument("content"))
        ));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let processor = DocumentProcessor::new(Box::new(FailingProvider));
        let raw = RawDocument::new("doc-1", "content");
        assert!(matches!(
            processor.process(&raw),
            Err(AnnotateError::Provider(_))
        ));
    }

    #[test]
    fn test_html_is_stripped_when_stripper_configured() {
        let processor =
            DocumentProcessor::new(Box::new(FixedProvider)).with_markup_stripper(Box::new(TagStripper));
        let raw = RawDocument::new("doc-2", "<p>Hello World</p>")
            .with_content_type(ContentType::Html);
        let processed = processor.process(&raw).unwrap();
        assert_eq!(processed.tokens, vec!["Hello", "World"]);
    }

    #[test]
    fn test_metadata_passes_through() {
        let processor = DocumentProcessor::new(Box::new(FixedProvider));
        let mut raw = RawDocument::new("doc-3", "text body");
        raw.metadata
            .insert("source".to_string(), serde_json::json!("web"));
        let processed = processor.process(&raw).unwrap();
        assert_eq!(processed.metadata["source"], serde_json::json!("web"));
    }
}
