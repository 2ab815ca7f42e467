//! Capability traits for external collaborators.
//!
//! The analysis provider is the one non-portable dependency of the system;
//! modeling it as a trait keeps the aggregator independent of any particular
//! NLP backend. Markup stripping is a second opaque collaborator, consulted
//! only for HTML documents.

use crate::error::ProviderError;
use crate::models::{AnnotatedToken, EntitySpan};

/// Sentinel language tag for text too short or ambiguous to classify.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Full linguistic analysis of one input text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedText {
    /// Tokens in original order.
    pub tokens: Vec<AnnotatedToken>,
    /// Entity spans in the provider's emission order (left-to-right).
    pub entities: Vec<EntitySpan>,
    /// Sentence texts in original order.
    pub sentences: Vec<String>,
    /// Detected language tag, or [`UNKNOWN_LANGUAGE`].
    pub language: String,
}

/// A linguistic analysis backend.
///
/// One call per input text; implementations must be safe for concurrent
/// read-only use so independent inputs can be analyzed in parallel.
pub trait AnalysisProvider: Send + Sync {
    /// Backend identifier (e.g. "lexical").
    fn provider_id(&self) -> &str;

    /// Analyze raw text into tokens, entities, sentences, and a language tag.
    fn analyze(&self, text: &str) -> Result<AnalyzedText, ProviderError>;
}

/// Strips markup from document content before analysis.
pub trait MarkupStripper: Send + Sync {
    fn strip(&self, content: &str) -> String;
}
