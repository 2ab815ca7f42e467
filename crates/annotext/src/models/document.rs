//! Document models for the annotation pipeline.
//!
//! `RawDocument` is what the crawler hands over (via the document store);
//! `ProcessedDocument` is the analyzed form written back for the indexing
//! subsystem. Metadata passes through both untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::annotation::NamedEntity;

/// Content type hint for a raw document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Plain,
    Html,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Html => "html",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plain" | "text" => Some(Self::Plain),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

/// An unprocessed document as stored by the crawler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub doc_id: String,
    pub content: String,
    /// `Html` triggers markup stripping before analysis.
    #[serde(default, rename = "type")]
    pub content_type: ContentType,
    /// Source metadata carried through unchanged.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl RawDocument {
    pub fn new(doc_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            content: content.into(),
            content_type: ContentType::Plain,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }
}

/// Structured analysis of a document, keyed by the original `doc_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub doc_id: String,
    /// Detected language tag, or `"unknown"` when detection was not possible.
    pub language: String,
    /// Surface texts of non-whitespace tokens, in document order.
    pub tokens: Vec<String>,
    /// Lemmas aligned with `tokens`.
    pub lemmas: Vec<String>,
    /// `(surface text, coarse tag)` pairs aligned with `tokens`.
    pub pos_tags: Vec<(String, String)>,
    pub entities: Vec<NamedEntity>,
    pub sentences: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}
