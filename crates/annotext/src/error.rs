//! Error types for the annotation core.

use thiserror::Error;

/// Errors from analysis providers.
///
/// Provider failures propagate to the caller as distinct failures; they are
/// never masked as empty results.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

/// Errors reported by the aggregator and document processor.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Input text is empty or whitespace-only; no analysis is attempted.
    #[error("Input text is empty")]
    EmptyInput,

    /// A required document field is missing or empty; reported before the
    /// provider is invoked.
    #[error("Malformed document: missing {0}")]
    MalformedDocument(&'static str),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Errors from document store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Errors loading analysis settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
