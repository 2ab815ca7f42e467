//! Store-backed processing pipeline.
//!
//! Fetches raw documents, runs the processor, and writes results back.
//! Retry and scheduling policy belong to the calling orchestration layer;
//! the pipeline reports each failure once and moves on.

use std::sync::Arc;

use annotext::models::ProcessedDocument;
use annotext::store::DocumentStore;

use super::document::DocumentProcessor;

/// Result of a batch pipeline run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchProcessResult {
    pub succeeded: usize,
    pub failed: usize,
}

/// Processes documents from a store and persists the results.
pub struct DocumentPipeline {
    store: Arc<dyn DocumentStore>,
    processor: DocumentProcessor,
}

impl DocumentPipeline {
    pub fn new(store: Arc<dyn DocumentStore>, processor: DocumentProcessor) -> Self {
        Self { store, processor }
    }

    /// Process a single document by ID and persist the result.
    pub async fn run(&self, doc_id: &str) -> anyhow::Result<ProcessedDocument> {
        let raw = self
            .store
            .get_raw(doc_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Document not found: {}", doc_id))?;

        let processed = self.processor.process(&raw)?;
        self.store.put_processed(&processed).await?;
        tracing::info!(doc_id, language = %processed.language, "document processed");
        Ok(processed)
    }

    /// Process a batch of document IDs, continuing past individual failures.
    pub async fn run_batch(&self, doc_ids: &[String]) -> BatchProcessResult {
        let mut result = BatchProcessResult::default();
        for doc_id in doc_ids {
            match self.run(doc_id).await {
                Ok(_) => result.succeeded += 1,
                Err(e) => {
                    tracing::warn!(doc_id = %doc_id, error = %e, "document processing failed");
                    result.failed += 1;
                }
            }
        }
        result
    }
}
