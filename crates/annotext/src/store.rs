//! Document store abstraction.
//!
//! The annotation core never talks to a database directly; it reads raw
//! documents and writes processed ones through this trait. Production
//! deployments back it with whatever the surrounding system uses; the
//! in-memory implementation here serves tests and embedded use.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::{ProcessedDocument, RawDocument};

/// Read/write access to raw and processed documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a raw document by ID. `Ok(None)` means the ID is unknown.
    async fn get_raw(&self, doc_id: &str) -> Result<Option<RawDocument>, StoreError>;

    /// Write a processed document, replacing any previous version.
    async fn put_processed(&self, doc: &ProcessedDocument) -> Result<(), StoreError>;

    /// Fetch a previously written processed document.
    async fn get_processed(&self, doc_id: &str) -> Result<Option<ProcessedDocument>, StoreError>;
}

/// In-memory document store.
#[derive(Default)]
pub struct MemoryDocumentStore {
    raw: RwLock<HashMap<String, RawDocument>>,
    processed: RwLock<HashMap<String, ProcessedDocument>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw document, as the crawler would.
    pub async fn insert_raw(&self, doc: RawDocument) {
        self.raw.write().await.insert(doc.doc_id.clone(), doc);
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_raw(&self, doc_id: &str) -> Result<Option<RawDocument>, StoreError> {
        Ok(self.raw.read().await.get(doc_id).cloned())
    }

    async fn put_processed(&self, doc: &ProcessedDocument) -> Result<(), StoreError> {
        self.processed
            .write()
            .await
            .insert(doc.doc_id.clone(), doc.clone());
        Ok(())
    }

    async fn get_processed(&self, doc_id: &str) -> Result<Option<ProcessedDocument>, StoreError> {
        Ok(self.processed.read().await.get(doc_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryDocumentStore::new();
        store
            .insert_raw(RawDocument::new("doc-1", "some content"))
            .await;

        let raw = store.get_raw("doc-1").await.unwrap().unwrap();
        assert_eq!(raw.content, "some content");
        assert!(store.get_raw("doc-2").await.unwrap().is_none());

        let processed = ProcessedDocument {
            doc_id: "doc-1".to_string(),
            language: "en".to_string(),
            tokens: vec!["some".to_string(), "content".to_string()],
            lemmas: vec!["some".to_string(), "content".to_string()],
            pos_tags: vec![],
            entities: vec![],
            sentences: vec!["some content".to_string()],
            metadata: Default::default(),
        };
        store.put_processed(&processed).await.unwrap();

        let loaded = store.get_processed("doc-1").await.unwrap().unwrap();
        assert_eq!(loaded, processed);
    }
}
