//! In-memory sink
//!
//! Keeps every batch it receives. Used by `--dry-run` to report what would be
//! written, and by tests to observe the bulk-insert boundary.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::LogSink;
use crate::error::{ImportError, Result};
use crate::models::LogDocument;

#[derive(Debug, Default)]
pub struct MemoryStore {
    database: String,
    collection: String,
    batches: Mutex<Vec<Vec<LogDocument>>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
            ..Default::default()
        }
    }

    /// A store whose inserts always fail with the given message
    pub fn failing(
        database: impl Into<String>,
        collection: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new(database, collection)
        }
    }

    /// Number of bulk inserts received
    pub fn insert_calls(&self) -> usize {
        self.lock().len()
    }

    /// Every batch received, in order
    pub fn batches(&self) -> Vec<Vec<LogDocument>> {
        self.lock().clone()
    }

    /// All stored documents, flattened in insertion order
    pub fn documents(&self) -> Vec<LogDocument> {
        self.lock().iter().flatten().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<LogDocument>>> {
        // A poisoned lock still holds complete batches; pushes are atomic.
        self.batches.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LogSink for MemoryStore {
    async fn insert_batch(&self, documents: Vec<LogDocument>) -> Result<usize> {
        if let Some(message) = &self.failure {
            return Err(ImportError::storage(
                format!("insert_many into {} failed", self.target()),
                message.clone(),
            ));
        }

        let count = documents.len();
        self.lock().push(documents);
        debug!("Stored {} documents in memory for {}", count, self.target());
        Ok(count)
    }

    fn target(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
