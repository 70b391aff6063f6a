//! Document store sinks
//!
//! The importer writes through the [`LogSink`] trait so that the bulk insert
//! can target MongoDB or stay in process:
//! - [`MongoStore`]: MongoDB collection, one ordered `insert_many` per batch
//! - [`MemoryStore`]: in-memory batches, used for dry runs and tests

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::constants::{INVALID_COLLECTION_CHARS, INVALID_DATABASE_CHARS};
use crate::error::{ImportError, Result};
use crate::models::LogDocument;
use std::future::Future;

/// Destination for parsed log documents
pub trait LogSink {
    /// Write all documents in a single bulk operation
    ///
    /// Returns the number of documents written. The write is all-or-nothing
    /// from the caller's point of view: any failure is returned as an error.
    fn insert_batch(&self, documents: Vec<LogDocument>)
    -> impl Future<Output = Result<usize>> + Send;

    /// Human-readable target, e.g. `logs.entries`
    fn target(&self) -> String;
}

/// Validate a database name against MongoDB naming rules
pub fn validate_database_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ImportError::configuration("Database name cannot be empty"));
    }
    if let Some(c) = name.chars().find(|c| INVALID_DATABASE_CHARS.contains(c)) {
        return Err(ImportError::configuration(format!(
            "Database name '{}' contains invalid character {:?}",
            name, c
        )));
    }
    Ok(())
}

/// Validate a collection name against MongoDB naming rules
pub fn validate_collection_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ImportError::configuration("Collection name cannot be empty"));
    }
    if name.starts_with("system.") {
        return Err(ImportError::configuration(format!(
            "Collection name '{}' uses the reserved 'system.' prefix",
            name
        )));
    }
    if let Some(c) = name.chars().find(|c| INVALID_COLLECTION_CHARS.contains(c)) {
        return Err(ImportError::configuration(format!(
            "Collection name '{}' contains invalid character {:?}",
            name, c
        )));
    }
    Ok(())
}
