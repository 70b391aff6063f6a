//! logimport Library
//!
//! Parses application log files written in a fixed line format and
//! bulk-imports the entries into a MongoDB collection.
//!
//! This library provides tools for:
//! - Matching each line against the log grammar and extracting its fields
//! - Strict (fail-fast) and lenient (skip-and-count) parse modes
//! - Converting entries to MongoDB documents and writing them in one batch
//! - Layered configuration from TOML files and environment variables

pub mod config;
pub mod constants;
pub mod error;
pub mod importer;
pub mod models;
pub mod parser;
pub mod store;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{ImportError, Result};
pub use importer::{LogImporter, dry_run_import, import_log_entries};
pub use models::{ImportSummary, LogDocument, LogEntry};
pub use parser::{LogParser, ParseMode};
pub use store::{LogSink, MemoryStore, MongoStore};
