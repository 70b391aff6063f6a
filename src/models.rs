//! Core data structures for log import.
//!
//! Defines the parsed log entry, its document-store representation,
//! and the summary reported after an import run.

use chrono::{DateTime, NaiveDateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One parsed log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry category, e.g. `INFO` or `ERROR`
    #[serde(rename = "type")]
    pub entry_type: String,
    pub user: String,
    /// Timestamp as written in the file; the source carries no timezone
    pub date: NaiveDateTime,
    pub function: String,
    pub status: String,
}

impl LogEntry {
    pub fn new(
        entry_type: impl Into<String>,
        user: impl Into<String>,
        date: NaiveDateTime,
        function: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            entry_type: entry_type.into(),
            user: user.into(),
            date,
            function: function.into(),
            status: status.into(),
        }
    }

    /// Convert to the shape stored in the collection
    pub fn to_document(&self) -> LogDocument {
        LogDocument::from(self)
    }
}

/// Stored form of a [`LogEntry`]
///
/// The naive timestamp is written as a BSON UTC datetime holding the same
/// calendar value, so `2024-01-02 03:04:05` reads back as
/// `2024-01-02T03:04:05Z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDocument {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub user: String,
    pub date: bson::DateTime,
    pub function: String,
    pub status: String,
}

impl From<&LogEntry> for LogDocument {
    fn from(entry: &LogEntry) -> Self {
        Self {
            entry_type: entry.entry_type.clone(),
            user: entry.user.clone(),
            date: bson::DateTime::from_millis(entry.date.and_utc().timestamp_millis()),
            function: entry.function.clone(),
            status: entry.status.clone(),
        }
    }
}

impl From<LogEntry> for LogDocument {
    fn from(entry: LogEntry) -> Self {
        let date = bson::DateTime::from_millis(entry.date.and_utc().timestamp_millis());
        Self {
            entry_type: entry.entry_type,
            user: entry.user,
            date,
            function: entry.function,
            status: entry.status,
        }
    }
}

impl LogDocument {
    /// Convert a document read back from the store into a log entry
    ///
    /// Returns `None` when the stored datetime is outside chrono's range.
    pub fn to_entry(&self) -> Option<LogEntry> {
        let date = DateTime::<Utc>::from_timestamp_millis(self.date.timestamp_millis())?;
        Some(LogEntry {
            entry_type: self.entry_type.clone(),
            user: self.user.clone(),
            date: date.naive_utc(),
            function: self.function.clone(),
            status: self.status.clone(),
        })
    }
}

/// Outcome of a single import run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    /// Log file that was read
    pub source: PathBuf,
    /// Target as `database.collection`
    pub target: String,
    /// Lines read from the file
    pub lines_read: usize,
    /// Entries that matched the grammar
    pub entries_parsed: usize,
    /// Lines skipped in lenient mode
    pub lines_skipped: usize,
    /// Documents written by the bulk insert
    pub documents_inserted: usize,
    /// Nothing was written to the document store
    pub dry_run: bool,
    /// Wall-clock time for parse and insert
    #[serde(serialize_with = "serialize_duration_secs")]
    pub elapsed: Duration,
}

impl ImportSummary {
    /// True when every parsed entry was inserted
    pub fn is_complete(&self) -> bool {
        self.documents_inserted == self.entries_parsed
    }
}

fn serialize_duration_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
