//! Parsing statistics and result structures for log files
//!
//! This module provides types for tracking how many lines were read,
//! parsed, and skipped, and for handing the parsed entries downstream.

use crate::models::LogEntry;

/// Parsing result with entries in file order and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed entries, in file order
    pub entries: Vec<LogEntry>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines read from the file
    pub lines_read: usize,

    /// Number of entries successfully parsed
    pub entries_parsed: usize,

    /// Number of lines skipped as malformed (lenient mode only)
    pub lines_skipped: usize,

    /// Messages for skipped lines
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped line and its reason
    pub fn record_skip(&mut self, line_number: usize, reason: impl std::fmt::Display) {
        self.lines_skipped += 1;
        self.errors.push(format!("Line {}: {}", line_number, reason));
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.entries_parsed as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// True when every line read produced an entry
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0 && self.entries_parsed == self.lines_read
    }
}
