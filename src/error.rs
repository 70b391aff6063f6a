//! Error handling for log import operations.
//!
//! Provides error types with context for file reading, line parsing,
//! storage writes, and configuration failures.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed log line {line_number} in {path}: {line:?}")]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("Invalid date {value:?} on line {line_number} in {path} (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidDate {
        path: PathBuf,
        line_number: usize,
        value: String,
        #[source]
        source: crate::parser::DateError,
    },

    #[error("Storage error: {message}: {source}")]
    Storage {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ImportError {
    /// Create an I/O error for the given file
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a storage error wrapping the driver failure
    pub fn storage(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the errors raised when a line fails the grammar or its date
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::MalformedLine { .. } | Self::InvalidDate { .. })
    }

    /// Line number of a parse error, if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line_number, .. } | Self::InvalidDate { line_number, .. } => {
                Some(*line_number)
            }
            _ => None,
        }
    }
}

impl From<mongodb::error::Error> for ImportError {
    fn from(error: mongodb::error::Error) -> Self {
        Self::storage("MongoDB operation failed", error)
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
