//! Single-line parsing
//!
//! Matches one line against the fixed grammar and extracts the fields of a
//! [`LogEntry`]. The duration field is matched but not kept.

use crate::constants::{DATE_FORMAT, DATE_LAYOUT_PATTERN, LINE_PATTERN, groups};
use crate::models::LogEntry;
use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

static LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("LINE_PATTERN is a valid regex"));

static DATE_LAYOUT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DATE_LAYOUT_PATTERN).expect("DATE_LAYOUT_PATTERN is a valid regex")
});

/// Why a date field was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateError {
    /// Wrong shape, e.g. a two-digit or signed year, or no separator
    #[error("expected YYYY-MM-DD HH:MM:SS")]
    Layout,

    /// Right shape but not a real calendar value, e.g. month 13
    #[error(transparent)]
    Value(#[from] chrono::ParseError),
}

/// Why a single line could not be turned into a [`LogEntry`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("line does not match the log grammar")]
    NoMatch,

    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: DateError,
    },
}

/// Parse one log line
pub fn parse_line(line: &str) -> Result<LogEntry, LineError> {
    let captures = LINE_REGEX.captures(line).ok_or(LineError::NoMatch)?;

    let date_str = capture(&captures, groups::DATE);
    let date = parse_date(date_str)?;

    Ok(LogEntry {
        entry_type: capture(&captures, groups::TYPE).to_string(),
        user: capture(&captures, groups::USER).to_string(),
        date,
        function: capture(&captures, groups::FUNCTION).to_string(),
        status: capture(&captures, groups::STATUS).to_string(),
    })
}

/// Parse the bracketed date field
///
/// chrono alone is too lenient here (it takes short or signed years and a
/// missing space), so the layout is checked first.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, LineError> {
    let invalid = |source: DateError| LineError::InvalidDate {
        value: value.to_string(),
        source,
    };

    if !DATE_LAYOUT_REGEX.is_match(value) {
        return Err(invalid(DateError::Layout));
    }

    NaiveDateTime::parse_from_str(value, DATE_FORMAT).map_err(|e| invalid(e.into()))
}

// Every group in LINE_PATTERN is non-optional, so a successful match has them all.
fn capture<'a>(captures: &Captures<'a>, name: &str) -> &'a str {
    captures.name(name).map_or("", |m| m.as_str())
}
