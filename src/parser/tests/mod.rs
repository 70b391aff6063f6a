//! Test utilities for log parser testing
//!
//! Shared fixtures and helpers used across the parser test modules.

use chrono::{NaiveDate, NaiveDateTime};
use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod line_tests;

/// Three well-formed lines in mixed categories
pub fn create_test_log() -> String {
    [
        r#"INFO: "alice" [2023-05-01 10:15:00] 42ms "loginHandler" "success""#,
        r#"ERROR: "bob" [2024-01-02 03:04:05] 7ms "saveRecord" "failure""#,
        r#"WARN: "" [2023-12-31 23:59:59] 1500ms "cleanup" """#,
    ]
    .join("\n")
}

/// Well-formed lines with a malformed second line (missing closing quote on status)
pub fn create_log_with_malformed_line() -> String {
    [
        r#"INFO: "alice" [2023-05-01 10:15:00] 42ms "loginHandler" "success""#,
        r#"ERROR: "bob" [2024-01-02 03:04:05] 7ms "saveRecord" "failure"#,
        r#"INFO: "carol" [2023-05-02 08:00:00] 3ms "logout" "success""#,
    ]
    .join("\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to build a naive timestamp
pub fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
