//! Tests for single-line parsing

use super::*;
use crate::parser::line::{DateError, LineError, parse_date, parse_line};

#[test]
fn test_parse_error_line() {
    let entry =
        parse_line(r#"ERROR: "bob" [2024-01-02 03:04:05] 7ms "saveRecord" "failure""#).unwrap();

    assert_eq!(entry.entry_type, "ERROR");
    assert_eq!(entry.user, "bob");
    assert_eq!(entry.date, datetime(2024, 1, 2, 3, 4, 5));
    assert_eq!(entry.function, "saveRecord");
    assert_eq!(entry.status, "failure");
}

#[test]
fn test_parse_info_line() {
    let entry =
        parse_line(r#"INFO: "alice" [2023-05-01 10:15:00] 42ms "loginHandler" "success""#)
            .unwrap();

    assert_eq!(entry.entry_type, "INFO");
    assert_eq!(entry.user, "alice");
    assert_eq!(entry.date, datetime(2023, 5, 1, 10, 15, 0));
    assert_eq!(entry.function, "loginHandler");
    assert_eq!(entry.status, "success");
}

#[test]
fn test_empty_quoted_fields() {
    let entry = parse_line(r#"DEBUG: "" [2023-05-01 10:15:00] 0ms "tick" """#).unwrap();

    assert_eq!(entry.user, "");
    assert_eq!(entry.status, "");
    assert_eq!(entry.function, "tick");
}

#[test]
fn test_quoted_fields_keep_inner_spaces() {
    let entry =
        parse_line(r#"AUDIT: "Jane Doe" [2023-05-01 10:15:00] 12ms "export report" "timed out""#)
            .unwrap();

    assert_eq!(entry.user, "Jane Doe");
    assert_eq!(entry.function, "export report");
    assert_eq!(entry.status, "timed out");
}

#[test]
fn test_type_may_contain_colons() {
    let entry = parse_line(r#"app:auth: "eve" [2023-05-01 10:15:00] 5ms "check" "ok""#).unwrap();
    assert_eq!(entry.entry_type, "app:auth");
}

#[test]
fn test_trailing_text_is_ignored() {
    let entry = parse_line(
        r#"INFO: "alice" [2023-05-01 10:15:00] 42ms "loginHandler" "success" request_id=17"#,
    )
    .unwrap();
    assert_eq!(entry.status, "success");
}

#[test]
fn test_duration_is_not_retained() {
    let fast = parse_line(r#"INFO: "a" [2023-05-01 10:15:00] 1ms "f" "s""#).unwrap();
    let slow = parse_line(r#"INFO: "a" [2023-05-01 10:15:00] 99999ms "f" "s""#).unwrap();
    assert_eq!(fast, slow);
}

#[test]
fn test_missing_closing_quote_on_status() {
    let result = parse_line(r#"ERROR: "bob" [2024-01-02 03:04:05] 7ms "saveRecord" "failure"#);
    assert_eq!(result, Err(LineError::NoMatch));
}

#[test]
fn test_non_matching_lines() {
    let lines = [
        "",
        "just some text",
        r#"INFO "alice" [2023-05-01 10:15:00] 42ms "loginHandler" "success""#,
        r#"INFO: "alice" 2023-05-01 10:15:00 42ms "loginHandler" "success""#,
        r#"INFO: "alice" [2023-05-01 10:15:00] 42 "loginHandler" "success""#,
        r#"INFO: "alice" [2023-05-01 10:15:00] 42ms "loginHandler""#,
        r#"  INFO: "alice" [2023-05-01 10:15:00] 42ms "loginHandler" "success""#,
    ];

    for line in lines {
        assert_eq!(parse_line(line), Err(LineError::NoMatch), "line: {:?}", line);
    }
}

#[test]
fn test_malformed_date() {
    let result = parse_line(r#"INFO: "alice" [2023-13-01 10:15:00] 42ms "f" "s""#);
    match result {
        Err(LineError::InvalidDate { value, .. }) => assert_eq!(value, "2023-13-01 10:15:00"),
        other => panic!("Expected InvalidDate, got {:?}", other),
    }

    let result = parse_line(r#"INFO: "alice" [yesterday] 42ms "f" "s""#);
    assert!(matches!(result, Err(LineError::InvalidDate { .. })));
}

#[test]
fn test_parse_date_rejects_timezone_suffix() {
    assert!(parse_date("2023-05-01 10:15:00").is_ok());
    assert!(parse_date("2023-05-01T10:15:00").is_err());
    assert!(parse_date("2023-05-01 10:15:00 +0000").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_parse_date_requires_full_layout() {
    let rejected = [
        "2024-01-0203:04:05",
        "-0001-01-02 03:04:05",
        "+2024-01-02 03:04:05",
        "24-01-02 03:04:05",
    ];

    for value in rejected {
        match parse_date(value) {
            Err(LineError::InvalidDate { value: v, source }) => {
                assert_eq!(v, value);
                assert_eq!(source, DateError::Layout, "date: {:?}", value);
            }
            other => panic!("Expected InvalidDate for {:?}, got {:?}", value, other),
        }
    }
}

#[test]
fn test_parse_date_accepts_unpadded_fields() {
    assert_eq!(
        parse_date("2024-1-2 3:04:05").unwrap(),
        datetime(2024, 1, 2, 3, 4, 5)
    );
}

#[test]
fn test_short_year_line_is_invalid_date() {
    let result = parse_line(r#"INFO: "alice" [24-01-02 03:04:05] 42ms "f" "s""#);
    assert!(matches!(
        result,
        Err(LineError::InvalidDate {
            source: DateError::Layout,
            ..
        })
    ));
}
