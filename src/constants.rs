//! Application constants for logimport
//!
//! This module contains the line grammar, default values, and environment
//! variable names used throughout the importer.

// =============================================================================
// Line Grammar
// =============================================================================

/// Regular expression for one log line:
/// `TYPE: "USER" [YYYY-MM-DD HH:MM:SS] Nms "FUNCTION" "STATUS"`
///
/// Anchored at the start only; anything after the closing quote of the
/// status field is ignored.
pub const LINE_PATTERN: &str = r#"^(?P<type>\S*):\s"(?P<user>[^"]*)"\s\[(?P<date>[^\]]*)\]\s\d*ms\s"(?P<function>[^"]*)"\s"(?P<status>[^"]*)""#;

/// Format of the bracketed date field (no timezone)
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted layout of the date field: four-digit year, one- or two-digit
/// month, day and time parts, whitespace between date and time
pub const DATE_LAYOUT_PATTERN: &str = r"^\d{4}-\d{1,2}-\d{1,2}\s+\d{1,2}:\d{1,2}:\d{1,2}$";

/// Capture group names in [`LINE_PATTERN`]
pub mod groups {
    pub const TYPE: &str = "type";
    pub const USER: &str = "user";
    pub const DATE: &str = "date";
    pub const FUNCTION: &str = "function";
    pub const STATUS: &str = "status";
}

// =============================================================================
// Storage Defaults
// =============================================================================

/// Default MongoDB endpoint (local server, default port)
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Application name reported to the MongoDB server
pub const DEFAULT_APP_NAME: &str = "logimport";

/// Default TCP connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default server selection timeout in seconds
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

/// Accepted connection string schemes
pub const MONGODB_URI_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];

/// Characters MongoDB does not allow in database names
pub const INVALID_DATABASE_CHARS: &[char] = &['/', '\\', '.', ' ', '"', '$', '\0'];

/// Characters MongoDB does not allow in collection names
pub const INVALID_COLLECTION_CHARS: &[char] = &['$', '\0'];

// =============================================================================
// Configuration Files and Environment
// =============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "logimport";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides
pub mod env_vars {
    pub const MONGODB_URI: &str = "LOGIMPORT_MONGODB_URI";
    pub const APP_NAME: &str = "LOGIMPORT_APP_NAME";
    pub const CONNECT_TIMEOUT_SECS: &str = "LOGIMPORT_CONNECT_TIMEOUT_SECS";
    pub const SERVER_SELECTION_TIMEOUT_SECS: &str = "LOGIMPORT_SERVER_SELECTION_TIMEOUT_SECS";
    pub const PARSE_MODE: &str = "LOGIMPORT_PARSE_MODE";
}

/// Log target used for the default tracing filter
pub const LOG_TARGET: &str = "logimport";
