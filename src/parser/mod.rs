//! Log file parser
//!
//! Turns a log file into an ordered list of [`LogEntry`](crate::models::LogEntry)
//! values. Every line must follow the grammar
//!
//! ```text
//! TYPE: "USER" [YYYY-MM-DD HH:MM:SS] Nms "FUNCTION" "STATUS"
//! ```
//!
//! ## Architecture
//!
//! - [`line`] - Regex match and field extraction for a single line
//! - [`reader`] - File reading, line numbering, and strict/lenient handling
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logimport::parser::{LogParser, ParseMode};
//!
//! # fn example() -> logimport::Result<()> {
//! let parser = LogParser::new(ParseMode::Strict);
//! let result = parser.parse_file(std::path::Path::new("app.log"))?;
//!
//! println!("Parsed {} entries from {} lines",
//!          result.stats.entries_parsed,
//!          result.stats.lines_read);
//! # Ok(())
//! # }
//! ```

pub mod line;
pub mod reader;
pub mod stats;

#[cfg(test)]
mod tests;

pub use line::{DateError, LineError, parse_line};
pub use reader::{LogParser, ParseMode};
pub use stats::{ParseResult, ParseStats};
