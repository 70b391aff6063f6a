//! Log file reader
//!
//! Reads a file line by line, applies [`parse_line`] to each one, and
//! collects the entries. In strict mode the first bad line aborts the whole
//! file; in lenient mode bad lines are logged and counted.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::line::{LineError, parse_line};
use super::stats::{ParseResult, ParseStats};
use crate::error::{ImportError, Result};

/// How malformed lines are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Abort on the first malformed line
    #[default]
    Strict,
    /// Skip malformed lines and keep going
    Lenient,
}

impl FromStr for ParseMode {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ParseMode::Strict),
            "lenient" => Ok(ParseMode::Lenient),
            other => Err(ImportError::configuration(format!(
                "Unknown parse mode '{}' (expected 'strict' or 'lenient')",
                other
            ))),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Strict => write!(f, "strict"),
            ParseMode::Lenient => write!(f, "lenient"),
        }
    }
}

/// Parser for log files in the fixed line grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct LogParser {
    mode: ParseMode,
}

impl LogParser {
    /// Create a new parser
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse a log file and return its entries with statistics
    ///
    /// The file handle is dropped before this returns, on success and on
    /// every error path.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing log file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| ImportError::io(file_path, e))?;
        let result = self.parse_reader(BufReader::new(file), file_path)?;

        info!(
            "Parsed {} entries from {} lines",
            result.stats.entries_parsed, result.stats.lines_read
        );
        if result.stats.lines_skipped > 0 {
            warn!(
                "Skipped {} malformed lines in {}",
                result.stats.lines_skipped,
                file_path.display()
            );
        }

        Ok(result)
    }

    /// Parse log lines from any buffered reader
    ///
    /// `source` is only used to label errors and log messages.
    pub fn parse_reader<R: BufRead>(&self, reader: R, source: &Path) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut entries = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| ImportError::io(source, e))?;
            stats.lines_read += 1;

            trace!("{}:{}: {}", source.display(), line_number, line);

            match parse_line(&line) {
                Ok(entry) => {
                    entries.push(entry);
                    stats.entries_parsed += 1;
                }
                Err(e) if self.mode == ParseMode::Lenient => {
                    warn!("Skipping line {}: {}", line_number, e);
                    stats.record_skip(line_number, &e);
                }
                Err(e) => return Err(line_error(e, source, line_number, line)),
            }
        }

        debug!(
            "Finished {}: {} lines, {} entries, {} skipped",
            source.display(),
            stats.lines_read,
            stats.entries_parsed,
            stats.lines_skipped
        );

        Ok(ParseResult { entries, stats })
    }
}

fn line_error(error: LineError, path: &Path, line_number: usize, line: String) -> ImportError {
    match error {
        LineError::NoMatch => ImportError::MalformedLine {
            path: path.to_path_buf(),
            line_number,
            line,
        },
        LineError::InvalidDate { value, source } => ImportError::InvalidDate {
            path: path.to_path_buf(),
            line_number,
            value,
            source,
        },
    }
}
