//! Command-line argument definitions for logimport
//!
//! This module defines the CLI interface using the clap derive API.

use crate::error::{ImportError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the log importer
///
/// Parses a log file line by line and inserts every entry into a MongoDB
/// collection with a single bulk insert.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "logimport",
    version,
    about = "Import fixed-format log files into MongoDB",
    long_about = "Parses a log file whose lines look like\n\n  \
                  TYPE: \"USER\" [YYYY-MM-DD HH:MM:SS] Nms \"FUNCTION\" \"STATUS\"\n\n\
                  and inserts one document per line into DATABASE.COLLECTION with a single \
                  bulk insert. By default the whole import aborts on the first malformed line \
                  and nothing is written."
)]
pub struct Args {
    /// Target database name
    #[arg(value_name = "DATABASE")]
    pub database: String,

    /// Target collection name
    #[arg(value_name = "COLLECTION")]
    pub collection: String,

    /// Log file to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// MongoDB connection string
    ///
    /// Overrides the config file and LOGIMPORT_MONGODB_URI.
    /// Defaults to mongodb://localhost:27017
    #[arg(long = "uri", value_name = "URI", help = "MongoDB connection string")]
    pub uri: Option<String>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/logimport/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Skip malformed lines instead of aborting
    ///
    /// Malformed lines are logged and counted; the remaining entries are
    /// still inserted.
    #[arg(
        long = "skip-malformed",
        help = "Skip malformed lines instead of aborting the import"
    )]
    pub skip_malformed: bool,

    /// Parse the file and report without writing to MongoDB
    #[arg(
        long = "dry-run",
        help = "Parse and report what would be inserted without writing"
    )]
    pub dry_run: bool,

    /// Output format for the import summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the import summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the import summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // A missing log file is reported by the parser as an I/O error.
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(ImportError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the insert spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}
