//! Command implementations for the logimport CLI
//!
//! This module contains the command execution logic, configuration loading,
//! logging setup, and summary reporting.

pub mod import;
pub mod shared;

use crate::Result;
use crate::cli::args::Args;
use crate::models::ImportSummary;

/// Main command runner for logimport
///
/// Sets up logging, resolves configuration, and runs the import (or a dry
/// run when `--dry-run` is given).
pub async fn run(args: Args) -> Result<ImportSummary> {
    import::run_import(args).await
}
