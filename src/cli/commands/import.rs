//! Import command implementation
//!
//! Runs the parse-then-insert workflow and prints the final summary.

use super::shared::{load_configuration, setup_logging};
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::importer::{dry_run_import, import_log_entries};
use crate::models::ImportSummary;
use crate::{ImportError, Result};
use colored::*;
use indicatif::HumanDuration;
use tracing::{debug, info};

/// Import command runner
///
/// 1. Set up logging and configuration
/// 2. Parse the log file completely
/// 3. Bulk-insert the entries (skipped for dry runs and empty files)
/// 4. Print the summary
pub async fn run_import(args: Args) -> Result<ImportSummary> {
    setup_logging(&args)?;

    info!("Starting logimport");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    execute_import(&args, &config).await
}

/// Run the import with a resolved configuration and report the outcome
async fn execute_import(args: &Args, config: &Config) -> Result<ImportSummary> {
    info!(
        "Importing {} into {}.{} ({} mode)",
        args.file.display(),
        args.database,
        args.collection,
        config.parsing.mode
    );

    let summary = if args.dry_run {
        dry_run_import(config, &args.database, &args.collection, &args.file).await?
    } else {
        import_log_entries(
            config,
            &args.database,
            &args.collection,
            &args.file,
            args.show_progress(),
        )
        .await?
    };

    generate_final_report(args, &summary)?;

    Ok(summary)
}

/// Generate final import report
fn generate_final_report(args: &Args, summary: &ImportSummary) -> Result<()> {
    if args.quiet && args.output_format == OutputFormat::Human {
        return Ok(());
    }

    match args.output_format {
        OutputFormat::Human => generate_human_report(summary),
        OutputFormat::Json => generate_json_report(summary),
    }
}

/// Generate human-readable report
fn generate_human_report(summary: &ImportSummary) -> Result<()> {
    let heading = if summary.dry_run {
        "Dry run complete - nothing was written"
    } else {
        "Import complete"
    };
    let inserted_label = if summary.dry_run {
        "Documents that would be inserted:"
    } else {
        "Documents inserted:"
    };

    println!("\n{}", heading.bright_green().bold());
    println!(
        "  {} {}",
        "Source:".bright_cyan(),
        summary.source.display()
    );
    println!("  {} {}", "Target:".bright_cyan(), summary.target);
    println!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        summary.lines_read.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Entries parsed:".bright_cyan(),
        summary.entries_parsed.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        inserted_label.bright_cyan(),
        summary.documents_inserted.to_string().bright_white().bold()
    );
    if summary.lines_skipped > 0 {
        println!(
            "  {} {}",
            "Malformed lines skipped:".bright_yellow(),
            summary.lines_skipped.to_string().bright_yellow().bold()
        );
    }
    println!(
        "  {} {}",
        "Elapsed:".bright_cyan(),
        HumanDuration(summary.elapsed)
    );
    println!();

    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(summary: &ImportSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(|e| {
        ImportError::configuration(format!("Failed to serialize import summary: {}", e))
    })?;
    println!("{}", json);
    Ok(())
}
