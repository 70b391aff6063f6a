//! Shared components for CLI commands
//!
//! Logging setup and layered configuration loading.

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::parser::ParseMode;
use crate::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Set up structured logging to stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .ok();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    load_configuration_from(args, |key| std::env::var(key).ok())
}

/// As [`load_configuration`], reading environment overrides from `lookup`
pub fn load_configuration_from<F>(args: &Args, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    info!("Loading configuration");

    let config_file = resolve_config_file(args);
    match &config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file.as_deref(), lookup)?;

    apply_cli_overrides(&mut config, args);

    config.validate()?;

    Ok(config)
}

/// Explicit `--config`, else the default location if a file exists there
fn resolve_config_file(args: &Args) -> Option<PathBuf> {
    match &args.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    }
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(uri) = &args.uri {
        config.storage.uri = uri.clone();
    }
    if args.skip_malformed {
        config.parsing.mode = ParseMode::Lenient;
    }
}
