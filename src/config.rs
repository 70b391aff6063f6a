//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then a TOML file, then
//! `LOGIMPORT_*` environment variables, then command-line overrides applied
//! by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_APP_NAME, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_MONGODB_URI, DEFAULT_SERVER_SELECTION_TIMEOUT_SECS, MONGODB_URI_SCHEMES, env_vars,
};
use crate::error::{ImportError, Result};
use crate::parser::ParseMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document store connection settings
    pub storage: StorageConfig,

    /// Line parsing settings
    pub parsing: ParsingConfig,
}

/// MongoDB connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Connection string
    pub uri: String,

    /// Application name reported to the server
    pub app_name: String,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// How long to wait for a suitable server before failing an operation
    pub server_selection_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }
}

/// Line parsing settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Strict aborts on the first malformed line; lenient skips it
    pub mode: ParseMode,
}

impl Config {
    /// Platform default config file location, e.g. `~/.config/logimport/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                ImportError::configuration("Could not determine the user configuration directory")
            })
    }

    /// Load defaults, then the optional config file, then overrides from
    /// `lookup` (the process environment in production)
    pub fn load_layered<F>(config_file: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides_from(lookup)?;
        debug!("Layered configuration: {:?}", config);

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ImportError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            ImportError::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Apply overrides from any key lookup (the process environment in production)
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = lookup(env_vars::MONGODB_URI) {
            self.storage.uri = uri;
        }
        if let Some(app_name) = lookup(env_vars::APP_NAME) {
            self.storage.app_name = app_name;
        }
        if let Some(value) = lookup(env_vars::CONNECT_TIMEOUT_SECS) {
            self.storage.connect_timeout_secs =
                parse_env_number(env_vars::CONNECT_TIMEOUT_SECS, &value)?;
        }
        if let Some(value) = lookup(env_vars::SERVER_SELECTION_TIMEOUT_SECS) {
            self.storage.server_selection_timeout_secs =
                parse_env_number(env_vars::SERVER_SELECTION_TIMEOUT_SECS, &value)?;
        }
        if let Some(value) = lookup(env_vars::PARSE_MODE) {
            self.parsing.mode = value.parse()?;
        }

        Ok(())
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<()> {
        let uri = self.storage.uri.trim();
        if uri.is_empty() {
            return Err(ImportError::configuration("MongoDB URI cannot be empty"));
        }
        if !MONGODB_URI_SCHEMES
            .iter()
            .any(|scheme| uri.starts_with(scheme))
        {
            return Err(ImportError::configuration(format!(
                "MongoDB URI must start with one of {}",
                MONGODB_URI_SCHEMES.join(", ")
            )));
        }

        if self.storage.app_name.trim().is_empty() {
            return Err(ImportError::configuration("Application name cannot be empty"));
        }

        if self.storage.connect_timeout_secs == 0 {
            return Err(ImportError::configuration(
                "Connect timeout must be greater than 0 seconds",
            ));
        }

        if self.storage.server_selection_timeout_secs == 0 {
            return Err(ImportError::configuration(
                "Server selection timeout must be greater than 0 seconds",
            ));
        }

        Ok(())
    }
}

fn parse_env_number(key: &str, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|e| {
        ImportError::configuration(format!("Invalid {} value '{}': {}", key, value, e))
    })
}
