//! Configuration handling for repo-compliance.
//!
//! An optional `repo-compliance.toml` supplies defaults for the command-line
//! flags. The file is found by searching from the working directory up to the
//! filesystem root; without one, built-in defaults apply.

use crate::core::error::{Error, Result};
use crate::core::executor::DEFAULT_TIMEOUT;
use crate::output::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "repo-compliance.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Report output settings.
    pub output: OutputConfig,
    /// Check settings.
    pub check: CheckConfig,
    /// Fix settings.
    pub fix: FixConfig,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// `text` or `json`.
    pub format: OutputFormat,
}

/// `[check]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Exit non-zero when any repository is non-compliant.
    pub strict: bool,
}

/// `[fix]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixConfig {
    /// Per-command timeout, humantime syntax (`30s`, `5m`).
    pub timeout: String,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            timeout: humantime::format_duration(DEFAULT_TIMEOUT).to_string(),
        }
    }
}

impl Config {
    /// Loads configuration or returns defaults if no file is found.
    pub fn load_or_default() -> Result<Self> {
        match Self::find_config_file() {
            Ok(path) => Self::load_from(&path),
            Err(Error::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io("read config", e))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config_parse_with_source("Failed to parse TOML", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Finds the configuration file by searching up from the working directory.
    pub fn find_config_file() -> Result<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| Error::io("get current dir", e))?;
        Self::find_config_file_from(&cwd)
    }

    /// Finds the configuration file by searching up from `start`.
    pub fn find_config_file_from(start: &Path) -> Result<PathBuf> {
        let mut current = Some(start);
        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Ok(config_path);
            }
            current = dir.parent();
        }

        Err(Error::ConfigNotFound {
            path: start.join(CONFIG_FILE_NAME),
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if humantime::parse_duration(&self.fix.timeout).is_err() {
            return Err(Error::ConfigInvalid {
                field: "fix.timeout".to_string(),
                message: format!("Invalid duration: {}", self.fix.timeout),
            });
        }

        Ok(())
    }

    /// Returns the configured output format.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    /// Returns the fix timeout, falling back to the default.
    #[must_use]
    pub fn fix_timeout(&self) -> Duration {
        humantime::parse_duration(&self.fix.timeout).unwrap_or_else(|_| {
            tracing::warn!(
                timeout = %self.fix.timeout,
                default_secs = DEFAULT_TIMEOUT.as_secs(),
                "Invalid timeout format, using default"
            );
            DEFAULT_TIMEOUT
        })
    }
}
