//! Error types for repo-compliance.
//!
//! Check outcomes are never errors: a missing file or an unparsable
//! pre-commit config becomes a failing [`CheckResult`](crate::CheckResult).
//! This module covers the surrounding layers only (configuration, path
//! validation, directory listing, template writing, fix commands).

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in repo-compliance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Configuration file not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path where config was expected.
        path: PathBuf,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        /// Description of the parse error.
        message: String,
        /// Optional source error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    ConfigInvalid {
        /// Field name that is invalid.
        field: String,
        /// Description of why it's invalid.
        message: String,
    },

    // =========================================================================
    // Repository discovery errors
    // =========================================================================
    /// The path given on the command line does not exist.
    #[error("Path does not exist: {path}")]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A directory scan found no git repositories.
    #[error("No git repositories found in: {path}")]
    NoRepositories {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// The scan directory itself could not be listed.
    #[error("Failed to scan {path}: {message}")]
    ScanDir {
        /// Directory that was scanned.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    // =========================================================================
    // Process errors
    // =========================================================================
    /// A fix command could not be started.
    #[error("Failed to run command '{command}': {message}")]
    CommandSpawn {
        /// The command line.
        command: String,
        /// Error message.
        message: String,
    },

    // =========================================================================
    // I/O errors
    // =========================================================================
    /// File I/O error.
    #[error("I/O error: {message}")]
    Io {
        /// Description of what failed.
        message: String,
        /// Source error.
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Internal errors
    // =========================================================================
    /// Internal error (should never happen).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Creates a new configuration parse error with source.
    pub fn config_parse_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new I/O error with context.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Returns an exit code appropriate for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigNotFound { .. } | Self::ConfigParse { .. } | Self::ConfigInvalid { .. } => {
                78
            }, // EX_CONFIG
            Self::PathNotFound { .. } | Self::NoRepositories { .. } => 66, // EX_NOINPUT
            Self::CommandSpawn { .. } => 69,                              // EX_UNAVAILABLE
            Self::ScanDir { .. } | Self::Io { .. } => 74,                 // EX_IOERR
            Self::Internal { .. } => 1,
        }
    }
}
