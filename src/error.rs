//! Error handling for config generation and parser launch.
//!
//! Provides error types with context for configuration validation,
//! config file writing and process handoff failures.

use crate::validation::Violation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {} problem(s) found", .violations.len())]
    InvalidConfiguration { violations: Vec<Violation> },

    #[error("destination file already exists: {path}")]
    DestinationExists { path: PathBuf },

    #[error("destination file direct parent does not exist: {path}")]
    DestinationParentMissing { path: PathBuf },

    #[error("destination file direct parent is not a directory: {path}")]
    DestinationParentNotDirectory { path: PathBuf },

    #[error("{key} cannot be written to the config file: {reason}")]
    UnrepresentablePath { key: &'static str, reason: String },

    #[error("config file would be {size} bytes, the parser reads at most {limit}")]
    ConfigTooLarge { size: usize, limit: usize },

    #[error("failed to open file for writing: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not execute the process {path}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    /// Create a write failure for the given destination
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a launch failure for the given executable
    pub fn launch(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Launch {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
