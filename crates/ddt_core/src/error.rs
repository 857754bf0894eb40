//! Error types for ddt_core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ddt_core operations.
#[derive(Error, Debug)]
pub enum DdtError {
    /// The scenario workbook does not exist on disk.
    #[error("data file not found: {}", .0.display())]
    DataFileMissing(PathBuf),

    /// The workbook exists but does not contain the requested sheet.
    #[error("sheet '{}' not found in {}", name, path.display())]
    SheetNotFound {
        /// Sheet name that was requested
        name: String,
        /// Path to the workbook
        path: PathBuf,
    },

    /// The workbook could not be read or written.
    #[error("workbook error: {0}")]
    Workbook(String),

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl DdtError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DataFileMissing(_) => {
                Some("Run 'ddt prepare' to generate the scenario workbook.")
            }
            Self::SheetNotFound { .. } => Some(
                "Check the sheet name in ddt.toml, or run 'ddt prepare' to rebuild the workbook.",
            ),
            Self::ConfigError(_) => Some("Run 'ddt init --force' to restore a default ddt.toml."),
            _ => None,
        }
    }
}

/// Convenience Result type for ddt_core operations.
pub type Result<T> = std::result::Result<T, DdtError>;
