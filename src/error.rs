//! Error types for glyphlog

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting a report
///
/// Export failures are recoverable; the caller may retry or pick another
/// directory.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The logs directory could not be created
    #[error("failed to create logs directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be written
    #[error("failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Path the failed operation targeted
    pub fn path(&self) -> &PathBuf {
        match self {
            ExportError::CreateDir { path, .. } | ExportError::Write { path, .. } => path,
        }
    }
}
