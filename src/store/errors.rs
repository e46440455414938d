//! # Store Errors
//!
//! Error types for the store accessor.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures against the store file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store file is missing or unreadable
    #[error("Failed to read store file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Store file content is not a valid serialized collection
    #[error("Store file {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Store file cannot be written
    #[error("Failed to write store file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Read failure for the given store path
    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Format failure for the given store path
    pub fn format(path: &Path, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Write failure for the given store path
    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this failure occurred while loading (format errors are a
    /// specialization of the read failure class)
    pub fn is_read_failure(&self) -> bool {
        matches!(self, StoreError::Read { .. } | StoreError::Format { .. })
    }
}
