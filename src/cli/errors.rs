//! CLI-specific error types
//!
//! Every CLI error terminates the process; main prints the message to
//! stderr and exits non-zero.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable, or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Init on a data directory that already holds a store
    #[error("Store already initialized")]
    AlreadyInitialized,

    /// Start without a store
    #[error("Store not initialized. Run 'shelfdb init' first.")]
    NotInitialized,

    /// Server failed to boot or run
    #[error("Failed to start server: {0}")]
    Boot(String),

    /// Store access failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::Boot(msg.into())
    }
}
