//! # Catalog Errors
//!
//! Error types for catalog operations.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog operation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    // ==================
    // Validation Errors (400)
    // ==================
    /// Request body is not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(&'static str),

    /// Required field absent from a create request
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field present but with an unusable value
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    /// Create with an id already in the collection
    #[error("A book with id '{0}' already exists")]
    DuplicateId(String),

    // ==================
    // Lookup Errors (404)
    // ==================
    /// No book with the requested id
    #[error("Book not found: {0}")]
    NotFound(String),

    /// List on a collection with zero records
    #[error("No books in the catalog")]
    EmptyCatalog,

    // ==================
    // Store Errors (500)
    // ==================
    /// Store read/write failure; fatal to the request
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::InvalidBody(_)
            | CatalogError::MissingField(_)
            | CatalogError::InvalidField { .. }
            | CatalogError::DuplicateId(_) => 400,

            CatalogError::NotFound(_) | CatalogError::EmptyCatalog => 404,

            CatalogError::Store(_) => 500,
        }
    }
}
