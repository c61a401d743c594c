//! Error types for pets.

use thiserror::Error;

/// Errors produced by the storage layer, the record facade and the editor.
#[derive(Debug, Error)]
pub enum PetsError {
    /// `SQLite` failure, including constraint violations.
    #[error("Database error: {0}")]
    Database(String),

    /// A record was rejected before reaching the database.
    #[error("Invalid pet: {0}")]
    Validation(String),

    /// A locator could not be parsed or is not valid for the operation.
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for PetsError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
