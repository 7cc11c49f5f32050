//! Error types for the catalog crate.
//!
//! Loading and validating a catalog can fail; scoring never does. Everything
//! that touches files, JSON, or price labels reports through [`CatalogError`].

use thiserror::Error;

/// Errors that can occur while loading, parsing, or validating catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog or profile file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was readable but not valid JSON for the expected shape
    #[error("JSON error in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A price label such as "$15-25" or "Free" could not be understood
    #[error("Invalid price label: {0:?}")]
    InvalidPrice(String),

    /// A data field had an invalid value
    #[error("Invalid value for {field} on venture {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Two ventures in the same catalog share an identifier
    #[error("Duplicate venture id: {0}")]
    DuplicateId(String),

    /// Category label did not match any known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Profile validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
