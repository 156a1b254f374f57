//! Error types and handling infrastructure for shelfview.
//!
//! Browsing itself never fails: an empty match set, showing more past the end, or an unknown
//! book id are all structural no-ops. Errors only come from the ambient layers around the
//! browser: reading the catalog, loading configuration and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for shelfview operations.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// File system related errors (file not found, permission denied, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file does not exist
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Catalog JSON could not be decoded
    #[error("Catalog could not be parsed: {message}")]
    CatalogParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog decoded but breaks one of its invariants
    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for shelfview operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

impl ShelfError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidCatalog error with a descriptive message
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        Self::CatalogParse {
            message: format!("line {}, column {}", err.line(), err.column()),
            source: err,
        }
    }
}
