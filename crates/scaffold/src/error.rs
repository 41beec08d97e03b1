//! Error types for scaffolding operations.
//!
//! Generation is all-or-nothing: any error aborts with no partial output,
//! because partial configuration text would be misleading to present as
//! scaffolding.

use thiserror::Error;

/// Errors that can occur while loading schemas or scaffolding configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource type is not present in the catalog
    #[error("unknown resource type '{requested}' (available: {available})")]
    UnknownType {
        /// The type that was asked for
        requested: String,
        /// Comma-separated list of types the catalog does define
        available: String,
    },

    /// A schema definition is internally inconsistent
    #[error("invalid schema at {path}: {reason}")]
    InvalidSchema {
        /// Dotted path to the offending attribute or block
        path: String,
        /// What is wrong with it
        reason: String,
    },

    /// A bound value could not be rendered as a literal
    #[error(transparent)]
    Value(#[from] hclkit::Error),

    /// Schema or capture file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, Error>;
