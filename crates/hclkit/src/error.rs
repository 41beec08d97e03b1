//! Error types for HCL value handling.

use thiserror::Error;

/// Errors that can occur while rendering or loading values.
#[derive(Debug, Error)]
pub enum Error {
    /// The value has no HCL literal representation
    #[error("value has no literal representation: {reason}")]
    Unrepresentable {
        /// Why the value cannot be rendered (e.g. a non-finite number)
        reason: String,
    },

    /// JSON parsing error while loading a captured value tree
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an [`Error::Unrepresentable`] with the given reason.
    pub fn unrepresentable(reason: impl Into<String>) -> Self {
        Error::Unrepresentable {
            reason: reason.into(),
        }
    }
}

/// Result type for HCL value operations.
pub type Result<T> = std::result::Result<T, Error>;
