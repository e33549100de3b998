//! Error types for sqlscribe

use thiserror::Error;

/// The main error type for sqlscribe operations
///
/// Rendering is permissive: an unset statement kind is `Ok(None)`, not an
/// error. The variants here cover sink failures and the execution hand-off.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller-supplied character sink refused a write
    #[error("SQL sink write failed: {0}")]
    Sink(#[from] std::fmt::Error),

    /// Execution was requested for a builder whose statement kind was never chosen
    #[error("No statement type chosen: call select, insert_into, update or delete_from first")]
    NoStatement,

    /// Failure reported by the execution collaborator
    #[error("Execution error: {message}")]
    Execution { message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for sqlscribe operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }
}
