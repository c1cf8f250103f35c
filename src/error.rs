//! Error types for the Stock Analysis Agent
//!
//! One taxonomy for the whole agent: configuration errors are fatal at
//! startup, validation errors are recoverable per request, upstream errors
//! are logged and surfaced through the health flag only.

use thiserror::Error;

/// Main error type for analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Missing or invalid configuration (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request failed schema validation (recoverable, maps to 422)
    #[error("Validation failed on '{field}': {message}")]
    Validation {
        field: String,
        code: String,
        message: String,
    },

    /// Data service unreachable or unhealthy (never fatal at runtime)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        AnalysisError::Config(msg.into())
    }

    /// Create a validation error for a specific field
    pub fn validation(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        AnalysisError::Validation {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create an upstream error
    pub fn upstream(msg: impl Into<String>) -> Self {
        AnalysisError::Upstream(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        AnalysisError::Internal(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(self, AnalysisError::Validation { .. })
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Internal(format!("JSON error: {}", err))
    }
}

impl From<crate::client::ClientError> for AnalysisError {
    fn from(err: crate::client::ClientError) -> Self {
        AnalysisError::Upstream(err.to_string())
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
