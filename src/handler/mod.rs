//! HTTP handler for the Stock Analysis Agent
//!
//! Organized into:
//! - `routes`: route definitions and shared state
//! - `middleware`: request logging and content-type enforcement
//!
//! Responses follow the wire contract exactly: `/analyze` returns the flat
//! `AnalysisResponse` object on success, and validation failures come back
//! as a 422 with a structured error body.

pub mod middleware;
pub mod routes;

pub use middleware::{content_type_middleware, request_logging_middleware};
pub use routes::{analyze, create_router, health_check, ApiError, AppState};

use serde::{Deserialize, Serialize};

/// Error body returned for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error information
    pub error: ErrorInfo,
    /// Unique request identifier for correlation
    pub request_id: String,
    /// Timestamp of the failure (ISO 8601)
    pub timestamp: String,
}

impl ErrorBody {
    pub fn new(error: ErrorInfo) -> Self {
        Self {
            error,
            request_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field that failed validation, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Process status, always "online" once serving
    pub status: String,
    /// Outcome of the startup data service ping
    pub database: DatabaseStatus,
    /// Agent version
    pub version: String,
}

/// Data service connectivity as observed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}
