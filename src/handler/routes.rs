//! Route definitions for the Stock Analysis Agent
//!
//! - POST /analyze - validate a ticker and return a recommendation
//! - GET /health - process and data service status
//!
//! All routes return machine-readable JSON. Validation failures map to 422
//! and never crash the process; the data service flag is whatever the
//! startup ping observed.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

use super::{middleware, DatabaseStatus, ErrorBody, ErrorInfo, HealthResponse};
use crate::contracts::AnalysisResponse;
use crate::engine::AnalysisEngine;
use crate::error::AnalysisError;
use crate::validation;

/// Application state shared across all routes
pub struct AppState {
    /// Analysis engine (stateless, shared freely)
    pub engine: AnalysisEngine,
    /// Outcome of the startup data service ping (static flag, not live)
    pub database_connected: bool,
    /// Start time for uptime logging
    pub start_time: Instant,
}

impl AppState {
    pub fn new(database_connected: bool) -> Self {
        Self {
            engine: AnalysisEngine::new(),
            database_connected,
            start_time: Instant::now(),
        }
    }
}

/// API error types
#[derive(Debug)]
pub enum ApiError {
    ValidationFailed {
        field: String,
        code: String,
        message: String,
    },
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Validation {
                field,
                code,
                message,
            } => ApiError::ValidationFailed {
                field,
                code,
                message,
            },
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let info = match self {
            ApiError::ValidationFailed {
                field,
                code,
                message,
            } => ErrorInfo::new(code, message).with_field(field),
            ApiError::InternalError(message) => ErrorInfo::new("INTERNAL_ERROR", message),
        };

        (status, Json(ErrorBody::new(info))).into_response()
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health_check))
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::content_type_middleware,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// POST /analyze - Validate a ticker and return a recommendation
///
/// The body is taken untyped so the contract layer owns validation and the
/// error surface, rather than the JSON extractor.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let request = validation::validate(&body)?;
    let response = state.engine.analyze(&request);

    tracing::info!(
        ticker = %request.ticker(),
        verdict = %response.verdict,
        "Analysis served"
    );

    Ok(Json(response))
}

/// GET /health - Health check endpoint
///
/// `database` reflects the startup ping outcome; it is not a live check.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = if state.database_connected {
        DatabaseStatus::Connected
    } else {
        DatabaseStatus::Disconnected
    };

    tracing::debug!(
        uptime_s = state.start_time.elapsed().as_secs(),
        ?database,
        "Health check"
    );

    Json(HealthResponse {
        status: "online".to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
