//! Stock Analysis Agent
//!
//! A small HTTP service that validates a stock ticker and returns a
//! placeholder recommendation, backed by a data service that is pinged
//! once at startup for the health flag.
//!
//! # Design Principles
//! - Deterministic: same ticker always produces the same response
//! - Stateless: validation and analysis share no mutable state
//! - Fail fast: missing configuration aborts startup, an unreachable data
//!   service never does
//!
//! ## Architecture
//!
//! 1. **Contracts** (`contracts/`): request/response value objects and the
//!    ticker invariant.
//! 2. **Validation** (`validation`): the enforcement point between untrusted
//!    bodies and the typed contract.
//! 3. **Engine** (`engine/`): deterministic placeholder scoring.
//! 4. **Handler** (`handler/`): axum routes, middleware, and error mapping.
//! 5. **Client** (`client/`): HTTP client for the data service ping.
//! 6. **Config** (`config`): explicit configuration struct, loaded once.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod handler;
pub mod validation;

// Contracts module - located at ../contracts relative to src/
#[path = "../contracts/mod.rs"]
pub mod contracts;

pub use client::{ClientError, DataServiceClient};
pub use config::AppConfig;
pub use contracts::{verdict, AnalysisRequest, AnalysisResponse, TICKER_PATTERN};
pub use engine::AnalysisEngine;
pub use error::{AnalysisError, Result};
pub use handler::{
    analyze, create_router, health_check, ApiError, AppState, DatabaseStatus, ErrorBody,
    ErrorInfo, HealthResponse,
};
pub use validation::{ticker_is_valid, validate};

/// Agent version (from Cargo.toml)
pub const AGENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Agent identifier
pub const AGENT_ID: &str = "stock-analysis-agent";
