//! Request validation
//!
//! The one enforcement point between untrusted input and the typed
//! contract: a body either yields a well-formed [`AnalysisRequest`] or a
//! structured validation error naming the field and the failure. Pure and
//! stateless, so it is safe to call from any number of request contexts
//! without coordination.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::contracts::{AnalysisRequest, TICKER_PATTERN};
use crate::error::{AnalysisError, Result};

static TICKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TICKER_PATTERN).expect("ticker pattern is a valid regex"));

/// Check a candidate ticker against the anchored pattern.
pub fn ticker_is_valid(ticker: &str) -> bool {
    TICKER_RE.is_match(ticker)
}

/// Validate an untyped request body into an [`AnalysisRequest`].
///
/// The `ticker` field must be present, must be a string, and must match
/// `^[A-Z]{1,5}$` exactly. Each failure mode carries its own error code so
/// callers can report which constraint was violated.
pub fn validate(raw: &Value) -> Result<AnalysisRequest> {
    let Some(value) = raw.get("ticker") else {
        return Err(AnalysisError::validation(
            "ticker",
            "REQUIRED_FIELD_MISSING",
            "Required field 'ticker' is missing",
        ));
    };

    let Some(ticker) = value.as_str() else {
        return Err(AnalysisError::validation(
            "ticker",
            "TYPE_MISMATCH",
            "Field 'ticker' must be a string",
        ));
    };

    AnalysisRequest::new(ticker)
}
