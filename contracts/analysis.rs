//! Analysis request/response contract types
//!
//! Both types are immutable value objects: constructed once, serialized,
//! discarded. `AnalysisRequest` can only be built through a path that
//! enforces the ticker invariant, so a constructed request is always
//! well-formed.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Anchored pattern a ticker symbol must match: 1 to 5 uppercase
/// ASCII letters, nothing else (case-sensitive, no surrounding whitespace).
pub const TICKER_PATTERN: &str = "^[A-Z]{1,5}$";

/// Conventional verdict labels.
///
/// The verdict field is an open string on the wire; these are the values
/// the placeholder engine emits.
pub mod verdict {
    pub const BUY: &str = "BUY";
    pub const SELL: &str = "SELL";
    pub const HOLD: &str = "HOLD";
    pub const STABLE: &str = "STABLE";
}

/// A validated analysis request.
///
/// The ticker field is private: the only constructors are [`AnalysisRequest::new`]
/// and the boundary-level `validate`, both of which reject anything that does
/// not match [`TICKER_PATTERN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    ticker: String,
}

impl AnalysisRequest {
    /// Construct a request, enforcing the ticker invariant.
    pub fn new(ticker: impl Into<String>) -> Result<Self, AnalysisError> {
        let ticker = ticker.into();
        if !crate::validation::ticker_is_valid(&ticker) {
            return Err(AnalysisError::validation(
                "ticker",
                "PATTERN_MISMATCH",
                format!(
                    "Ticker '{}' does not match required pattern {}",
                    ticker, TICKER_PATTERN
                ),
            ));
        }
        Ok(Self { ticker })
    }

    /// The validated ticker symbol, exactly as received.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

/// The analysis result returned to the caller.
///
/// No constraints are enforced on the numeric ranges or the verdict label;
/// scores are conventionally in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Ticker the analysis was produced for.
    pub ticker: String,
    /// Recommendation label (open string, see [`verdict`]).
    pub verdict: String,
    /// Overall confidence in the verdict.
    pub confidence: f64,
    /// Technical analysis score.
    pub technical_score: f64,
    /// Sentiment analysis score.
    pub sentiment_score: f64,
    /// Free-text explanation of the verdict.
    pub reasoning: String,
}

impl AnalysisResponse {
    /// Build a response from its parts. Accepts any values by design of the
    /// contract: range checking the scores is the producer's concern.
    pub fn new(
        ticker: impl Into<String>,
        verdict: impl Into<String>,
        confidence: f64,
        technical_score: f64,
        sentiment_score: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            verdict: verdict.into(),
            confidence,
            technical_score,
            sentiment_score,
            reasoning: reasoning.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_valid_ticker() {
        let request = AnalysisRequest::new("AAPL").unwrap();
        assert_eq!(request.ticker(), "AAPL");
    }

    #[test]
    fn test_request_rejects_invalid_ticker() {
        assert!(AnalysisRequest::new("aapl").is_err());
        assert!(AnalysisRequest::new("TOOLONG").is_err());
        assert!(AnalysisRequest::new("").is_err());
    }

    #[test]
    fn test_request_serializes_ticker_field() {
        let request = AnalysisRequest::new("AAPL").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "ticker": "AAPL" }));
    }

    #[test]
    fn test_response_constructor_accepts_any_values() {
        // The contract does not constrain scores or verdict.
        let response = AnalysisResponse::new("AAPL", "MOON", 7.5, -1.0, 42.0, "out of range");
        assert_eq!(response.verdict, "MOON");
        assert_eq!(response.confidence, 7.5);
    }

    #[test]
    fn test_response_serde_round_trip() {
        let response = AnalysisResponse::new(
            "TSLA",
            verdict::HOLD,
            0.62,
            0.55,
            0.7,
            "Placeholder reasoning",
        );
        let json = serde_json::to_string(&response).unwrap();
        let back: AnalysisResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
