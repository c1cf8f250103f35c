//! Placeholder analysis engine
//!
//! Deterministic stand-in for the real scoring pipeline: the same ticker
//! always produces the same response, scores stay in [0, 1], and the
//! reasoning text says plainly that no real analysis happened. The HTTP
//! boundary only depends on `analyze`, so a real engine can replace this
//! without touching the contract.

use crate::contracts::{verdict, AnalysisRequest, AnalysisResponse};

/// Thresholds for mapping the blended score to a verdict label.
const BUY_THRESHOLD: f64 = 0.66;
const SELL_THRESHOLD: f64 = 0.33;

/// Stock analysis engine
pub struct AnalysisEngine;

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Produce a placeholder recommendation for a validated request.
    ///
    /// Stateless and deterministic: scores are derived from the ticker
    /// bytes, not from market data.
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResponse {
        let ticker = request.ticker();
        let seed: u32 = ticker.bytes().map(u32::from).sum();

        let technical_score = f64::from(seed % 71) / 70.0;
        let sentiment_score = f64::from(seed % 53) / 52.0;
        let blended = (technical_score + sentiment_score) / 2.0;

        let label = if blended >= BUY_THRESHOLD {
            verdict::BUY
        } else if blended <= SELL_THRESHOLD {
            verdict::SELL
        } else {
            verdict::HOLD
        };

        AnalysisResponse::new(
            ticker,
            label,
            blended,
            technical_score,
            sentiment_score,
            format!(
                "Placeholder analysis for {}: scores are derived from the \
                 symbol itself until the real scoring pipeline is wired in.",
                ticker
            ),
        )
    }
}
