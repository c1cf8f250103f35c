//! Agent configuration
//!
//! One explicit struct populated at startup and passed to whoever needs it.
//! Required values are checked eagerly: a missing data service URI aborts
//! startup with a descriptive error instead of failing on first use.

use crate::error::{AnalysisError, Result};

/// Default timeout for the startup data service ping, in milliseconds.
pub const DEFAULT_PING_TIMEOUT_MS: u64 = 5000;

/// Agent configuration, read once from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URI of the data service (required).
    pub database_url: String,
    /// Timeout for the startup ping in milliseconds.
    pub ping_timeout_ms: u64,
}

impl AppConfig {
    /// Build a configuration from explicit values, validating eagerly.
    pub fn new(database_url: impl Into<String>, ping_timeout_ms: u64) -> Result<Self> {
        let database_url = database_url.into();
        if database_url.trim().is_empty() {
            return Err(AnalysisError::config("database URL must not be empty"));
        }
        Ok(Self {
            database_url,
            ping_timeout_ms,
        })
    }

    /// Load the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; its absence is a fatal startup condition.
    /// `DB_PING_TIMEOUT_MS` is optional and falls back to
    /// [`DEFAULT_PING_TIMEOUT_MS`].
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            AnalysisError::config(
                "DATABASE_URL is not set; refusing to start without a data service URI",
            )
        })?;

        let ping_timeout_ms = std::env::var("DB_PING_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PING_TIMEOUT_MS);

        Self::new(database_url, ping_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_url() {
        let err = AppConfig::new("", DEFAULT_PING_TIMEOUT_MS).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));

        let err = AppConfig::new("   ", DEFAULT_PING_TIMEOUT_MS).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_new_accepts_url() {
        let config = AppConfig::new("http://localhost:9000", 250).unwrap();
        assert_eq!(config.database_url, "http://localhost:9000");
        assert_eq!(config.ping_timeout_ms, 250);
    }
}
