//! Data service HTTP client
//!
//! The one process-wide external resource: a handle to the data service,
//! constructed once at startup and pinged to populate the health flag. All
//! persistence goes through HTTP APIs; this agent never opens a direct
//! database connection. The ping outcome is observed by `/health` as a
//! static flag, not re-checked per request.

use std::time::Duration;

/// HTTP client for the data service
pub struct DataServiceClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl DataServiceClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ping the data service health endpoint once.
    ///
    /// A failure here is informational: callers log it and record the
    /// outcome, they do not abort startup or stop serving requests.
    pub async fn ping(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Server { status, message })
        }
    }
}

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}
