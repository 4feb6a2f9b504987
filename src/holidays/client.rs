//! Upstream holiday API client.
//!
//! # Responsibilities
//! - Issue the single GET against the configured holidays endpoint
//! - Enforce the upstream timeout
//! - Classify failures (status, timeout, transport, invalid body)
//!
//! # Design Decisions
//! - No retries and no caching: one call per inbound request
//! - Non-200 bodies are kept as raw text for pass-through
//! - The API key is sent as a query parameter and never logged

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::schema::UpstreamConfig;
use crate::holidays::error::UpstreamError;
use crate::holidays::types::UpstreamPayload;

/// Source of upstream holiday data.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch the raw holiday payload for one country and year.
    async fn fetch_holidays(
        &self,
        country: &str,
        year: &str,
        api_key: &str,
    ) -> Result<UpstreamPayload, UpstreamError>;
}

/// HTTP client for the Calendarific holidays endpoint.
#[derive(Debug, Clone)]
pub struct CalendarificClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CalendarificClient {
    /// Create a client for the configured endpoint and timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout,
        })
    }
}

#[async_trait]
impl HolidaySource for CalendarificClient {
    async fn fetch_holidays(
        &self,
        country: &str,
        year: &str,
        api_key: &str,
    ) -> Result<UpstreamPayload, UpstreamError> {
        tracing::debug!(
            upstream = %self.base_url,
            country = %country,
            year = %year,
            timeout_secs = self.timeout.as_secs(),
            "Fetching holidays from upstream"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("api_key", api_key), ("country", country), ("year", year)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::InvalidBody(e.to_string()))
    }
}
