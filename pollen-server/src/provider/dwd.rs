//! DWD pollen forecast client.
//!
//! Fetches the national forecast as one JSON document. No retries; a
//! failed attempt is reported to the caller.

use std::time::Duration;

use crate::domain::Forecast;

use super::error::ProviderError;
use super::{DEFAULT_TIMEOUT_SECS, checked_body};

/// DWD open-data URL for the pollen forecast.
pub const DEFAULT_FORECAST_URL: &str =
    "http://opendata.dwd.de/climate_environment/health/alerts/s31fg.json";

/// Configuration for the DWD client.
#[derive(Debug, Clone)]
pub struct DwdConfig {
    /// Forecast document URL
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DwdConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_FORECAST_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DwdConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the DWD pollen forecast feed.
#[derive(Debug, Clone)]
pub struct DwdClient {
    http: reqwest::Client,
    url: String,
}

impl DwdClient {
    /// Create a new DWD client.
    pub fn new(config: DwdConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and decode the current forecast.
    pub async fn fetch_forecast(&self) -> Result<Forecast, ProviderError> {
        let response = self.http.get(&self.url).send().await?;
        let body = checked_body(response).await?;
        decode_forecast(&body)
    }
}

/// Decode a forecast document.
pub fn decode_forecast(body: &str) -> Result<Forecast, ProviderError> {
    serde_json::from_str(body).map_err(|e| ProviderError::Decode {
        message: e.to_string(),
    })
}
