//! Hexal postal-code forecast client.

use std::time::Duration;

use crate::domain::{HexalDataset, PostalCode};

use super::error::ProviderError;
use super::{DEFAULT_TIMEOUT_SECS, checked_body};

/// Hexal XML interface; the postal code goes in the `plz` query parameter.
pub const DEFAULT_POSTAL_URL: &str =
    "http://www.allergie.hexal.de/pollenflug/xml-interface-neu/pollen_de_7tage.php";

/// Configuration for the Hexal client.
#[derive(Debug, Clone)]
pub struct HexalConfig {
    /// Endpoint URL, without the `plz` parameter
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HexalConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_POSTAL_URL.to_string(),
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

impl Default for HexalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Hexal seven-day postal-code forecast.
#[derive(Debug, Clone)]
pub struct HexalClient {
    http: reqwest::Client,
    url: String,
}

impl HexalClient {
    /// Create a new Hexal client.
    pub fn new(config: HexalConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and decode the forecast for one postal code.
    pub async fn fetch_postal(&self, zip: &PostalCode) -> Result<HexalDataset, ProviderError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("plz", zip.as_str())])
            .send()
            .await?;
        let body = checked_body(response).await?;
        decode_postal(&body)
    }
}

/// Decode a postal forecast document.
pub fn decode_postal(body: &str) -> Result<HexalDataset, ProviderError> {
    quick_xml::de::from_str(body).map_err(|e| ProviderError::Decode {
        message: e.to_string(),
    })
}
