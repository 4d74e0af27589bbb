//! Pollen data providers.
//!
//! Two independent upstream feeds:
//! - DWD (Deutscher Wetterdienst): national forecast by region, JSON,
//!   updated roughly daily. The document announces its own next update.
//! - Hexal: seven-day forecast by postal code, XML, fetched per request.
//!
//! Both are reached through [`PollenSource`] so the cache and the web
//! layer can run against [`MockPollenSource`] without network access.

mod dwd;
mod error;
mod hexal;
mod mock;

use std::future::Future;

pub use dwd::{DEFAULT_FORECAST_URL, DwdClient, DwdConfig, decode_forecast};
pub use error::ProviderError;
pub use hexal::{DEFAULT_POSTAL_URL, HexalClient, HexalConfig, decode_postal};
pub use mock::MockPollenSource;

use crate::domain::{Forecast, HexalDataset, PostalCode};

/// Timeout applied to every outbound request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Somewhere forecasts can be fetched from.
pub trait PollenSource: Send + Sync + 'static {
    /// Fetch the DWD regional forecast.
    fn fetch_forecast(&self) -> impl Future<Output = Result<Forecast, ProviderError>> + Send;

    /// Fetch the seven-day forecast for a postal code.
    fn fetch_postal(
        &self,
        zip: &PostalCode,
    ) -> impl Future<Output = Result<HexalDataset, ProviderError>> + Send;
}

/// The real providers, reached over HTTP.
#[derive(Debug, Clone)]
pub struct LivePollenSource {
    dwd: DwdClient,
    hexal: HexalClient,
}

impl LivePollenSource {
    /// Create clients for both feeds.
    pub fn new(dwd: DwdConfig, hexal: HexalConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            dwd: DwdClient::new(dwd)?,
            hexal: HexalClient::new(hexal)?,
        })
    }
}

impl PollenSource for LivePollenSource {
    async fn fetch_forecast(&self) -> Result<Forecast, ProviderError> {
        self.dwd.fetch_forecast().await
    }

    async fn fetch_postal(&self, zip: &PostalCode) -> Result<HexalDataset, ProviderError> {
        self.hexal.fetch_postal(zip).await
    }
}

/// Read a response body, turning non-success statuses into errors.
async fn checked_body(response: reqwest::Response) -> Result<String, ProviderError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            message: body.chars().take(500).collect(),
        });
    }

    Ok(response.text().await?)
}

/// Local HTTP server standing in for a provider in client tests.
#[cfg(test)]
pub(crate) mod stub {
    use axum::Router;
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port and return its base URL.
    pub async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }
}
