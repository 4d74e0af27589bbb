//! Mock pollen source for testing without network access.
//!
//! Serves payloads held in memory, optionally loaded from a directory:
//!
//! ```text
//! <dir>/forecast.json     DWD forecast document
//! <dir>/zip/53797.xml     Hexal document for postal code 53797
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::domain::{Forecast, HexalDataset, PostalCode};

use super::error::ProviderError;
use super::{PollenSource, decode_forecast, decode_postal};

/// Mock source that serves canned payloads.
///
/// Counts forecast fetches so tests can tell cache hits from refreshes.
#[derive(Debug)]
pub struct MockPollenSource {
    forecast: RwLock<Result<Forecast, String>>,
    postal: RwLock<HashMap<PostalCode, HexalDataset>>,
    forecast_fetches: AtomicUsize,
}

impl MockPollenSource {
    /// Create a mock that serves the given forecast.
    pub fn new(forecast: Forecast) -> Self {
        Self {
            forecast: RwLock::new(Ok(forecast)),
            postal: RwLock::new(HashMap::new()),
            forecast_fetches: AtomicUsize::new(0),
        }
    }

    /// Load payloads from a directory.
    ///
    /// `forecast.json` is required; the `zip` subdirectory is optional.
    /// Files that don't decode are errors rather than being skipped.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let dir = dir.as_ref();

        let forecast_path = dir.join("forecast.json");
        let json = std::fs::read_to_string(&forecast_path).map_err(|e| {
            ProviderError::Mock(format!("failed to read {}: {}", forecast_path.display(), e))
        })?;
        let forecast = decode_forecast(&json)?;

        let mut postal = HashMap::new();
        let zip_dir = dir.join("zip");
        if zip_dir.is_dir() {
            let entries = std::fs::read_dir(&zip_dir).map_err(|e| {
                ProviderError::Mock(format!("failed to read {}: {}", zip_dir.display(), e))
            })?;

            for entry in entries {
                let path = entry
                    .map_err(|e| ProviderError::Mock(format!("failed to read entry: {e}")))?
                    .path();
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("xml") {
                    continue;
                }

                // "53797.xml" -> 53797
                let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
                let zip = PostalCode::parse(stem).map_err(|e| {
                    ProviderError::Mock(format!("bad file name {}: {}", path.display(), e))
                })?;

                let xml = std::fs::read_to_string(&path).map_err(|e| {
                    ProviderError::Mock(format!("failed to read {}: {}", path.display(), e))
                })?;
                postal.insert(zip, decode_postal(&xml)?);
            }
        }

        Ok(Self {
            forecast: RwLock::new(Ok(forecast)),
            postal: RwLock::new(postal),
            forecast_fetches: AtomicUsize::new(0),
        })
    }

    /// Replace the forecast served by subsequent fetches.
    pub async fn set_forecast(&self, forecast: Forecast) {
        *self.forecast.write().await = Ok(forecast);
    }

    /// Make subsequent forecast fetches fail with `message`.
    pub async fn fail_forecast(&self, message: impl Into<String>) {
        *self.forecast.write().await = Err(message.into());
    }

    /// Serve `dataset` for `zip`.
    pub async fn insert_postal(&self, zip: PostalCode, dataset: HexalDataset) {
        self.postal.write().await.insert(zip, dataset);
    }

    /// Number of forecast fetches so far, successful or not.
    pub fn forecast_fetches(&self) -> usize {
        self.forecast_fetches.load(Ordering::SeqCst)
    }
}

impl PollenSource for MockPollenSource {
    async fn fetch_forecast(&self) -> Result<Forecast, ProviderError> {
        self.forecast_fetches.fetch_add(1, Ordering::SeqCst);
        // Give concurrent callers a chance to pile up, like a real request.
        tokio::task::yield_now().await;

        self.forecast
            .read()
            .await
            .clone()
            .map_err(ProviderError::Mock)
    }

    async fn fetch_postal(&self, zip: &PostalCode) -> Result<HexalDataset, ProviderError> {
        // Unknown postal codes get an empty document, as the provider does.
        Ok(self
            .postal
            .read()
            .await
            .get(zip)
            .cloned()
            .unwrap_or_default())
    }
}
