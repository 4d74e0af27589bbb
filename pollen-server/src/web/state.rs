//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::ForecastCache;
use crate::provider::PollenSource;

/// Shared application state.
///
/// Generic over the source so tests can run the router against a mock.
pub struct AppState<S> {
    /// DWD forecast cache; also owns the source used for postal lookups
    pub cache: Arc<ForecastCache<S>>,
}

impl<S: PollenSource> AppState<S> {
    /// Create a new app state with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            cache: Arc::new(ForecastCache::new(source)),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}
