//! Caching layer for the DWD forecast.
//!
//! DWD publishes one forecast document and says in it when the next one is
//! due (`next_update`). We hold exactly one document and serve it until that
//! time passes; there is no TTL of our own and nothing to evict.
//!
//! Refreshes are lazy (triggered by a request that finds the slot stale)
//! and single-flight: concurrent requests during a miss wait for the one
//! in-flight fetch and receive its result instead of issuing their own.
//! That holds for failures too, so a slow or dead provider costs one
//! timeout per burst of requests rather than one per request.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, NaiveDateTime};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::{Forecast, TimestampParseError, parse_provider_timestamp};
use crate::provider::{PollenSource, ProviderError};

/// The cached triplet. Replaced as a whole, never patched.
#[derive(Debug, Clone)]
struct CacheEntry {
    forecast: Arc<Forecast>,
    last_update: NaiveDateTime,
    next_update: NaiveDateTime,
}

impl CacheEntry {
    /// Whether the entry may still be served at `now`.
    fn is_fresh_at(&self, now: NaiveDateTime) -> bool {
        self.next_update > now
    }

    fn snapshot(&self) -> ForecastSnapshot {
        ForecastSnapshot {
            forecast: self.forecast.clone(),
            last_update: Some(self.last_update),
            next_update: Some(self.next_update),
        }
    }
}

/// A forecast together with the update times the cache holds.
///
/// The timestamps come from the cache, not from `forecast`: when a fresh
/// document's timestamps can't be parsed, the document is handed out
/// uncached and the timestamps are those of the previous entry, if any.
#[derive(Debug, Clone)]
pub struct ForecastSnapshot {
    pub forecast: Arc<Forecast>,
    pub last_update: Option<NaiveDateTime>,
    pub next_update: Option<NaiveDateTime>,
}

/// Outcome of a fetch, handed to every caller that waited on it.
pub type RefreshResult = Result<ForecastSnapshot, Arc<ProviderError>>;

/// The most recent fetch attempt.
#[derive(Debug, Default)]
struct Attempt {
    outcome: Option<RefreshResult>,
}

/// Single-slot forecast cache in front of a [`PollenSource`].
pub struct ForecastCache<S> {
    source: S,
    slot: RwLock<Option<CacheEntry>>,

    /// Held for the duration of a fetch so only one runs at a time.
    attempt: Mutex<Attempt>,

    /// Number of completed fetch attempts. Bumped while `attempt` is held.
    attempts: AtomicU64,
}

impl<S: PollenSource> ForecastCache<S> {
    /// Create an empty cache. The first `get` always fetches.
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot: RwLock::new(None),
            attempt: Mutex::new(Attempt::default()),
            attempts: AtomicU64::new(0),
        }
    }

    /// Get the forecast, refreshing it if the provider's announced update
    /// time has passed.
    ///
    /// Provider timestamps are wall-clock times without a zone, so they are
    /// compared against local wall-clock time.
    pub async fn get(&self) -> RefreshResult {
        self.get_at(Local::now().naive_local()).await
    }

    /// [`get`](Self::get) with an explicit current time.
    ///
    /// Callers that queue up behind an in-flight fetch get that fetch's
    /// result, success or failure, instead of starting another.
    pub async fn get_at(&self, now: NaiveDateTime) -> RefreshResult {
        if let Some(snapshot) = self.fresh_at(now).await {
            debug!("serving pollen forecast from cache");
            return Ok(snapshot);
        }

        let seen = self.attempts.load(Ordering::Acquire);
        let mut attempt = self.attempt.lock().await;

        if self.attempts.load(Ordering::Acquire) != seen {
            if let Some(outcome) = &attempt.outcome {
                debug!("sharing result of concurrent pollen forecast fetch");
                return outcome.clone();
            }
        }

        if let Some(snapshot) = self.fresh_at(now).await {
            return Ok(snapshot);
        }

        self.run_attempt(&mut attempt).await
    }

    /// Fetch a new forecast regardless of freshness.
    ///
    /// On failure the cached entry is left untouched.
    pub async fn refresh(&self) -> RefreshResult {
        let mut attempt = self.attempt.lock().await;
        self.run_attempt(&mut attempt).await
    }

    /// The cached entry, without fetching. `None` until a fetch with
    /// readable timestamps has succeeded.
    pub async fn cached(&self) -> Option<ForecastSnapshot> {
        self.slot.read().await.as_ref().map(CacheEntry::snapshot)
    }

    /// Access the underlying source for requests that bypass the cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    async fn fresh_at(&self, now: NaiveDateTime) -> Option<ForecastSnapshot> {
        self.slot
            .read()
            .await
            .as_ref()
            .filter(|entry| entry.is_fresh_at(now))
            .map(CacheEntry::snapshot)
    }

    async fn run_attempt(&self, attempt: &mut Attempt) -> RefreshResult {
        let outcome = self.fetch_and_store().await.map_err(Arc::new);
        attempt.outcome = Some(outcome.clone());
        self.attempts.fetch_add(1, Ordering::Release);
        outcome
    }

    /// Fetch and, if the timestamps parse, replace the slot.
    ///
    /// Callers must hold `attempt`.
    async fn fetch_and_store(&self) -> Result<ForecastSnapshot, ProviderError> {
        let forecast = match self.source.fetch_forecast().await {
            Ok(forecast) => Arc::new(forecast),
            Err(e) => {
                warn!(error = %e, "failed to fetch pollen forecast");
                return Err(e);
            }
        };

        match parse_update_times(&forecast) {
            Ok((last_update, next_update)) => {
                info!(
                    last_update = %last_update.format("%Y-%m-%d %H:%M"),
                    next_update = %next_update.format("%Y-%m-%d %H:%M"),
                    regions = forecast.content.len(),
                    "loaded new pollen forecast from DWD"
                );
                let entry = CacheEntry {
                    forecast,
                    last_update,
                    next_update,
                };
                let snapshot = entry.snapshot();
                *self.slot.write().await = Some(entry);
                Ok(snapshot)
            }
            Err(e) => {
                // The document is still served, but nothing is cached, so
                // the next request fetches again.
                warn!(error = %e, "not caching pollen forecast");
                let slot = self.slot.read().await;
                Ok(ForecastSnapshot {
                    forecast,
                    last_update: slot.as_ref().map(|entry| entry.last_update),
                    next_update: slot.as_ref().map(|entry| entry.next_update),
                })
            }
        }
    }
}

fn parse_update_times(
    forecast: &Forecast,
) -> Result<(NaiveDateTime, NaiveDateTime), TimestampParseError> {
    let last = parse_provider_timestamp("last_update", &forecast.last_update)?;
    let next = parse_provider_timestamp("next_update", &forecast.next_update)?;
    Ok((last, next))
}
