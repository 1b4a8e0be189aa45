//! The holiday cache client: single source of truth for "holidays of
//! year Y".
//!
//! Combines the remote fetch with the local single-slot cache:
//!
//! - fresh cache (< 365 days) is served immediately with no network
//!   call; if it is over a week old, a silent background refresh is
//!   spawned that overwrites the slot on success and is ignored on
//!   failure
//! - otherwise the year is fetched, normalized, cached, and returned
//! - a failed fetch falls back to the cached entry regardless of age;
//!   the error message is surfaced only for explicit refreshes, and
//!   with no cache at all the result is empty with the message attached
//!
//! There is no deduplication or cancellation: two simultaneous forced
//! refreshes issue two fetches and the last response wins in the cache.
//! That race is harmless - the data is read-only and idempotent.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::cache::{CacheEntry, HolidayCache};
use crate::models::Holiday;

/// Outcome of a load, mirrored into the app's reactive state.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub year: i32,
    pub holidays: Vec<Holiday>,
    /// User-facing message, present only when the caller should see it.
    pub error: Option<String>,
    pub from_cache: bool,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Produced by a silent background refresh. Such results carry new
    /// data but must not disturb the loading/error state a foreground
    /// load owns.
    pub background: bool,
}

impl LoadResult {
    fn from_entry(entry: CacheEntry, error: Option<String>) -> Self {
        Self {
            year: entry.year,
            holidays: entry.holidays,
            error,
            from_cache: true,
            fetched_at: Some(entry.fetched_at),
            background: false,
        }
    }
}

/// Cache-backed holiday client. Clone is cheap; clones share the HTTP
/// connection pool, the cache directory, and the update channel.
#[derive(Clone)]
pub struct HolidayService {
    api: ApiClient,
    cache: HolidayCache,
    updates_tx: mpsc::Sender<LoadResult>,
}

impl HolidayService {
    pub fn new(api: ApiClient, cache: HolidayCache, updates_tx: mpsc::Sender<LoadResult>) -> Self {
        Self {
            api,
            cache,
            updates_tx,
        }
    }

    /// Get the holidays of a year, cache-first.
    pub async fn get_holidays(&self, year: i32, force_refresh: bool) -> LoadResult {
        if !force_refresh {
            if let Some(entry) = self.cache.load_for_year(year) {
                let now = Utc::now();
                if entry.is_fresh(now) {
                    if entry.wants_background_refresh(now) {
                        self.spawn_background_refresh(year);
                    }
                    debug!(year, "Serving holidays from cache");
                    return LoadResult::from_entry(entry, None);
                }
            }
        }

        match self.api.fetch_holidays(year).await {
            Ok(holidays) => {
                let entry = CacheEntry::new(year, holidays.clone());
                if let Err(e) = self.cache.save(&entry) {
                    warn!(year, error = %e, "Failed to cache holidays");
                }
                info!(year, count = holidays.len(), "Fetched holidays");
                LoadResult {
                    year,
                    holidays,
                    error: None,
                    from_cache: false,
                    fetched_at: Some(entry.fetched_at),
                    background: false,
                }
            }
            Err(err) => {
                warn!(year, error = %err, "Holiday fetch failed");
                match self.cache.load_for_year(year) {
                    // Stale cache beats nothing. Only an explicit
                    // refresh surfaces the failure alongside it.
                    Some(entry) => {
                        let message =
                            force_refresh.then(|| err.user_message().to_string());
                        LoadResult::from_entry(entry, message)
                    }
                    None => LoadResult {
                        year,
                        holidays: Vec::new(),
                        error: Some(err.user_message().to_string()),
                        from_cache: false,
                        fetched_at: None,
                        background: false,
                    },
                }
            }
        }
    }

    /// Force a refresh, equivalent to `get_holidays(year, true)`.
    pub async fn refresh(&self, year: i32) -> LoadResult {
        self.get_holidays(year, true).await
    }

    /// Spawn a load and deliver its result through the update channel.
    /// Used by the UI so the event loop never blocks on the network.
    pub fn spawn_load(&self, year: i32, force_refresh: bool) {
        let service = self.clone();
        let tx = self.updates_tx.clone();
        tokio::spawn(async move {
            let result = service.get_holidays(year, force_refresh).await;
            if tx.send(result).await.is_err() {
                debug!("Update channel closed, dropping load result");
            }
        });
    }

    /// Delete the cached slot. The caller is expected to follow up with
    /// a forced load.
    pub fn clear_cache(&self) {
        if let Err(e) = self.cache.clear() {
            warn!(error = %e, "Failed to clear holiday cache");
        }
    }

    /// Silent refresh: overwrite the cache on success and notify the
    /// app; failures are logged and never surfaced.
    fn spawn_background_refresh(&self, year: i32) {
        let api = self.api.clone();
        let cache = self.cache.clone();
        let tx = self.updates_tx.clone();

        info!(year, "Starting background holiday refresh");
        tokio::spawn(async move {
            match api.fetch_holidays(year).await {
                Ok(holidays) => {
                    let entry = CacheEntry::new(year, holidays);
                    if let Err(e) = cache.save(&entry) {
                        warn!(year, error = %e, "Failed to cache background refresh");
                        return;
                    }
                    let result = LoadResult {
                        background: true,
                        ..LoadResult::from_entry(entry, None)
                    };
                    if tx.send(result).await.is_err() {
                        debug!("Update channel closed, dropping background result");
                    }
                }
                Err(err) => {
                    debug!(year, error = %err, "Background refresh failed, keeping cache");
                }
            }
        });
    }
}
