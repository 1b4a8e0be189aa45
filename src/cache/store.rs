use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::Holiday;

/// Ceiling on cache usability. Within a year the cached list is still
/// authoritative for its own year; beyond that a fetch is required.
const CACHE_MAX_AGE_DAYS: i64 = 365;

/// After a week the cache is served but a silent background refresh is
/// triggered to pick up decree changes (bridge days get announced
/// mid-year).
const CACHE_REFRESH_AFTER_DAYS: i64 = 7;

/// Storage key for the single holiday slot.
const HOLIDAYS_KEY: &str = "feriados";

/// The single cached slot: one year's holidays plus the fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub year: i32,
    pub holidays: Vec<Holiday>,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(year: i32, holidays: Vec<Holiday>) -> Self {
        Self {
            year,
            holidays,
            fetched_at: Utc::now(),
        }
    }

    fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }

    /// Fresh entries are served without a network call on the critical
    /// path. A negative age (clock skew) counts as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.age(now) < Duration::days(CACHE_MAX_AGE_DAYS)
    }

    /// Whether a fresh entry is old enough to warrant a silent
    /// background refresh.
    pub fn wants_background_refresh(&self, now: DateTime<Utc>) -> bool {
        self.age(now) > Duration::days(CACHE_REFRESH_AFTER_DAYS)
    }
}

/// File-backed key/value store: one JSON file per key.
#[derive(Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", key))?;

        let value: T = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", key))?;

        Ok(Some(value))
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        std::fs::write(self.key_path(key), contents)
            .with_context(|| format!("Failed to write cache file: {}", key))?;
        Ok(())
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to delete cache file: {}", key))?;
        }
        Ok(())
    }
}

/// Typed access to the holiday slot. Clones share the same directory,
/// so a background task's write is visible to subsequent reads.
#[derive(Clone)]
pub struct HolidayCache {
    store: KvStore,
}

impl HolidayCache {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Load the slot if it holds the requested year. A corrupt or
    /// unreadable file reads as a miss rather than an error.
    pub fn load_for_year(&self, year: i32) -> Option<CacheEntry> {
        match self.store.get::<CacheEntry>(HOLIDAYS_KEY) {
            Ok(Some(entry)) if entry.year == year => Some(entry),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "Failed to load holiday cache");
                None
            }
        }
    }

    /// Overwrite the slot, evicting whatever year it held before.
    pub fn save(&self, entry: &CacheEntry) -> Result<()> {
        self.store.set(HOLIDAYS_KEY, entry)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.delete(HOLIDAYS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayKind;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> KvStore {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "feriados-test-{}-{}",
            std::process::id(),
            seq
        ));
        KvStore::new(dir).unwrap()
    }

    fn sample_entry(year: i32) -> CacheEntry {
        CacheEntry::new(
            year,
            vec![Holiday {
                date: format!("{}-01-01", year).parse().unwrap(),
                name: "Año Nuevo".to_string(),
                kind: HolidayKind::Fixed,
                note: None,
            }],
        )
    }

    #[test]
    fn test_kv_store_roundtrip() {
        let store = temp_store();
        assert!(store.get::<Vec<i32>>("missing").unwrap().is_none());

        store.set("nums", &vec![1, 2, 3]).unwrap();
        assert_eq!(store.get::<Vec<i32>>("nums").unwrap(), Some(vec![1, 2, 3]));

        store.delete("nums").unwrap();
        assert!(store.get::<Vec<i32>>("nums").unwrap().is_none());
        // Deleting a missing key is fine
        store.delete("nums").unwrap();
    }

    #[test]
    fn test_fresh_entry_is_served() {
        let entry = sample_entry(2025);
        let now = Utc::now();
        assert!(entry.is_fresh(now));
        assert!(!entry.wants_background_refresh(now));
    }

    #[test]
    fn test_week_old_entry_wants_background_refresh() {
        let mut entry = sample_entry(2025);
        entry.fetched_at = Utc::now() - Duration::days(8);
        let now = Utc::now();
        assert!(entry.is_fresh(now));
        assert!(entry.wants_background_refresh(now));
    }

    #[test]
    fn test_year_old_entry_is_not_fresh() {
        let mut entry = sample_entry(2025);
        entry.fetched_at = Utc::now() - Duration::days(366);
        assert!(!entry.is_fresh(Utc::now()));
    }

    #[test]
    fn test_clock_skew_reads_as_fresh() {
        let mut entry = sample_entry(2025);
        entry.fetched_at = Utc::now() + Duration::hours(1);
        let now = Utc::now();
        assert!(entry.is_fresh(now));
        assert!(!entry.wants_background_refresh(now));
    }

    #[test]
    fn test_single_slot_evicts_previous_year() {
        let cache = HolidayCache::new(temp_store());
        cache.save(&sample_entry(2024)).unwrap();
        assert!(cache.load_for_year(2024).is_some());

        // Saving a new year overwrites the slot
        cache.save(&sample_entry(2025)).unwrap();
        assert!(cache.load_for_year(2024).is_none());
        let entry = cache.load_for_year(2025).unwrap();
        assert_eq!(entry.year, 2025);
        assert_eq!(entry.holidays.len(), 1);
    }

    #[test]
    fn test_clear_empties_slot() {
        let cache = HolidayCache::new(temp_store());
        cache.save(&sample_entry(2025)).unwrap();
        cache.clear().unwrap();
        assert!(cache.load_for_year(2025).is_none());
    }
}
