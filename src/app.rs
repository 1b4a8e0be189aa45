//! Application state for the feriados TUI.
//!
//! The `App` struct is the process-wide mutable container holding
//! `{holidays, loading, error}` plus the theme and the displayed year.
//! It is updated by the holiday service through an mpsc channel drained
//! once per event-loop tick, and read by the renderer.

use anyhow::Result;
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::cache::{HolidayCache, KvStore};
use crate::config::Config;
use crate::holidays::{HolidayService, LoadResult};
use crate::models::Holiday;
use crate::ui::styles::Theme;

/// Buffer size for the load-result channel. A handful of in-flight
/// loads at most (one foreground, one background), so 8 is plenty.
const CHANNEL_BUFFER_SIZE: usize = 8;

/// Storage key for the persisted display theme ("light"/"dark").
const THEME_KEY: &str = "theme";

pub struct App {
    service: HolidayService,
    store: KvStore,
    updates_rx: mpsc::Receiver<LoadResult>,

    pub theme: Theme,
    pub year: i32,
    pub holidays: Vec<Holiday>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let store = KvStore::new(config.cache_dir()?)?;
        let cache = HolidayCache::new(store.clone());

        let api = match &config.api_base_url {
            Some(url) => ApiClient::with_base_url(url.clone())?,
            None => ApiClient::new()?,
        };

        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let service = HolidayService::new(api, cache, tx);

        let theme = match store.get::<Theme>(THEME_KEY) {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                debug!(error = %e, "Failed to load theme, using default");
                Theme::default()
            }
        };

        Ok(Self {
            service,
            store,
            updates_rx: rx,
            theme,
            year: Local::now().year(),
            holidays: Vec::new(),
            loading: false,
            error: None,
            last_updated: None,
        })
    }

    /// Today as a plain local calendar date. All "is it today yet"
    /// comparisons go through this so the time of day never leaks in.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Kick off a load for the current year. The result arrives through
    /// the update channel; the event loop keeps running meanwhile.
    pub fn start_load(&mut self, force_refresh: bool) {
        self.loading = true;
        self.error = None;
        self.service.spawn_load(self.year, force_refresh);
    }

    /// Drain completed loads and fold them into the visible state.
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.updates_rx.try_recv() {
            self.apply_load_result(result);
        }
    }

    fn apply_load_result(&mut self, result: LoadResult) {
        if result.year != self.year {
            // The user navigated away while this load was in flight.
            // The cache already took the write; the screen stays on the
            // year being viewed.
            debug!(result_year = result.year, current = self.year, "Ignoring stale load result");
            return;
        }
        if result.background {
            // Silent refresh: take the fresh data, leave loading/error
            // to whatever foreground load owns them.
            self.holidays = result.holidays;
            self.last_updated = result.fetched_at;
            return;
        }
        self.holidays = result.holidays;
        self.error = result.error;
        self.last_updated = result.fetched_at;
        self.loading = false;
    }

    pub fn switch_year(&mut self, delta: i32) {
        self.year += delta;
        self.holidays.clear();
        self.start_load(false);
    }

    /// Forced refresh, the TUI counterpart of pull-to-refresh.
    pub fn refresh(&mut self) {
        self.start_load(true);
    }

    /// Drop the cached slot and reload from the network.
    pub fn clear_cache_and_reload(&mut self) {
        self.service.clear_cache();
        self.start_load(true);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.label(), "Theme changed");
        if let Err(e) = self.store.set(THEME_KEY, &self.theme) {
            warn!(error = %e, "Failed to persist theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayKind;

    fn result_for(year: i32, background: bool) -> LoadResult {
        LoadResult {
            year,
            holidays: vec![Holiday {
                date: format!("{}-07-09", year).parse().unwrap(),
                name: "Día de la Independencia".to_string(),
                kind: HolidayKind::Fixed,
                note: None,
            }],
            error: None,
            from_cache: false,
            fetched_at: Some(Utc::now()),
            background,
        }
    }

    #[test]
    fn test_background_result_leaves_loading_and_error_alone() {
        let mut app = App::new().unwrap();
        app.year = 2025;
        app.loading = true;
        app.error = Some("Sin conexión a internet".to_string());

        // A silent refresh lands while a forced refresh is in flight:
        // data updates, spinner and error stay with the foreground load.
        app.apply_load_result(result_for(2025, true));
        assert_eq!(app.holidays.len(), 1);
        assert!(app.loading);
        assert_eq!(app.error.as_deref(), Some("Sin conexión a internet"));

        // The foreground result then settles the state.
        app.apply_load_result(result_for(2025, false));
        assert!(!app.loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_stale_year_result_is_ignored() {
        let mut app = App::new().unwrap();
        app.year = 2026;
        app.loading = true;

        app.apply_load_result(result_for(2025, false));
        assert!(app.holidays.is_empty());
        assert!(app.loading);
    }
}
