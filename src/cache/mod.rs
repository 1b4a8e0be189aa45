//! Local caching module for offline data access.
//!
//! Holidays are persisted as a single JSON slot under the user's cache
//! directory. The slot holds one year at a time; fetching another year
//! overwrites it. Entries are considered usable for up to a year and
//! are refreshed in the background after a week.

pub mod store;

pub use store::{CacheEntry, HolidayCache, KvStore};
