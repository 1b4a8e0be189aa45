//! Data models for Argentine public holidays.
//!
//! - `Holiday`: a single feriado with its calendar date, name, and kind
//! - `HolidayKind`: fixed ("inamovible") vs movable ("trasladable")
//! - `HolidayStats`: counts shown in the header
//!
//! Slice helpers (`next_after`, `on_date`, `in_month`, `stats`) operate
//! on an ascending-date-sorted holiday list.

pub mod holiday;

pub use holiday::{in_month, next_after, on_date, stats, Holiday, HolidayKind, HolidayStats};
