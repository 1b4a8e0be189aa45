//! Utility functions for date and string formatting.

pub mod format;

pub use format::{format_date_long, month_name, relative_age, truncate, weekday_name};
