//! Terminal UI module using ratatui.
//!
//! - `render`: frame layout - header, month-grouped holiday list,
//!   next-holiday banner, status bar
//! - `input`: keyboard event handling
//! - `styles`: light and dark palettes, persisted theme

pub mod input;
pub mod render;
pub mod styles;
