//! # availability-grid
//!
//! Weekly availability picker model: a 7-day by 36-slot grid of half-hour
//! cells (06:00 to 24:00) and the conversion between a set of selected cells
//! and the compact interval list stored by a preferences backend.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_grid::{compact, toggle_cell, Selection};
//!
//! let mut selection = Selection::new();
//! for slot in 4..7 {
//!     toggle_cell(&mut selection, 2, slot).unwrap();
//! }
//!
//! let intervals = compact(&selection);
//! assert_eq!(intervals.len(), 1);
//! assert_eq!(intervals[0].day, "Wednesday");
//! assert_eq!(intervals[0].start_time, "08:00");
//! assert_eq!(intervals[0].end_time, "09:30");
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — Day and slot tables, `Cell` addresses
//! - [`selection`] — The set of selected cells
//! - [`interval`] — Wire-shaped `{day, start_time, end_time}` value
//! - [`compactor`] — `expand` / `compact` / `toggle_cell` and friends
//! - [`gesture`] — Pointer drag → cell selection
//! - [`preset`] — Morning / afternoon / evening / night shortcuts
//! - [`render`] — Text rendering of a selection
//! - [`error`] — Error types

pub mod compactor;
pub mod error;
pub mod gesture;
pub mod grid;
pub mod interval;
pub mod preset;
pub mod render;
pub mod selection;

pub use compactor::{
    compact, ensure_not_empty, expand, first_available, normalize, remove_cell, selected_minutes,
    toggle_cell,
};
pub use error::GridError;
pub use gesture::{DragSelector, GridGeometry};
pub use grid::{Cell, Day};
pub use interval::AvailabilityInterval;
pub use preset::{select_day_part, DayPart};
pub use render::render_grid;
pub use selection::Selection;
