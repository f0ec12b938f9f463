//! Error types for availability-grid operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Unknown time label: {0}")]
    UnknownTime(String),

    /// An interval whose start is not strictly before its end.
    #[error("Empty interval on {day}: {start_time}-{end_time}")]
    EmptyInterval {
        day: String,
        start_time: String,
        end_time: String,
    },

    #[error("Cell out of bounds: day {day}, slot {slot}")]
    CellOutOfBounds { day: usize, slot: usize },

    #[error("Unknown day part: {0}")]
    UnknownDayPart(String),

    #[error("No time slots selected")]
    EmptySelection,
}

pub type Result<T> = std::result::Result<T, GridError>;
