//! The wire-shaped availability interval exchanged with the preferences backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{slot_label, Day};

/// One contiguous run of available time on a single day.
///
/// Fields are kept as the raw strings the backend sends, so that saved data
/// with unknown names or labels still deserializes and can be reported by
/// [`crate::compactor::expand`] instead of failing inside serde.
///
/// ```json
/// { "day": "Wednesday", "start_time": "08:00", "end_time": "09:30" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailabilityInterval {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilityInterval {
    pub fn new(
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Interval covering slots `start..end` of `day` (end exclusive, may be 36).
    pub(crate) fn from_run(day: Day, start: usize, end: usize) -> Self {
        Self {
            day: day.name().to_string(),
            start_time: slot_label(start),
            end_time: slot_label(end),
        }
    }
}

impl fmt::Display for AvailabilityInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start_time, self.end_time)
    }
}
