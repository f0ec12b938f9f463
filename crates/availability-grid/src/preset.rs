//! Named day-part shortcuts for quick schedule setup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, Result};
use crate::grid::{slot_label, Day, SLOT_COUNT};
use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    /// 08:00-12:00
    Morning,
    /// 12:00-17:00
    Afternoon,
    /// 17:00-21:00
    Evening,
    /// 21:00-24:00
    Night,
}

impl DayPart {
    pub const ALL: [DayPart; 4] = [
        DayPart::Morning,
        DayPart::Afternoon,
        DayPart::Evening,
        DayPart::Night,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
            DayPart::Night => "night",
        }
    }

    /// Slot range `start..end` covered by this part.
    pub fn slots(self) -> (usize, usize) {
        match self {
            DayPart::Morning => (4, 12),
            DayPart::Afternoon => (12, 22),
            DayPart::Evening => (22, 30),
            DayPart::Night => (30, SLOT_COUNT),
        }
    }

    /// Start and end labels of this part, e.g. `("08:00", "12:00")`.
    pub fn bounds(self) -> (String, String) {
        let (start, end) = self.slots();
        (slot_label(start), slot_label(end))
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DayPart {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        DayPart::ALL
            .iter()
            .copied()
            .find(|part| part.id() == s)
            .ok_or_else(|| GridError::UnknownDayPart(s.to_string()))
    }
}

/// Select every slot of `part` on `day`. Returns the number of newly selected
/// cells.
pub fn select_day_part(selection: &mut Selection, day: Day, part: DayPart) -> usize {
    let (start, end) = part.slots();
    let added = selection.insert_range(day, start, end);
    debug!(%day, %part, added, "select day part");
    added
}
