//! The fixed weekly grid: 7 days by 36 half-hour slots from 06:00 to 24:00.
//!
//! Days are addressed Monday-first (`0..=6`), slots from the 06:00 column
//! (`0..=35`). Slot `i` starts at `06:00 + 30 * i` minutes; the end of the last
//! slot is written `"24:00"`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Number of day rows in the grid.
pub const DAY_COUNT: usize = 7;

/// Number of half-hour slot columns per day.
pub const SLOT_COUNT: usize = 36;

/// Hour of the first slot.
pub const FIRST_HOUR: u32 = 6;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// End-of-day sentinel, only valid as an interval end.
pub const END_OF_DAY: &str = "24:00";

/// A weekday row of the grid, serialized as its full English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in grid order.
    pub const ALL: [Day; DAY_COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Row index of this day (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Day> {
        Day::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = GridError;

    /// Parse a full English weekday name. Matching is exact: the wire format
    /// always carries capitalized names.
    fn from_str(s: &str) -> Result<Self> {
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.name() == s)
            .ok_or_else(|| GridError::UnknownDay(s.to_string()))
    }
}

/// Label of the slot starting at `slot`, e.g. `0 -> "06:00"`, `35 -> "23:30"`.
///
/// `SLOT_COUNT` itself maps to the `"24:00"` sentinel so that interval ends
/// can be labelled with the same function.
///
/// # Panics
/// Panics if `slot > SLOT_COUNT`.
pub fn slot_label(slot: usize) -> String {
    assert!(slot <= SLOT_COUNT, "slot {slot} outside grid");
    if slot == SLOT_COUNT {
        return END_OF_DAY.to_string();
    }
    let minutes = FIRST_HOUR * 60 + slot as u32 * SLOT_MINUTES;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Resolve a start label (`"06:00"..="23:30"`) to its slot index.
///
/// Returns `None` for anything that is not exactly one of the 36 labels:
/// off-grid times, misaligned minutes, missing zero padding, and `"24:00"`.
pub fn slot_index(label: &str) -> Option<usize> {
    let time = NaiveTime::parse_from_str(label, "%H:%M").ok()?;
    let minutes = time.hour() * 60 + time.minute();
    let offset = minutes.checked_sub(FIRST_HOUR * 60)?;
    if offset % SLOT_MINUTES != 0 {
        return None;
    }
    let slot = (offset / SLOT_MINUTES) as usize;
    // Round-trip through the canonical label to reject "6:00" and friends.
    (slot < SLOT_COUNT && slot_label(slot) == label).then_some(slot)
}

/// Resolve an end label to its exclusive slot bound; accepts `"24:00"` as
/// `SLOT_COUNT`.
pub fn end_index(label: &str) -> Option<usize> {
    if label == END_OF_DAY {
        Some(SLOT_COUNT)
    } else {
        slot_index(label)
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub struct Cell {
    day: Day,
    slot: u8,
}

impl Cell {
    /// Build a cell from raw row/column indices.
    ///
    /// # Errors
    /// Returns `GridError::CellOutOfBounds` if `day >= 7` or `slot >= 36`.
    pub fn new(day: usize, slot: usize) -> Result<Cell> {
        match Day::from_index(day) {
            Some(d) if slot < SLOT_COUNT => Ok(Cell {
                day: d,
                slot: slot as u8,
            }),
            _ => Err(GridError::CellOutOfBounds { day, slot }),
        }
    }

    pub fn day(self) -> Day {
        self.day
    }

    pub fn slot(self) -> usize {
        self.slot as usize
    }

    /// Start label of this cell's slot.
    pub fn start_time(self) -> String {
        slot_label(self.slot())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.start_time())
    }
}

/// Wire form of a cell: `{"day": 0..6, "slot": 0..35}`.
#[derive(Serialize, Deserialize)]
struct RawCell {
    day: usize,
    slot: usize,
}

impl TryFrom<RawCell> for Cell {
    type Error = GridError;

    fn try_from(raw: RawCell) -> Result<Cell> {
        Cell::new(raw.day, raw.slot)
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell {
            day: cell.day.index(),
            slot: cell.slot(),
        }
    }
}
