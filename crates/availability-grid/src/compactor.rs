//! Conversion between the cell selection and its compact interval list.
//!
//! [`compact`] scans each day left to right and emits one interval per maximal
//! run of selected slots. [`expand`] is its inverse. For any selection `s`,
//! `expand(&compact(&s)) == Ok(s)`; for any interval list already in canonical
//! form `i`, `compact(&expand(&i)?) == i`.

use tracing::{debug, trace};

use crate::error::{GridError, Result};
use crate::grid::{end_index, slot_index, slot_label, Cell, Day, SLOT_COUNT, SLOT_MINUTES};
use crate::interval::AvailabilityInterval;
use crate::selection::Selection;

/// Build the selection described by a list of saved intervals.
///
/// Intervals may arrive in any order and may overlap or touch; their cells
/// are unioned. Each interval covers `[start_time, end_time)`.
///
/// # Errors
/// - `GridError::UnknownDay` for a day that is not a full English weekday name.
/// - `GridError::UnknownTime` for a label outside the 06:00-23:30 half-hour
///   table (or `"24:00"` used as a start).
/// - `GridError::EmptyInterval` when `start_time >= end_time`.
///
/// On error nothing is returned; a caller holding an older selection keeps it.
pub fn expand(intervals: &[AvailabilityInterval]) -> Result<Selection> {
    let mut selection = Selection::new();

    for interval in intervals {
        let day: Day = interval.day.parse()?;
        let start = slot_index(&interval.start_time)
            .ok_or_else(|| GridError::UnknownTime(interval.start_time.clone()))?;
        let end = end_index(&interval.end_time)
            .ok_or_else(|| GridError::UnknownTime(interval.end_time.clone()))?;

        if start >= end {
            return Err(GridError::EmptyInterval {
                day: interval.day.clone(),
                start_time: interval.start_time.clone(),
                end_time: interval.end_time.clone(),
            });
        }

        let added = selection.insert_range(day, start, end);
        trace!(%interval, added, "expanded interval");
    }

    debug!(intervals = intervals.len(), cells = selection.len(), "expand");
    Ok(selection)
}

/// Collapse a selection into its canonical interval list.
///
/// Days run Monday to Sunday; within a day intervals are ascending,
/// non-overlapping and never touch. A run reaching the last slot ends at
/// `"24:00"`.
pub fn compact(selection: &Selection) -> Vec<AvailabilityInterval> {
    let mut intervals = Vec::new();

    for day in Day::ALL {
        let mut run_start: Option<usize> = None;

        for slot in 0..SLOT_COUNT {
            match (selection.is_selected(day, slot), run_start) {
                (true, None) => run_start = Some(slot),
                (false, Some(start)) => {
                    intervals.push(AvailabilityInterval::from_run(day, start, slot));
                    run_start = None;
                }
                _ => {}
            }
        }

        // A run still open after the last column extends to the end of day.
        if let Some(start) = run_start {
            intervals.push(AvailabilityInterval::from_run(day, start, SLOT_COUNT));
        }
    }

    debug!(cells = selection.len(), intervals = intervals.len(), "compact");
    intervals
}

/// Add the cell at (`day`, `slot`) to the selection.
///
/// Selection through the grid is additive; see [`remove_cell`] for removal.
/// Returns whether the selection changed, i.e. whether the caller needs to
/// recompute [`compact`].
///
/// # Errors
/// Returns `GridError::CellOutOfBounds` if `day >= 7` or `slot >= 36`; the
/// selection is left untouched.
pub fn toggle_cell(selection: &mut Selection, day: usize, slot: usize) -> Result<bool> {
    let cell = Cell::new(day, slot)?;
    let changed = selection.insert(cell);
    trace!(%cell, changed, "toggle cell");
    Ok(changed)
}

/// Remove the cell at (`day`, `slot`). Returns whether the selection changed.
///
/// # Errors
/// Returns `GridError::CellOutOfBounds` for indices outside the grid.
pub fn remove_cell(selection: &mut Selection, day: usize, slot: usize) -> Result<bool> {
    let cell = Cell::new(day, slot)?;
    let changed = selection.remove(cell);
    trace!(%cell, changed, "remove cell");
    Ok(changed)
}

/// Rewrite saved intervals in canonical form: sorted by day then start,
/// overlapping and adjacent intervals merged.
pub fn normalize(intervals: &[AvailabilityInterval]) -> Result<Vec<AvailabilityInterval>> {
    expand(intervals).map(|selection| compact(&selection))
}

/// Reject an empty selection before it is submitted as a schedule.
pub fn ensure_not_empty(selection: &Selection) -> Result<()> {
    if selection.is_empty() {
        Err(GridError::EmptySelection)
    } else {
        Ok(())
    }
}

/// Total selected time in minutes.
pub fn selected_minutes(selection: &Selection) -> u32 {
    selection.len() as u32 * SLOT_MINUTES
}

/// Label of the first selected slot of `day`, if any.
pub fn first_available(selection: &Selection, day: Day) -> Option<String> {
    (0..SLOT_COUNT)
        .find(|&slot| selection.is_selected(day, slot))
        .map(slot_label)
}
