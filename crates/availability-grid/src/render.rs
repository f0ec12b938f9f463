//! Plain-text rendering of a selection, one row per day.

use std::fmt::Write;

use crate::grid::{slot_label, Day, SLOT_COUNT};
use crate::selection::Selection;

const SELECTED: char = '#';
const FREE: char = '.';

/// Render the grid as text: a header of two-digit hours (each spanning its
/// two half-hour columns), then one line per day with `#` for selected and
/// `.` for free slots.
///
/// ```text
///           060708091011121314151617181920212223
/// Monday    ....##..............................
/// ```
pub fn render_grid(selection: &Selection) -> String {
    let mut out = String::new();

    out.push_str(&" ".repeat(10));
    for slot in (0..SLOT_COUNT).step_by(2) {
        let label = slot_label(slot);
        let _ = write!(out, "{:<2}", &label[..2]);
    }
    let _ = writeln!(out);

    for day in Day::ALL {
        let _ = write!(out, "{:<10}", day.name());
        for slot in 0..SLOT_COUNT {
            out.push(if selection.is_selected(day, slot) {
                SELECTED
            } else {
                FREE
            });
        }
        let _ = writeln!(out);
    }

    out
}
