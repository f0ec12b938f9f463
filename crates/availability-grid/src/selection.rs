//! The set of grid cells currently marked available.
//!
//! Stored as one bit row per day; bit `i` of a row is slot `i`. Insertion is
//! idempotent and iteration always runs day-major, slot-minor.

use crate::grid::{Cell, Day, DAY_COUNT, SLOT_COUNT};

const ROW_MASK: u64 = (1 << SLOT_COUNT) - 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    rows: [u64; DAY_COUNT],
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.rows[cell.day().index()] & bit(cell.slot()) != 0
    }

    /// Mark `cell` selected. Returns `false` if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let row = &mut self.rows[cell.day().index()];
        let before = *row;
        *row |= bit(cell.slot());
        *row != before
    }

    /// Unmark `cell`. Returns `false` if it was not selected.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let row = &mut self.rows[cell.day().index()];
        let before = *row;
        *row &= !bit(cell.slot());
        *row != before
    }

    /// Select slots `start..end` of `day` and return how many were newly added.
    ///
    /// `end` is exclusive and may be `SLOT_COUNT`. Empty or inverted ranges
    /// select nothing.
    pub fn insert_range(&mut self, day: Day, start: usize, end: usize) -> usize {
        let end = end.min(SLOT_COUNT);
        if start >= end {
            return 0;
        }
        let mask = (ROW_MASK >> (SLOT_COUNT - (end - start))) << start;
        let row = &mut self.rows[day.index()];
        let added = (mask & !*row).count_ones() as usize;
        *row |= mask;
        added
    }

    /// Whether slot `slot` of `day` is selected. `slot` past the grid reads as
    /// unselected.
    pub fn is_selected(&self, day: Day, slot: usize) -> bool {
        slot < SLOT_COUNT && self.rows[day.index()] & bit(slot) != 0
    }

    /// Bit row for `day`, slot 0 in the least significant bit.
    pub fn row(&self, day: Day) -> u64 {
        self.rows[day.index()]
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    pub fn clear(&mut self) {
        self.rows = [0; DAY_COUNT];
    }

    /// Selected cells, Monday first, ascending slot within each day.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            let row = self.rows[day.index()];
            (0..SLOT_COUNT)
                .filter(move |&slot| row & bit(slot) != 0)
                .filter_map(move |slot| Cell::new(day.index(), slot).ok())
        })
    }
}

fn bit(slot: usize) -> u64 {
    1 << slot
}

impl FromIterator<Cell> for Selection {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut selection = Selection::new();
        selection.extend(iter);
        selection
    }
}

impl Extend<Cell> for Selection {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}
