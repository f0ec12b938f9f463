//! Pointer-drag selection over the grid.
//!
//! A drag is a stream of `(x, y)` samples in the grid's own coordinate space
//! (origin at the top-left of the Monday 06:00 cell, x along slots, y along
//! days). Each sample maps to at most one cell and is applied in arrival order.

use tracing::{debug, trace};

use crate::compactor::toggle_cell;
use crate::grid::{Cell, DAY_COUNT, SLOT_COUNT};
use crate::selection::Selection;

/// Cell size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cell_width: 60.0,
            cell_height: 60.0,
        }
    }
}

impl GridGeometry {
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Whether both cell sizes are finite and positive.
    pub fn is_valid(&self) -> bool {
        let usable = |size: f32| size.is_finite() && size > 0.0;
        usable(self.cell_width) && usable(self.cell_height)
    }

    /// Map a point to `(day, slot)` indices, or `None` if it falls outside the
    /// grid. A geometry with a zero, negative, or non-finite cell size maps
    /// nothing.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !self.is_valid() {
            return None;
        }
        let slot = (x / self.cell_width).floor();
        let day = (y / self.cell_height).floor();
        // Also rejects NaN coordinates.
        let in_grid = (0.0..SLOT_COUNT as f32).contains(&slot)
            && (0.0..DAY_COUNT as f32).contains(&day);
        in_grid.then(|| (day as usize, slot as usize))
    }
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Selecting,
}

/// Turns press / move / release events into cell selections.
#[derive(Debug, Clone, Default)]
pub struct DragSelector {
    geometry: GridGeometry,
    state: DragState,
}

impl DragSelector {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Start a drag at `(x, y)` and select the cell under it.
    ///
    /// Returns the cell if it was newly selected.
    pub fn press(&mut self, selection: &mut Selection, x: f32, y: f32) -> Option<Cell> {
        debug!(x, y, "drag start");
        self.state = DragState::Selecting;
        self.apply(selection, x, y)
    }

    /// Continue the drag to `(x, y)`. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, selection: &mut Selection, x: f32, y: f32) -> Option<Cell> {
        if self.state != DragState::Selecting {
            trace!(x, y, "move without press ignored");
            return None;
        }
        self.apply(selection, x, y)
    }

    /// End the drag.
    pub fn release(&mut self) {
        debug!("drag end");
        self.state = DragState::Idle;
    }

    fn apply(&self, selection: &mut Selection, x: f32, y: f32) -> Option<Cell> {
        let Some((day, slot)) = self.geometry.cell_at(x, y) else {
            trace!(x, y, "point outside grid");
            return None;
        };
        // cell_at only yields in-grid indices, so toggle_cell cannot fail here.
        match toggle_cell(selection, day, slot) {
            Ok(true) => Cell::new(day, slot).ok(),
            _ => None,
        }
    }
}
