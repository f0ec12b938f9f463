//! WASM bindings for availability-grid.
//!
//! Exposes the compactor to the JavaScript picker via `wasm-bindgen`. Intervals
//! and cells cross the boundary as JSON strings:
//!
//! - intervals: `[{"day":"Monday","start_time":"08:00","end_time":"09:30"}]`
//! - cells: `[{"day":0,"slot":4}]`
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/availability-grid-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/availability_grid_wasm.wasm
//! ```

use availability_grid::{
    compact, expand, normalize, select_day_part, toggle_cell, AvailabilityInterval, Cell, Day,
    DayPart, Selection,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn parse_intervals(json: &str) -> Result<Vec<AvailabilityInterval>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid availability JSON: {}", e))
}

fn parse_cells(json: &str) -> Result<Selection, String> {
    let cells: Vec<Cell> =
        serde_json::from_str(json).map_err(|e| format!("Invalid cells JSON: {}", e))?;
    Ok(cells.into_iter().collect())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn cells_json(selection: &Selection) -> Result<String, String> {
    to_json(&selection.iter().collect::<Vec<Cell>>())
}

// ---------------------------------------------------------------------------
// Boundary-free implementations (testable off wasm32)
// ---------------------------------------------------------------------------

fn expand_json(intervals_json: &str) -> Result<String, String> {
    let intervals = parse_intervals(intervals_json)?;
    let selection = expand(&intervals).map_err(|e| e.to_string())?;
    cells_json(&selection)
}

fn compact_json(cells_json: &str) -> Result<String, String> {
    let selection = parse_cells(cells_json)?;
    to_json(&compact(&selection))
}

fn normalize_json(intervals_json: &str) -> Result<String, String> {
    let intervals = parse_intervals(intervals_json)?;
    let canonical = normalize(&intervals).map_err(|e| e.to_string())?;
    to_json(&canonical)
}

fn toggle_json(cells: &str, day: usize, slot: usize) -> Result<String, String> {
    let mut selection = parse_cells(cells)?;
    toggle_cell(&mut selection, day, slot).map_err(|e| e.to_string())?;
    cells_json(&selection)
}

fn day_part_json(intervals_json: &str, day: &str, part: &str) -> Result<String, String> {
    let intervals = parse_intervals(intervals_json)?;
    let mut selection = expand(&intervals).map_err(|e| e.to_string())?;
    let day = day.parse::<Day>().map_err(|e| e.to_string())?;
    let part = part.parse::<DayPart>().map_err(|e| e.to_string())?;
    select_day_part(&mut selection, day, part);
    to_json(&compact(&selection))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Expand saved intervals into the list of selected cells.
///
/// Throws if any interval names an unknown day, uses a label outside the
/// 06:00-24:00 half-hour grid, or has `start_time >= end_time`.
#[wasm_bindgen(js_name = "expandAvailability")]
pub fn expand_availability(intervals_json: &str) -> Result<String, JsValue> {
    expand_json(intervals_json).map_err(|e| JsValue::from_str(&e))
}

/// Compact selected cells into the interval list sent to the backend.
#[wasm_bindgen(js_name = "compactAvailability")]
pub fn compact_availability(cells_json: &str) -> Result<String, JsValue> {
    compact_json(cells_json).map_err(|e| JsValue::from_str(&e))
}

/// Sort and merge saved intervals into canonical form.
#[wasm_bindgen(js_name = "normalizeAvailability")]
pub fn normalize_availability(intervals_json: &str) -> Result<String, JsValue> {
    normalize_json(intervals_json).map_err(|e| JsValue::from_str(&e))
}

/// Add the cell at (`day`, `slot`) to a cell list and return the new list.
///
/// Throws for indices outside the 7×36 grid.
#[wasm_bindgen(js_name = "toggleCell")]
pub fn toggle(cells_json: &str, day: usize, slot: usize) -> Result<String, JsValue> {
    toggle_json(cells_json, day, slot).map_err(|e| JsValue::from_str(&e))
}

/// Add a day part (`morning`, `afternoon`, `evening`, `night`) on `day` to saved
/// intervals and return the canonical result.
#[wasm_bindgen(js_name = "selectDayPart")]
pub fn day_part(intervals_json: &str, day: &str, part: &str) -> Result<String, JsValue> {
    day_part_json(intervals_json, day, part).map_err(|e| JsValue::from_str(&e))
}
