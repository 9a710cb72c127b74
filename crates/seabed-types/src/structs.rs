//! Coordinate, drill record, and API view structs for the Seabed simulation.
//!
//! The `*View` types are the JSON payloads served by the drill API and are
//! exported to `TypeScript` so the front-end renders against the same shapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ResourceKind;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A cell position on the world grid.
///
/// `x` is the column and `y` the row. Both are non-negative by construction;
/// neighbourhood enumeration discards offsets that would go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Coord {
    /// Construct a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a signed offset, returning `None` if either axis goes negative.
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Drill records
// ---------------------------------------------------------------------------

/// Serialized state of one drill after a simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DrillRecord {
    /// Current column.
    pub x: usize,
    /// Current row.
    pub y: usize,
    /// Running total of target resource collected.
    pub collected: f64,
    /// Running total of preserved resource destroyed.
    pub destroyed: f64,
}

// ---------------------------------------------------------------------------
// API views
// ---------------------------------------------------------------------------

/// One non-empty cell of a resource layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CellReading {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Reading value, `null` when the source value was unknown.
    pub value: Option<f64>,
}

/// Payload for `GET /api/world`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WorldView {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Every land tile, row-major.
    pub land: Vec<Coord>,
    /// Every ocean tile, row-major.
    pub water: Vec<Coord>,
}

/// Payload for `GET /api/{resource}/{day}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LayerView {
    /// The layer served.
    pub resource: ResourceKind,
    /// The 1-indexed day, or `"average"`.
    pub day: String,
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Non-empty cells, row-major.
    pub cells: Vec<CellReading>,
}

/// One entry of `GET /api/layers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LayerSummary {
    /// The layer.
    pub resource: ResourceKind,
    /// Number of daily snapshots loaded.
    pub days: usize,
}

/// Payload for `GET /api/drill/{day}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DrillView {
    /// The 1-indexed day simulated through.
    pub day: usize,
    /// The layer drills collect from.
    pub target: ResourceKind,
    /// The layer drills destroy, if any.
    pub preserve: Option<ResourceKind>,
    /// Seed the replay ran with.
    pub seed: u64,
    /// Drill states, in placement order.
    pub drills: Vec<DrillRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_negative_axes() {
        let origin = Coord::new(2, 3);
        assert_eq!(origin.offset(-2, -3), Some(Coord::new(0, 0)));
        assert_eq!(origin.offset(-3, 0), None);
        assert_eq!(origin.offset(0, -4), None);
        assert_eq!(origin.offset(5, 5), Some(Coord::new(7, 8)));
    }

    #[test]
    fn drill_record_json_shape() {
        let record = DrillRecord {
            x: 4,
            y: 9,
            collected: 6.5,
            destroyed: 0.0,
        };
        let json = serde_json::to_value(record).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({"x": 4, "y": 9, "collected": 6.5, "destroyed": 0.0}))
        );
    }

    #[test]
    fn unknown_cell_value_serializes_as_null() {
        let cell = CellReading {
            x: 1,
            y: 2,
            value: None,
        };
        let json = serde_json::to_value(cell).ok();
        assert_eq!(json, Some(serde_json::json!({"x": 1, "y": 2, "value": null})));
    }
}
