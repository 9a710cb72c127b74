//! Shared type definitions for the Seabed drill simulation.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries: tile and resource classifications, grid coordinates, and the
//! JSON views the drill API serves. Wire types flow downstream to
//! `TypeScript` via `ts-rs` for the map front-end.
//!
//! # Modules
//!
//! - [`enums`] -- Tile classes, resource kinds, and the reading sentinel
//! - [`structs`] -- Coordinates, drill records, and API view payloads

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Reading, ResourceKind, TileKind};
pub use structs::{CellReading, Coord, DrillRecord, DrillView, LayerSummary, LayerView, WorldView};
