//! World grid and resource layers for the Seabed drill simulation.
//!
//! This crate models the static data the drills operate on: a grid of
//! ocean and land tiles, and per-day resource layers overlaid on it.
//!
//! # Modules
//!
//! - [`error`] -- Error types for loading and combining grids.
//! - [`grid`] -- Bounds-checked row-major [`Grid`] storage.
//! - [`world_grid`] -- The immutable ocean/land [`WorldGrid`].
//! - [`resource_map`] -- One [`ResourceMap`] per kind per day, with
//!   normalization, land masking, preserved-layer discounting, and averaging.
//! - [`series`] -- [`ResourceSeries`] discovery and day ordering.

pub mod error;
pub mod grid;
pub mod resource_map;
pub mod series;
mod table;
pub mod world_grid;

#[cfg(test)]
mod testing;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use grid::Grid;
pub use resource_map::{ResourceMap, average};
pub use series::{ResourceSeries, day_number, discover, matches_pattern};
pub use world_grid::{WORLD_HEIGHT, WORLD_WIDTH, WorldGrid};
