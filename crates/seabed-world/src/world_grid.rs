//! The world grid: an immutable map of ocean and land tiles.
//!
//! Loaded once from a snapshot table whose value column holds the tile code
//! (`0` ocean, `1` land). Every cell must be given exactly once or the load
//! fails; the grid has no mutation API afterwards.

use std::path::Path;

use seabed_types::{Coord, TileKind};
use tracing::info;

use crate::error::WorldError;
use crate::grid::Grid;
use crate::table;

/// Default world width in cells.
pub const WORLD_WIDTH: usize = 100;

/// Default world height in cells.
pub const WORLD_HEIGHT: usize = 100;

/// Fully populated tile classification for the whole world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    tiles: Grid<TileKind>,
}

impl WorldGrid {
    /// Load a `width x height` world from a snapshot table.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Parse`] for malformed rows or tile codes other
    /// than `0`/`1`, and [`WorldError::MissingCell`] if any cell is left
    /// unpopulated once all rows are consumed.
    pub fn load(path: &Path, width: usize, height: usize) -> Result<Self, WorldError> {
        let mut tiles: Grid<Option<TileKind>> = Grid::filled(width, height, None);

        for row in table::read_rows(path, width, height)? {
            let tile = row
                .value
                .parse::<u8>()
                .ok()
                .and_then(TileKind::from_code)
                .ok_or_else(|| {
                    WorldError::parse(path, row.line, format!("invalid tile code {:?}", row.value))
                })?;
            tiles.set(row.at, Some(tile));
        }

        if let Some((at, _)) = tiles.iter().find(|(_, tile)| tile.is_none()) {
            return Err(WorldError::MissingCell {
                path: path.to_path_buf(),
                at,
            });
        }

        let world = Self {
            tiles: tiles.map(|tile| tile.unwrap_or(TileKind::Ocean)),
        };
        info!(
            path = %path.display(),
            width,
            height,
            land = world.land_cells().len(),
            "World grid loaded"
        );
        Ok(world)
    }

    /// Wrap an already-populated tile grid.
    pub const fn from_tiles(tiles: Grid<TileKind>) -> Self {
        Self { tiles }
    }

    /// Grid width in cells.
    pub const fn width(&self) -> usize {
        self.tiles.width()
    }

    /// Grid height in cells.
    pub const fn height(&self) -> usize {
        self.tiles.height()
    }

    /// The underlying tile grid.
    pub const fn tiles(&self) -> &Grid<TileKind> {
        &self.tiles
    }

    /// The tile at `at`, or `None` outside the world.
    pub fn tile(&self, at: Coord) -> Option<TileKind> {
        self.tiles.get(at).copied()
    }

    /// Whether `at` is a land tile.
    pub fn is_land(&self, at: Coord) -> bool {
        self.tile(at) == Some(TileKind::Land)
    }

    /// Every coordinate of the given class, row-major.
    pub fn cells_of(&self, kind: TileKind) -> Vec<Coord> {
        self.tiles
            .iter()
            .filter(|(_, tile)| **tile == kind)
            .map(|(at, _)| at)
            .collect()
    }

    /// Every land coordinate, row-major.
    pub fn land_cells(&self) -> Vec<Coord> {
        self.cells_of(TileKind::Land)
    }

    /// Every ocean coordinate, row-major.
    pub fn ocean_cells(&self) -> Vec<Coord> {
        self.cells_of(TileKind::Ocean)
    }
}
