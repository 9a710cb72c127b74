//! Per-day resource layers and the operations that combine them.
//!
//! A [`ResourceMap`] holds one optional [`Reading`] per world cell for a
//! single resource kind on a single day. Cells are empty when the snapshot
//! never mentioned them or when the land mask cleared them.
//!
//! Loading normalizes the layer so its lowest known value is exactly zero.
//! `Unknown` cells are excluded from that minimum and never shifted.

use std::path::Path;

use seabed_types::{Coord, Reading, ResourceKind};
use tracing::debug;

use crate::error::WorldError;
use crate::grid::Grid;
use crate::table;
use crate::world_grid::WorldGrid;

/// One resource layer for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMap {
    kind: ResourceKind,
    cells: Grid<Option<Reading>>,
}

impl ResourceMap {
    /// Create a map with every cell empty.
    pub fn empty(kind: ResourceKind, width: usize, height: usize) -> Self {
        Self {
            kind,
            cells: Grid::filled(width, height, None),
        }
    }

    /// Load and normalize a `width x height` layer from a snapshot table.
    ///
    /// A blank value column becomes [`Reading::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Io`] if the file cannot be read and
    /// [`WorldError::Parse`] for malformed rows or non-finite values.
    pub fn load(
        path: &Path,
        kind: ResourceKind,
        width: usize,
        height: usize,
    ) -> Result<Self, WorldError> {
        let mut map = Self::empty(kind, width, height);

        for row in table::read_rows(path, width, height)? {
            let reading = if row.value.is_empty() {
                Reading::Unknown
            } else {
                match row.value.parse::<f64>() {
                    Ok(value) if value.is_finite() => Reading::Known(value),
                    _ => {
                        return Err(WorldError::parse(
                            path,
                            row.line,
                            format!("invalid {kind} value {:?}", row.value),
                        ));
                    }
                }
            };
            map.cells.set(row.at, Some(reading));
        }

        map.normalize();
        debug!(
            path = %path.display(),
            resource = %kind,
            present = map.present_count(),
            "Resource map loaded"
        );
        Ok(map)
    }

    /// The resource kind this layer describes.
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Grid width in cells.
    pub const fn width(&self) -> usize {
        self.cells.width()
    }

    /// Grid height in cells.
    pub const fn height(&self) -> usize {
        self.cells.height()
    }

    /// The reading at `at`; `None` when the cell is empty or off-grid.
    pub fn get(&self, at: Coord) -> Option<Reading> {
        self.cells.get(at).copied().flatten()
    }

    /// Overwrite the cell at `at`. Returns `false` if `at` is off-grid.
    pub fn set(&mut self, at: Coord, reading: Option<Reading>) -> bool {
        self.cells.set(at, reading)
    }

    /// Iterate non-empty cells in row-major order.
    pub fn present(&self) -> impl Iterator<Item = (Coord, Reading)> {
        self.cells
            .iter()
            .filter_map(|(at, cell)| cell.map(|reading| (at, reading)))
    }

    /// Every non-empty coordinate, row-major.
    pub fn present_cells(&self) -> Vec<Coord> {
        self.present().map(|(at, _)| at).collect()
    }

    /// Number of non-empty cells.
    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    /// The coordinate holding the greatest reading.
    ///
    /// `Unknown` ranks below every known value. Ties go to the first cell
    /// in row-major order. Returns `None` for an all-empty map.
    pub fn max_cell(&self) -> Option<Coord> {
        let mut best: Option<(Coord, f64)> = None;
        for (at, reading) in self.present() {
            match best {
                Some((_, top)) if reading.rank() <= top => {}
                _ => best = Some((at, reading.rank())),
            }
        }
        best.map(|(at, _)| at)
    }

    /// Shift every known value so the smallest becomes exactly zero.
    ///
    /// Relative order is preserved. `Unknown` cells are left alone, and a
    /// map with no known values is unchanged.
    pub fn normalize(&mut self) {
        let Some(min) = self
            .present()
            .filter_map(|(_, reading)| reading.known())
            .reduce(f64::min)
        else {
            return;
        };

        for (_, cell) in self.cells.iter_mut() {
            if let Some(Reading::Known(value)) = cell {
                *value -= min;
            }
        }
    }

    /// Clear every cell that lies on land.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DimensionMismatch`] if the world and map sizes
    /// differ.
    pub fn mask_land(&mut self, world: &WorldGrid) -> Result<(), WorldError> {
        check_size(world.tiles(), &self.cells)?;
        for (at, cell) in self.cells.iter_mut() {
            if world.is_land(at) {
                *cell = None;
            }
        }
        Ok(())
    }

    /// Subtract a preserved layer from this one, cell by cell.
    ///
    /// Only cells holding a known value in both maps change; `Unknown` or
    /// empty cells on either side are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DimensionMismatch`] if the two maps differ in
    /// size.
    pub fn mask_preserved(&mut self, preserve: &Self) -> Result<(), WorldError> {
        check_size(&self.cells, &preserve.cells)?;
        for (at, cell) in self.cells.iter_mut() {
            if let Some(Reading::Known(value)) = cell
                && let Some(Reading::Known(discount)) = preserve.get(at)
            {
                *value -= discount;
            }
        }
        Ok(())
    }
}

/// Average a series of maps into a single layer tagged `kind`.
///
/// Each output cell is the sum of the readings at that cell divided by the
/// series length; empty cells add nothing. `Unknown` sums as negative
/// infinity, so any unknown day leaves the cell [`Reading::Unknown`]. A
/// cell whose sum is exactly zero is left empty, so an all-zero history
/// reads the same as no history.
///
/// # Errors
///
/// Returns [`WorldError::EmptySeries`] for an empty slice and
/// [`WorldError::DimensionMismatch`] if the maps differ in size.
pub fn average(series: &[ResourceMap], kind: ResourceKind) -> Result<ResourceMap, WorldError> {
    let first = series.first().ok_or(WorldError::EmptySeries(kind))?;
    for map in series {
        check_size(&first.cells, &map.cells)?;
    }

    // `None` once an unknown reading has been summed in.
    let mut sums: Grid<Option<f64>> = Grid::filled(first.width(), first.height(), Some(0.0));
    for map in series {
        for (at, reading) in map.present() {
            let Some(sum) = sums.get_mut(at) else {
                continue;
            };
            if reading.is_unknown() {
                *sum = None;
            } else if let (Some(total), Some(value)) = (sum.as_mut(), reading.known()) {
                *total += value;
            }
        }
    }

    let days = f64::from(u32::try_from(series.len()).unwrap_or(u32::MAX));
    let cells = sums.map(|sum| match *sum {
        None => Some(Reading::Unknown),
        Some(total) if total == 0.0 => None,
        Some(total) => Some(Reading::Known(total / days)),
    });
    Ok(ResourceMap { kind, cells })
}

fn check_size<T, U>(expected: &Grid<T>, found: &Grid<U>) -> Result<(), WorldError> {
    if expected.same_size(found) {
        Ok(())
    } else {
        Err(WorldError::DimensionMismatch {
            expected_width: expected.width(),
            expected_height: expected.height(),
            found_width: found.width(),
            found_height: found.height(),
        })
    }
}
