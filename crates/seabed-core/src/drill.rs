//! The drill agent.
//!
//! A [`Drill`] sits on one cell and, once per simulated day, moves within
//! its reach, collects the target resource under it, and tallies any
//! preserved resource it destroys on the way.

use rand::Rng;
use seabed_types::{Coord, DrillRecord, Reading};
use seabed_world::ResourceMap;

use crate::error::CoreError;
use crate::strategy::{Neighbourhood, Strategy};

/// How many cells a drill can travel along each axis in one day.
pub const REACH: isize = 5;

/// A single drill and its running totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Drill {
    position: Coord,
    strategy: Strategy,
    collected: f64,
    destroyed: f64,
}

impl Drill {
    /// Place a fresh drill at `position`.
    pub const fn new(position: Coord, strategy: Strategy) -> Self {
        Self {
            position,
            strategy,
            collected: 0.0,
            destroyed: 0.0,
        }
    }

    /// Current cell.
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Total target resource collected so far.
    pub const fn collected(&self) -> f64 {
        self.collected
    }

    /// Total preserved resource destroyed so far.
    pub const fn destroyed(&self) -> f64 {
        self.destroyed
    }

    /// Non-empty cells within [`REACH`] of the drill, x offset outermost.
    ///
    /// The bound check is `x > width` / `y > height`, so the row and column
    /// one past the edge are considered; the map lookup returns nothing
    /// there and they are dropped with the other empty cells.
    pub fn neighbourhood(&self, map: &ResourceMap) -> Neighbourhood {
        let mut cells = Vec::new();
        for dx in -REACH..=REACH {
            for dy in -REACH..=REACH {
                let Some(at) = self.position.offset(dx, dy) else {
                    continue;
                };
                if at.x > map.width() || at.y > map.height() {
                    continue;
                }
                if let Some(reading) = map.get(at) {
                    cells.push((at, reading));
                }
            }
        }
        cells
    }

    /// Move to the cell the strategy picks from the neighbourhood on `map`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidState`] if no cell within reach is
    /// populated.
    pub fn move_on<R: Rng + ?Sized>(
        &mut self,
        map: &ResourceMap,
        rng: &mut R,
    ) -> Result<Coord, CoreError> {
        let neighbourhood = self.neighbourhood(map);
        if neighbourhood.is_empty() {
            return Err(CoreError::InvalidState(format!(
                "drill at {} has no {} within reach",
                self.position,
                map.kind()
            )));
        }
        self.position = self.strategy.choose(&neighbourhood, rng)?;
        Ok(self.position)
    }

    /// Add the value under the drill to the collected total.
    ///
    /// An `Unknown` reading adds nothing. Returns the amount added.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidState`] if the current cell is empty.
    pub fn collect(&mut self, map: &ResourceMap) -> Result<f64, CoreError> {
        let reading = map.get(self.position).ok_or_else(|| {
            CoreError::InvalidState(format!(
                "drill at {} is on a cell with no {}",
                self.position,
                map.kind()
            ))
        })?;
        let amount = reading.known().unwrap_or(0.0);
        self.collected += amount;
        Ok(amount)
    }

    /// Add the preserved value under the drill, if any, to the destroyed
    /// total. Returns the amount added.
    pub fn destroy(&mut self, map: &ResourceMap) -> f64 {
        let amount = map
            .get(self.position)
            .and_then(Reading::known)
            .unwrap_or(0.0);
        self.destroyed += amount;
        amount
    }

    /// Snapshot the drill for serialization.
    pub const fn record(&self) -> DrillRecord {
        DrillRecord {
            x: self.position.x,
            y: self.position.y,
            collected: self.collected,
            destroyed: self.destroyed,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use seabed_types::ResourceKind;

    use super::*;

    fn map_with(kind: ResourceKind, size: usize, cells: &[(usize, usize, f64)]) -> ResourceMap {
        let mut map = ResourceMap::empty(kind, size, size);
        for &(x, y, v) in cells {
            map.set(Coord::new(x, y), Some(Reading::Known(v)));
        }
        map
    }

    #[test]
    fn collect_adds_cell_value() {
        let first = map_with(ResourceKind::Oil, 20, &[(10, 10, 2.0)]);
        let second = map_with(ResourceKind::Oil, 20, &[(10, 10, 4.5)]);
        let mut drill = Drill::new(Coord::new(10, 10), Strategy::Max);

        assert_eq!(drill.collect(&first).ok(), Some(2.0));
        assert_eq!(drill.collect(&second).ok(), Some(4.5));
        assert_eq!(drill.record().collected, 6.5);
    }

    #[test]
    fn collect_on_empty_cell_is_invalid_state() {
        let map = map_with(ResourceKind::Oil, 20, &[]);
        let mut drill = Drill::new(Coord::new(3, 3), Strategy::Max);
        assert!(matches!(drill.collect(&map), Err(CoreError::InvalidState(_))));
        assert_eq!(drill.collected(), 0.0);
    }

    #[test]
    fn collect_on_unknown_adds_nothing() {
        let mut map = ResourceMap::empty(ResourceKind::Oil, 4, 4);
        map.set(Coord::new(1, 1), Some(Reading::Unknown));
        let mut drill = Drill::new(Coord::new(1, 1), Strategy::Max);
        assert_eq!(drill.collect(&map).ok(), Some(0.0));
    }

    #[test]
    fn destroy_is_noop_on_empty_cell() {
        let coral = map_with(ResourceKind::Coral, 10, &[(2, 2, 3.0)]);
        let mut drill = Drill::new(Coord::new(1, 1), Strategy::Max);
        assert_eq!(drill.destroy(&coral), 0.0);

        let mut drill = Drill::new(Coord::new(2, 2), Strategy::Max);
        assert_eq!(drill.destroy(&coral), 3.0);
        assert_eq!(drill.destroyed(), 3.0);
    }

    #[test]
    fn neighbourhood_is_eleven_by_eleven() {
        let mut map = ResourceMap::empty(ResourceKind::Oil, 30, 30);
        for x in 0..30 {
            for y in 0..30 {
                map.set(Coord::new(x, y), Some(Reading::Known(1.0)));
            }
        }
        let drill = Drill::new(Coord::new(15, 15), Strategy::Max);
        let cells = drill.neighbourhood(&map);

        assert_eq!(cells.len(), 121);
        assert_eq!(cells.first().map(|(at, _)| *at), Some(Coord::new(10, 10)));
        // y varies fastest.
        assert_eq!(cells.get(1).map(|(at, _)| *at), Some(Coord::new(10, 11)));
    }

    #[test]
    fn neighbourhood_clips_at_edges_and_skips_empty() {
        let map = map_with(ResourceKind::Oil, 8, &[(0, 0, 1.0), (7, 7, 2.0), (6, 2, 5.0)]);
        let drill = Drill::new(Coord::new(4, 4), Strategy::Max);
        let coords: Vec<Coord> = drill.neighbourhood(&map).into_iter().map(|(at, _)| at).collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(6, 2), Coord::new(7, 7)]
        );

        let corner = Drill::new(Coord::new(0, 0), Strategy::Max);
        assert_eq!(corner.neighbourhood(&map).len(), 1);
    }

    #[test]
    fn move_follows_max_strategy() {
        let map = map_with(ResourceKind::Oil, 20, &[(5, 5, 1.0), (8, 9, 9.0), (12, 3, 4.0)]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut drill = Drill::new(Coord::new(7, 7), Strategy::Max);

        assert_eq!(drill.move_on(&map, &mut rng).ok(), Some(Coord::new(8, 9)));
        assert_eq!(drill.position(), Coord::new(8, 9));
    }

    #[test]
    fn move_out_of_reach_is_invalid_state() {
        let map = map_with(ResourceKind::Oil, 30, &[(25, 25, 1.0)]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut drill = Drill::new(Coord::new(2, 2), Strategy::Random);

        assert!(matches!(
            drill.move_on(&map, &mut rng),
            Err(CoreError::InvalidState(_))
        ));
        assert_eq!(drill.position(), Coord::new(2, 2));
    }
}
