//! Dense row-major storage shared by the world and resource layers.

use seabed_types::Coord;

/// A fixed-size `width x height` grid stored row-major.
///
/// All access is bounds-checked and returns `None` outside the grid, so
/// callers never index past the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width.saturating_mul(height)],
        }
    }
}

impl<T> Grid<T> {
    /// Grid width in cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `other` has the same dimensions as `self`.
    pub const fn same_size<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Whether `at` lies inside the grid.
    pub const fn contains(&self, at: Coord) -> bool {
        at.x < self.width && at.y < self.height
    }

    fn index(&self, at: Coord) -> Option<usize> {
        if !self.contains(at) {
            return None;
        }
        at.y.checked_mul(self.width)?.checked_add(at.x)
    }

    /// Borrow the cell at `at`.
    pub fn get(&self, at: Coord) -> Option<&T> {
        self.index(at).and_then(|i| self.cells.get(i))
    }

    /// Mutably borrow the cell at `at`.
    pub fn get_mut(&mut self, at: Coord) -> Option<&mut T> {
        self.index(at).and_then(|i| self.cells.get_mut(i))
    }

    /// Overwrite the cell at `at`. Returns `false` if `at` is outside the grid.
    pub fn set(&mut self, at: Coord, value: T) -> bool {
        match self.get_mut(at) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Iterate `(coordinate, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.cells.iter())
    }

    /// Iterate `(coordinate, cell)` pairs mutably in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Coord, &mut T)> {
        self.coords().zip(self.cells.iter_mut())
    }

    /// Build a grid of the same size by mapping every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = Grid::filled(3, 2, 0_u8);
        assert!(grid.set(Coord::new(2, 1), 7));
        assert_eq!(grid.get(Coord::new(2, 1)), Some(&7));
        assert!(!grid.set(Coord::new(3, 0), 1));
        assert_eq!(grid.get(Coord::new(0, 2)), None);
    }

    #[test]
    fn coords_are_row_major() {
        let grid = Grid::filled(2, 2, ());
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn iter_pairs_coords_with_cells() {
        let mut grid = Grid::filled(2, 1, 0_u32);
        for (at, cell) in grid.iter_mut() {
            *cell = u32::try_from(at.x).unwrap_or(0);
        }
        let cells: Vec<(Coord, u32)> = grid.iter().map(|(at, v)| (at, *v)).collect();
        assert_eq!(cells, vec![(Coord::new(0, 0), 0), (Coord::new(1, 0), 1)]);
    }

    #[test]
    fn map_preserves_dimensions() {
        let grid = Grid::filled(4, 3, 1_i32);
        let doubled = grid.map(|v| v.saturating_mul(2));
        assert!(grid.same_size(&doubled));
        assert_eq!(doubled.get(Coord::new(3, 2)), Some(&2));
    }
}
