//! Board geometry: a fixed `rows × columns` coordinate space.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DimensionError, MAX_DIMENSION};

/// A cell coordinate, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal step on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in neighbour order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Fixed-size board. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create a player-sized grid, validating `1..=MAX_DIMENSION` per side.
    pub fn new(rows: i64, columns: i64) -> Result<Self, DimensionError> {
        if rows <= 0 || columns <= 0 {
            return Err(DimensionError::NotPositive { rows, columns });
        }
        if rows > MAX_DIMENSION as i64 || columns > MAX_DIMENSION as i64 {
            return Err(DimensionError::TooLarge {
                rows,
                columns,
                max: MAX_DIMENSION,
            });
        }
        Ok(Self {
            rows: rows as usize,
            columns: columns as usize,
        })
    }

    /// Create a grid of a size fixed by the game's rules, skipping the
    /// player-size check.
    #[must_use]
    pub const fn fixed(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// True iff `(row, col)` lies on the board. Accepts signed values so
    /// callers can probe off-board neighbours.
    #[must_use]
    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.columns
    }

    /// The cell one step from `pos`, if it is on the board.
    #[must_use]
    pub fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = pos.row as isize + dr;
        let col = pos.col as isize + dc;
        self.is_valid_position(row, col)
            .then(|| Position::new(row as usize, col as usize))
    }

    /// In-bounds orthogonal neighbours, in order up, down, left, right.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.step(pos, d))
            .collect()
    }

    /// Row-major index of `pos`.
    #[must_use]
    pub const fn index(&self, pos: Position) -> usize {
        pos.row * self.columns + pos.col
    }

    /// Position of a row-major index.
    #[must_use]
    pub const fn position(&self, index: usize) -> Position {
        Position::new(index / self.columns, index % self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new(3, 4).unwrap();

        assert!(grid.is_valid_position(0, 0));
        assert!(grid.is_valid_position(2, 3));
        assert!(!grid.is_valid_position(3, 0));
        assert!(!grid.is_valid_position(0, 4));
        assert!(!grid.is_valid_position(-1, 0));
        assert!(!grid.is_valid_position(0, -1));
    }

    #[test]
    fn test_grid_rejects_bad_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(DimensionError::NotPositive { rows: 0, columns: 3 })
        );
        assert_eq!(
            Grid::new(3, -2),
            Err(DimensionError::NotPositive { rows: 3, columns: -2 })
        );
        assert_eq!(
            Grid::new(11, 3),
            Err(DimensionError::TooLarge { rows: 11, columns: 3, max: 10 })
        );
        assert!(Grid::new(10, 10).is_ok());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_fixed_grid_skips_validation() {
        let grid = Grid::fixed(12, 12);
        assert_eq!(grid.cell_count(), 144);
    }

    #[test]
    fn test_neighbors_corner_and_center() {
        let grid = Grid::new(3, 3).unwrap();

        let corner = grid.neighbors(Position::new(0, 0));
        assert_eq!(corner.as_slice(), &[Position::new(1, 0), Position::new(0, 1)]);

        let center = grid.neighbors(Position::new(1, 1));
        assert_eq!(
            center.as_slice(),
            &[
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_step() {
        let grid = Grid::fixed(9, 9);
        assert_eq!(grid.step(Position::new(0, 4), Direction::Up), None);
        assert_eq!(grid.step(Position::new(0, 4), Direction::Down), Some(Position::new(1, 4)));
        assert_eq!(grid.step(Position::new(3, 8), Direction::Right), None);
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = Grid::new(4, 5).unwrap();
        for i in 0..grid.cell_count() {
            assert_eq!(grid.index(grid.position(i)), i);
        }
        assert_eq!(grid.position(7), Position::new(1, 2));
    }
}
