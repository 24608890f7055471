//! Board coordinates.
//!
//! A `Coord` can only be built inside `[0, BOARD_SIZE)` on both axes, so every
//! grid operation that takes one is free of bounds checks.

use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// Zero-indexed (row, column) position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    /// Validated constructor: rejects anything outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Coordinate for a row-major cell index. Callers guarantee `index < CELLS`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::CELLS);
        Coord {
            row: (index / N) as u8,
            col: (index % N) as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major index of this cell.
    pub fn index(&self) -> usize {
        self.row() * N + self.col()
    }

    /// Whether `row + col` is even.
    pub fn is_even_parity(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Cell at the given offset, or `None` once the board edge is crossed.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Coord::new(row, col).ok()
    }

    /// Orthogonal neighbours inside the board, in the order up, down, left, right.
    pub fn neighbours(&self) -> impl Iterator<Item = Coord> {
        let here = *self;
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| here.offset(dr, dc))
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..Self::CELLS).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coord::new(10, 0),
            Err(BoardError::OutOfRange { row: 10, col: 0 })
        );
        assert!(Coord::new(0, 10).is_err());
        assert!(Coord::new(9, 9).is_ok());
    }

    #[test]
    fn corner_has_two_neighbours() {
        let corner = Coord::new(0, 0).unwrap();
        let n: Vec<_> = corner.neighbours().collect();
        assert_eq!(n, vec![Coord::new(1, 0).unwrap(), Coord::new(0, 1).unwrap()]);
    }

    #[test]
    fn neighbour_order_is_up_down_left_right() {
        let c = Coord::new(4, 4).unwrap();
        let n: Vec<_> = c.neighbours().map(|c| (c.row(), c.col())).collect();
        assert_eq!(n, vec![(3, 4), (5, 4), (4, 3), (4, 5)]);
    }

    #[test]
    fn index_roundtrip() {
        for c in Coord::all() {
            assert_eq!(Coord::from_index(c.index()), c);
        }
        assert_eq!(Coord::all().count(), Coord::CELLS);
    }
}
