//! A set of board coordinates packed into one `u128`.
//!
//! Bit `i` stands for the cell with row-major index `i`; the 10×10 board
//! needs 100 of the 128 bits. `no_std` friendly and allocation free.

use core::fmt;
use core::ops::{BitAnd, BitOrAssign};

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

const _: () = assert!(Coord::CELLS <= u128::BITS as usize);

/// Set of coordinates used for ship masks, hits and AI memory.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordSet {
    bits: u128,
}

impl CoordSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        CoordSet { bits: 0 }
    }

    #[inline]
    fn bit(at: Coord) -> u128 {
        1u128 << at.index()
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.bits & Self::bit(at) != 0
    }

    /// Adds `at`; returns `true` if it was not already present.
    pub fn insert(&mut self, at: Coord) -> bool {
        let fresh = !self.contains(at);
        self.bits |= Self::bit(at);
        fresh
    }

    /// Whether every coordinate of `self` is also in `other`.
    pub fn is_subset(&self, other: &CoordSet) -> bool {
        (*self & *other) == *self
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = Self::new();
        for at in iter {
            set.insert(at);
        }
        set
    }
}

impl fmt::Debug for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = BOARD_SIZE as usize;
        writeln!(f, "CoordSet ({} set):", self.len())?;
        for at in Coord::all() {
            write!(f, "{} ", if self.contains(at) { '■' } else { '□' })?;
            if at.col() + 1 == n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl BitAnd for CoordSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CoordSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOrAssign for CoordSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = CoordSet::new();
        let a = Coord::new(3, 4).unwrap();
        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert!(set.contains(a));
        assert!(!set.contains(Coord::new(4, 3).unwrap()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn last_cell_fits() {
        let mut set = CoordSet::new();
        set.insert(Coord::new(9, 9).unwrap());
        assert!(set.contains(Coord::new(9, 9).unwrap()));
        assert!(!set.is_empty());
    }

    #[test]
    fn subset_and_union() {
        let a = Coord::new(0, 0).unwrap();
        let b = Coord::new(0, 1).unwrap();
        let small: CoordSet = [a].into_iter().collect();
        let mut big: CoordSet = [b].into_iter().collect();
        assert!(!small.is_subset(&big));
        big |= small;
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(CoordSet::new().is_subset(&small));
    }
}
