//! Ship definitions and their footprint on the board.

use core::fmt;

use crate::bitboard::CoordSet;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Columns increase from the origin.
    Horizontal,
    /// Rows increase from the origin.
    Vertical,
}

impl Orientation {
    /// Parse `H`/`V` in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Cell `i` steps from `origin`, or `None` past the board edge.
    fn advance(&self, origin: Coord, i: usize) -> Option<Coord> {
        let (row, col) = match self {
            Orientation::Horizontal => (origin.row(), origin.col().checked_add(i)?),
            Orientation::Vertical => (origin.row().checked_add(i)?, origin.col()),
        };
        Coord::new(row, col).ok()
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board. Immutable once built; damage lives in the grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coord,
    mask: CoordSet,
}

impl Ship {
    /// Lay out a ship from `origin` along `orientation`.
    /// Fails if the ship is empty or would leave the board.
    pub fn new(ship_type: ShipType, orientation: Orientation, origin: Coord) -> Result<Self, BoardError> {
        let length = ship_type.length();
        if length == 0 {
            return Err(BoardError::ZeroLength);
        }
        if length > BOARD_SIZE as usize {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mut mask = CoordSet::new();
        for i in 0..length {
            let cell = orientation
                .advance(origin, i)
                .ok_or(BoardError::ShipOutOfBounds)?;
            mask.insert(cell);
        }
        Ok(Ship {
            ship_type,
            orientation,
            origin,
            mask,
        })
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (orientation, origin) = (self.orientation, self.origin);
        (0..self.ship_type.length()).filter_map(move |i| orientation.advance(origin, i))
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.mask.contains(at)
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Origin of the ship.
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> CoordSet {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, length: {}, orientation: {:?} }}",
            self.ship_type.name(),
            self.origin,
            self.length(),
            self.orientation,
        )
    }
}
