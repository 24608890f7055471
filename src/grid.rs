//! Grid state: cell states, placed ships, and the remaining-ship count.

use log::debug;
use rand::Rng;

use crate::bitboard::CoordSet;
use crate::common::{BoardError, Outcome};
use crate::config::{fleet_lengths, BOARD_SIZE};
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::ship::{Orientation, Ship};
use crate::strike::{self, CellState};

const N: usize = BOARD_SIZE as usize;
const PLACEMENT_ATTEMPTS: usize = 100;

/// Read-only snapshot of a grid, optionally with ships hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardView {
    cells: [[CellState; N]; N],
}

impl BoardView {
    pub fn cell(&self, at: Coord) -> CellState {
        self.cells[at.row()][at.col()]
    }

    pub fn is_struck(&self, at: Coord) -> bool {
        self.cell(at).is_struck()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> &[[CellState; N]; N] {
        &self.cells
    }

    /// Cells no strike has landed on yet.
    pub fn unstruck(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&at| !self.is_struck(at))
    }
}

/// One side's board: a `BOARD_SIZE`² cell map plus the ships placed on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; N]; N],
    fleet: Fleet,
    hits: CoordSet,
    ships_remaining: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid (no ships placed).
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; N]; N],
            fleet: Fleet::new(),
            hits: CoordSet::new(),
            ships_remaining: 0,
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        N
    }

    pub fn cell(&self, at: Coord) -> CellState {
        self.cells[at.row()][at.col()]
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Ships with at least one segment not yet hit.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Returns `true` once ships are placed and every one is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.fleet.is_empty() && self.ships_remaining == 0
    }

    /// Whether the ship covering `at` has been sunk.
    pub fn is_sunk_at(&self, at: Coord) -> bool {
        self.fleet.is_sunk_at(at, &self.hits)
    }

    fn layout(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        let origin = Coord::new(row, col).map_err(|_| BoardError::ShipOutOfBounds)?;
        let ship = Ship::new(self.fleet.next_type(length), orientation, origin)?;
        if ship.cells().any(|at| self.cell(at) != CellState::Empty) {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(ship)
    }

    /// Whether a ship of `length` fits at (row, col) without overlap.
    pub fn can_place(&self, row: usize, col: usize, length: usize, orientation: Orientation) -> bool {
        self.layout(row, col, length, orientation).is_ok()
    }

    /// Place a ship of `length` at (row, col) along `orientation`.
    ///
    /// On error the grid is unchanged; on success every covered cell becomes
    /// `Occupied` and the ship joins the fleet.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.layout(row, col, length, orientation)?;
        for at in ship.cells() {
            self.cells[at.row()][at.col()] = CellState::Occupied;
        }
        debug!("placed {:?}", ship);
        self.fleet.push(ship);
        self.ships_remaining += 1;
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, Orientation) for a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if length == 0 {
            return Err(BoardError::ZeroLength);
        }
        if length > N {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (N - 1, N - length),
                Orientation::Vertical => (N - length, N - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            if self.can_place(r, c, length, orient) {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the whole standard fleet at random positions.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for length in fleet_lengths() {
            let (r, c, o) = self.random_placement(rng, length)?;
            self.place(r, c, length, o)?;
        }
        Ok(())
    }

    /// Resolve a strike at `at`, updating the cell and the remaining-ship count.
    pub fn strike(&mut self, at: Coord) -> Outcome {
        let (outcome, next) = strike::resolve(self.cell(at));
        self.cells[at.row()][at.col()] = next;
        if outcome == Outcome::Hit {
            self.hits.insert(at);
            self.ships_remaining = self.fleet.remaining(&self.hits);
        }
        debug!("strike at {} -> {:?}", at, outcome);
        outcome
    }

    /// Strike at raw (row, col), rejecting coordinates outside the board
    /// before any state changes.
    pub fn strike_at(&mut self, row: usize, col: usize) -> Result<Outcome, BoardError> {
        let at = Coord::new(row, col)?;
        Ok(self.strike(at))
    }

    /// Snapshot of the cells; with `reveal == false` unstruck ship cells read as `Empty`.
    pub fn view(&self, reveal: bool) -> BoardView {
        let mut cells = self.cells;
        if !reveal {
            for row in cells.iter_mut() {
                for cell in row.iter_mut() {
                    if *cell == CellState::Occupied {
                        *cell = CellState::Empty;
                    }
                }
            }
        }
        BoardView { cells }
    }
}
