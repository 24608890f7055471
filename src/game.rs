//! Match controller: setup, strict turn alternation, and the winner check.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::common::{BoardError, Outcome};
use crate::coord::Coord;
use crate::grid::{BoardView, Grid};
use crate::ship::Orientation;

/// One of the two sides of a match. `A` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The side this one attacks.
    pub fn opponent(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(&self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InSetup,
    Turn(Side),
    Finished { winner: Side },
}

/// What happened on one resolved strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub attacker: Side,
    pub target: Coord,
    pub outcome: Outcome,
    /// Ships the defender still has afloat after the strike.
    pub defender_ships_remaining: usize,
    /// The strike sank the ship it hit.
    pub sunk: bool,
}

/// Errors returned by match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Ships can only be placed during setup.
    NotInSetup,
    /// Strikes need a match that has started and not finished.
    NotInProgress,
    /// The side's fleet is not the standard five ships.
    IncompleteFleet(Side),
    /// The side has no unplaced ship of this length.
    ShipNotInFleet { side: Side, length: usize },
    /// A side has no ships at all.
    EmptyFleet(Side),
    /// A strategy had no unattacked cell left to choose.
    NoTargetsLeft(Side),
    Board(BoardError),
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NotInSetup => write!(f, "Ships can only be placed during setup"),
            MatchError::NotInProgress => write!(f, "Match is not in progress"),
            MatchError::IncompleteFleet(side) => write!(f, "Fleet of side {:?} is incomplete", side),
            MatchError::ShipNotInFleet { side, length } => {
                write!(f, "Side {:?} has no unplaced ship of length {}", side, length)
            }
            MatchError::EmptyFleet(side) => write!(f, "Side {:?} has no ships", side),
            MatchError::NoTargetsLeft(side) => write!(f, "Side {:?} has no targets left", side),
            MatchError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// Two grids and the turn state machine between them.
#[derive(Clone, Debug)]
pub struct Match {
    grids: [Grid; 2],
    phase: Phase,
    turns: usize,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// A match in setup with two empty grids.
    pub fn new() -> Self {
        Self {
            grids: [Grid::new(), Grid::new()],
            phase: Phase::InSetup,
            turns: 0,
        }
    }

    /// Start directly from already populated grids, skipping the standard
    /// fleet check. Each grid needs at least one ship.
    ///
    /// Grids may carry earlier strikes. A side whose ships are all sunk
    /// already loses at the end of the first strike, whatever its outcome;
    /// if that strike also sinks the other fleet, the attacker wins.
    pub fn from_grids(a: Grid, b: Grid) -> Result<Self, MatchError> {
        for (side, grid) in [(Side::A, &a), (Side::B, &b)] {
            if grid.fleet().is_empty() {
                return Err(MatchError::EmptyFleet(side));
            }
        }
        Ok(Self {
            grids: [a, b],
            phase: Phase::Turn(Side::A),
            turns: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move, while the match is running.
    pub fn current(&self) -> Option<Side> {
        match self.phase {
            Phase::Turn(side) => Some(side),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Strikes resolved so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// A side's own grid.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    /// What `side` may see of its opponent: struck cells only.
    pub fn target_view(&self, side: Side) -> BoardView {
        self.grid(side.opponent()).view(false)
    }

    fn setup_grid(&mut self, side: Side, length: usize) -> Result<&mut Grid, MatchError> {
        if self.phase != Phase::InSetup {
            return Err(MatchError::NotInSetup);
        }
        let grid = &mut self.grids[side.index()];
        if !grid.fleet().missing_lengths().contains(&length) {
            return Err(MatchError::ShipNotInFleet { side, length });
        }
        Ok(grid)
    }

    /// Place one ship of the standard fleet for `side`.
    pub fn place(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), MatchError> {
        self.setup_grid(side, length)?
            .place(row, col, length, orientation)
            .map_err(MatchError::from)
    }

    /// Fill the rest of `side`'s fleet at random positions.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, side: Side, rng: &mut R) -> Result<(), MatchError> {
        if self.phase != Phase::InSetup {
            return Err(MatchError::NotInSetup);
        }
        let missing = self.grid(side).fleet().missing_lengths();
        for length in missing {
            let grid = self.setup_grid(side, length)?;
            let (r, c, o) = grid.random_placement(rng, length)?;
            grid.place(r, c, length, o)?;
        }
        Ok(())
    }

    /// Leave setup once both fleets are complete; side `A` moves first.
    pub fn begin(&mut self) -> Result<(), MatchError> {
        if self.phase != Phase::InSetup {
            return Err(MatchError::NotInSetup);
        }
        for side in [Side::A, Side::B] {
            if !self.grid(side).fleet().is_standard() {
                return Err(MatchError::IncompleteFleet(side));
            }
        }
        self.phase = Phase::Turn(Side::A);
        info!("setup complete, side A to move");
        Ok(())
    }

    /// Resolve one strike by the side to move against its opponent.
    ///
    /// The turn passes whatever the outcome. After the strike both fleets are
    /// checked; if either is gone the match finishes.
    pub fn strike(&mut self, at: Coord) -> Result<TurnReport, MatchError> {
        let attacker = self.current().ok_or(MatchError::NotInProgress)?;
        let defender = attacker.opponent();
        let grid = &mut self.grids[defender.index()];
        let outcome = grid.strike(at);
        let sunk = outcome == Outcome::Hit && grid.is_sunk_at(at);
        let defender_ships_remaining = grid.ships_remaining();
        self.turns += 1;

        let a_gone = self.grid(Side::A).ships_remaining() == 0;
        let b_gone = self.grid(Side::B).ships_remaining() == 0;
        self.phase = match (a_gone, b_gone) {
            (false, false) => Phase::Turn(defender),
            (true, false) => Phase::Finished { winner: Side::B },
            (false, true) => Phase::Finished { winner: Side::A },
            (true, true) => Phase::Finished { winner: attacker },
        };
        debug!(
            "turn {}: {:?} strikes {} -> {:?}",
            self.turns, attacker, at, outcome
        );
        if let Some(winner) = self.winner() {
            info!("match finished after {} strikes, {:?} wins", self.turns, winner);
        }

        Ok(TurnReport {
            attacker,
            target: at,
            outcome,
            defender_ships_remaining,
            sunk,
        })
    }

    /// Validate a raw human coordinate, then strike it.
    pub fn strike_at(&mut self, row: usize, col: usize) -> Result<TurnReport, MatchError> {
        if self.current().is_none() {
            return Err(MatchError::NotInProgress);
        }
        let at = Coord::new(row, col)?;
        self.strike(at)
    }
}
