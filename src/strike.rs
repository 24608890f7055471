//! Strike resolution as a pure cell transition.

use crate::common::Outcome;

/// State of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Hit,
    Missed,
}

impl CellState {
    /// Whether a strike has already landed here.
    pub fn is_struck(&self) -> bool {
        matches!(self, CellState::Hit | CellState::Missed)
    }

    /// Glyph used by text renderers.
    pub fn glyph(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Occupied => 'S',
            CellState::Hit => 'X',
            CellState::Missed => 'O',
        }
    }
}

/// Resolve a strike against a cell in state `current`.
///
/// Returns the outcome and the state the cell moves to. Struck cells are
/// terminal: `Hit` stays `Hit` and `Missed` stays `Missed`.
pub fn resolve(current: CellState) -> (Outcome, CellState) {
    match current {
        CellState::Occupied => (Outcome::Hit, CellState::Hit),
        CellState::Empty | CellState::Missed => (Outcome::Miss, CellState::Missed),
        CellState::Hit => (Outcome::AlreadyStruck, CellState::Hit),
    }
}
