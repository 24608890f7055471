//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: one of the three targeting strategies
//! - CliPlayer: Interactive command-line player

use rand::rngs::SmallRng;

use crate::{
    common::Outcome,
    coord::Coord,
    game::{Match, MatchError, Side, TurnReport},
    grid::{BoardView, Grid},
};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its ships during setup
/// - Selecting targets to attack
/// - Handling feedback from strikes
pub trait Player {
    /// Name used when reporting strikes.
    fn name(&self) -> &str;

    /// Place the full fleet for `side` while `game` is in setup.
    fn place_ships(&mut self, rng: &mut SmallRng, game: &mut Match, side: Side) -> anyhow::Result<()>;

    /// Choose the next target given the opponent's visible board and our own.
    fn select_target(&mut self, rng: &mut SmallRng, ocean: &BoardView, own: &Grid) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its last strike.
    fn handle_outcome(&mut self, _at: Coord, _outcome: Outcome) {}

    /// Inform the player of an opponent strike against its board.
    fn handle_opponent_strike(&mut self, _report: &TurnReport, _opponent: &str) {}
}

pub(crate) fn no_targets(side: Side) -> anyhow::Error {
    anyhow::anyhow!(MatchError::NoTargetsLeft(side))
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
