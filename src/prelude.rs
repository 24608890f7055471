//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Coord, Difficulty, Grid, Match, Orientation, Outcome, Player, Session, Side,
    Strategy, Targeting,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
