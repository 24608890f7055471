#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod session;
mod ship;
pub mod strike;

pub use ai::*;
pub use bitboard::CoordSet;
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use fleet::Fleet;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{AiPlayer, Player};
#[cfg(feature = "std")]
pub use player::CliPlayer;
pub use session::Session;
pub use ship::*;
pub use strike::CellState;
