//! Targeting policies for computer sides.
//!
//! Each policy sees the opponent only through a [`BoardView`] with ships
//! hidden, draws randomness from an injected `Rng`, and owns exactly the
//! memory it needs.

use alloc::collections::VecDeque;
use core::fmt;
use core::str::FromStr;

use log::debug;
use rand::Rng;

use crate::bitboard::CoordSet;
use crate::common::Outcome;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::grid::BoardView;

/// Strength of a computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a difficulty name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty;

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid AI type! Choose 'Easy', 'Medium', or 'Hard'.")
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownDifficulty)
    }
}

/// A decision policy producing the next coordinate to strike.
pub trait Targeting {
    /// Choose the next target, or `None` when no unattacked cell is left.
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, ocean: &BoardView) -> Option<Coord>;

    /// Inform the policy of the outcome of its last strike.
    fn record_outcome(&mut self, _at: Coord, _outcome: Outcome) {}
}

/// Uniform draw over the cells not in `attacked`.
fn random_unattacked<R: Rng + ?Sized>(rng: &mut R, attacked: &CoordSet) -> Option<Coord> {
    let open = Coord::CELLS - attacked.len();
    if open == 0 {
        return None;
    }
    let k = rng.random_range(0..open);
    Coord::all().filter(|at| !attacked.contains(*at)).nth(k)
}

/// Uniform random targeting with no memory beyond the opponent's board.
#[derive(Debug, Clone, Default)]
pub struct EasyAi;

impl EasyAi {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for EasyAi {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, ocean: &BoardView) -> Option<Coord> {
        ocean.unstruck().next()?;
        let n = BOARD_SIZE as usize;
        loop {
            let at = Coord::new(rng.random_range(0..n), rng.random_range(0..n)).ok()?;
            if !ocean.is_struck(at) {
                return Some(at);
            }
        }
    }
}

/// Hunt at random, then work through the neighbours of every hit.
#[derive(Debug, Clone, Default)]
pub struct MediumAi {
    attacked: CoordSet,
    queue: VecDeque<Coord>,
}

impl MediumAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates already chosen as targets.
    pub fn attacked(&self) -> CoordSet {
        self.attacked
    }

    /// Pending follow-up targets, front first.
    pub fn queue(&self) -> &VecDeque<Coord> {
        &self.queue
    }
}

impl Targeting for MediumAi {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, _ocean: &BoardView) -> Option<Coord> {
        while let Some(at) = self.queue.pop_front() {
            if self.attacked.insert(at) {
                return Some(at);
            }
        }
        let at = random_unattacked(rng, &self.attacked)?;
        self.attacked.insert(at);
        Some(at)
    }

    fn record_outcome(&mut self, at: Coord, outcome: Outcome) {
        if outcome != Outcome::Hit {
            return;
        }
        for next in at.neighbours() {
            if !self.attacked.contains(next) && !self.queue.contains(&next) {
                self.queue.push_back(next);
            }
        }
        debug!("medium ai: hit at {}, {} queued", at, self.queue.len());
    }
}

/// Checkerboard scan over even-parity cells, then random fallback.
#[derive(Debug, Clone)]
pub struct HardAi {
    attacked: CoordSet,
    scan: VecDeque<Coord>,
}

impl Default for HardAi {
    fn default() -> Self {
        Self::new()
    }
}

impl HardAi {
    pub fn new() -> Self {
        Self {
            attacked: CoordSet::new(),
            scan: Coord::all().filter(Coord::is_even_parity).collect(),
        }
    }

    pub fn attacked(&self) -> CoordSet {
        self.attacked
    }

    /// Parity cells not yet consumed, in scan order.
    pub fn scan(&self) -> &VecDeque<Coord> {
        &self.scan
    }
}

impl Targeting for HardAi {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, _ocean: &BoardView) -> Option<Coord> {
        while let Some(at) = self.scan.pop_front() {
            if self.attacked.insert(at) {
                return Some(at);
            }
        }
        let at = random_unattacked(rng, &self.attacked)?;
        self.attacked.insert(at);
        Some(at)
    }
}

/// One of the three policies, selected by difficulty.
#[derive(Debug, Clone)]
pub enum Strategy {
    Easy(EasyAi),
    Medium(MediumAi),
    Hard(HardAi),
}

impl Strategy {
    pub fn new(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Easy(EasyAi::new()),
            Difficulty::Medium => Strategy::Medium(MediumAi::new()),
            Difficulty::Hard => Strategy::Hard(HardAi::new()),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            Strategy::Easy(_) => Difficulty::Easy,
            Strategy::Medium(_) => Difficulty::Medium,
            Strategy::Hard(_) => Difficulty::Hard,
        }
    }
}

impl Targeting for Strategy {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, ocean: &BoardView) -> Option<Coord> {
        match self {
            Strategy::Easy(ai) => ai.select_target(rng, ocean),
            Strategy::Medium(ai) => ai.select_target(rng, ocean),
            Strategy::Hard(ai) => ai.select_target(rng, ocean),
        }
    }

    fn record_outcome(&mut self, at: Coord, outcome: Outcome) {
        match self {
            Strategy::Easy(ai) => ai.record_outcome(at, outcome),
            Strategy::Medium(ai) => ai.record_outcome(at, outcome),
            Strategy::Hard(ai) => ai.record_outcome(at, outcome),
        }
    }
}
