use rand::rngs::SmallRng;

use crate::{
    ai::{Difficulty, Strategy, Targeting},
    common::Outcome,
    coord::Coord,
    game::{Match, Side},
    grid::{BoardView, Grid},
};

use super::Player;

/// Computer player driven by one of the targeting strategies.
pub struct AiPlayer {
    strategy: Strategy,
    side: Side,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            strategy: Strategy::new(difficulty),
            side: Side::B,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        match self.difficulty() {
            Difficulty::Easy => "Easy AI",
            Difficulty::Medium => "Medium AI",
            Difficulty::Hard => "Hard AI",
        }
    }

    fn place_ships(&mut self, rng: &mut SmallRng, game: &mut Match, side: Side) -> anyhow::Result<()> {
        self.side = side;
        game.place_randomly(side, rng).map_err(|e| anyhow::anyhow!(e))
    }

    fn select_target(&mut self, rng: &mut SmallRng, ocean: &BoardView, _own: &Grid) -> anyhow::Result<Coord> {
        self.strategy
            .select_target(rng, ocean)
            .ok_or_else(|| super::no_targets(self.side))
    }

    fn handle_outcome(&mut self, at: Coord, outcome: Outcome) {
        self.strategy.record_outcome(at, outcome);
    }
}
