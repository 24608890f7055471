//! Turn-loop driver binding two players to a [`Match`].

use alloc::boxed::Box;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::game::{Match, Side, TurnReport};
use crate::player::Player;

/// A match plus the two players that drive it.
pub struct Session {
    game: Match,
    players: [Box<dyn Player>; 2],
}

impl Session {
    /// `a` moves first.
    pub fn new(a: Box<dyn Player>, b: Box<dyn Player>) -> Self {
        Self {
            game: Match::new(),
            players: [a, b],
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn player_name(&self, side: Side) -> &str {
        match side {
            Side::A => self.players[0].name(),
            Side::B => self.players[1].name(),
        }
    }

    /// Let both players place their fleets, then start the match.
    pub fn setup(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let [a, b] = &mut self.players;
        info!("setting up board for {}", a.name());
        a.place_ships(rng, &mut self.game, Side::A)?;
        info!("setting up board for {}", b.name());
        b.place_ships(rng, &mut self.game, Side::B)?;
        self.game.begin().map_err(|e| anyhow::anyhow!(e))
    }

    /// Ask the side to move for a target and resolve it.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        let side = self
            .game
            .current()
            .ok_or_else(|| anyhow::anyhow!("match is not in progress"))?;
        let [a, b] = &mut self.players;
        let (attacker, defender) = match side {
            Side::A => (a, b),
            Side::B => (b, a),
        };
        let ocean = self.game.target_view(side);
        let at = attacker.select_target(rng, &ocean, self.game.grid(side))?;
        let report = self.game.strike(at).map_err(|e| anyhow::anyhow!(e))?;
        attacker.handle_outcome(at, report.outcome);
        defender.handle_opponent_strike(&report, attacker.name());
        debug!(
            "{} strikes at {} and {:?}",
            attacker.name(),
            report.target,
            report.outcome
        );
        Ok(report)
    }

    /// Play turns until one fleet is gone; returns the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.game.winner() {
                info!("{} wins after {} strikes", self.player_name(winner), self.game.turns());
                return Ok(winner);
            }
            self.play_turn(rng)?;
        }
    }
}
