#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    common::Outcome,
    config::{fleet_lengths, BOARD_SIZE, NUM_SHIPS},
    coord::Coord,
    game::{Match, Side, TurnReport},
    grid::{BoardView, Grid},
    ship::Orientation,
};

use super::Player;

/// Human player reading placements and targets line by line.
pub struct CliPlayer {
    name: String,
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Player reading from standard input.
    pub fn new() -> Self {
        Self::with_input(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Player reading from any line source, e.g. a scripted buffer.
    pub fn with_input(input: Box<dyn BufRead>) -> Self {
        Self {
            name: String::from("You"),
            input,
        }
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        std::print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        Ok(line.trim().to_string())
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format (row, col) as `A1`-style text.
pub fn coord_to_string(at: Coord) -> String {
    let col = (b'A' + at.col() as u8) as char;
    std::format!("{}{}", col, at.row() + 1)
}

fn last_column() -> char {
    (b'A' + BOARD_SIZE - 1) as char
}

/// Parse `A5`-style input (column letter, then 1-based row) into zero-indexed (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let n = BOARD_SIZE as usize;
    let mut chars = input.trim().chars();
    let letter = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        Some(c) => return Err(format!("'{}' is not a column letter A-{}", c, last_column())),
        None => return Err("Enter a column letter and row number, e.g. A5".to_string()),
    };
    let col = (letter as u8 - b'A') as usize;
    if col >= n {
        return Err(format!("Column {} is off the board (A-{})", letter, last_column()));
    }
    let digits = chars.as_str();
    match digits.parse::<usize>() {
        Ok(row) if (1..=n).contains(&row) => Ok((row - 1, col)),
        Ok(row) => Err(format!("Row {} is off the board (1-{})", row, n)),
        Err(_) => Err(format!("'{}' is not a row number 1-{}", digits, n)),
    }
}

/// Parse `A5 H`-style placement input. Orientation defaults to horizontal.
pub fn parse_placement(input: &str) -> Result<(usize, usize, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parts
        .next()
        .ok_or("Please enter coordinates (e.g., A5 H)")?;
    let (r, c) = parse_coord(coord)?;
    let orientation = match parts.next() {
        None => Orientation::Horizontal,
        Some(s) => s
            .chars()
            .next()
            .and_then(Orientation::from_char)
            .ok_or_else(|| format!("Invalid orientation '{}' - use H or V", s))?,
    };
    Ok((r, c, orientation))
}

/// Print a board view with column letters and row numbers.
pub fn print_board(view: &BoardView) {
    std::print!("    ");
    for c in 0..BOARD_SIZE as usize {
        std::print!(" {}", (b'A' + c as u8) as char);
    }
    std::println!();
    for (r, row) in view.rows().iter().enumerate() {
        std::print!("  {:2}", r + 1);
        for cell in row {
            std::print!(" {}", cell.glyph());
        }
        std::println!();
    }
}

/// Display the opponent board (hidden) and the player's own board.
pub fn print_player_view(ocean: &BoardView, own: &Grid) {
    std::println!("\nYour board:");
    print_board(&own.view(true));
    std::println!("\nOpponent's board (hidden):");
    print_board(ocean);
    std::println!("  Legend: S=Ship  X=Hit  O=Miss  .=Water");
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, game: &mut Match, side: Side) -> anyhow::Result<()> {
        std::println!("Place your ships on the board!");
        std::println!("  Enter a start cell and orientation (e.g., A5 H or A5 V).");
        std::println!("  Press ENTER for a random placement.");
        for (i, length) in fleet_lengths().into_iter().enumerate() {
            loop {
                print_board(&game.grid(side).view(true));
                std::println!("Ship {}/{}: place a ship of length {}.", i + 1, NUM_SHIPS, length);
                let line = self.prompt("Enter placement: ")?;
                let (r, c, o) = if line.is_empty() {
                    let grid = game.grid(side);
                    grid.random_placement(rng, length)
                        .map_err(|e| anyhow::anyhow!(e))?
                } else {
                    match parse_placement(&line) {
                        Ok(p) => p,
                        Err(e) => {
                            std::println!("Invalid input. {}", e);
                            continue;
                        }
                    }
                };
                match game.place(side, r, c, length, o) {
                    Ok(()) => {
                        std::println!("Ship placed successfully!");
                        break;
                    }
                    Err(e) => std::println!("Invalid placement ({}). Try again.", e),
                }
            }
        }
        std::println!("Your board:");
        print_board(&game.grid(side).view(true));
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, ocean: &BoardView, own: &Grid) -> anyhow::Result<Coord> {
        print_player_view(ocean, own);
        std::println!("{}'s turn.", self.name);
        loop {
            let line = self.prompt("Enter target (e.g., B7): ")?;
            match parse_coord(&line).and_then(|(r, c)| Coord::new(r, c).map_err(|e| e.to_string())) {
                Ok(at) => return Ok(at),
                Err(e) => std::println!("Out of range for input value ({}), Try again!", e),
            }
        }
    }

    fn handle_outcome(&mut self, at: Coord, outcome: Outcome) {
        std::println!("{}", result_line(at, outcome));
    }

    fn handle_opponent_strike(&mut self, report: &TurnReport, opponent: &str) {
        std::println!(
            "{} strikes at {} and {}!",
            opponent,
            coord_to_string(report.target),
            outcome_word(report.outcome)
        );
        if report.sunk {
            std::println!("One of your ships went down. {} left.", report.defender_ships_remaining);
        }
    }
}

/// The human's own result line, e.g. `B5: hit!`.
fn result_line(at: Coord, outcome: Outcome) -> String {
    let cell = coord_to_string(at);
    match outcome {
        Outcome::Hit => std::format!("{}: hit!", cell),
        Outcome::Miss => std::format!("{}: miss.", cell),
        Outcome::AlreadyStruck => std::format!("{}: already hit, turn wasted.", cell),
    }
}

fn outcome_word(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Hit => "hits",
        Outcome::Miss => "misses",
        Outcome::AlreadyStruck => "wastes the shot",
    }
}
