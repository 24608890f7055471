use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use salvo::player::cli::print_board;
use salvo::{init_logging, AiPlayer, CliPlayer, Difficulty, Session, Side};

#[derive(Parser)]
#[command(author, version, about = "Naval combat against a computer opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against an AI on the local machine.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two AIs play each other.
    Duel {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        first: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        second: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { difficulty, seed } => {
            let mut rng = make_rng(seed);
            let mut session = Session::new(
                Box::new(CliPlayer::new()),
                Box::new(AiPlayer::new(difficulty)),
            );
            println!("Setting up your board...");
            session.setup(&mut rng)?;
            let winner = session.run(&mut rng)?;
            println!("\nComputer's board:");
            print_board(&session.game().grid(Side::B).view(true));
            match winner {
                Side::A => println!("You win!"),
                Side::B => println!("Computer wins!"),
            }
        }
        Commands::Duel {
            first,
            second,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mut session = Session::new(
                Box::new(AiPlayer::new(first)),
                Box::new(AiPlayer::new(second)),
            );
            session.setup(&mut rng)?;
            while !session.game().is_finished() {
                let report = session.play_turn(&mut rng)?;
                println!(
                    "{} strikes at {} and {:?}",
                    session.player_name(report.attacker),
                    report.target,
                    report.outcome
                );
            }
            if let Some(winner) = session.game().winner() {
                println!(
                    "{} wins after {} strikes.",
                    session.player_name(winner),
                    session.game().turns()
                );
            }
        }
    }
    Ok(())
}
