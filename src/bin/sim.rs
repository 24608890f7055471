use rand::{rngs::SmallRng, SeedableRng};
use salvo::{AiPlayer, Difficulty, Session, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <difficulty-a> <difficulty-b> <seed>", args[0]);
        std::process::exit(1);
    }
    let first: Difficulty = args[1].parse().map_err(|e| anyhow::anyhow!("{}", e))?;
    let second: Difficulty = args[2].parse().map_err(|e| anyhow::anyhow!("{}", e))?;
    let seed: u64 = args[3].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new(
        Box::new(AiPlayer::new(first)),
        Box::new(AiPlayer::new(second)),
    );
    session.setup(&mut rng)?;
    let winner = session.run(&mut rng)?;

    let game = session.game();
    let side = |s: Side, d: Difficulty| {
        json!({
            "difficulty": d,
            "ships_remaining": game.grid(s).ships_remaining(),
        })
    };
    let result = json!({
        "winner": winner,
        "turns": game.turns(),
        "a": side(Side::A, first),
        "b": side(Side::B, second),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
