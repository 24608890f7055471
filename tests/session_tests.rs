use salvo::{AiPlayer, Difficulty, Phase, Session, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_vs_ai_game() {
    for first in Difficulty::ALL {
        for second in Difficulty::ALL {
            let mut rng = SmallRng::seed_from_u64(123);
            let mut session = Session::new(
                Box::new(AiPlayer::new(first)),
                Box::new(AiPlayer::new(second)),
            );
            session.setup(&mut rng).unwrap();
            assert_eq!(session.game().phase(), Phase::Turn(Side::A));

            let winner = session.run(&mut rng).unwrap();
            let game = session.game();
            assert_eq!(game.grid(winner.opponent()).ships_remaining(), 0);
            assert!(game.grid(winner).ships_remaining() > 0);
            // Neither side restrikes, so nobody needs more than the whole board.
            assert!(game.turns() <= 2 * 100);
        }
    }
}

#[test]
fn test_turn_reports_alternate() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut session = Session::new(
        Box::new(AiPlayer::new(Difficulty::Easy)),
        Box::new(AiPlayer::new(Difficulty::Hard)),
    );
    session.setup(&mut rng).unwrap();
    assert_eq!(session.player_name(Side::A), "Easy AI");
    assert_eq!(session.player_name(Side::B), "Hard AI");
    let mut expected = Side::A;
    for _ in 0..20 {
        let report = session.play_turn(&mut rng).unwrap();
        assert_eq!(report.attacker, expected);
        expected = expected.opponent();
    }
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let play = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new(
            Box::new(AiPlayer::new(Difficulty::Medium)),
            Box::new(AiPlayer::new(Difficulty::Hard)),
        );
        session.setup(&mut rng).unwrap();
        let winner = session.run(&mut rng).unwrap();
        (winner, session.game().turns())
    };
    assert_eq!(play(5), play(5));
}
