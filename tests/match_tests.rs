use salvo::{
    BoardError, Coord, Grid, Match, MatchError, Orientation, Outcome, Phase, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn one_ship(row: usize) -> Grid {
    let mut grid = Grid::new();
    grid.place(row, 0, 3, Orientation::Horizontal).unwrap();
    grid
}

#[test]
fn test_setup_requires_standard_fleets() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Match::new();
    assert_eq!(game.phase(), Phase::InSetup);
    assert_eq!(game.strike(at(0, 0)), Err(MatchError::NotInProgress));

    game.place(Side::A, 0, 0, 5, Orientation::Horizontal).unwrap();
    assert_eq!(game.begin(), Err(MatchError::IncompleteFleet(Side::A)));

    game.place_randomly(Side::A, &mut rng).unwrap();
    assert_eq!(game.begin(), Err(MatchError::IncompleteFleet(Side::B)));
    game.place_randomly(Side::B, &mut rng).unwrap();

    game.begin().unwrap();
    assert_eq!(game.phase(), Phase::Turn(Side::A));
    assert_eq!(
        game.place(Side::B, 0, 0, 2, Orientation::Vertical),
        Err(MatchError::NotInSetup)
    );
}

#[test]
fn test_place_rejects_lengths_outside_fleet() {
    let mut game = Match::new();
    assert_eq!(
        game.place(Side::A, 0, 0, 6, Orientation::Horizontal),
        Err(MatchError::ShipNotInFleet { side: Side::A, length: 6 })
    );
    game.place(Side::A, 0, 0, 5, Orientation::Horizontal).unwrap();
    assert_eq!(
        game.place(Side::A, 2, 0, 5, Orientation::Horizontal),
        Err(MatchError::ShipNotInFleet { side: Side::A, length: 5 })
    );
    game.place(Side::A, 2, 0, 3, Orientation::Horizontal).unwrap();
    game.place(Side::A, 4, 0, 3, Orientation::Horizontal).unwrap();
    assert!(game.place(Side::A, 6, 0, 3, Orientation::Horizontal).is_err());
    assert_eq!(
        game.place(Side::A, 0, 2, 2, Orientation::Vertical),
        Err(MatchError::Board(BoardError::ShipOverlaps))
    );
}

#[test]
fn test_turns_alternate_regardless_of_outcome() {
    let mut game = Match::from_grids(one_ship(0), one_ship(9)).unwrap();
    let r = game.strike(at(9, 0)).unwrap();
    assert_eq!((r.attacker, r.outcome), (Side::A, Outcome::Hit));
    assert_eq!(game.current(), Some(Side::B));

    let r = game.strike(at(5, 5)).unwrap();
    assert_eq!((r.attacker, r.outcome), (Side::B, Outcome::Miss));
    assert_eq!(game.current(), Some(Side::A));

    let r = game.strike(at(9, 0)).unwrap();
    assert_eq!(r.outcome, Outcome::AlreadyStruck);
    assert_eq!(game.current(), Some(Side::B));
    assert_eq!(game.turns(), 3);
}

#[test]
fn test_one_ship_match_finishes_with_attacker_winning() {
    let mut game = Match::from_grids(one_ship(0), one_ship(9)).unwrap();
    let mut b_targets = [at(5, 5), at(5, 6)].into_iter();
    for col in 0..3 {
        let r = game.strike(at(9, col)).unwrap();
        assert_eq!(r.outcome, Outcome::Hit);
        assert_eq!(r.sunk, col == 2);
        if col < 2 {
            assert_eq!(r.defender_ships_remaining, 1);
            game.strike(b_targets.next().unwrap()).unwrap();
        } else {
            assert_eq!(r.defender_ships_remaining, 0);
        }
    }
    assert_eq!(game.grid(Side::B).ships_remaining(), 0);
    assert_eq!(game.grid(Side::A).ships_remaining(), 1);
    assert_eq!(game.phase(), Phase::Finished { winner: Side::A });
    assert_eq!(game.strike(at(0, 0)), Err(MatchError::NotInProgress));
}

#[test]
fn test_from_grids_rejects_empty_fleet() {
    assert_eq!(
        Match::from_grids(Grid::new(), one_ship(0)).unwrap_err(),
        MatchError::EmptyFleet(Side::A)
    );
}

fn sunk_ship(row: usize) -> Grid {
    let mut grid = one_ship(row);
    for col in 0..3 {
        grid.strike(at(row, col));
    }
    grid
}

#[test]
fn test_attacker_wins_when_both_fleets_reach_zero() {
    let a = sunk_ship(0);
    assert_eq!(a.ships_remaining(), 0);
    let mut b = one_ship(9);
    b.strike(at(9, 0));
    b.strike(at(9, 1));
    assert_eq!(b.ships_remaining(), 1);

    let mut game = Match::from_grids(a, b).unwrap();
    let report = game.strike(at(9, 2)).unwrap();
    assert_eq!(report.outcome, Outcome::Hit);
    assert!(report.sunk);
    assert_eq!(game.grid(Side::A).ships_remaining(), 0);
    assert_eq!(game.grid(Side::B).ships_remaining(), 0);
    assert_eq!(game.phase(), Phase::Finished { winner: Side::A });
}

#[test]
fn test_side_with_nothing_afloat_loses_on_next_strike() {
    let mut game = Match::from_grids(sunk_ship(0), one_ship(9)).unwrap();
    assert_eq!(game.current(), Some(Side::A));
    let report = game.strike(at(5, 5)).unwrap();
    assert_eq!(report.outcome, Outcome::Miss);
    assert_eq!(game.phase(), Phase::Finished { winner: Side::B });
    assert_eq!(game.turns(), 1);
}

#[test]
fn test_human_strike_validated_before_mutation() {
    let mut game = Match::from_grids(one_ship(0), one_ship(9)).unwrap();
    let before = game.grid(Side::B).clone();
    assert_eq!(
        game.strike_at(11, 2),
        Err(MatchError::Board(BoardError::OutOfRange { row: 11, col: 2 }))
    );
    assert_eq!(game.grid(Side::B), &before);
    assert_eq!(game.current(), Some(Side::A));
    assert_eq!(game.turns(), 0);
}

#[test]
fn test_target_view_hides_opponent_ships() {
    let game = Match::from_grids(one_ship(0), one_ship(9)).unwrap();
    let view = game.target_view(Side::A);
    assert_eq!(view.cell(at(9, 0)), salvo::CellState::Empty);
    assert_eq!(
        game.grid(Side::B).cell(at(9, 0)),
        salvo::CellState::Occupied
    );
}
