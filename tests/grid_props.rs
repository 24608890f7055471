use salvo::{CellState, Coord, Grid, Orientation, Outcome, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    grid.place_fleet_randomly(&mut rng).unwrap();
    grid
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_is_atomic(
        seed in any::<u64>(),
        row in 0..N + 2,
        col in 0..N + 2,
        length in 1..6usize,
        orient in orientation(),
    ) {
        let mut grid = random_grid(seed);
        let before = grid.clone();
        match grid.place(row, col, length, orient) {
            Ok(()) => {
                let (dr, dc) = match orient {
                    Orientation::Horizontal => (0, 1),
                    Orientation::Vertical => (1, 0),
                };
                let expected: Vec<Coord> = (0..length)
                    .map(|i| Coord::new(row + dr * i, col + dc * i).unwrap())
                    .collect();
                for at in Coord::all() {
                    if expected.contains(&at) {
                        prop_assert_eq!(before.cell(at), CellState::Empty);
                        prop_assert_eq!(grid.cell(at), CellState::Occupied);
                    } else {
                        prop_assert_eq!(grid.cell(at), before.cell(at));
                    }
                }
                prop_assert_eq!(grid.ships_remaining(), before.ships_remaining() + 1);
            }
            Err(_) => {
                prop_assert_eq!(&grid, &before);
            }
        }
    }

    #[test]
    fn strike_is_idempotent(seed in any::<u64>(), row in 0..N, col in 0..N) {
        let mut grid = random_grid(seed);
        let at = Coord::new(row, col).unwrap();
        let first = grid.strike(at);
        let after_first = grid.clone();
        let second = grid.strike(at);
        prop_assert_eq!(&grid, &after_first);
        match first {
            Outcome::Hit => {
                prop_assert_eq!(second, Outcome::AlreadyStruck);
            }
            Outcome::Miss => {
                prop_assert_eq!(second, Outcome::Miss);
            }
            Outcome::AlreadyStruck => {
                prop_assert!(false, "fresh cell reported as already struck");
            }
        }
    }

    #[test]
    fn fleet_count_drops_only_on_sinking_strike(
        seed in any::<u64>(),
        strikes in proptest::collection::vec((0..N, 0..N), 1..150),
    ) {
        let mut grid = random_grid(seed);
        let mut remaining = grid.ships_remaining();
        for (r, c) in strikes {
            let at = Coord::new(r, c).unwrap();
            let was_occupied = grid.cell(at) == CellState::Occupied;
            let outcome = grid.strike(at);
            let now = grid.ships_remaining();
            if outcome == Outcome::Hit && grid.is_sunk_at(at) {
                prop_assert!(was_occupied);
                prop_assert_eq!(now, remaining - 1);
            } else {
                prop_assert_eq!(now, remaining);
            }
            remaining = now;
        }
        let all_hit = grid
            .fleet()
            .ships()
            .iter()
            .all(|s| s.cells().all(|c| grid.cell(c) == CellState::Hit));
        prop_assert_eq!(remaining == 0, all_hit);
    }

    #[test]
    fn hidden_view_never_shows_ships(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let view = grid.view(false);
        prop_assert!(Coord::all().all(|at| view.cell(at) != CellState::Occupied));
    }
}
