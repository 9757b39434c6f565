use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use salvo::{BoardStats, FireOutcome, GameBoard, GameConfig, BOARD_SIZE};

const N: i32 = BOARD_SIZE as i32;

/// Seeded board after a random number of random shots.
fn played_board(seed: u64, config: GameConfig) -> GameBoard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = GameBoard::seeded(config, seed).unwrap();
    let shots = rng.random_range(0..60);
    for _ in 0..shots {
        let r = rng.random_range(-1..=N);
        let c = rng.random_range(-1..=N);
        if board.fire(r, c).is_err() {
            break;
        }
    }
    board
}

fn all_cells_shuffled(seed: u64) -> Vec<(i32, i32)> {
    let mut cells: Vec<(i32, i32)> = (0..N).flat_map(|r| (0..N).map(move |c| (r, c))).collect();
    cells.shuffle(&mut SmallRng::seed_from_u64(seed));
    cells
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn peek_is_idempotent_and_pure(seed in any::<u64>(), row in -2..N + 2, col in -2..N + 2) {
        let board = played_board(seed, GameConfig::strikes());
        let before = board.stats();
        let fired = board.has_fired(row, col);
        let first = board.peek(row, col);
        for _ in 0..3 {
            prop_assert_eq!(board.peek(row, col), first);
        }
        prop_assert!(matches!(
            first,
            FireOutcome::Hit | FireOutcome::Miss | FireOutcome::AlreadyFired
        ));
        prop_assert_eq!(board.stats(), before);
        prop_assert_eq!(board.has_fired(row, col), fired);
    }

    #[test]
    fn second_shot_reports_already_fired(seed in any::<u64>(), row in 0..N, col in 0..N) {
        let mut board = played_board(seed, GameConfig::simple());
        prop_assume!(!board.is_over() && !board.has_fired(row, col));
        let first = board.fire(row, col).unwrap();
        prop_assert_ne!(first, FireOutcome::AlreadyFired);
        let after_first = board.stats();
        if board.is_over() {
            prop_assert!(board.fire(row, col).is_err());
        } else {
            prop_assert_eq!(board.fire(row, col).unwrap(), FireOutcome::AlreadyFired);
        }
        prop_assert_eq!(board.stats(), after_first);
    }

    #[test]
    fn off_board_shots_change_nothing(seed in any::<u64>(), row in -50i32..50, col in N..60) {
        let mut board = played_board(seed, GameConfig::strikes());
        let before = board.stats();
        prop_assert_eq!(board.fire(row, col).unwrap(), FireOutcome::Miss);
        prop_assert_eq!(board.fire(col, row).unwrap(), FireOutcome::Miss);
        prop_assert_eq!(board.fire(-1 - col, row).unwrap(), FireOutcome::Miss);
        prop_assert_eq!(board.stats(), before);
    }

    #[test]
    fn fired_cells_only_grow(seed in any::<u64>()) {
        let mut board = GameBoard::seeded(GameConfig::strikes(), seed).unwrap();
        let mut shots = board.shots_fired();
        let mut seen = Vec::new();
        for (r, c) in all_cells_shuffled(seed) {
            if board.fire(r, c).is_err() {
                break;
            }
            seen.push((r, c));
            prop_assert_eq!(board.shots_fired(), shots + 1);
            shots = board.shots_fired();
            prop_assert!(seen.iter().all(|&(r, c)| board.has_fired(r, c)));
            prop_assert!(!(board.is_won() && board.is_lost()));
        }
        prop_assert!(board.is_over());
    }

    #[test]
    fn won_exactly_on_last_ship_cell(seed in any::<u64>()) {
        let mut board = GameBoard::seeded(GameConfig::simple(), seed).unwrap();
        let total_cells: usize = board.fleet_snapshot().iter().map(|s| s.length).sum();
        let mut hits = 0;
        for (r, c) in all_cells_shuffled(seed ^ 0xA5A5) {
            let outcome = board.fire(r, c).unwrap();
            if outcome.is_hit() {
                hits += 1;
            }
            prop_assert_eq!(board.is_won(), hits == total_cells);
            if board.is_won() {
                let sunk = matches!(outcome, FireOutcome::Sunk { .. });
                prop_assert!(sunk, "last ship cell reported {:?}", outcome);
                break;
            }
        }
        prop_assert!(board.is_won());
        prop_assert_eq!(board.ships_sunk_count(), board.ship_count());
        prop_assert_eq!(board.total_hits() as usize, total_cells);
    }

    #[test]
    fn strike_count_tracks_miss_streaks(seed in any::<u64>()) {
        let mut board = GameBoard::seeded(GameConfig::strikes(), seed).unwrap();
        let mut streak = 0u32;
        let mut strikes = 0u32;
        for (r, c) in all_cells_shuffled(seed) {
            let outcome = match board.fire(r, c) {
                Ok(outcome) => outcome,
                Err(_) => break,
            };
            if outcome.is_hit() {
                streak = 0;
            } else {
                streak += 1;
                if streak == 5 {
                    streak = 0;
                    strikes += 1;
                    if strikes == 3 {
                        prop_assert_eq!(outcome, FireOutcome::GameLost);
                    } else {
                        prop_assert_eq!(outcome, FireOutcome::Strike { strikes });
                    }
                } else {
                    prop_assert_eq!(outcome, FireOutcome::Miss);
                }
            }
            prop_assert_eq!(board.consecutive_misses(), streak);
            prop_assert_eq!(board.strike_count(), strikes);
        }
    }

    #[test]
    fn reset_restores_initial_state(seed in any::<u64>()) {
        let mut board = played_board(seed, GameConfig::strikes());
        board.reset();
        prop_assert_eq!(
            board.stats(),
            BoardStats { ships: board.ship_count(), ..BoardStats::default() }
        );
        prop_assert!(!board.is_over());
        for r in 0..N {
            for c in 0..N {
                prop_assert!(!board.has_fired(r, c));
            }
        }
    }
}
