//! Property-based tests for shuffling, legality and move execution.
//!
//! 1. Shuffling always yields a permutation of 1..=N
//! 2. Legality matches orthogonal adjacency on the grid
//! 3. Rejected moves never mutate the board
//! 4. Move count grows by exactly one per accepted move
//! 5. Solvable deals are always solvable

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_fifteen::rules::{is_legal_move, is_solvable, is_solved};
use strictly_fifteen::{Board, GameSession, ShuffleMode, deal, shuffle};

// ── Strategies ──────────────────────────────────────────────────────────

fn side_strategy() -> impl Strategy<Value = usize> {
    2usize..=7
}

fn shuffled_board(side: usize, seed: u64) -> Board {
    deal(side, ShuffleMode::AnyPermutation, &mut StdRng::seed_from_u64(seed)).unwrap()
}

/// Grid adjacency computed from (row, column) coordinates.
fn orthogonally_adjacent(side: usize, a: usize, b: usize) -> bool {
    let (ra, ca) = (a / side, a % side);
    let (rb, cb) = (b / side, b % side);
    ra.abs_diff(rb) + ca.abs_diff(cb) == 1
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn shuffle_yields_permutation(side in side_strategy(), seed in any::<u64>(), rounds in 1usize..4) {
        let mut board = Board::new(side).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..rounds {
            shuffle(&mut board, &mut rng);
        }
        let mut tiles = board.tiles().to_vec();
        tiles.sort_unstable();
        let expected: Vec<u16> = (1..=(side * side) as u16).collect();
        prop_assert_eq!(tiles, expected);
    }

    #[test]
    fn legality_matches_grid_adjacency(side in side_strategy(), seed in any::<u64>()) {
        let board = shuffled_board(side, seed);
        let empty = board.empty_index();
        for candidate in 0..board.len() {
            prop_assert_eq!(
                is_legal_move(&board, candidate),
                orthogonally_adjacent(side, empty, candidate),
                "candidate {} blank {}", candidate, empty
            );
        }
    }

    #[test]
    fn rejected_moves_do_not_mutate(side in side_strategy(), seed in any::<u64>(), tile_seed in any::<u16>()) {
        let board = shuffled_board(side, seed);
        let n = board.len() as u16;
        let tile = tile_seed % n + 1;
        let legal = is_legal_move(&board, board.index_of(tile).unwrap());
        let mut session = GameSession::with_board(board.clone(), StdRng::seed_from_u64(seed));
        let playing = !is_solved(&board);

        let outcome = session.attempt_move(tile).unwrap();
        prop_assert_eq!(outcome.moved, legal && playing);
        if !outcome.moved {
            prop_assert_eq!(session.board(), Some(&board));
            prop_assert_eq!(session.move_count(), 0);
        } else {
            prop_assert_eq!(session.move_count(), 1);
        }
    }

    #[test]
    fn move_count_counts_accepted(side in side_strategy(), seed in any::<u64>(), picks in prop::collection::vec(any::<u16>(), 1..40)) {
        let board = shuffled_board(side, seed);
        let n = board.len() as u16;
        let mut session = GameSession::with_board(board, StdRng::seed_from_u64(seed));
        let mut accepted = 0u32;
        for pick in picks {
            let before = session.move_count();
            let outcome = session.attempt_move(pick % n + 1).unwrap();
            if outcome.moved {
                accepted += 1;
                prop_assert_eq!(session.move_count(), before + 1);
            } else {
                prop_assert_eq!(session.move_count(), before);
            }
            prop_assert_eq!(outcome.victory, session.is_solved() && outcome.moved);
        }
        prop_assert_eq!(session.move_count(), accepted);
    }

    #[test]
    fn solvable_deals_are_solvable(side in side_strategy(), seed in any::<u64>()) {
        let board = deal(side, ShuffleMode::Solvable, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(is_solvable(&board));
    }
}
