//! Tests for the game session API on a 4x4 board.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_fifteen::{
    Board, GameSession, MoveOutcome, PuzzleError, ScriptedRandom, SessionPhase, start_new_game,
};

fn session_from(tiles: Vec<u16>) -> GameSession<ScriptedRandom> {
    let board = Board::from_tiles(tiles).expect("valid layout");
    GameSession::with_board(board, ScriptedRandom::identity())
}

/// Identity board with the blank swapped into `index`.
fn blank_at(index: usize) -> Vec<u16> {
    let mut tiles: Vec<u16> = (1..=16).collect();
    tiles.swap(index, 15);
    tiles
}

#[test]
fn test_start_new_game_deals_permutation() {
    let session = start_new_game(4).expect("valid side");
    let mut tiles = session.tiles();
    tiles.sort_unstable();
    assert_eq!(tiles, (1..=16).collect::<Vec<u16>>());
    assert!(matches!(session.phase(), SessionPhase::Playing | SessionPhase::Won));
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_start_new_game_rejects_bad_side() {
    assert!(matches!(
        start_new_game(1),
        Err(PuzzleError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_arranged_solved_board_is_solved() {
    let session = session_from((1..=16).collect());
    assert!(session.is_solved());
}

#[test]
fn test_blank_at_front_accepts_neighbour() {
    let mut tiles: Vec<u16> = (1..=16).collect();
    tiles[0] = 16;
    tiles[15] = 1;
    let mut session = session_from(tiles);

    let outcome = session.attempt_move(2).expect("tile in range");
    assert_eq!(outcome, MoveOutcome::new(true, false));

    let snapshot = session.tiles();
    assert_eq!(snapshot[0], 2);
    assert_eq!(snapshot[1], 16);
    assert_eq!(session.move_count(), 1);
}

#[test]
fn test_row_wrap_rejected() {
    let tiles = blank_at(3);
    let value_at_4 = tiles[4];
    let mut session = session_from(tiles.clone());

    let outcome = session.attempt_move(value_at_4).expect("tile in range");
    assert_eq!(outcome, MoveOutcome::REJECTED);
    assert_eq!(session.tiles(), tiles);
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_paused_rejects_legal_move() {
    let tiles = blank_at(5);
    let mut session = session_from(tiles.clone());
    session.pause();

    let outcome = session.attempt_move(tiles[6]).expect("tile in range");
    assert_eq!(outcome, MoveOutcome::REJECTED);
    assert_eq!(session.tiles(), tiles);

    session.resume();
    let outcome = session.attempt_move(tiles[6]).expect("tile in range");
    assert!(outcome.moved);
}

#[test]
fn test_final_move_wins() {
    let mut session = session_from(blank_at(14));
    assert!(!session.is_solved());

    let outcome = session.attempt_move(15).expect("tile in range");
    assert_eq!(outcome, MoveOutcome::new(true, true));
    assert!(session.is_solved());
    assert_eq!(session.phase(), SessionPhase::Won);
}

#[test]
fn test_invalid_tile_is_an_error() {
    let mut session = session_from(blank_at(5));
    assert_eq!(
        session.attempt_move(17),
        Err(PuzzleError::InvalidTile { tile: 17, max: 16 })
    );
    assert!(session.attempt_move(0).is_err());
}

#[test]
fn test_move_count_tracks_accepted_moves_only() {
    let mut session = session_from(blank_at(5));
    // Blank at 5: tiles 2, 5, 7, 10 are movable; 1 is diagonal.
    assert!(!session.attempt_move(1).unwrap().moved);
    assert_eq!(session.move_count(), 0);

    assert!(session.attempt_move(2).unwrap().moved);
    assert_eq!(session.move_count(), 1);

    // Sliding 2 back down is legal again.
    assert!(session.attempt_move(2).unwrap().moved);
    assert_eq!(session.move_count(), 2);

    assert!(!session.attempt_move(16).unwrap().moved);
    assert!(!session.attempt_move(11).unwrap().moved);
    assert_eq!(session.move_count(), 2);
}

#[test]
fn test_snapshot_idempotent() {
    let session = session_from(blank_at(9));
    assert_eq!(session.snapshot(), session.snapshot());
    assert_eq!(session.tiles(), session.tiles());
}

#[test]
fn test_won_then_start_deals_again() {
    let mut session = session_from(blank_at(14));
    session.attempt_move(15).unwrap();
    assert_eq!(session.phase(), SessionPhase::Won);

    session.start();
    // The identity script reproduces the solved board.
    assert_eq!(session.phase(), SessionPhase::Won);
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_seeded_sessions_match() {
    let mut a = GameSession::new(4, StdRng::seed_from_u64(11)).unwrap();
    let mut b = GameSession::new(4, StdRng::seed_from_u64(11)).unwrap();
    a.start();
    b.start();
    assert_eq!(a.snapshot(), b.snapshot());
}
