//! Strictly Fifteen - sliding-tile puzzle logic
//!
//! The board model, shuffling, move legality, move execution and win
//! detection for the classic 15-puzzle and its other square sizes.
//! Rendering is left to the caller: it reads [`Snapshot`]s, forwards the
//! tile the player picked to [`GameSession::attempt_move`], and animates
//! from the returned [`MoveOutcome`].
//!
//! # Architecture
//!
//! - **Board**: tile permutation plus side length
//! - **Shuffle**: Fisher–Yates over an injectable [`RandomSource`]
//! - **Rules**: legality, victory and solvability as pure functions
//! - **Contracts**: move pre/postconditions backed by board invariants
//! - **Session**: pause, reset and restart around a single board
//!
//! # Example
//!
//! ```
//! use strictly_fifteen::{Board, GameSession, MoveOutcome, ScriptedRandom};
//!
//! # fn example() -> Result<(), strictly_fifteen::PuzzleError> {
//! let board = Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 9, 8])?;
//! let mut session = GameSession::with_board(board, ScriptedRandom::identity());
//!
//! assert_eq!(session.attempt_move(8)?, MoveOutcome::accepted(true));
//! assert!(session.is_solved());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod random;
mod session;
mod shuffle;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Direction, MoveOutcome};
pub use board::{Board, MAX_SIDE_LENGTH, MIN_SIDE_LENGTH};
pub use error::PuzzleError;
pub use random::{RandomSource, ScriptedRandom};
pub use session::{GameSession, SessionPhase, Snapshot, start_new_game};
pub use shuffle::{ShuffleMode, deal, deal_from, shuffle};
