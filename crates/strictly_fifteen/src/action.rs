//! Move intents and their results.
//!
//! A renderer either names a tile directly or asks for a [`Direction`],
//! and gets a [`MoveOutcome`] back to drive its animation.

use crate::board::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of a move attempt.
///
/// A rejected move (illegal, paused, or no game running) has both flags
/// false and leaves the board untouched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new,
)]
pub struct MoveOutcome {
    /// The tile slid into the blank.
    pub moved: bool,
    /// The move solved the puzzle.
    pub victory: bool,
}

impl MoveOutcome {
    /// The outcome of a move that did not happen.
    pub const REJECTED: MoveOutcome = MoveOutcome {
        moved: false,
        victory: false,
    };

    /// Outcome of an accepted move.
    pub fn accepted(victory: bool) -> Self {
        Self::new(true, victory)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.moved, self.victory) {
            (true, true) => write!(f, "moved, solved"),
            (true, false) => write!(f, "moved"),
            _ => write!(f, "rejected"),
        }
    }
}

/// Direction a tile slides into the blank.
///
/// `Up` moves the tile below the blank upward, `Left` moves the tile to
/// the right of the blank leftward, and so on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Slide the tile below the blank up.
    #[strum(to_string = "up", serialize = "w")]
    Up,
    /// Slide the tile above the blank down.
    #[strum(to_string = "down", serialize = "s")]
    Down,
    /// Slide the tile right of the blank left.
    #[strum(to_string = "left", serialize = "a")]
    Left,
    /// Slide the tile left of the blank right.
    #[strum(to_string = "right", serialize = "d")]
    Right,
}

impl Direction {
    /// Position of the tile that would slide this way, if any.
    #[instrument(skip(board))]
    pub fn source_index(self, board: &Board) -> Option<usize> {
        let empty = board.empty_index();
        let side = board.side_length();
        match self {
            Direction::Up => Some(empty + side).filter(|&i| i < board.len()),
            Direction::Down => empty.checked_sub(side),
            Direction::Left => Some(empty + 1).filter(|_| board.column_of(empty) + 1 < side),
            Direction::Right => empty.checked_sub(1).filter(|_| board.column_of(empty) > 0),
        }
    }

    /// Tile value that would slide this way, if any.
    pub fn tile(self, board: &Board) -> Option<u16> {
        self.source_index(board).and_then(|i| board.get(i))
    }
}
