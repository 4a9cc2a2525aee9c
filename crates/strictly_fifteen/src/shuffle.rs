//! Fisher–Yates shuffling and board dealing.

use crate::board::Board;
use crate::error::PuzzleError;
use crate::random::RandomSource;
use crate::rules::is_solvable;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a new board is dealt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShuffleMode {
    /// Any permutation of the tiles, solvable or not.
    #[default]
    AnyPermutation,
    /// Unsolvable deals are repaired so the puzzle can be finished.
    Solvable,
}

/// Shuffles every position of the board in place.
///
/// For `i` from `N-1` down to `1`, draws `j` uniformly from `0..=i` and
/// swaps positions `i` and `j`. The blank takes part like any other tile,
/// so the result is any permutation of `1..=N`.
#[instrument(skip(rng), fields(side_length = board.side_length()))]
pub fn shuffle<R: RandomSource + ?Sized>(board: &mut Board, rng: &mut R) {
    for i in (1..board.len()).rev() {
        let j = rng.index_up_to(i);
        board.swap(i, j);
    }
    debug!(empty_index = board.empty_index(), "Board shuffled");
}

/// Deals a shuffled board of the given size.
///
/// # Errors
///
/// Returns `PuzzleError::InvalidConfiguration` for an unsupported side length.
#[instrument(skip(rng))]
pub fn deal<R: RandomSource + ?Sized>(
    side_length: usize,
    mode: ShuffleMode,
    rng: &mut R,
) -> Result<Board, PuzzleError> {
    Ok(deal_from(Board::new(side_length)?, mode, rng))
}

/// Shuffles `board` according to `mode` and returns it.
///
/// In [`ShuffleMode::Solvable`] an unsolvable permutation is fixed by
/// swapping the first two non-blank tiles, which flips its parity
/// without moving the blank.
#[instrument(skip(rng), fields(side_length = board.side_length()))]
pub fn deal_from<R: RandomSource + ?Sized>(mut board: Board, mode: ShuffleMode, rng: &mut R) -> Board {
    shuffle(&mut board, rng);

    if mode == ShuffleMode::Solvable && !is_solvable(&board) {
        let mut non_blank = (0..board.len()).filter(|&i| board.get(i) != Some(board.blank()));
        if let (Some(a), Some(b)) = (non_blank.next(), non_blank.next()) {
            debug!(a, b, "Repairing unsolvable deal");
            board.swap(a, b);
        }
    }

    board
}
