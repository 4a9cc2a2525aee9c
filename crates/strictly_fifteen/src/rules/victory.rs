//! Win detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is in the solved state.
///
/// True iff every position `p` holds `p + 1`, which leaves the blank in
/// the last cell.
#[instrument(skip(board))]
pub fn is_solved(board: &Board) -> bool {
    board
        .tiles()
        .iter()
        .enumerate()
        .all(|(p, &tile)| usize::from(tile) == p + 1)
}
