//! Move legality.

use crate::board::Board;
use tracing::instrument;

/// Checks if the tile at `candidate` may slide into the blank.
///
/// Legal iff the candidate is orthogonally adjacent to the blank:
/// one step left or right on the same row, or one full row up or down.
/// Horizontal neighbours across a row boundary are rejected, as are the
/// blank itself and positions off the board.
#[instrument(skip(board), fields(empty = board.empty_index()))]
pub fn is_legal_move(board: &Board, candidate: usize) -> bool {
    match board.get(candidate) {
        None => return false,
        Some(tile) if board.is_blank(tile) => return false,
        Some(_) => {}
    }

    let empty = board.empty_index();
    let distance = empty.abs_diff(candidate);
    let horizontal = distance == 1 && board.row_of(empty) == board.row_of(candidate);
    let vertical = distance == board.side_length();

    horizontal || vertical
}

/// Returns the tiles that can currently move, in board order.
#[instrument(skip(board))]
pub fn movable_tiles(board: &Board) -> Vec<u16> {
    (0..board.len())
        .filter(|&i| is_legal_move(board, i))
        .filter_map(|i| board.get(i))
        .collect()
}
