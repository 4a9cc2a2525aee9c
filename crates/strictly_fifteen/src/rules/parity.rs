//! Solvability by permutation parity.
//!
//! A deal is reachable from the solved state only if its parity matches.
//! Odd side: the inversion count must be even. Even side: the inversion
//! count plus the blank's row counted from the bottom (starting at 1)
//! must be odd.

use crate::board::Board;
use tracing::instrument;

/// Counts pairs of non-blank tiles that appear out of order.
pub fn inversions(board: &Board) -> usize {
    let tiles: Vec<u16> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&t| !board.is_blank(t))
        .collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
        .sum()
}

/// Checks if the board can be brought to the solved state by legal moves.
#[instrument(skip(board))]
pub fn is_solvable(board: &Board) -> bool {
    let inversions = inversions(board);
    let side = board.side_length();
    if side % 2 == 1 {
        inversions % 2 == 0
    } else {
        let row_from_bottom = side - board.row_of(board.empty_index());
        (inversions + row_from_bottom) % 2 == 1
    }
}
