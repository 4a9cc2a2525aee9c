//! Square dimensions invariant: the tile count is `side_length²`.

use super::Invariant;
use crate::Board;
use crate::board::{MAX_SIDE_LENGTH, MIN_SIDE_LENGTH};

/// Invariant: the board is square and of a supported size.
pub struct SquareDimensionsInvariant;

impl Invariant<Board> for SquareDimensionsInvariant {
    fn holds(board: &Board) -> bool {
        let side = board.side_length();
        (MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&side) && board.len() == side * side
    }

    fn description() -> &'static str {
        "Board holds side_length² tiles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_sizes_hold() {
        for side in [2, 3, 4, 9] {
            assert!(SquareDimensionsInvariant::holds(&Board::new(side).unwrap()));
        }
    }

    #[test]
    fn test_mismatched_length_violates() {
        let board = Board::from_raw_unchecked(3, vec![1, 2, 3, 4]);
        assert!(!SquareDimensionsInvariant::holds(&board));
    }
}
