//! Permutation invariant: every tile `1..=N` appears exactly once.

use super::Invariant;
use crate::Board;

/// Invariant: the tiles are a permutation of `1..=N`.
///
/// This also guarantees exactly one blank.
pub struct PermutationInvariant;

impl Invariant<Board> for PermutationInvariant {
    fn holds(board: &Board) -> bool {
        let mut sorted = board.tiles().to_vec();
        sorted.sort_unstable();
        sorted
            .iter()
            .enumerate()
            .all(|(i, &tile)| usize::from(tile) == i + 1)
    }

    fn description() -> &'static str {
        "Tiles are a permutation of 1..=N"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_identity_holds() {
        assert!(PermutationInvariant::holds(&Board::new(4).unwrap()));
    }

    #[test]
    fn test_shuffled_holds() {
        let mut board = Board::new(5).unwrap();
        crate::shuffle(&mut board, &mut StdRng::seed_from_u64(3));
        assert!(PermutationInvariant::holds(&board));
    }

    #[test]
    fn test_duplicate_tile_violates() {
        let board = Board::from_raw_unchecked(2, vec![1, 1, 3, 4]);
        assert!(!PermutationInvariant::holds(&board));
    }
}
