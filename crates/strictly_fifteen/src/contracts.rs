//! Contract-based validation for moves.
//!
//! A move is validated before it is applied (precondition) and the board
//! is checked against its invariants afterwards (postcondition).

use crate::board::Board;
use crate::error::PuzzleError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules::is_legal_move;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// `Ok(false)` means the action is well-formed but not allowed now.
    fn pre(state: &S, action: &A) -> Result<bool, PuzzleError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), PuzzleError>;
}

/// Precondition: the tile value exists on this board.
pub struct TileInRange;

impl TileInRange {
    /// Resolves the tile to its position.
    #[instrument(skip(board))]
    pub fn check(tile: u16, board: &Board) -> Result<usize, PuzzleError> {
        board.index_of(tile).inspect_err(|_| {
            warn!(tile, max = board.blank(), "Tile out of range");
        })
    }
}

/// Contract for sliding a tile, identified by value, into the blank.
///
/// Preconditions:
/// - Tile is in `1..=N` (error otherwise)
/// - Tile is orthogonally adjacent to the blank (rejection otherwise)
///
/// Postconditions:
/// - Board is still square
/// - Tiles are still a permutation of `1..=N`
/// - Exactly one tile changed places with the blank
pub struct SlideContract;

impl Contract<Board, u16> for SlideContract {
    fn pre(board: &Board, tile: &u16) -> Result<bool, PuzzleError> {
        let index = TileInRange::check(*tile, board)?;
        Ok(is_legal_move(board, index))
    }

    fn post(before: &Board, after: &Board) -> Result<(), PuzzleError> {
        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PuzzleError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let changed = before
            .tiles()
            .iter()
            .zip(after.tiles())
            .filter(|(a, b)| a != b)
            .count();
        if changed != 2 || !is_legal_move(before, after.empty_index()) {
            return Err(PuzzleError::InvariantViolation(format!(
                "Postcondition failed: expected one slide, {} cells changed",
                changed
            )));
        }
        Ok(())
    }
}
