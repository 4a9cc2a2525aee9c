//! First-class board invariants.
//!
//! Invariants are logical properties every reachable board satisfies.
//! They are testable on their own and compose into sets that the move
//! contract checks after each accepted move.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod dimensions;
pub mod permutation;

pub use dimensions::SquareDimensionsInvariant;
pub use permutation::PermutationInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (SquareDimensionsInvariant, PermutationInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_invariant_set_holds_for_new_board() {
        let board = Board::new(4).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_swaps() {
        let mut board = Board::new(3).unwrap();
        board.swap(0, 8);
        board.swap(4, 2);
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let board = Board::from_raw_unchecked(3, vec![2, 2, 3, 4]);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_violation_displays_description() {
        let violation = InvariantViolation::new("broken");
        assert_eq!(violation.to_string(), "broken");
    }
}
