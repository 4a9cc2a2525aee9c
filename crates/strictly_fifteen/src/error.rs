//! Error types for the puzzle core.

/// Error raised by caller misuse of the puzzle API.
///
/// Illegal but well-formed moves are not errors: they come back as a
/// rejected [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// The board cannot be built with the requested dimensions or layout.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// A tile value outside `1..=max`.
    #[display("Invalid tile {} (expected 1..={})", tile, max)]
    InvalidTile {
        /// The offending tile value.
        tile: u16,
        /// Largest valid tile value (the blank).
        max: u16,
    },

    /// A board invariant was violated after a move (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for PuzzleError {}

impl PuzzleError {
    /// Returns true for configuration errors (bad side length or layout).
    pub fn is_configuration(&self) -> bool {
        matches!(self, PuzzleError::InvalidConfiguration(_))
    }

    /// Returns true for out-of-range tile values.
    pub fn is_invalid_tile(&self) -> bool {
        matches!(self, PuzzleError::InvalidTile { .. })
    }
}
