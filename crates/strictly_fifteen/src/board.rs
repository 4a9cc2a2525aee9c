//! Board model for the sliding-tile puzzle.

use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{instrument, warn};

/// Smallest supported side length.
pub const MIN_SIDE_LENGTH: usize = 2;

/// Largest supported side length (tile values must fit in a `u16`).
pub const MAX_SIDE_LENGTH: usize = 255;

/// Square board of numbered tiles.
///
/// Tiles are stored in row-major order. Every value in `1..=N` appears
/// exactly once, where `N = side_length²`; the value `N` is the blank.
/// The blank's position is always looked up, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u16>", into = "Vec<u16>")]
pub struct Board {
    side_length: usize,
    tiles: Vec<u16>,
}

impl Board {
    /// Creates the solved board: tiles `1..=N` in order, blank bottom-right.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidConfiguration` if `side_length` is
    /// outside `MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH`.
    #[instrument]
    pub fn new(side_length: usize) -> Result<Self, PuzzleError> {
        check_side_length(side_length)?;
        let cells = (side_length * side_length) as u16;
        Ok(Self {
            side_length,
            tiles: (1..=cells).collect(),
        })
    }

    /// Builds a board from an explicit row-major layout.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidConfiguration` if the length is not the
    /// square of a supported side length, or if the values are not a
    /// permutation of `1..=N`.
    #[instrument]
    pub fn from_tiles(tiles: Vec<u16>) -> Result<Self, PuzzleError> {
        let side_length = tiles.len().isqrt();
        if side_length * side_length != tiles.len() {
            warn!(len = tiles.len(), "Layout is not square");
            return Err(PuzzleError::InvalidConfiguration(format!(
                "{} tiles do not form a square board",
                tiles.len()
            )));
        }
        check_side_length(side_length)?;

        let cells = tiles.len();
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let slot = usize::from(tile).checked_sub(1).filter(|&i| i < cells);
            match slot {
                Some(i) if !seen[i] => seen[i] = true,
                _ => {
                    warn!(tile, "Layout is not a permutation");
                    return Err(PuzzleError::InvalidConfiguration(format!(
                        "layout is not a permutation of 1..={} (offending tile {})",
                        cells, tile
                    )));
                }
            }
        }

        Ok(Self { side_length, tiles })
    }

    /// Returns the side length.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Returns the number of cells (`N`).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a board has at least four cells.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the blank's tile value (`N`).
    pub fn blank(&self) -> u16 {
        self.tiles.len() as u16
    }

    /// Returns true if `tile` is the blank.
    pub fn is_blank(&self, tile: u16) -> bool {
        tile == self.blank()
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Gets the tile at the given position.
    pub fn get(&self, index: usize) -> Option<u16> {
        self.tiles.get(index).copied()
    }

    /// Row of a position.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.side_length
    }

    /// Column of a position.
    pub fn column_of(&self, index: usize) -> usize {
        index % self.side_length
    }

    /// Position of the blank.
    pub fn empty_index(&self) -> usize {
        let blank = self.blank();
        self.tiles
            .iter()
            .position(|&tile| tile == blank)
            .expect("board always holds exactly one blank")
    }

    /// Position of a tile.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidTile` if `tile` is outside `1..=N`.
    pub fn index_of(&self, tile: u16) -> Result<usize, PuzzleError> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .ok_or(PuzzleError::InvalidTile {
                tile,
                max: self.blank(),
            })
    }

    /// Exchanges the tiles at two positions.
    ///
    /// No legality check is made. Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.tiles.swap(i, j);
    }

    /// Returns the solved board of the same size.
    pub fn to_solved(&self) -> Board {
        Self {
            side_length: self.side_length,
            tiles: (1..=self.blank()).collect(),
        }
    }

    /// Consumes the board, returning its tiles.
    pub fn into_tiles(self) -> Vec<u16> {
        self.tiles
    }

    /// Builds a board without validation, for invariant tests.
    #[cfg(test)]
    pub(crate) fn from_raw_unchecked(side_length: usize, tiles: Vec<u16>) -> Self {
        Self { side_length, tiles }
    }
}

fn check_side_length(side_length: usize) -> Result<(), PuzzleError> {
    if !(MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&side_length) {
        warn!(side_length, "Rejected side length");
        return Err(PuzzleError::InvalidConfiguration(format!(
            "side length {} must be between {} and {}",
            side_length, MIN_SIDE_LENGTH, MAX_SIDE_LENGTH
        )));
    }
    Ok(())
}

impl TryFrom<Vec<u16>> for Board {
    type Error = PuzzleError;

    fn try_from(tiles: Vec<u16>) -> Result<Self, Self::Error> {
        Self::from_tiles(tiles)
    }
}

impl From<Board> for Vec<u16> {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.blank().to_string().len();
        for (row, cells) in self.tiles.chunks(self.side_length).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &tile) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if self.is_blank(tile) {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = width)?;
                }
            }
        }
        Ok(())
    }
}
