//! Puzzle rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session and contracts can compose them.

pub mod legality;
pub mod parity;
pub mod victory;

pub use legality::{is_legal_move, movable_tiles};
pub use parity::{inversions, is_solvable};
pub use victory::is_solved;
