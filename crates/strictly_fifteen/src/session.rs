//! Game session: the public API consumed by renderers.

use crate::action::{Direction, MoveOutcome};
use crate::board::Board;
use crate::contracts::{Contract, SlideContract};
use crate::error::PuzzleError;
use crate::random::RandomSource;
use crate::rules::{is_solved, movable_tiles};
use crate::shuffle::{ShuffleMode, deal_from};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle phase of a session.
///
/// NotStarted → Playing ⇄ Paused, Playing → Won. `reset` returns any
/// phase to NotStarted; `start` leaves NotStarted or Won for Playing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// No board dealt yet.
    #[default]
    NotStarted,
    /// Accepting moves.
    Playing,
    /// Moves are ignored until resumed.
    Paused,
    /// The board is solved.
    Won,
}

/// Read-only copy of a session, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Side length of the board.
    side_length: usize,
    /// Tiles in row-major order; empty before the first deal.
    tiles: Vec<u16>,
    /// Accepted moves since the last deal.
    move_count: u32,
    /// Session phase.
    phase: SessionPhase,
}

/// Starts a game with an entropy-seeded generator.
///
/// # Errors
///
/// Returns `PuzzleError::InvalidConfiguration` for an unsupported side length.
#[instrument]
pub fn start_new_game(side_length: usize) -> Result<GameSession<StdRng>, PuzzleError> {
    let mut session = GameSession::new(side_length, StdRng::from_entropy())?;
    session.start();
    Ok(session)
}

/// A single game of the sliding-tile puzzle.
///
/// The session exclusively owns its board. Renderers read it through
/// [`snapshot`](Self::snapshot) or a shared borrow from
/// [`board`](Self::board), and drive it with
/// [`attempt_move`](Self::attempt_move).
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    solved: Board,
    shuffle_mode: ShuffleMode,
    rng: R,
    board: Option<Board>,
    move_count: u32,
    phase: SessionPhase,
}

impl<R: RandomSource> GameSession<R> {
    /// Creates a session that has not dealt a board yet.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidConfiguration` for an unsupported side length.
    #[instrument(skip(rng))]
    pub fn new(side_length: usize, rng: R) -> Result<Self, PuzzleError> {
        Ok(Self {
            solved: Board::new(side_length)?,
            shuffle_mode: ShuffleMode::default(),
            rng,
            board: None,
            move_count: 0,
            phase: SessionPhase::NotStarted,
        })
    }

    /// Creates a session already playing the given arrangement.
    ///
    /// The session is `Won` straight away if the board is solved.
    #[instrument(skip(rng))]
    pub fn with_board(board: Board, rng: R) -> Self {
        let phase = if is_solved(&board) {
            SessionPhase::Won
        } else {
            SessionPhase::Playing
        };
        info!(side_length = board.side_length(), %phase, "Session created from layout");
        Self {
            solved: board.to_solved(),
            shuffle_mode: ShuffleMode::default(),
            rng,
            board: Some(board),
            move_count: 0,
            phase,
        }
    }

    /// Sets how future deals are shuffled.
    pub fn with_shuffle_mode(mut self, mode: ShuffleMode) -> Self {
        self.shuffle_mode = mode;
        self
    }

    /// Deals a fresh board and starts playing.
    ///
    /// Only valid from NotStarted or Won; a no-op otherwise.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self) {
        if !matches!(self.phase, SessionPhase::NotStarted | SessionPhase::Won) {
            debug!("Start ignored");
            return;
        }

        let board = deal_from(self.solved.clone(), self.shuffle_mode, &mut self.rng);
        self.phase = if is_solved(&board) {
            SessionPhase::Won
        } else {
            SessionPhase::Playing
        };
        self.board = Some(board);
        self.move_count = 0;
        info!(side_length = self.side_length(), mode = %self.shuffle_mode, phase = %self.phase, "Game started");
    }

    /// Tries to slide `tile` into the blank.
    ///
    /// Paused sessions reject every move before anything else is checked.
    /// Illegal moves, and moves with no game running, are rejected
    /// without touching the board.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidTile` if `tile` is outside `1..=N`.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn attempt_move(&mut self, tile: u16) -> Result<MoveOutcome, PuzzleError> {
        if self.phase == SessionPhase::Paused {
            debug!("Move ignored while paused");
            return Ok(MoveOutcome::REJECTED);
        }

        let max = self.blank();
        if tile == 0 || tile > max {
            return Err(PuzzleError::InvalidTile { tile, max });
        }

        let board = match (&mut self.board, self.phase) {
            (Some(board), SessionPhase::Playing) => board,
            _ => {
                debug!("Move ignored, no game in play");
                return Ok(MoveOutcome::REJECTED);
            }
        };

        if !SlideContract::pre(board, &tile)? {
            debug!("Illegal move rejected");
            return Ok(MoveOutcome::REJECTED);
        }

        #[cfg(any(debug_assertions, feature = "strict"))]
        let before = board.clone();

        let candidate = board.index_of(tile)?;
        let empty = board.empty_index();
        board.swap(empty, candidate);
        self.move_count += 1;

        #[cfg(any(debug_assertions, feature = "strict"))]
        SlideContract::post(&before, board)?;

        let victory = is_solved(board);
        if victory {
            self.phase = SessionPhase::Won;
            info!(moves = self.move_count, "Puzzle solved");
        } else {
            debug!(moves = self.move_count, "Move accepted");
        }

        Ok(MoveOutcome::accepted(victory))
    }

    /// Slides whichever tile sits in `direction` from the blank.
    ///
    /// Rejected when no tile is there or no game is in play.
    #[instrument(skip(self))]
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        let Some(tile) = self.board.as_ref().and_then(|board| direction.tile(board)) else {
            return MoveOutcome::REJECTED;
        };
        // The tile comes from the board itself, so it is always in range.
        self.attempt_move(tile).unwrap_or(MoveOutcome::REJECTED)
    }

    /// Pauses a running game.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.phase = SessionPhase::Paused;
            debug!("Paused");
        }
    }

    /// Resumes a paused game.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn resume(&mut self) {
        if self.phase == SessionPhase::Paused {
            self.phase = SessionPhase::Playing;
            debug!("Resumed");
        }
    }

    /// Discards the board and counters.
    ///
    /// Call [`start`](Self::start) to deal again.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) {
        self.board = None;
        self.move_count = 0;
        self.phase = SessionPhase::NotStarted;
        info!("Session reset");
    }

    /// Resets, then deals a fresh board.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }
}

impl<R> GameSession<R> {
    /// Returns an owned copy of the session state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            side_length: self.side_length(),
            tiles: self.tiles(),
            move_count: self.move_count,
            phase: self.phase,
        }
    }

    /// Returns a copy of the tiles; empty before the first deal.
    pub fn tiles(&self) -> Vec<u16> {
        self.board
            .as_ref()
            .map(|board| board.tiles().to_vec())
            .unwrap_or_default()
    }

    /// Borrows the current board, if one is dealt.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Accepted moves since the last deal.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns true while paused.
    pub fn is_paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    /// Returns true if a board is dealt and solved.
    pub fn is_solved(&self) -> bool {
        self.board.as_ref().is_some_and(is_solved)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Side length of dealt boards.
    pub fn side_length(&self) -> usize {
        self.solved.side_length()
    }

    /// Shuffle mode used for deals.
    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle_mode
    }

    /// Tiles that can move right now; empty unless playing.
    pub fn movable_tiles(&self) -> Vec<u16> {
        match (&self.board, self.phase) {
            (Some(board), SessionPhase::Playing) => movable_tiles(board),
            _ => Vec::new(),
        }
    }

    fn blank(&self) -> u16 {
        self.solved.blank()
    }
}
