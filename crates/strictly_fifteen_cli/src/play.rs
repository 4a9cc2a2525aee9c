//! Line-oriented terminal renderer.
//!
//! Reads one command per line, forwards it to the session, and redraws
//! the board.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_fifteen::{Direction, GameSession, MoveOutcome, RandomSource, SessionPhase, Snapshot};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  <number>          slide that tile into the gap
  w/a/s/d, up/...   slide the tile in that direction
  p / r             pause / resume
  n                 restart with a new board
  x                 back to the start screen
  g                 start a game from the start screen
  h                 help
  q                 quit";

/// A single player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Move the tile with this value.
    Tile(u16),
    /// Move the tile in this direction.
    Slide(Direction),
    /// Pause the game.
    Pause,
    /// Resume the game.
    Resume,
    /// Restart with a fresh deal.
    Restart,
    /// Return to the start screen.
    Reset,
    /// Deal and start playing.
    Start,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown command: {:?} (h for help)", input)]
pub struct ParseCommandError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for PlayCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_ascii_lowercase();
        if let Ok(tile) = line.parse::<u16>() {
            return Ok(PlayCommand::Tile(tile));
        }
        let command = match line.as_str() {
            "p" | "pause" => PlayCommand::Pause,
            "r" | "resume" => PlayCommand::Resume,
            "n" | "restart" => PlayCommand::Restart,
            "x" | "reset" => PlayCommand::Reset,
            "g" | "start" => PlayCommand::Start,
            "h" | "help" | "?" => PlayCommand::Help,
            "q" | "quit" | "exit" => PlayCommand::Quit,
            other => other
                .parse::<Direction>()
                .map(PlayCommand::Slide)
                .map_err(|_| ParseCommandError {
                    input: s.trim().to_string(),
                })?,
        };
        Ok(command)
    }
}

/// Draws the board with its move counter, or the start screen.
pub fn render<R>(session: &GameSession<R>, out: &mut impl Write) -> std::io::Result<()> {
    match session.board() {
        Some(board) => {
            writeln!(out, "{}", board)?;
            writeln!(out, "Moves: {}  [{}]", session.move_count(), session.phase())
        }
        None => writeln!(out, "Fifteen Game. Press g to start, q to quit."),
    }
}

fn report(outcome: MoveOutcome, snapshot: &Snapshot, out: &mut impl Write) -> std::io::Result<()> {
    if outcome.victory {
        writeln!(out, "Solved in {} moves!", snapshot.move_count())
    } else if !outcome.moved {
        match snapshot.phase() {
            SessionPhase::Paused => writeln!(out, "Paused. Press r to resume."),
            SessionPhase::Won => writeln!(out, "Already solved. Press n for a new board."),
            SessionPhase::NotStarted => writeln!(out, "No game running. Press g to start."),
            SessionPhase::Playing => writeln!(out, "That tile cannot move."),
        }
    } else {
        Ok(())
    }
}

/// Runs the interactive loop until `q` or end of input.
///
/// Returns the final snapshot.
#[instrument(skip_all)]
pub fn run<R, I, W>(session: &mut GameSession<R>, input: I, out: &mut W) -> anyhow::Result<Snapshot>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    render(session, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<PlayCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            PlayCommand::Tile(tile) => match session.attempt_move(tile) {
                Ok(outcome) => report(outcome, &session.snapshot(), out)?,
                Err(e) => {
                    warn!(error = %e, "Move refused");
                    writeln!(out, "{}", e)?;
                    continue;
                }
            },
            PlayCommand::Slide(direction) => {
                let outcome = session.slide(direction);
                report(outcome, &session.snapshot(), out)?;
            }
            PlayCommand::Pause => session.pause(),
            PlayCommand::Resume => session.resume(),
            PlayCommand::Restart => session.restart(),
            PlayCommand::Reset => session.reset(),
            PlayCommand::Start => session.start(),
            PlayCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            PlayCommand::Quit => break,
        }

        render(session, out)?;
    }

    out.flush()?;
    Ok(session.snapshot())
}
