//! Strictly Fifteen - unified CLI
//!
//! Play the sliding-tile puzzle in the terminal, or print a dealt board.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_fifteen::rules::is_solvable;
use strictly_fifteen_cli::{Cli, Command, DealArgs, PuzzleConfig, play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { deal } => run_play(deal),
        Command::Deal { deal, json } => run_deal(deal, json),
    }
}

/// Run the interactive game on stdin/stdout
#[instrument]
fn run_play(args: DealArgs) -> Result<()> {
    let config = PuzzleConfig::resolve(&args, std::env::current_dir()?)?;
    let mut session = config.build_session()?;
    session.start();
    info!(side_length = session.side_length(), "Starting interactive game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let snapshot = play::run(&mut session, stdin.lock(), &mut stdout)?;

    info!(moves = snapshot.move_count(), phase = %snapshot.phase(), "Game over");
    Ok(())
}

/// Deal one board and print it
#[instrument]
fn run_deal(args: DealArgs, json: bool) -> Result<()> {
    let config = PuzzleConfig::resolve(&args, std::env::current_dir()?)?;
    let mut session = config.build_session()?;
    session.start();

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        return Ok(());
    }

    if let Some(board) = session.board() {
        println!("{}", board);
        println!(
            "{}",
            if is_solvable(board) {
                "solvable"
            } else {
                "not solvable"
            }
        );
    }
    Ok(())
}
