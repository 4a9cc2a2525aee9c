//! Command-line interface for strictly_fifteen.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Fifteen - sliding-tile puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_fifteen")]
#[command(about = "Sliding-tile puzzle (15-puzzle) for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that deals a board
#[derive(Args, Debug, Clone, Default)]
pub struct DealArgs {
    /// Side length of the board (4 for the classic 15-puzzle)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Seed for a reproducible deal
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only deal boards that can be solved
    #[arg(long)]
    pub solvable: bool,

    /// Path to a TOML config file (defaults to fifteen.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Deal options
        #[command(flatten)]
        deal: DealArgs,
    },

    /// Print a single dealt board
    Deal {
        /// Deal options
        #[command(flatten)]
        deal: DealArgs,

        /// Print the board as a JSON snapshot
        #[arg(long)]
        json: bool,
    },
}
