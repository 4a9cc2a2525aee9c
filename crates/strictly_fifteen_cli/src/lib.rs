//! Strictly Fifteen terminal front end.
//!
//! Configuration loading, command parsing and a line-oriented renderer
//! around the `strictly_fifteen` puzzle core.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod play;

pub use cli::{Cli, Command, DealArgs};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PuzzleConfig};
pub use play::{ParseCommandError, PlayCommand, render, run};
