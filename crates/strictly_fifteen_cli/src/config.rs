//! Puzzle configuration loaded from TOML.

use crate::cli::DealArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_fifteen::{GameSession, PuzzleError, ShuffleMode};
use tracing::{debug, info, instrument};

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fifteen.toml";

/// Settings for dealing and playing a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Side length of the board.
    #[serde(default = "default_side_length")]
    side_length: usize,

    /// Seed for reproducible deals; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// How boards are shuffled.
    #[serde(default)]
    shuffle_mode: ShuffleMode,
}

fn default_side_length() -> usize {
    4
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            side_length: default_side_length(),
            seed: None,
            shuffle_mode: ShuffleMode::default(),
        }
    }
}

impl PuzzleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(side_length = config.side_length, mode = %config.shuffle_mode, "Config loaded");
        Ok(config)
    }

    /// Resolves the effective config for a command.
    ///
    /// An explicit `--config` path must exist. Otherwise `fifteen.toml` in
    /// `dir` is used when present, then built-in defaults. Command-line
    /// flags override file values.
    #[instrument(skip(args, dir))]
    pub fn resolve(args: &DealArgs, dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = dir.as_ref().join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)?
                } else {
                    debug!("No config file, using defaults");
                    Self::default()
                }
            }
        };

        if let Some(size) = args.size {
            config.side_length = size;
        }
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if args.solvable {
            config.shuffle_mode = ShuffleMode::Solvable;
        }

        debug!(?config, "Resolved config");
        Ok(config)
    }

    /// Builds a session that has not dealt yet.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidConfiguration` for an unsupported side length.
    #[instrument(skip(self))]
    pub fn build_session(&self) -> Result<GameSession<StdRng>, PuzzleError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(GameSession::new(self.side_length, rng)?.with_shuffle_mode(self.shuffle_mode))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
