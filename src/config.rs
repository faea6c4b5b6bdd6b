//! Runtime configuration.

use crate::leaderboard::DEFAULT_LEADERBOARD_PATH;
use derive_getters::Getters;
use std::path::PathBuf;
use tracing::instrument;

/// Settings for one run of the program.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Config {
    /// Where the leaderboard is read from and written to.
    leaderboard_path: PathBuf,

    /// Seed for the computer player; `None` draws from OS entropy.
    seed: Option<u64>,
}

impl Config {
    /// Creates a configuration.
    #[instrument(skip(leaderboard_path))]
    pub fn new(leaderboard_path: impl Into<PathBuf>, seed: Option<u64>) -> Self {
        Self {
            leaderboard_path: leaderboard_path.into(),
            seed,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_LEADERBOARD_PATH, None)
    }
}
