//! Command-line interface for noughts.

use clap::Parser;
use noughts::Config;
use std::path::PathBuf;

/// Noughts and crosses against a random computer player
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Leaderboard file (JSON object of name to score)
    #[arg(long, env = "NOUGHTS_LEADERBOARD", default_value = "leaderboard.txt")]
    pub leaderboard: PathBuf,

    /// Seed for the computer's moves, for reproducible games
    #[arg(long, env = "NOUGHTS_SEED")]
    pub seed: Option<u64>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.leaderboard, cli.seed)
    }
}
