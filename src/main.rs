//! Noughts and crosses - terminal game
//!
//! Human versus a random computer player with a saved leaderboard.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::{Config, Console, LeaderboardStore, RandomPlayer, Session};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_logging();

    let config = Config::from(Cli::parse());
    info!(?config, "Starting noughts");

    let store = LeaderboardStore::new(config.leaderboard_path().clone());
    let computer = RandomPlayer::seeded("Computer", *config.seed());
    let mut session = Session::new(Console::stdio(), computer, store);
    session.run()?;

    info!(total_score = session.total_score(), "Session finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}
