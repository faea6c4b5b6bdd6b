//! Persisted name to score leaderboard.

mod error;
mod models;
mod store;

pub use error::LeaderboardError;
pub use models::Leaderboard;
pub use store::{DEFAULT_LEADERBOARD_PATH, LeaderboardStore, display};
