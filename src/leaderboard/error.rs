//! Leaderboard error types.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// Failure reading or writing the leaderboard file.
#[derive(Debug, Display, Error)]
pub enum LeaderboardError {
    /// The file could not be read (missing, unreadable, not UTF-8).
    #[display("leaderboard {} is unavailable: {source}", path.display())]
    StorageUnavailable {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file was read but is not a JSON object of integer scores.
    #[display("leaderboard {} is malformed: {source}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// The scores could not be encoded as JSON.
    #[display("failed to encode leaderboard: {source}")]
    Encode {
        /// Underlying encode error.
        source: serde_json::Error,
    },
    /// The new file contents could not be written or moved into place.
    #[display("failed to write leaderboard {}: {source}", path.display())]
    Write {
        /// File that was being replaced.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl LeaderboardError {
    /// True when the file simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
