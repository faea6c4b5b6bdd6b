//! Leaderboard file persistence.

use super::{Leaderboard, LeaderboardError};
use crate::{Console, GameError};
use derive_getters::Getters;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, info, instrument, warn};

/// Leaderboard file used when none is configured.
pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.txt";

/// Reads and rewrites the leaderboard file.
///
/// The file holds one JSON object of name to integer score. Every save
/// replaces the whole file. There is no locking; the store assumes one
/// process owns the file.
#[derive(Debug, Clone, Getters)]
pub struct LeaderboardStore {
    /// Location of the leaderboard file.
    path: PathBuf,
}

impl Default for LeaderboardStore {
    fn default() -> Self {
        Self::new(DEFAULT_LEADERBOARD_PATH)
    }
}

impl LeaderboardStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and parses the whole file.
    ///
    /// # Errors
    ///
    /// [`LeaderboardError::StorageUnavailable`] if the file is missing or
    /// unreadable, [`LeaderboardError::Parse`] if it is not a JSON object of
    /// integer scores.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Leaderboard, LeaderboardError> {
        let content =
            fs::read_to_string(&self.path).map_err(|source| LeaderboardError::StorageUnavailable {
                path: self.path.clone(),
                source,
            })?;
        let leaders: Leaderboard =
            serde_json::from_str(&content).map_err(|source| LeaderboardError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(entries = leaders.len(), "leaderboard loaded");
        Ok(leaders)
    }

    /// Records `score` for `name` and rewrites the file.
    ///
    /// A missing file counts as an empty leaderboard. A file that exists but
    /// cannot be parsed is left untouched and the parse error is returned.
    /// Returns the leaderboard as written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, name: &str, score: i64) -> Result<Leaderboard, LeaderboardError> {
        let mut leaders = match self.load() {
            Ok(leaders) => leaders,
            Err(err) if err.is_missing() => {
                info!("no leaderboard yet, starting a new one");
                Leaderboard::new()
            }
            Err(err) => return Err(err),
        };
        if let Some(previous) = leaders.get(name) {
            debug!(previous, "replacing earlier score");
        }
        leaders.insert(name, score);
        self.write(&leaders)?;
        info!(entries = leaders.len(), "leaderboard saved");
        Ok(leaders)
    }

    /// Replaces the file through a temporary sibling and a rename.
    fn write(&self, leaders: &Leaderboard) -> Result<(), LeaderboardError> {
        let write_err = |source: std::io::Error| LeaderboardError::Write {
            path: self.path.clone(),
            source,
        };
        let json =
            serde_json::to_string(leaders).map_err(|source| LeaderboardError::Encode { source })?;

        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut builder = Builder::new();
        builder.prefix(".leaderboard");
        // New files get the usual 0666 & !umask instead of tempfile's 0600.
        #[cfg(unix)]
        builder.permissions(std::os::unix::fs::PermissionsExt::from_mode(0o666));
        let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
        if let Ok(existing) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?;
        }
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|err| {
            warn!(error = %err, "could not move new leaderboard into place");
            write_err(err.error)
        })?;
        Ok(())
    }
}

/// Prints `leaders` as a heading followed by one ` name: score` line each.
pub fn display<R: BufRead, W: Write>(
    leaders: &Leaderboard,
    console: &mut Console<R, W>,
) -> Result<(), GameError> {
    console.say(leaders)
}
