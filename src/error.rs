//! Errors raised while a game is being played.

use derive_more::{Display, Error};

/// Failure during play that cannot be recovered by re-prompting.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Input ended while the game still needed an answer.
    #[display("input closed while waiting for {expecting}")]
    InputClosed {
        /// What was being asked for.
        expecting: &'static str,
    },
    /// Reading from or writing to the terminal failed.
    #[display("terminal I/O failed: {source}")]
    Terminal {
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A player was asked to move on a board with no empty cell.
    #[display("no empty cell left for {player} to play")]
    NoMovesAvailable {
        /// Name of the player that was asked.
        player: String,
    },
}

impl From<std::io::Error> for GameError {
    fn from(source: std::io::Error) -> Self {
        Self::Terminal { source }
    }
}
