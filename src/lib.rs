//! Noughts and crosses for the terminal.
//!
//! A human plays X against a computer that picks a random empty cell.
//! Scores accumulate over a session and can be saved to a JSON leaderboard.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the turn loop
//! - **Players**: the [`Player`] trait with human and random implementations
//! - **Leaderboard**: name to score file store
//! - **Session**: the menu loop that ties it together
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Config, Console, LeaderboardStore, RandomPlayer, Session};
//!
//! # fn example() -> Result<(), noughts::GameError> {
//! let config = Config::default();
//! let store = LeaderboardStore::new(config.leaderboard_path().clone());
//! let computer = RandomPlayer::seeded("Computer", *config.seed());
//! Session::new(Console::stdio(), computer, store).run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod error;
mod games;
pub mod leaderboard;
pub mod players;
mod session;

pub use config::Config;
pub use console::Console;
pub use error::GameError;
pub use leaderboard::{Leaderboard, LeaderboardError, LeaderboardStore};
pub use players::{HumanPlayer, Player, RandomPlayer};
pub use session::{MenuChoice, Session};

pub use games::tictactoe::{
    Board, COMPUTER_MARK, Game, HUMAN_MARK, Mark, Move, Outcome, Position, Square, WELCOME,
    has_won, is_draw, play_game, welcome,
};
