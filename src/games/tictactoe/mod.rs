mod action;
mod game;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use game::{COMPUTER_MARK, Game, HUMAN_MARK, WELCOME, play_game, welcome};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{has_won, is_draw};
pub use types::{Board, Mark, Square};
