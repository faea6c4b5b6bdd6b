//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::{Board, Console, GameError, Position};
use std::io::{BufRead, Write};

/// Something that can pick the next move.
pub trait Player {
    /// Picks an empty cell on `board`.
    ///
    /// Interactive players talk to the user through `console`; others
    /// may ignore it.
    fn get_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<Position, GameError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
