//! Human player that types coordinates at the terminal.

use super::Player;
use crate::{Board, Console, GameError, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const ROW_PROMPT: &str = "Enter row number between 0-2 : ";
const COL_PROMPT: &str = "Enter column number between 0-2 to place X : ";
const INVALID_INPUT: &str = "Invalid input. Please enter a number between 0 and 2.";

/// Human player reading a row and a column from the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn read_coordinate<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        prompt: &str,
        expecting: &'static str,
    ) -> Result<Option<usize>, GameError> {
        let answer = console
            .prompt(prompt)?
            .ok_or(GameError::InputClosed { expecting })?;
        Ok(answer.trim().parse().ok())
    }
}

impl Player for HumanPlayer {
    /// Prompts until a row and column address an empty cell.
    ///
    /// Bad input is reported and the whole row/column exchange starts
    /// again. There is no retry limit; only the end of input stops it.
    #[instrument(skip(self, board, console), fields(player = %self.name))]
    fn get_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<Position, GameError> {
        loop {
            let Some(row) = Self::read_coordinate(console, ROW_PROMPT, "a row")? else {
                debug!("row is not a number");
                console.say(INVALID_INPUT)?;
                continue;
            };
            let Some(col) = Self::read_coordinate(console, COL_PROMPT, "a column")? else {
                debug!("column is not a number");
                console.say(INVALID_INPUT)?;
                continue;
            };

            match Position::new(row, col) {
                Some(pos) if board.is_empty(pos) => {
                    debug!(%pos, "accepted move");
                    return Ok(pos);
                }
                Some(pos) => debug!(%pos, "cell already taken"),
                None => debug!(row, col, "coordinates off the board"),
            }
            console.say(INVALID_INPUT)?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
