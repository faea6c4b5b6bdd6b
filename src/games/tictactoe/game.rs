//! The turn loop for one game of human versus computer.
//!
//! A game alternates `HumanTurn -> ComputerTurn -> HumanTurn ...` until a
//! turn ends it. After each placement the mover's win is checked before the
//! draw, so a winning move that fills the last cell is a win.

use super::action::Move;
use super::phases::Outcome;
use super::rules::{has_won, is_draw};
use super::types::{Board, Mark};
use crate::players::Player;
use crate::{Console, GameError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Banner printed above the board at the start of play.
pub const WELCOME: &str = "---------------Welcome to Tic Tac Toe---------------\n\n";

/// Mark played by the human.
pub const HUMAN_MARK: Mark = Mark::X;
/// Mark played by the computer.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Prints the welcome banner followed by `board_text`.
pub fn welcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board_text: &str,
) -> Result<(), GameError> {
    console.say(WELCOME)?;
    console.say(board_text)
}

/// One game in progress: the board plus every move applied so far.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on a fresh board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the move's mark and records it.
    ///
    /// The target cell must be empty; players guarantee this.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(self.board.is_empty(mv.position), "{mv} targets a taken cell");
        self.board.place(mv.position, mv.mark);
        self.history.push(mv);
    }

    /// Plays until someone wins or the board fills, human first.
    #[instrument(skip_all, fields(human = human.name(), computer = computer.name()))]
    pub fn play<H, C, R, W>(
        &mut self,
        human: &mut H,
        computer: &mut C,
        console: &mut Console<R, W>,
    ) -> Result<Outcome, GameError>
    where
        H: Player,
        C: Player,
        R: BufRead,
        W: Write,
    {
        welcome(console, &self.board.to_string())?;
        loop {
            if let Some(outcome) = self.take_turn(human, HUMAN_MARK, console)? {
                return Ok(outcome);
            }
            if let Some(outcome) = self.take_turn(computer, COMPUTER_MARK, console)? {
                return Ok(outcome);
            }
        }
    }

    fn take_turn<P, R, W>(
        &mut self,
        player: &mut P,
        mark: Mark,
        console: &mut Console<R, W>,
    ) -> Result<Option<Outcome>, GameError>
    where
        P: Player,
        R: BufRead,
        W: Write,
    {
        let position = player.get_move(&self.board, console)?;
        self.apply(Move::new(mark, position));
        debug!(player = player.name(), %mark, %position, turn = self.history.len(), "move applied");

        if mark == COMPUTER_MARK {
            console.say(&self.board)?;
        }

        let (outcome, message) = if has_won(&self.board, mark) {
            match mark {
                Mark::X => (Outcome::HumanWin, "You won!!!!!"),
                Mark::O => (Outcome::ComputerWin, "The computer won."),
            }
        } else if is_draw(&self.board) {
            match mark {
                Mark::X => (Outcome::Draw, "It has been draw"),
                Mark::O => (Outcome::Draw, "It's a draw."),
            }
        } else {
            return Ok(None);
        };

        info!(%outcome, moves = self.history.len(), "game over");
        console.say(message)?;
        Ok(Some(outcome))
    }
}

/// Plays one game on a fresh board and returns its outcome.
pub fn play_game<H, C, R, W>(
    human: &mut H,
    computer: &mut C,
    console: &mut Console<R, W>,
) -> Result<Outcome, GameError>
where
    H: Player,
    C: Player,
    R: BufRead,
    W: Write,
{
    Game::new().play(human, computer, console)
}
