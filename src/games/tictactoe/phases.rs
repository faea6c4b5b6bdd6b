//! Result of a finished game.


/// How a game ended, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled with no line.
    Draw,
}

impl Outcome {
    /// Signed score: +1 for a human win, -1 for a computer win, 0 for a draw.
    pub fn score(self) -> i64 {
        match self {
            Outcome::HumanWin => 1,
            Outcome::ComputerWin => -1,
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::HumanWin => write!(f, "Human wins"),
            Outcome::ComputerWin => write!(f, "Computer wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
