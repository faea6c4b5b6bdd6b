//! Core domain types for noughts and crosses.

use super::position::Position;
use std::fmt;
use tracing::instrument;

/// Mark written into a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// Cross, played by the human.
    X,
    /// Nought, played by the computer.
    O,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Nobody has played here yet.
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Character shown for this cell when the board is rendered.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 noughts and crosses board, indexed by row then column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Square; 3]; 3],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Square::Empty; 3]; 3],
        }
    }

    /// Returns the square at `pos`.
    pub fn get(&self, pos: Position) -> Square {
        self.cells[pos.row()][pos.col()]
    }

    /// Writes `mark` into the cell at `pos`.
    ///
    /// Does not check that the cell is empty. Callers validate first,
    /// see [`Position::valid_moves`] and [`Board::is_empty`].
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = Square::Occupied(mark);
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Iterates over every square in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Formats the board using the supplied label for each cell.
    fn layout(&self, label: impl Fn(Position, Square) -> String) -> String {
        let rule = "------------------------------------";
        let mut lines = vec![String::new(), rule.to_string(), String::new()];
        for row in 0..3 {
            let cell = |col: usize| {
                Position::new(row, col)
                    .map(|pos| label(pos, self.get(pos)))
                    .unwrap_or_default()
            };
            lines.push(format!(
                "|  {}      |     {}      |    {}      |",
                cell(0),
                cell(1),
                cell(2)
            ));
            if row < 2 {
                lines.push("     ------------------------".to_string());
            }
        }
        lines.push(String::new());
        lines.push(rule.to_string());
        lines.join("\n")
    }

    /// Formats the board with cells numbered 1-9, used for the opening banner.
    pub fn numbered(&self) -> String {
        self.layout(|pos, _| (pos.index() + 1).to_string())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout(|_, square| square.symbol().to_string()))
    }
}
