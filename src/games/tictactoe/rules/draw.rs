//! Draw detection logic for noughts and crosses.

use super::super::{Board, Square};
use tracing::instrument;

/// Returns true when no empty cell remains.
///
/// This ignores winning lines: a full board can also be a win, so callers
/// check [`has_won`](super::has_won) first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}
