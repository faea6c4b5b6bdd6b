//! Computer player that picks a uniformly random empty cell.

use super::Player;
use crate::{Board, Console, GameError, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Computer player with no strategy at all.
#[derive(Debug, Clone)]
pub struct RandomPlayer<G = StdRng> {
    name: String,
    rng: G,
}

impl RandomPlayer<StdRng> {
    /// Creates a random player, seeded for reproducible games when `seed`
    /// is given and from OS entropy otherwise.
    pub fn seeded(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(name, rng)
    }
}

impl<G: Rng> RandomPlayer<G> {
    /// Creates a random player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: G) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Picks one empty cell uniformly at random.
    ///
    /// A full board is a caller bug: the game loop checks for a draw
    /// before the computer's turn. It is reported as
    /// [`GameError::NoMovesAvailable`] rather than inventing a move.
    #[instrument(skip(self, board), fields(player = %self.name))]
    pub fn choose_move(&mut self, board: &Board) -> Result<Position, GameError> {
        let candidates = Position::valid_moves(board);
        let pos = candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| GameError::NoMovesAvailable {
                player: self.name.clone(),
            })?;
        debug!(%pos, candidates = candidates.len(), "computer chose position");
        Ok(pos)
    }
}

impl<G: Rng> Player for RandomPlayer<G> {
    fn get_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        _console: &mut Console<R, W>,
    ) -> Result<Position, GameError> {
        self.choose_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
