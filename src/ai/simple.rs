//! The simplest opponent: `RandomBot`.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::{pick_uniform, Bot};
use crate::game::GameState;
use crate::mv::Move;

/// Bot that chooses uniformly among the legal moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, game: &GameState) -> Option<Move> {
        pick_uniform(&game.legal_moves(), &mut self.rng)
    }
}
