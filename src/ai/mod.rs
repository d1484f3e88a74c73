use std::fmt::Debug;

use rand::Rng;

use crate::game::GameState;
use crate::mv::Move;

pub mod heuristic;
pub mod simple;

/// Something that picks a move for the side to move.
pub trait Bot: Debug {
    /// Pick a move to play. `None` means there is nothing to play: no dice
    /// rolled yet, the roll has no legal move, or the game is over.
    ///
    /// `self` is mutable to allow for random state, this method is not
    /// supposed to modify `self` in any other significant way.
    fn select_move(&mut self, game: &GameState) -> Option<Move>;
}

impl<F: FnMut(&GameState) -> Option<Move> + Debug> Bot for F {
    fn select_move(&mut self, game: &GameState) -> Option<Move> {
        self(game)
    }
}

pub(crate) fn pick_uniform(moves: &[Move], rng: &mut impl Rng) -> Option<Move> {
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.gen_range(0..moves.len())])
    }
}
