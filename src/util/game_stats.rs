//! Whole-game statistics from random playouts, used to sanity-test the engine.
use rand::Rng;

use crate::ai::pick_uniform;
use crate::game::{GameState, Phase};

/// Structure returned by [`random_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    /// Average number of plays (half-moves) per game.
    pub game_length: f32,
    /// Average size of the legal set per play.
    pub available_moves: f32,
}

/// Play `n` games to completion with uniformly random moves and report the
/// averages. Every applied move passes through the engine's own validation
/// and checker-count asserts, so this doubles as a reachable-state sweep.
pub fn random_game_stats(n: u64, rng: &mut impl Rng) -> GameStats {
    let mut total_plays = 0u64;
    let mut total_moves = 0u64;

    for _ in 0..n {
        let mut game = GameState::new();
        while !game.is_done() {
            match game.phase() {
                Phase::AwaitingRoll => {
                    // a roll can resolve straight into a forced pass
                    let _ = game.roll(rng).unwrap();
                }
                Phase::AwaitingMove => {
                    let moves = game.legal_moves();
                    total_plays += 1;
                    total_moves += moves.len() as u64;

                    let mv = pick_uniform(&moves, rng).expect("awaiting-move implies a legal move");
                    game.apply_move(mv).unwrap();
                    game.board().assert_valid();
                }
                Phase::GameOver => unreachable!(),
            }
        }
    }

    GameStats {
        game_length: total_plays as f32 / n as f32,
        available_moves: total_moves as f32 / total_plays.max(1) as f32,
    }
}
