#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A backgammon rules engine.
//!
//! The engine owns the board representation, dice resolution, legal-move
//! enumeration, move application, the turn state machine and a tiered
//! heuristic opponent. It renders, persists and transmits nothing: a UI or
//! server layer drives it through queries and discrete commands.
//!
//! * [Board](crate::board::Board) holds checker positions, bar and borne-off
//!   trays and executes single validated moves.
//! * [AvailableMoves](crate::movegen::AvailableMoves) /
//!   [legal_moves](crate::movegen::legal_moves) enumerate every legal move
//!   for a position and a set of unconsumed dice, honoring bar-entry
//!   priority, blocking and bear-off eligibility.
//! * [GameState](crate::game::GameState) runs the roll/move/game-over cycle,
//!   consumes die slots (a double grants four plays), detects wins and
//!   resolves forced passes, reporting each transition as a
//!   [TurnEvent](crate::game::TurnEvent).
//! * [choose_move](crate::ai::heuristic::choose_move) picks a move at one of
//!   three [Difficulty](crate::ai::heuristic::Difficulty) tiers; the
//!   [Bot](crate::ai::Bot) trait plus [RandomBot](crate::ai::simple::RandomBot)
//!   and [HeuristicBot](crate::ai::heuristic::HeuristicBot) wrap it for
//!   callers that want an object to hold on to.
//!
//! # Example
//!
//! Play a full game between two heuristic opponents:
//!
//! ```
//! use backgammon_engine::ai::heuristic::{choose_move, Difficulty};
//! use backgammon_engine::game::GameState;
//!
//! let mut rng = rand::thread_rng();
//! let mut game = GameState::new();
//!
//! while !game.is_done() {
//!     game.roll(&mut rng).unwrap();
//!     while let Some(mv) = choose_move(&game, Difficulty::Intermediate, &mut rng) {
//!         game.apply_move(mv).unwrap();
//!     }
//! }
//! println!("{:?} wins", game.winner().unwrap());
//! ```

pub mod board;
pub mod dice;
pub mod game;
pub mod movegen;
pub mod mv;

pub mod ai;

pub mod util;
