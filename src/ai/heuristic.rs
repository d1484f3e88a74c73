//! The tiered heuristic opponent.
//!
//! Three tiers, strictly increasing in the information they use, none of them
//! in guaranteed optimality. Each tier keeps a deliberate slice of randomness
//! (uniform choice among its top candidates) so the opponent does not fall
//! into degenerate repeated play.
use std::cmp::Reverse;
use std::fmt::{Debug, Formatter};

use itertools::Itertools;
use rand::Rng;

use crate::ai::{pick_uniform, Bot};
use crate::board::{Board, Player, POINTS};
use crate::game::GameState;
use crate::mv::{Move, MoveDest, MoveSource};

/// How much of the position the opponent looks at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// Uniform random over the legal set.
    Novice,
    /// Greedy scoring, uniform among the top 3.
    Intermediate,
    /// Greedy plus blocking/blot/prime terms, uniform among the top 2.
    Advanced,
}

pub const BEAR_OFF_BONUS: i32 = 100;
pub const HIT_BONUS: i32 = 50;
pub const BLOCK_BONUS: i32 = 30;
pub const BLOT_PENALTY: i32 = 20;
pub const PRIME_BONUS_PER_POINT: i32 = 10;

/// Greedy score: bear off first, advance far, hit blots.
pub fn score_move(board: &Board, player: Player, mv: Move) -> i32 {
    let mut score = 0;
    match mv.to {
        MoveDest::Off => {
            score += BEAR_OFF_BONUS;
            if let MoveSource::Point(from) = mv.from {
                score += Board::exit_distance(player, from as usize) as i32;
            }
        }
        MoveDest::Point(to) => {
            score += mv.die as i32;
            if board.checkers(player.other(), to as usize) == 1 {
                score += HIT_BONUS;
            }
        }
    }
    score
}

/// Strategic score: the greedy score plus terms for forming a block on the
/// destination, for leaving a lone checker on the vacated source or the
/// destination, and for the contiguous own-held run the destination starts
/// toward the mover's home edge (prime building).
pub fn score_strategic(board: &Board, player: Player, mv: Move) -> i32 {
    let mut score = score_move(board, player, mv);

    // a source holding exactly two before the move is left as a blot
    let mut leaves_blot = match mv.from {
        MoveSource::Point(from) => board.checkers(player, from as usize) == 2,
        MoveSource::Bar => false,
    };

    if let MoveDest::Point(to) = mv.to {
        let to = to as usize;
        let hit = board.checkers(player.other(), to) == 1;
        let to_after = if hit { 1 } else { board.checkers(player, to) + 1 };

        if to_after >= 2 {
            score += BLOCK_BONUS;
        }
        leaves_blot |= to_after == 1;

        // own count at `p` once the move is made
        let own_after = |p: usize| -> u8 {
            if p == to {
                to_after
            } else if mv.from == MoveSource::Point(p as u8) {
                board.checkers(player, p) - 1
            } else {
                board.checkers(player, p)
            }
        };

        let step: isize = match player {
            Player::White => -1,
            Player::Black => 1,
        };
        let mut run = 0;
        let mut p = to as isize;
        while (0..POINTS as isize).contains(&p) && own_after(p as usize) >= 2 {
            run += 1;
            p += step;
        }
        score += run * PRIME_BONUS_PER_POINT;
    }

    if leaves_blot {
        score -= BLOT_PENALTY;
    }

    score
}

/// Pick a move for the side to move, or `None` when the legal set is empty
/// (nothing rolled, forced pass, or game over). A pure query: the caller
/// still applies the returned move itself.
pub fn choose_move(game: &GameState, difficulty: Difficulty, rng: &mut impl Rng) -> Option<Move> {
    let moves = game.legal_moves();
    let board = game.board();
    let player = game.side_to_move();

    match difficulty {
        Difficulty::Novice => pick_uniform(&moves, rng),
        Difficulty::Intermediate => pick_top(moves, 3, rng, |mv| score_move(board, player, mv)),
        Difficulty::Advanced => pick_top(moves, 2, rng, |mv| score_strategic(board, player, mv)),
    }
}

fn pick_top(
    moves: Vec<Move>,
    keep: usize,
    rng: &mut impl Rng,
    score: impl Fn(Move) -> i32,
) -> Option<Move> {
    let ranked: Vec<Move> = moves.into_iter().sorted_by_key(|&mv| Reverse(score(mv))).collect();
    let top = &ranked[..keep.min(ranked.len())];
    pick_uniform(top, rng)
}

/// Bot wrapping a difficulty tier and its own rng.
pub struct HeuristicBot<R: Rng> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> Debug for HeuristicBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HeuristicBot {{ difficulty: {:?} }}", self.difficulty)
    }
}

impl<R: Rng> HeuristicBot<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        HeuristicBot { difficulty, rng }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl<R: Rng> Bot for HeuristicBot<R> {
    fn select_move(&mut self, game: &GameState) -> Option<Move> {
        choose_move(game, self.difficulty, &mut self.rng)
    }
}
