use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::{Board, Player, POINTS};
use crate::dice::Dice;
use crate::mv::{Move, MoveDest, MoveSource};

/// Closure-driven enumeration of every legal move for `player` with the
/// unconsumed values of `dice`.
///
/// Rules honored here, and nowhere else:
/// * with any checker on the bar, only bar entries are generated;
/// * a destination held by two or more opposing checkers is blocked,
///   a lone opposing checker is not (landing on it is a hit);
/// * bear-off needs every checker home and the bar empty, and a die larger
///   than the exact exit distance only bears off the outermost checker.
///
/// No ordering or preference is applied, exhaustiveness is the only contract.
#[derive(Debug)]
pub struct AvailableMoves<'a> {
    pub board: &'a Board,
    pub player: Player,
    pub dice: &'a Dice,
}

impl InternalIterator for AvailableMoves<'_> {
    type Item = Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Move) -> ControlFlow<R>,
    {
        let AvailableMoves { board, player, dice } = self;
        let values: Vec<u8> = dice.distinct_available().collect();

        if board.bar(player) > 0 {
            for &die in &values {
                let entry = Board::entry_point(player, die);
                if !board.is_blocked(player, entry) {
                    f(Move::enter(entry as u8, die))?;
                }
            }
            return ControlFlow::Continue(());
        }

        let may_bear_off = board.may_bear_off(player);

        for from in 0..POINTS {
            if board.checkers(player, from) == 0 {
                continue;
            }
            for &die in &values {
                match Board::destination(player, from, die) {
                    Some(to) => {
                        if !board.is_blocked(player, to) {
                            f(Move::point(from as u8, to as u8, die))?;
                        }
                    }
                    None => {
                        if may_bear_off {
                            let exit = Board::exit_distance(player, from);
                            if die == exit || (die > exit && board.is_outermost(player, from)) {
                                f(Move::off(from as u8, die))?;
                            }
                        }
                    }
                }
            }
        }

        ControlFlow::Continue(())
    }
}

/// Every legal move as a sorted `Vec`. Distinct-value generation means the
/// result holds no duplicate (from, to, die) triples even on a double.
pub fn legal_moves(board: &Board, player: Player, dice: &Dice) -> Vec<Move> {
    let mut moves: Vec<Move> = AvailableMoves { board, player, dice }.collect();
    moves.sort_unstable();
    moves
}
