use std::fmt::{Display, Formatter};

use rand::Rng;

use crate::board::{Board, Player, CHECKERS_PER_SIDE};
use crate::dice::Dice;
use crate::movegen::legal_moves;
use crate::mv::Move;

/// The turn cycle: roll, then move until the roll is spent, then the other
/// side rolls, until somebody bears off their fifteenth checker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    AwaitingRoll,
    AwaitingMove,
    GameOver,
}

/// What a successful `roll` or `apply_move` did to the turn. Transport or UI
/// layers that mirror the game elsewhere react to these instead of patching
/// engine internals.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnEvent {
    /// Dice remain and the side to move still has a legal move.
    MovePending,
    /// The turn is over and the other side is to roll. `passed` is true when
    /// one or more rolled dice could not be played.
    TurnEnded { passed: bool },
    /// The mover bore off their fifteenth checker.
    GameOver(Player),
}

/// Rejected `roll`, state unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RollError {
    GameOver,
    /// The current roll still has to be played.
    MovePending,
}

/// Rejected `apply_move`, state unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayError {
    GameOver,
    NotRolled,
    /// The move is not in the current legal set, stale or forged.
    UnavailableMove,
}

impl Display for RollError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RollError::GameOver => write!(f, "cannot roll, the game is over"),
            RollError::MovePending => write!(f, "cannot roll, the current roll is not played out"),
        }
    }
}

impl std::error::Error for RollError {}

impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "cannot move, the game is over"),
            PlayError::NotRolled => write!(f, "cannot move before rolling"),
            PlayError::UnavailableMove => write!(f, "move is not legal in the current position"),
        }
    }
}

impl std::error::Error for PlayError {}

/// One game of backgammon: board, side to move, current dice and phase.
///
/// All mutation goes through [`GameState::roll`], [`GameState::apply_move`]
/// and [`GameState::new_game`]; rejected operations leave the state untouched.
/// Whenever the phase is `AwaitingMove` the legal set is nonempty, because
/// both `roll` and `apply_move` resolve a dead roll as a forced pass on the
/// spot.
///
/// The state is a plain owned value. A caller running one session per game
/// keeps exactly one of these and never shares it across concurrent mutators;
/// anything scheduled against it later (say a deliberately delayed AI reply)
/// should remember [`GameState::generation`] and no-op when it changed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GameState {
    board: Board,
    side_to_move: Player,
    dice: Option<Dice>,
    phase: Phase,
    winner: Option<Player>,
    generation: u64,
}

impl GameState {
    /// A fresh game: standard layout, White to roll.
    pub fn new() -> GameState {
        GameState {
            board: Board::new(),
            side_to_move: Player::White,
            dice: None,
            phase: Phase::AwaitingRoll,
            winner: None,
            generation: 0,
        }
    }

    /// A game starting from a custom position, for tests and problem setups.
    pub fn from_board(board: Board, side_to_move: Player) -> GameState {
        board.assert_valid();
        GameState {
            board,
            side_to_move,
            dice: None,
            phase: Phase::AwaitingRoll,
            winner: None,
            generation: 0,
        }
    }

    /// Reset to the starting position and bump the generation counter so
    /// callbacks scheduled against the previous game can detect staleness.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.side_to_move = Player::White;
        self.dice = None;
        self.phase = Phase::AwaitingRoll;
        self.winner = None;
        self.generation += 1;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn dice(&self) -> Option<&Dice> {
        self.dice.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The full legal set for the current position and remaining dice.
    /// Empty in every phase but `AwaitingMove`.
    pub fn legal_moves(&self) -> Vec<Move> {
        match (self.phase, &self.dice) {
            (Phase::AwaitingMove, Some(dice)) => legal_moves(&self.board, self.side_to_move, dice),
            _ => Vec::new(),
        }
    }

    pub fn is_available_move(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Roll both dice for the side to move. A roll with no legal move is
    /// resolved immediately as a forced pass.
    pub fn roll(&mut self, rng: &mut impl Rng) -> Result<TurnEvent, RollError> {
        self.check_can_roll()?;
        Ok(self.start_turn(Dice::roll(rng)))
    }

    /// Start the turn with dice rolled elsewhere (an external dice source, or
    /// a test). Same transition rules as [`GameState::roll`].
    pub fn roll_exact(&mut self, d1: u8, d2: u8) -> Result<TurnEvent, RollError> {
        self.check_can_roll()?;
        Ok(self.start_turn(Dice::from_pair(d1, d2)))
    }

    fn check_can_roll(&self) -> Result<(), RollError> {
        match self.phase {
            Phase::AwaitingRoll => Ok(()),
            Phase::AwaitingMove => Err(RollError::MovePending),
            Phase::GameOver => Err(RollError::GameOver),
        }
    }

    fn start_turn(&mut self, dice: Dice) -> TurnEvent {
        self.dice = Some(dice);
        self.phase = Phase::AwaitingMove;
        self.resolve()
    }

    /// Play one legal move for the side to move. The move is re-validated
    /// against the current legal set every call; a stale or forged move is
    /// rejected without touching the state.
    pub fn apply_move(&mut self, mv: Move) -> Result<TurnEvent, PlayError> {
        match self.phase {
            Phase::GameOver => return Err(PlayError::GameOver),
            Phase::AwaitingRoll => return Err(PlayError::NotRolled),
            Phase::AwaitingMove => {}
        }
        if !self.is_available_move(mv) {
            return Err(PlayError::UnavailableMove);
        }

        let player = self.side_to_move;
        self.board.apply(player, mv);

        let consumed = match self.dice.as_mut() {
            Some(dice) => dice.consume(mv.die),
            None => false,
        };
        assert!(consumed, "a legal move must consume a rolled die");

        if self.board.borne_off(player) == CHECKERS_PER_SIDE {
            self.dice = None;
            self.phase = Phase::GameOver;
            self.winner = Some(player);
            return Ok(TurnEvent::GameOver(player));
        }

        Ok(self.resolve())
    }

    /// Settle the current half-turn: end the turn when the roll is spent or
    /// when none of the remaining dice can be played (forced pass).
    fn resolve(&mut self) -> TurnEvent {
        let spent = self.dice.as_ref().map_or(true, |dice| dice.all_used());
        if spent {
            return self.end_turn(false);
        }
        if self.legal_moves().is_empty() {
            return self.end_turn(true);
        }
        TurnEvent::MovePending
    }

    fn end_turn(&mut self, passed: bool) -> TurnEvent {
        self.dice = None;
        self.side_to_move = self.side_to_move.other();
        self.phase = Phase::AwaitingRoll;
        TurnEvent::TurnEnded { passed }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match self.phase {
            Phase::AwaitingRoll => write!(f, "{:?} to roll", self.side_to_move),
            Phase::AwaitingMove => match &self.dice {
                Some(dice) => write!(f, "{:?} to move {}", self.side_to_move, dice),
                None => write!(f, "{:?} to move", self.side_to_move),
            },
            Phase::GameOver => match self.winner {
                Some(winner) => write!(f, "game over, {:?} wins", winner),
                None => write!(f, "game over"),
            },
        }
    }
}
