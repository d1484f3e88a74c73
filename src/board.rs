use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use itertools::join;

use crate::mv::{Move, MoveDest, MoveSource};

/// One of the two players. White owns positive point counts and races from
/// high indices toward point 0, Black owns negative counts and races toward
/// point 23.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    White,
    Black,
}

/// The number of points on the board.
pub const POINTS: usize = 24;

/// The number of checkers each side starts (and always stays) with.
pub const CHECKERS_PER_SIDE: u8 = 15;

impl Player {
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    pub fn other(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }

    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

/// The checker positions of both sides: 24 signed point counts (positive =
/// White, negative = Black), plus the bar and borne-off trays per side.
///
/// The signed representation makes a point with checkers of both sides
/// unrepresentable. The remaining invariant, 15 checkers per side across
/// points, bar and tray, is checked by [`Board::assert_valid`] after every
/// mutation.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    points: [i8; POINTS],
    bar: [u8; 2],
    off: [u8; 2],
}

impl Board {
    /// The standard starting layout.
    pub fn new() -> Board {
        let mut points = [0i8; POINTS];
        // White: 2 on the 24-point, 5 on the 13-point, 3 on the 8-point, 5 on the 6-point
        points[23] = 2;
        points[12] = 5;
        points[7] = 3;
        points[5] = 5;
        // Black mirrored
        points[0] = -2;
        points[11] = -5;
        points[16] = -3;
        points[18] = -5;
        Board {
            points,
            bar: [0; 2],
            off: [0; 2],
        }
    }

    /// Build a board from an arbitrary position, for tests and custom starts.
    /// Panics if either side does not total 15 checkers.
    pub fn from_parts(points: [i8; POINTS], bar: [u8; 2], off: [u8; 2]) -> Board {
        let board = Board { points, bar, off };
        board.assert_valid();
        board
    }

    /// Signed occupancy of a point: positive = White checkers, negative = Black.
    pub fn count_at(&self, point: usize) -> i8 {
        assert!(point < POINTS);
        self.points[point]
    }

    /// The number of `player`'s checkers on a point, 0 if the opponent holds it.
    pub fn checkers(&self, player: Player, point: usize) -> u8 {
        let v = self.points[point];
        match player {
            Player::White if v > 0 => v as u8,
            Player::Black if v < 0 => (-v) as u8,
            _ => 0,
        }
    }

    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    pub fn borne_off(&self, player: Player) -> u8 {
        self.off[player.index()]
    }

    /// A point is blocked for `player` when the opponent holds it with two or
    /// more checkers. A lone opposing checker (a blot) does not block.
    pub fn is_blocked(&self, player: Player, point: usize) -> bool {
        self.checkers(player.other(), point) >= 2
    }

    /// The six points nearest `player`'s exit edge.
    pub fn home(player: Player) -> RangeInclusive<usize> {
        match player {
            Player::White => 0..=5,
            Player::Black => 18..=23,
        }
    }

    /// Whether every one of `player`'s checkers on the points sits in its home
    /// region. Checkers on the bar are not counted here, see [`Board::may_bear_off`].
    pub fn all_in_home(&self, player: Player) -> bool {
        (0..POINTS).all(|p| self.checkers(player, p) == 0 || Board::home(player).contains(&p))
    }

    /// Bear-off eligibility: all checkers home and none on the bar.
    pub fn may_bear_off(&self, player: Player) -> bool {
        self.bar(player) == 0 && self.all_in_home(player)
    }

    /// The point a checker entering from the bar with `die` lands on.
    pub fn entry_point(player: Player, die: u8) -> usize {
        debug_assert!((1..=6).contains(&die));
        match player {
            Player::White => POINTS - die as usize,
            Player::Black => die as usize - 1,
        }
    }

    /// The exact die value that bears a checker off from `point`.
    pub fn exit_distance(player: Player, point: usize) -> u8 {
        debug_assert!(point < POINTS);
        match player {
            Player::White => point as u8 + 1,
            Player::Black => (POINTS - point) as u8,
        }
    }

    /// Where a checker on `from` lands when advanced by `die`, or `None` when
    /// it would go past the exit edge.
    pub fn destination(player: Player, from: usize, die: u8) -> Option<usize> {
        match player {
            Player::White => from.checked_sub(die as usize),
            Player::Black => {
                let to = from + die as usize;
                if to < POINTS {
                    Some(to)
                } else {
                    None
                }
            }
        }
    }

    /// Whether no checker of `player` sits farther from the exit than `point`.
    pub fn is_outermost(&self, player: Player, point: usize) -> bool {
        let exit = Board::exit_distance(player, point);
        (0..POINTS).all(|q| self.checkers(player, q) == 0 || Board::exit_distance(player, q) <= exit)
    }

    /// Execute a single move for `player`: lift the checker from the source,
    /// send a hit blot to the opponent's bar, then land or bear off.
    ///
    /// Legality is the move generator's job; this method only executes, and
    /// panics on a move that is structurally impossible for this position.
    pub fn apply(&mut self, player: Player, mv: Move) {
        let delta: i8 = player.sign(Player::White);

        match mv.from {
            MoveSource::Bar => {
                assert!(self.bar(player) > 0, "{:?} has no checker on the bar", player);
                self.bar[player.index()] -= 1;
            }
            MoveSource::Point(p) => {
                let p = p as usize;
                assert!(
                    self.checkers(player, p) > 0,
                    "{:?} has no checker on point {}",
                    player,
                    p + 1
                );
                self.points[p] -= delta;
            }
        }

        match mv.to {
            MoveDest::Off => {
                self.off[player.index()] += 1;
            }
            MoveDest::Point(p) => {
                let p = p as usize;
                assert!(
                    !self.is_blocked(player, p),
                    "point {} is blocked for {:?}",
                    p + 1,
                    player
                );
                let opp = player.other();
                if self.checkers(opp, p) == 1 {
                    // hit: the blot goes to the opponent's bar before the mover lands
                    self.points[p] = 0;
                    self.bar[opp.index()] += 1;
                }
                self.points[p] += delta;
            }
        }

        self.assert_valid();
    }

    /// Panics when a side's checkers across points, bar and tray do not total 15.
    pub fn assert_valid(&self) {
        for &player in &Player::BOTH {
            let on_points: u32 = (0..POINTS).map(|p| self.checkers(player, p) as u32).sum();
            let total = on_points + self.bar(player) as u32 + self.borne_off(player) as u32;
            assert!(
                total == CHECKERS_PER_SIDE as u32,
                "{:?} has {} checkers instead of {}",
                player,
                total,
                CHECKERS_PER_SIDE
            );
        }
    }
}

fn cell(v: i8) -> String {
    if v == 0 {
        " .".to_string()
    } else if v > 0 {
        format!("{}W", v)
    } else {
        format!("{}B", -v)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "bar: W {} B {}   off: W {} B {}",
            self.bar(Player::White),
            self.bar(Player::Black),
            self.borne_off(Player::White),
            self.borne_off(Player::Black),
        )?;
        writeln!(f, "{}", join((13..=24).map(|n| format!("{:2}", n)), " "))?;
        writeln!(f, "{}", join((12..POINTS).map(|p| cell(self.points[p])), " "))?;
        writeln!(f, "{}", join((0..12).rev().map(|p| cell(self.points[p])), " "))?;
        writeln!(f, "{}", join((1..=12).rev().map(|n| format!("{:2}", n)), " "))?;
        Ok(())
    }
}
