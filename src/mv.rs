use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where a move picks its checker up.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MoveSource {
    /// Re-entry of a hit checker.
    Bar,
    /// A 0-based point index.
    Point(u8),
}

/// Where a move puts its checker down.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MoveDest {
    /// A 0-based point index.
    Point(u8),
    /// Borne off the board.
    Off,
}

/// A candidate single-checker move consuming one die. A `Move` is a proposal
/// only, it carries no side effects until the board applies it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    pub from: MoveSource,
    pub to: MoveDest,
    pub die: u8,
}

impl Move {
    pub fn new(from: MoveSource, to: MoveDest, die: u8) -> Move {
        Move { from, to, die }
    }

    /// Point-to-point move, 0-based indices.
    pub fn point(from: u8, to: u8, die: u8) -> Move {
        Move::new(MoveSource::Point(from), MoveDest::Point(to), die)
    }

    /// Entry from the bar onto a 0-based point.
    pub fn enter(to: u8, die: u8) -> Move {
        Move::new(MoveSource::Bar, MoveDest::Point(to), die)
    }

    /// Bear-off from a 0-based point.
    pub fn off(from: u8, die: u8) -> Move {
        Move::new(MoveSource::Point(from), MoveDest::Off, die)
    }
}

/// The die value a from/to pair implies on its own. Bar entry points and home
/// points of the two sides occupy disjoint ranges, so no side is needed.
/// Only an oversized bear-off die is not implied, which is why the text form
/// carries an explicit `(die)` suffix in exactly that case.
fn implied_die(from: MoveSource, to: MoveDest) -> u8 {
    match (from, to) {
        (MoveSource::Bar, MoveDest::Point(e)) => {
            if e >= 18 {
                24 - e
            } else {
                e + 1
            }
        }
        (MoveSource::Point(p), MoveDest::Off) => {
            if p < 6 {
                p + 1
            } else {
                24 - p
            }
        }
        (MoveSource::Point(p), MoveDest::Point(q)) => {
            if p > q {
                p - q
            } else {
                q - p
            }
        }
        (MoveSource::Bar, MoveDest::Off) => 0,
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.from {
            MoveSource::Bar => write!(f, "bar")?,
            MoveSource::Point(p) => write!(f, "{}", p + 1)?,
        }
        write!(f, "/")?;
        match self.to {
            MoveDest::Off => write!(f, "off")?,
            MoveDest::Point(p) => write!(f, "{}", p + 1)?,
        }
        if self.die != implied_die(self.from, self.to) {
            write!(f, "({})", self.die)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Error when parsing the text form of a [`Move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ParseMoveError;

impl Display for ParseMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid move notation")
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse notation like `13/7`, `bar/20`, `3/off` or `3/off(5)`,
    /// with 1-based point numbers.
    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        let (left, (from, to, die)) = parse::mv()(s).map_err(|_| ParseMoveError)?;
        if !left.is_empty() {
            return Err(ParseMoveError);
        }

        let from = match from {
            None => MoveSource::Bar,
            Some(n) if (1..=24).contains(&n) => MoveSource::Point(n - 1),
            Some(_) => return Err(ParseMoveError),
        };
        let to = match to {
            None => MoveDest::Off,
            Some(n) if (1..=24).contains(&n) => MoveDest::Point(n - 1),
            Some(_) => return Err(ParseMoveError),
        };
        if from == MoveSource::Bar && to == MoveDest::Off {
            return Err(ParseMoveError);
        }

        let die = die.unwrap_or_else(|| implied_die(from, to));
        if !(1..=6).contains(&die) {
            return Err(ParseMoveError);
        }

        Ok(Move { from, to, die })
    }
}

mod parse {
    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::digit1;
    use nom::combinator::{map, map_res, opt, value};
    use nom::sequence::{delimited, tuple};
    use nom::IResult;

    pub fn mv<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, (Option<u8>, Option<u8>, Option<u8>)> {
        let int = || map_res(digit1, |s: &str| s.parse::<u8>());

        let from = alt((value(None::<u8>, tag("bar")), map(int(), Some)));
        let to = alt((value(None::<u8>, tag("off")), map(int(), Some)));
        let die = opt(delimited(tag("("), int(), tag(")")));

        map(tuple((from, tag("/"), to, die)), |(from, _, to, die)| {
            (from, to, die)
        })
    }
}
