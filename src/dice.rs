use std::fmt::{Display, Formatter};

use itertools::Itertools;
use rand::Rng;

/// The dice rolled for one turn: two values, or four copies of the same value
/// for a double. Each slot is consumed independently, so a double grants up to
/// four plays of its value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    values: [u8; 4],
    len: u8,
    used: [bool; 4],
}

impl Dice {
    /// Two independent uniform values in 1..=6.
    pub fn roll(rng: &mut impl Rng) -> Dice {
        Dice::from_pair(rng.gen_range(1..=6), rng.gen_range(1..=6))
    }

    /// Build from known die values, the entry point for externally rolled
    /// dice and for tests. Panics outside 1..=6.
    pub fn from_pair(d1: u8, d2: u8) -> Dice {
        assert!(
            (1..=6).contains(&d1) && (1..=6).contains(&d2),
            "die values must be in 1..=6, got {} and {}",
            d1,
            d2
        );
        if d1 == d2 {
            Dice {
                values: [d1; 4],
                len: 4,
                used: [false; 4],
            }
        } else {
            Dice {
                values: [d1, d2, 0, 0],
                len: 2,
                used: [false; 4],
            }
        }
    }

    /// The rolled values, four entries for a double.
    pub fn rolled(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    pub fn is_double(&self) -> bool {
        self.len == 4
    }

    pub fn is_used(&self, slot: usize) -> bool {
        assert!(slot < self.len as usize);
        self.used[slot]
    }

    pub fn used_count(&self) -> usize {
        self.used[..self.len as usize].iter().filter(|&&u| u).count()
    }

    pub fn all_used(&self) -> bool {
        self.used_count() == self.len as usize
    }

    /// The values of all slots not yet consumed, one entry per slot.
    pub fn available(&self) -> impl Iterator<Item = u8> + '_ {
        self.rolled()
            .iter()
            .enumerate()
            .filter(move |&(i, _)| !self.used[i])
            .map(|(_, &v)| v)
    }

    /// The distinct values still playable. Generating moves per distinct value
    /// keeps a double from producing the same (from, to, die) triple four times.
    pub fn distinct_available(&self) -> impl Iterator<Item = u8> + '_ {
        self.available().unique()
    }

    /// Mark one unconsumed slot carrying `die` as used.
    /// Returns false when no such slot remains.
    pub fn consume(&mut self, die: u8) -> bool {
        for i in 0..self.len as usize {
            if !self.used[i] && self.values[i] == die {
                self.used[i] = true;
                return true;
            }
        }
        false
    }
}

impl Display for Dice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let slots = self
            .rolled()
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if self.used[i] {
                    format!("({})", v)
                } else {
                    format!("{}", v)
                }
            })
            .join(" ");
        write!(f, "[{}]", slots)
    }
}
