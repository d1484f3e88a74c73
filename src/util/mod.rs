//! Small helpers shared by the engine, its tests and benchmarks.
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

pub mod game_stats;

/// A fixed-seed rng for reproducible tests.
pub fn consistent_rng() -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(0)
}
