use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use backgammon_engine::board::Board;

/// Build a test position. `white` and `black` give (0-based point, count)
/// pairs; checkers not placed on the points or the bar are parked on the off
/// tray so the 15-per-side invariant holds.
pub fn position(white: &[(usize, i8)], black: &[(usize, i8)], bar: [u8; 2]) -> Board {
    let mut points = [0i8; 24];
    for &(p, n) in white {
        assert_eq!(0, points[p], "point {} set twice", p);
        points[p] = n;
    }
    for &(p, n) in black {
        assert_eq!(0, points[p], "point {} set twice", p);
        points[p] = -n;
    }

    let white_on: i8 = white.iter().map(|&(_, n)| n).sum();
    let black_on: i8 = black.iter().map(|&(_, n)| n).sum();
    let off = [
        15u8 - white_on as u8 - bar[0],
        15u8 - black_on as u8 - bar[1],
    ];

    Board::from_parts(points, bar, off)
}

/// Check that `sampler` draws roughly uniformly from `expected`, and that it
/// never produces anything outside `expected`. With an empty `expected` the
/// sampler must keep returning `None`.
pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(
    expected: &[T],
    mut sampler: impl FnMut() -> Option<T>,
) {
    assert!(
        expected.iter().all_unique(),
        "duplicate value in expected: {:?}",
        expected
    );

    if expected.is_empty() {
        for _ in 0..100 {
            assert_eq!(None, sampler());
        }
        return;
    }

    let samples_per_value = 1000;
    let total_samples = samples_per_value * expected.len();

    let mut counts: HashMap<T, u64> = expected.iter().map(|&value| (value, 0)).collect();
    for _ in 0..total_samples {
        let sample = sampler().expect("there are expected values, so the sampler must return one");
        match counts.get_mut(&sample) {
            None => panic!("non-expected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    for value in expected {
        let count = *counts.get(value).unwrap();
        let relative = count as f32 / samples_per_value as f32;
        assert!(
            (0.8..1.2).contains(&relative),
            "value {:?} was over/under sampled: {} ~ {}",
            value,
            count,
            relative,
        );
    }
}
