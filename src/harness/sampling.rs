//! Input generation for the drivers.

use std::vec::Vec;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::approx::{Element, Lane};

/// `count` lane values with every lane drawn uniformly from `[lo, hi)` in f64,
/// then rounded to the element type. Rounding can land on `hi` itself (or the
/// nearest element above it, as with `π as f32`), so narrow lanes cover
/// `[lo, hi]` rounded.
pub fn random_lanes<L: Lane, R: Rng>(
    count: usize,
    (lo, hi): (f64, f64),
    rng: &mut R,
) -> Vec<L> {
    (0..count)
        .map(|_| L::from_fn(|_| L::Elem::from_f64(rng.random_range(lo..hi))))
        .collect()
}

/// Seeded variant of [`random_lanes`]; a fresh seed is drawn when `seed` is
/// `None`. Returns the samples and the seed used.
pub fn seeded_random_lanes<L: Lane>(
    count: usize,
    range: (f64, f64),
    seed: Option<u64>,
) -> (Vec<L>, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let lanes = random_lanes(count, range, &mut rng);
    debug!(
        "generated {count} lanes of width {} in [{}, {}) with seed {seed:#x}",
        L::WIDTH,
        range.0,
        range.1
    );
    (lanes, seed)
}

/// `points + 1` evenly spaced values covering `[lo, hi]`, both ends included.
pub fn uniform_grid(lo: f64, hi: f64, points: usize) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / points as f64;
    (0..=points).map(move |i| if i == points { hi } else { lo + i as f64 * step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::F32x8;

    #[test]
    fn lanes_fall_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let lanes: Vec<F32x8> = random_lanes(64, (0.0, 3.0), &mut rng);
        assert_eq!(lanes.len(), 64);
        for lane in &lanes {
            for &x in lane.to_array().iter() {
                assert!((0.0..=3.0).contains(&x), "{x} out of range");
            }
        }
    }

    #[test]
    fn f32_lanes_stay_within_rounded_bounds() {
        use std::f64::consts::PI;
        let mut rng = StdRng::seed_from_u64(11);
        let hi = PI as f32;
        assert!(hi as f64 > PI);
        let lanes: Vec<F32x8> = random_lanes(4096, (0.0, PI), &mut rng);
        for lane in &lanes {
            for &x in lane.to_array().iter() {
                assert!((0.0..=hi).contains(&x), "{x} out of range");
            }
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let (a, seed) = seeded_random_lanes::<f64>(32, (-1.0, 1.0), Some(42));
        let (b, _) = seeded_random_lanes::<f64>(32, (-1.0, 1.0), Some(seed));
        assert_eq!(seed, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn grid_hits_both_ends() {
        let points: Vec<f64> = uniform_grid(-2.0, 2.0, 4).collect();
        assert_eq!(points, [-2.0, -1.0, 0.0, 1.0, 2.0]);
    }
}
