//! Parabolic sine with a single refinement step.
//!
//! The base parabola `4/π·x - 4/π²·x·|x|` meets sin at 0, ±π/2 and ±π and is
//! off by up to ~0.056 in between. Blending in `0.225·(y·|y| - y)` pulls it
//! onto the curve, leaving a max absolute error of ~0.00109 on [-π, π].

use super::consts::Coefficients;

/// First stage only: the base parabola. Max error ~0.056 on [-π, π].
#[inline(always)]
pub fn coarse_sine<L: Coefficients>(x: L) -> L {
    L::FOUR_OVER_PI.mul_add(x, L::NEG_FOUR_OVER_PI_SQ * x * x.abs())
}

/// Approximate sin(x) for x in [-π, π]; max absolute error ~0.00109.
///
/// Inputs outside [-π, π] are not reduced; reduce the angle first, or use
/// [`cosine`](super::cosine) which reduces internally. Out of range the result
/// is meaningless, and it stops being finite once `y·|y|` in the refinement
/// overflows: past `|x| ≈ 6.7e9` for f32 and `|x| ≈ 1.8e77` for f64.
#[inline(always)]
pub fn sine<L: Coefficients>(x: L) -> L {
    let y = coarse_sine(x);
    let t = y.mul_sub(y.abs(), y);
    L::REFINE.mul_add(t, y)
}
