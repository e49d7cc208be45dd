//! Cosine by folding into one turn and reusing the refined parabola.
//!
//! After scaling to turns, `x - (0.25 + floor(x + 0.25))` lands in
//! [-0.5, 0.5) with cos's peak at -0.25; `16·x·(|x| - 0.5)` is then the sine
//! parabola shifted a quarter turn. The refinement is the same as in `sine`.
//!
//! Reduction precision: the phase is only as good as the fractional bits left
//! in `x/(2π)`. Results stay finite for every finite input but drift from
//! cos(x) past roughly 1e12 (f64) or 1e4 (f32).

use super::consts::Coefficients;

/// Approximate cos(x) for any real x; max absolute error ~0.00109.
#[inline(always)]
pub fn cosine<L: Coefficients>(x: L) -> L {
    let turns = x * L::INV_TAU;
    let t = turns - (L::QUARTER + (turns + L::QUARTER).floor());
    let y = t * (L::SIXTEEN * (t.abs() - L::HALF));
    (L::REFINE * y).mul_add(y.abs() - L::ONE, y)
}
