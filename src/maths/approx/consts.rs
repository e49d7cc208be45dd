//! Formula constants, materialized once per lane type at compile time.

use core::f64::consts::PI;

use super::batch::Batch;
use super::lane::{Element, Lane};

/// Lane types that carry the approximation constants.
pub trait Coefficients: Lane {
    /// 4/π, slope of the base parabola at 0.
    const FOUR_OVER_PI: Self;
    /// -4/π², curvature of the base parabola.
    const NEG_FOUR_OVER_PI_SQ: Self;
    /// Weight of the `y*|y| - y` refinement term.
    const REFINE: Self;
    /// 1/(2π), radians to turns.
    const INV_TAU: Self;
    const QUARTER: Self;
    const HALF: Self;
    const ONE: Self;
    const SIXTEEN: Self;
}

const FOUR_OVER_PI: f64 = 4.0 / PI;
const NEG_FOUR_OVER_PI_SQ: f64 = -4.0 / (PI * PI);
const REFINE: f64 = 0.225;
const INV_TAU: f64 = 1.0 / (2.0 * PI);

impl Coefficients for f64 {
    const FOUR_OVER_PI: f64 = FOUR_OVER_PI;
    const NEG_FOUR_OVER_PI_SQ: f64 = NEG_FOUR_OVER_PI_SQ;
    const REFINE: f64 = REFINE;
    const INV_TAU: f64 = INV_TAU;
    const QUARTER: f64 = 0.25;
    const HALF: f64 = 0.5;
    const ONE: f64 = 1.0;
    const SIXTEEN: f64 = 16.0;
}

impl Coefficients for f32 {
    const FOUR_OVER_PI: f32 = FOUR_OVER_PI as f32;
    const NEG_FOUR_OVER_PI_SQ: f32 = NEG_FOUR_OVER_PI_SQ as f32;
    const REFINE: f32 = REFINE as f32;
    const INV_TAU: f32 = INV_TAU as f32;
    const QUARTER: f32 = 0.25;
    const HALF: f32 = 0.5;
    const ONE: f32 = 1.0;
    const SIXTEEN: f32 = 16.0;
}

impl<T: Element + Coefficients, const W: usize> Coefficients for Batch<T, W> {
    const FOUR_OVER_PI: Self = Batch([T::FOUR_OVER_PI; W]);
    const NEG_FOUR_OVER_PI_SQ: Self = Batch([T::NEG_FOUR_OVER_PI_SQ; W]);
    const REFINE: Self = Batch([T::REFINE; W]);
    const INV_TAU: Self = Batch([T::INV_TAU; W]);
    const QUARTER: Self = Batch([T::QUARTER; W]);
    const HALF: Self = Batch([T::HALF; W]);
    const ONE: Self = Batch([T::ONE; W]);
    const SIXTEEN: Self = Batch([T::SIXTEEN; W]);
}
