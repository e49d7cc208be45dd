//! The numeric surface the approximations are written against.
//!
//! A lane is either one float or a fixed-width batch of floats. Every
//! operation is element-wise, so a formula written once over `L: Lane` runs
//! unchanged on `f32`, `f64` and [`Batch`](super::Batch).

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

use super::arch::{fma_f32, fma_f64};
use super::bits::{abs_f32, abs_f64, floor_f32, floor_f64};

pub trait Lane:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Scalar type held in each lane.
    type Elem: Element;

    /// Number of lanes; 1 for scalars.
    const WIDTH: usize;

    /// Broadcast `value` to every lane.
    fn splat(value: Self::Elem) -> Self;

    /// Build a lane value from `f(0), f(1), .., f(WIDTH - 1)`.
    fn from_fn<F: FnMut(usize) -> Self::Elem>(f: F) -> Self;

    /// Read lane `index`.
    ///
    /// # Panics
    /// If `index >= WIDTH`.
    fn extract(self, index: usize) -> Self::Elem;

    fn abs(self) -> Self;

    /// Largest integer not greater than each lane; exact for all inputs.
    fn floor(self) -> Self;

    /// `self * b + c`, fused where the target has FMA.
    fn mul_add(self, b: Self, c: Self) -> Self;

    /// `self * b - c`, fused where the target has FMA.
    fn mul_sub(self, b: Self, c: Self) -> Self {
        self.mul_add(b, -c)
    }

    /// Sum of all lanes, in lane order.
    fn horizontal_sum(self) -> Self::Elem {
        let mut acc = self.extract(0);
        for i in 1..Self::WIDTH {
            acc = acc + self.extract(i);
        }
        acc
    }
}

/// A single IEEE-754 float usable as a one-wide lane.
pub trait Element: Lane<Elem = Self> + PartialOrd + Default + Display {
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! scalar_lane {
    ($t:ty, $abs:ident, $floor:ident, $fma:ident) => {
        impl Lane for $t {
            type Elem = $t;
            const WIDTH: usize = 1;

            #[inline(always)]
            fn splat(value: $t) -> Self {
                value
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $t>(mut f: F) -> Self {
                f(0)
            }

            #[inline(always)]
            fn extract(self, index: usize) -> $t {
                assert!(index == 0, "lane index {index} out of range for scalar");
                self
            }

            #[inline(always)]
            fn abs(self) -> Self {
                $abs(self)
            }

            #[inline(always)]
            fn floor(self) -> Self {
                $floor(self)
            }

            #[inline(always)]
            fn mul_add(self, b: Self, c: Self) -> Self {
                $fma(self, b, c)
            }
        }
    };
}

scalar_lane!(f32, abs_f32, floor_f32, fma_f32);
scalar_lane!(f64, abs_f64, floor_f64, fma_f64);

impl Element for f32 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
}
