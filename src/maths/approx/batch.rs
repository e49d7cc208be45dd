//! Portable fixed-width batches.
//!
//! `Batch<T, W>` applies the scalar lane operations element by element, so a
//! batched call is bit-identical to W scalar calls. The loops are straight-line
//! over a `[T; W]` and vectorize under the usual optimization levels.

use core::array;
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::lane::{Element, Lane};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Batch<T, const W: usize>(pub [T; W]);

pub type F32x4 = Batch<f32, 4>;
pub type F32x8 = Batch<f32, 8>;
pub type F32x16 = Batch<f32, 16>;
pub type F64x2 = Batch<f64, 2>;
pub type F64x4 = Batch<f64, 4>;
pub type F64x8 = Batch<f64, 8>;

impl<T: Element, const W: usize> Batch<T, W> {
    #[inline(always)]
    pub const fn from_array(values: [T; W]) -> Self {
        Self(values)
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; W] {
        self.0
    }

    /// Load the first W values of `values`, or `None` if it is too short.
    pub fn from_slice(values: &[T]) -> Option<Self> {
        let head = values.get(..W)?;
        Some(Self(array::from_fn(|i| head[i])))
    }

    /// Store every lane into the first W slots of `out`.
    ///
    /// # Panics
    /// If `out.len() < W`.
    pub fn write_to_slice(self, out: &mut [T]) {
        out[..W].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self(array::from_fn(|i| f(self.0[i])))
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl<T: Element, const W: usize> From<[T; W]> for Batch<T, W> {
    fn from(values: [T; W]) -> Self {
        Self(values)
    }
}

impl<T: Element, const W: usize> From<Batch<T, W>> for [T; W] {
    fn from(batch: Batch<T, W>) -> Self {
        batch.0
    }
}

impl<T, const W: usize> Index<usize> for Batch<T, W> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

macro_rules! batch_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Element, const W: usize> $trait for Batch<T, W> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a $op b)
            }
        }
    };
}

batch_binop!(Add, add, +);
batch_binop!(Sub, sub, -);
batch_binop!(Mul, mul, *);
batch_binop!(Div, div, /);

impl<T: Element, const W: usize> Neg for Batch<T, W> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Element, const W: usize> Lane for Batch<T, W> {
    type Elem = T;
    const WIDTH: usize = W;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; W])
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(array::from_fn(f))
    }

    #[inline(always)]
    fn extract(self, index: usize) -> T {
        self.0[index]
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(<T as Lane>::abs)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        self.map(<T as Lane>::floor)
    }

    #[inline(always)]
    fn mul_add(self, b: Self, c: Self) -> Self {
        Self(array::from_fn(|i| self.0[i].mul_add(b.0[i], c.0[i])))
    }

    #[inline(always)]
    fn mul_sub(self, b: Self, c: Self) -> Self {
        Self(array::from_fn(|i| self.0[i].mul_sub(b.0[i], c.0[i])))
    }
}
