#![no_std]
//! Fast approximate sine and cosine for scalars and fixed-width batches.
//!
//! The core ([`approx`]) is `no_std` and dependency-free. With the default
//! `std` feature the crate also ships [`harness`], a throughput benchmark and
//! accuracy sweep for the approximations, and the `fasttrig` binary.

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod maths;

#[cfg(feature = "std")]
pub mod harness;

pub use maths::approx;
pub use maths::approx::{
    coarse_sine, cosine, sine, Batch, Coefficients, Element, F32x16, F32x4, F32x8, F64x2, F64x4,
    F64x8, Lane,
};
