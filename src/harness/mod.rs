//! Benchmark and accuracy drivers for the approximations.
//!
//! Only compiled with the `std` feature; the core in [`crate::approx`] never
//! depends on anything here.

pub mod bench;
pub mod error;
pub mod sampling;
pub mod timer;
pub mod verify;

pub use bench::{benchmark_sine, run_benchmark, BenchConfig, BenchReport, Function};
pub use error::HarnessError;
pub use timer::{format_elapsed, Elapsed};
pub use verify::{
    verify_accuracy, verify_trigonometric_functions, AccuracyReport, ErrorSample, VerifyConfig,
};
