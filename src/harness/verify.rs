//! Accuracy sweep against the `std` f64 sin/cos.
//!
//! Each sample angle is broadcast into a full lane value, so every lane
//! position of a batched type is checked, not just the first.

use std::f64::consts::PI;
use std::fmt;
use std::io::Write;

use log::debug;

use super::bench::Function;
use super::error::HarnessError;
use super::sampling::uniform_grid;
use crate::approx::{Coefficients, Element};

/// One approximate value next to its reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorSample {
    pub angle: f64,
    pub approx: f64,
    pub reference: f64,
}

impl ErrorSample {
    pub fn abs_error(&self) -> f64 {
        (self.approx - self.reference).abs()
    }
}

#[derive(Clone, Debug)]
pub struct VerifyConfig {
    /// Grid intervals; `samples + 1` angles are evaluated per function.
    pub samples: usize,
    pub sine_range: (f64, f64),
    pub cosine_range: (f64, f64),
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            sine_range: (-PI, PI),
            cosine_range: (-PI, PI),
        }
    }
}

impl VerifyConfig {
    /// Sweep cosine over `[-span·π, span·π]` to exercise range reduction.
    pub fn with_cosine_span(mut self, span: f64) -> Self {
        self.cosine_range = (-span * PI, span * PI);
        self
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.samples == 0 {
            return Err(HarnessError::ZeroSamples);
        }
        HarnessError::check_range(self.sine_range)?;
        HarnessError::check_range(self.cosine_range)
    }
}

#[derive(Clone, Debug)]
pub struct AccuracyReport {
    pub samples: usize,
    pub width: usize,
    /// Worst sine sample seen.
    pub sine: ErrorSample,
    /// Worst cosine sample seen.
    pub cosine: ErrorSample,
}

impl AccuracyReport {
    pub fn max_sine_error(&self) -> f64 {
        self.sine.abs_error()
    }

    pub fn max_cosine_error(&self) -> f64 {
        self.cosine.abs_error()
    }
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Maximum absolute error for sine function: {}",
            self.max_sine_error()
        )?;
        writeln!(
            f,
            "Maximum absolute error for cosine function: {}",
            self.max_cosine_error()
        )
    }
}

fn worst_case<L: Coefficients>(
    function: Function,
    (lo, hi): (f64, f64),
    samples: usize,
) -> ErrorSample {
    let reference: fn(f64) -> f64 = match function {
        Function::Sine => f64::sin,
        Function::Cosine => f64::cos,
    };
    let mut worst = ErrorSample {
        angle: lo,
        approx: 0.0,
        reference: 0.0,
    };
    for angle in uniform_grid(lo, hi, samples) {
        let x = L::splat(L::Elem::from_f64(angle));
        // Compare at the angle the lane actually holds.
        let at = x.extract(0).to_f64();
        let expected = reference(at);
        let y = function.apply(x);
        for i in 0..L::WIDTH {
            let sample = ErrorSample {
                angle: at,
                approx: y.extract(i).to_f64(),
                reference: expected,
            };
            if sample.abs_error() > worst.abs_error() {
                worst = sample;
            }
        }
    }
    worst
}

pub fn verify_accuracy<L: Coefficients>(
    config: &VerifyConfig,
) -> Result<AccuracyReport, HarnessError> {
    config.validate()?;
    let sine = worst_case::<L>(Function::Sine, config.sine_range, config.samples);
    let cosine = worst_case::<L>(Function::Cosine, config.cosine_range, config.samples);
    debug!(
        "width {}: worst sine {:e} at {}, worst cosine {:e} at {}",
        L::WIDTH,
        sine.abs_error(),
        sine.angle,
        cosine.abs_error(),
        cosine.angle
    );
    Ok(AccuracyReport {
        samples: config.samples,
        width: L::WIDTH,
        sine,
        cosine,
    })
}

/// Run the default sweep (1000 intervals over [-π, π]) and write the report.
pub fn verify_trigonometric_functions<L: Coefficients, W: Write>(
    out: &mut W,
) -> Result<AccuracyReport, HarnessError> {
    let report = verify_accuracy::<L>(&VerifyConfig::default())?;
    write!(out, "{report}")?;
    Ok(report)
}
