//! Throughput benchmark: time in-place application of an approximation over
//! a vector of random lane batches.

use std::f64::consts::PI;
use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use super::error::HarnessError;
use super::sampling::seeded_random_lanes;
use super::timer::Elapsed;
use crate::approx::{cosine, sine, Coefficients, Element};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sine,
    Cosine,
}

impl Function {
    #[inline(always)]
    pub fn apply<L: Coefficients>(self, x: L) -> L {
        match self {
            Function::Sine => sine(x),
            Function::Cosine => cosine(x),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sine => "sine",
            Function::Cosine => "cosine",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Number of lane batches generated and timed.
    pub iterations: usize,
    pub function: Function,
    /// Sample range `[lo, hi)`, before rounding to the lane element; defaults
    /// to `[0, π)`.
    pub range: (f64, f64),
    /// Fixed RNG seed; a random one is drawn when `None`.
    pub seed: Option<u64>,
    /// Worker threads sharing the batches.
    pub threads: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1 << 20,
            function: Function::Sine,
            range: (0.0, PI),
            seed: None,
            threads: 1,
        }
    }
}

impl BenchConfig {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.iterations == 0 {
            return Err(HarnessError::ZeroIterations);
        }
        if self.threads == 0 {
            return Err(HarnessError::ZeroThreads);
        }
        HarnessError::check_range(self.range)
    }
}

#[derive(Clone, Debug)]
pub struct BenchReport {
    pub function: Function,
    pub batches: usize,
    /// Lanes per batch.
    pub width: usize,
    pub threads: usize,
    pub seed: u64,
    pub elapsed: Duration,
    /// Sum of every output lane. Keeps the timed work observable.
    pub checksum: f64,
}

impl BenchReport {
    pub fn nanos_per_batch(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.batches as f64
    }

    pub fn nanos_per_element(&self) -> f64 {
        self.nanos_per_batch() / self.width as f64
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Elapsed(self.elapsed))?;
        let per_batch = self.elapsed.as_nanos() / self.batches as u128;
        writeln!(f, "{per_batch}\t nanoseconds per {} elements", self.width)
    }
}

fn apply_in_place<L: Coefficients>(function: Function, lanes: &mut [L]) {
    match function {
        Function::Sine => {
            for lane in lanes.iter_mut() {
                *lane = sine(black_box(*lane));
            }
        }
        Function::Cosine => {
            for lane in lanes.iter_mut() {
                *lane = cosine(black_box(*lane));
            }
        }
    }
}

/// Generate `config.iterations` random batches of `L`, then time applying
/// `config.function` to each of them in place.
pub fn run_benchmark<L: Coefficients>(config: &BenchConfig) -> Result<BenchReport, HarnessError> {
    config.validate()?;
    let (mut lanes, seed) =
        seeded_random_lanes::<L>(config.iterations, config.range, config.seed);
    let function = config.function;

    let elapsed = if config.threads == 1 {
        let start = Instant::now();
        apply_in_place(function, &mut lanes);
        start.elapsed()
    } else {
        let chunk = lanes.len().div_ceil(config.threads);
        let start = Instant::now();
        thread::scope(|scope| {
            for (worker, part) in lanes.chunks_mut(chunk).enumerate() {
                scope.spawn(move || {
                    let t = Instant::now();
                    apply_in_place(function, part);
                    debug!("worker {worker}: {} batches in {:?}", part.len(), t.elapsed());
                });
            }
        });
        start.elapsed()
    };

    let checksum = lanes
        .iter()
        .fold(0.0, |acc, lane| acc + lane.horizontal_sum().to_f64());
    debug!(
        "{function} x{}: {} batches on {} thread(s) in {elapsed:?}",
        L::WIDTH,
        lanes.len(),
        config.threads
    );

    Ok(BenchReport {
        function,
        batches: lanes.len(),
        width: L::WIDTH,
        threads: config.threads,
        seed,
        elapsed,
        checksum,
    })
}

/// Benchmark `sine` over `iterations` random batches in `[0, π)`, write the
/// timing report to `out`, and return the checksum of the results.
pub fn benchmark_sine<L: Coefficients, W: Write>(
    iterations: usize,
    out: &mut W,
) -> Result<f64, HarnessError> {
    let report = run_benchmark::<L>(&BenchConfig::new(iterations))?;
    write!(out, "{report}")?;
    Ok(report.checksum)
}
