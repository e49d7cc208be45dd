use std::io::{self, Write};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;

use fasttrig::approx::{Coefficients, HAS_HARDWARE_FMA};
use fasttrig::harness::{run_benchmark, verify_accuracy, BenchConfig, Function, VerifyConfig};
use fasttrig::{F32x16, F32x4, F32x8, F64x2, F64x4, F64x8};

#[derive(Parser, Debug)]
#[command(version, about = "Benchmark and verify the fast sine/cosine approximations")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time in-place evaluation over random lane batches
    Bench(BenchArgs),
    /// Report the maximum absolute error against std sin/cos
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Number of lane batches
    #[arg(short = 'n', long, default_value_t = 1 << 20)]
    iterations: usize,

    #[arg(short, long, value_enum, default_value_t = LaneKind::F32x8)]
    lane: LaneKind,

    #[arg(short, long, value_enum, default_value_t = FunctionArg::Sine)]
    function: FunctionArg,

    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Fixed RNG seed for reproducible samples
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Grid intervals per function
    #[arg(short = 'n', long, default_value_t = 1000)]
    samples: usize,

    #[arg(short, long, value_enum, default_value_t = LaneKind::F32x8)]
    lane: LaneKind,

    /// Sweep cosine over [-K·π, K·π]
    #[arg(short = 'k', long, default_value_t = 1.0)]
    cosine_span: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LaneKind {
    F32,
    F32x4,
    F32x8,
    F32x16,
    F64,
    F64x2,
    F64x4,
    F64x8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FunctionArg {
    Sine,
    Cosine,
}

impl From<FunctionArg> for Function {
    fn from(arg: FunctionArg) -> Self {
        match arg {
            FunctionArg::Sine => Function::Sine,
            FunctionArg::Cosine => Function::Cosine,
        }
    }
}

macro_rules! with_lane {
    ($kind:expr, $run:ident($($arg:expr),*)) => {
        match $kind {
            LaneKind::F32 => $run::<f32>($($arg),*),
            LaneKind::F32x4 => $run::<F32x4>($($arg),*),
            LaneKind::F32x8 => $run::<F32x8>($($arg),*),
            LaneKind::F32x16 => $run::<F32x16>($($arg),*),
            LaneKind::F64 => $run::<f64>($($arg),*),
            LaneKind::F64x2 => $run::<F64x2>($($arg),*),
            LaneKind::F64x4 => $run::<F64x4>($($arg),*),
            LaneKind::F64x8 => $run::<F64x8>($($arg),*),
        }
    };
}

fn bench<L: Coefficients>(args: &BenchArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = BenchConfig {
        iterations: args.iterations,
        function: args.function.into(),
        seed: args.seed,
        threads: args.threads,
        ..BenchConfig::default()
    };
    let report = run_benchmark::<L>(&config).context("benchmark failed")?;
    write!(out, "{report}")?;
    info!(
        "{} over {:?}: {:.3} ns/element, seed {:#x}, checksum {}",
        report.function, args.lane, report.nanos_per_element(), report.seed, report.checksum
    );
    Ok(())
}

fn verify<L: Coefficients>(args: &VerifyArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = VerifyConfig {
        samples: args.samples,
        ..VerifyConfig::default()
    }
    .with_cosine_span(args.cosine_span);
    let report = verify_accuracy::<L>(&config).context("verification failed")?;
    write!(out, "{report}")?;
    info!(
        "worst sine at {}, worst cosine at {}",
        report.sine.angle, report.cosine.angle
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if cli.debug {
        "debug"
    } else {
        "info"
    }))
    .format_timestamp_secs()
    .init();

    info!("{} v.{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("hardware fma: {HAS_HARDWARE_FMA}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Bench(args) => with_lane!(args.lane, bench(args, &mut out)),
        Command::Verify(args) => with_lane!(args.lane, verify(args, &mut out)),
    }
}
