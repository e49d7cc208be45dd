use criterion::Criterion;
use fasttrig::{F32x16, F32x4, F32x8, F64x4};

use bench_util::{bench_inputs, bench_lanes, configure_criterion, gen_range, pack_lanes};

fn bench_sin(c: &mut Criterion) {
    let smoke = [
        0.0,
        1e-6,
        -1e-6,
        0.5,
        1.0,
        -1.0,
        std::f64::consts::FRAC_PI_2,
        -std::f64::consts::FRAC_PI_2,
        3.0,
        -3.0,
        std::f64::consts::PI,
        -std::f64::consts::PI,
    ];
    let common = gen_range(4096, -std::f64::consts::PI, std::f64::consts::PI, 0x1357);
    let common_f32: Vec<f32> = common.iter().map(|&x| x as f32).collect();

    let mut group = c.benchmark_group("sin/smoke");
    bench_inputs(&mut group, &smoke, fasttrig::sine::<f64>, f64::sin);
    group.finish();

    let mut group = c.benchmark_group("sin/f64");
    bench_inputs(&mut group, &common, fasttrig::sine::<f64>, f64::sin);
    group.finish();

    let mut group = c.benchmark_group("sin/f32");
    bench_inputs(&mut group, &common_f32, fasttrig::sine::<f32>, f32::sin);
    let x4 = pack_lanes::<F32x4>(&common);
    let x8 = pack_lanes::<F32x8>(&common);
    let x16 = pack_lanes::<F32x16>(&common);
    bench_lanes(&mut group, "f32x4", &x4, fasttrig::sine::<F32x4>);
    bench_lanes(&mut group, "f32x8", &x8, fasttrig::sine::<F32x8>);
    bench_lanes(&mut group, "f32x16", &x16, fasttrig::sine::<F32x16>);
    group.finish();

    let packed = pack_lanes::<F64x4>(&common);
    let mut group = c.benchmark_group("sin/f64x4");
    bench_lanes(&mut group, "approx", &packed, fasttrig::sine::<F64x4>);
    bench_lanes(&mut group, "coarse", &packed, fasttrig::coarse_sine::<F64x4>);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_sin(&mut c);
    c.final_summary();
}
