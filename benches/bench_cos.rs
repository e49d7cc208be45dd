use criterion::Criterion;
use fasttrig::{F32x8, F64x4};

use bench_util::{bench_inputs, bench_lanes, configure_criterion, gen_range, pack_lanes};

fn bench_cos(c: &mut Criterion) {
    let common = gen_range(
        4096,
        -2.0 * std::f64::consts::PI,
        2.0 * std::f64::consts::PI,
        0x2468,
    );
    let wide = gen_range(4096, -1e4, 1e4, 0x9abc);

    let common_x8 = pack_lanes::<F32x8>(&common);
    let common_x4 = pack_lanes::<F64x4>(&common);
    let wide_x4 = pack_lanes::<F64x4>(&wide);

    let mut group = c.benchmark_group("cos/common");
    bench_inputs(&mut group, &common, fasttrig::cosine::<f64>, f64::cos);
    bench_lanes(&mut group, "f32x8", &common_x8, fasttrig::cosine::<F32x8>);
    bench_lanes(&mut group, "f64x4", &common_x4, fasttrig::cosine::<F64x4>);
    group.finish();

    let mut group = c.benchmark_group("cos/wide");
    bench_inputs(&mut group, &wide, fasttrig::cosine::<f64>, f64::cos);
    bench_lanes(&mut group, "f64x4", &wide_x4, fasttrig::cosine::<F64x4>);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_cos(&mut c);
    c.final_summary();
}
