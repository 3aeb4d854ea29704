use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use swarmlab::problem::{self, Problem};
use swarmlab_functions::WfgParams;

/// Decomposed evaluation runs the WFG pipeline once per objective; the
/// shared variant runs it once per candidate.
fn bench_wfg8_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("wfg8_evaluation");

    for m in [2usize, 3, 5].iter() {
        let params = WfgParams::new(2 * (m - 1), 20, *m).unwrap();
        let decomposed = problem::wfg8(params).unwrap();
        let shared = problem::wfg8_shared(params).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let x = decomposed.domain().random_vector(&mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("decomposed", m), &x, |b, x| {
            b.iter(|| decomposed.evaluate(black_box(x)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("shared", m), &x, |b, x| {
            b.iter(|| shared.evaluate(black_box(x)).unwrap());
        });
    }
    group.finish();
}

/// Raw kernel throughput without domain validation
fn bench_wfg_kernels(c: &mut Criterion) {
    let params = WfgParams::new(4, 20, 3).unwrap();
    let z: Vec<f64> = (0..params.dimension())
        .map(|j| WfgParams::upper_bound(j) * 0.37)
        .collect();

    c.bench_function("wfg4_kernel", |b| {
        b.iter(|| swarmlab_functions::wfg4(black_box(&z), &params).unwrap())
    });
    c.bench_function("wfg8_kernel", |b| {
        b.iter(|| swarmlab_functions::wfg8(black_box(&z), &params).unwrap())
    });
}

criterion_group!(benches, bench_wfg8_evaluation, bench_wfg_kernels);
criterion_main!(benches);
