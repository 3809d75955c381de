//! Criterion benchmarks for batched set operations and fits.
//! Focus sizes: n in {10, 100, 500}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use stereonet::fit::{fit_girdle, fit_small_circle};
use stereonet::sample::{sample_fisher, sample_uniform};
use stereonet::Vector;

fn bench_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_set");
    for &n in &[10usize, 100, 500] {
        group.bench_with_input(BenchmarkId::new("angle_with", n), &n, |b, &n| {
            b.iter_batched(
                || sample_uniform(&mut StdRng::seed_from_u64(42), n),
                |set| {
                    let _m = set.angle_with(&set, false);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("normalized_cross_with", n), &n, |b, &n| {
            b.iter_batched(
                || sample_uniform(&mut StdRng::seed_from_u64(43), n),
                |set| {
                    let _poles = set.normalized_cross_with(&set);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    let mean = Vector::from_attitude(120.0, 40.0);
    for &n in &[10usize, 100, 500] {
        group.bench_with_input(BenchmarkId::new("fit_girdle", n), &n, |b, &n| {
            b.iter_batched(
                || sample_fisher(&mut StdRng::seed_from_u64(7), mean, 20.0, n).unwrap(),
                |set| {
                    let _axis = fit_girdle(&set);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("fit_small_circle", n), &n, |b, &n| {
            b.iter_batched(
                || sample_fisher(&mut StdRng::seed_from_u64(8), mean, 20.0, n).unwrap(),
                |set| {
                    let _axis = fit_small_circle(&set);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sets, bench_fits);
criterion_main!(benches);
