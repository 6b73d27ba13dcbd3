use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use index_scheduler::{naive_associate_indices, Instance};
use itertools::Itertools;
use rand::{seq::index::sample, SeedableRng};
use rand_chacha::ChaChaRng;
use std::{hint::black_box, time::Duration};

/// A random permutation with `k` distinct query positions in `1..n`, so that
/// every query has a fresh element to consume.
fn instance(n: usize, k: usize) -> Instance {
    let mut inst = Instance::random(n, 0, 2718);
    let mut rng = ChaChaRng::seed_from_u64(2718);
    inst.query_positions = sample(&mut rng, n - 1, k)
        .into_iter()
        .map(|i| i + 1)
        .sorted()
        .collect();
    inst
}

fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("associate_indices");
    for n in [1_000, 10_000, 100_000] {
        let inst = instance(n, n / 10);
        g.bench_with_input(BenchmarkId::new("heap", n), &inst, |b, inst| {
            b.iter(|| black_box(inst.scheduler().and_then(|mut s| s.associate_indices())));
        });
        g.bench_with_input(BenchmarkId::new("naive", n), &inst, |b, inst| {
            b.iter(|| {
                black_box(naive_associate_indices(
                    &inst.permutation,
                    &inst.query_positions,
                ))
            });
        });
    }
}

criterion_group!(
    name = group;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_millis(2000))
        .sample_size(10);
    targets = bench
);

criterion_main!(group);
