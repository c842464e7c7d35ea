mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::IVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stipple::prelude::*;

const COUNTS: [usize; 3] = [250, 1_000, 2_000];

fn gradient(p: IVec2) -> f32 {
    (p.x as f32 / 512.0).clamp(0.0, 1.0)
}

fn placement_scan_benches(c: &mut Criterion) {
    let domain = Domain::from_size(512, 512).expect("valid domain");

    for early_exit in [true, false] {
        let mut group = c.benchmark_group(format!("placement/early_exit_{early_exit}"));

        for &count in &COUNTS {
            let config = RunConfig::new(count).with_early_exit(early_exit);
            group.throughput(common::elements_throughput(count));

            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ count as u64);
                b.iter(|| {
                    let result = run_placement(domain, &gradient, &config, &mut rng)
                        .expect("placement run");
                    black_box(result.len());
                });
            });
        }

        group.finish();
    }
}

fn placement_tries_benches(c: &mut Criterion) {
    let domain = Domain::from_size(512, 512).expect("valid domain");
    let mut group = c.benchmark_group("placement/fixed_tries");

    for &tries in &[8usize, 32, 128] {
        let config = RunConfig::new(1_000).with_tries(TriesPolicy::Fixed(tries));
        group.throughput(common::elements_throughput(1_000));

        group.bench_with_input(BenchmarkId::from_parameter(tries), &tries, |b, _| {
            let mut rng = StdRng::seed_from_u64(0xBEEF ^ tries as u64);
            b.iter(|| {
                let result = run_placement(domain, &ConstantWeight(0.5), &config, &mut rng)
                    .expect("placement run");
                black_box(result.candidates_evaluated);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = placement_scan_benches, placement_tries_benches
}
criterion_main!(benches);
