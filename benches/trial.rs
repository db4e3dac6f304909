//! Benchmarks for state membership and trials.
//!
//! Run with:
//! ```bash
//! cargo bench --bench trial
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use states_rs::prelude::*;

/// Generate deterministic probes for reproducible benchmarks.
fn random_probes(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-100..=100)).collect()
}

fn gapped_augmented(n: i64) -> GappedAugmented {
    let cont = (0..n).map(|i| Segment::new(i * 10, i * 10 + 5));
    let adds = (0..n).map(|i| Discrete::new(i * 10 + 7));
    let gaps = (0..n).map(|i| Discrete::new(i * 10 + 2));
    GappedAugmented::new(cont, adds, gaps)
}

// ============================================================================
// Benchmark: Membership
// ============================================================================

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("state/contains");
    let probes = random_probes(42, 10_000);
    group.throughput(Throughput::Elements(probes.len() as u64));

    for n in [1, 10, 100] {
        let state = gapped_augmented(n);
        group.bench_with_input(BenchmarkId::new("gapped_augmented", n), &probes, |b, probes| {
            b.iter(|| probes.iter().filter(|&&x| state.contains(black_box(x))).count());
        });

        let boxed = factory::gapped_augmented(
            state.segments().to_vec(),
            state.additions().to_vec(),
            state.gaps().to_vec(),
        );
        group.bench_with_input(BenchmarkId::new("boxed", n), &probes, |b, probes| {
            b.iter(|| probes.iter().filter(|&&x| boxed.contains(black_box(x))).count());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Trial
// ============================================================================

fn bench_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial/run");
    let state = Segment::new(0, 10) | Segment::new(10, 30);

    for count in [100u64, 1_000, 10_000] {
        let trial = Trial::new(TrialConfig::new(2021, 0, 60, count)).unwrap();
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::new("union", count), &trial, |b, trial| {
            b.iter(|| trial.run(&state));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contains, bench_trial);

criterion_main!(benches);
