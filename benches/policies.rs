//! Fault-counting throughput for each policy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{compare, compare_parallel, Policy};

/// Deterministic pseudo-random reference string with some locality.
fn reference_string(len: usize, pages: u64) -> Vec<u64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // Every fourth reference stays in a small hot set
            if i % 4 == 0 {
                state % 4
            } else {
                state % pages
            }
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    for len in [100usize, 1_000] {
        let reference = reference_string(len, 32);
        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.name(), len), &reference, |b, r| {
                b.iter(|| policy.faults(black_box(r), black_box(8)))
            });
        }
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let reference = reference_string(1_000, 32);
    c.bench_function("compare/sequential", |b| {
        b.iter(|| compare(black_box(&reference), 8))
    });
    c.bench_function("compare/parallel", |b| {
        b.iter(|| compare_parallel(black_box(&reference), 8))
    });
}

criterion_group!(benches, bench_policies, bench_compare);
criterion_main!(benches);
