//! Benchmarks comparing the instrumented sorts against the standard
//! library baseline.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selsort::SelectionSorter;

const SIZES: &[usize] = &[100, 1000, 5000];

fn random_array(rng: &mut StdRng, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..n as i32 * 10)).collect()
}

fn reverse_array(n: usize) -> Vec<i32> {
    (0..n as i32).rev().collect()
}

fn bench_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("random");

    for &n in SIZES {
        let base = random_array(&mut rng, n);

        group.bench_with_input(BenchmarkId::new("standard", n), &base, |b, base| {
            b.iter(|| {
                let mut arr = base.clone();
                SelectionSorter::new().sort(black_box(&mut arr));
                arr
            })
        });

        group.bench_with_input(BenchmarkId::new("bidirectional", n), &base, |b, base| {
            b.iter(|| {
                let mut arr = base.clone();
                SelectionSorter::new().sort_bidirectional(black_box(&mut arr));
                arr
            })
        });

        group.bench_with_input(BenchmarkId::new("std_unstable", n), &base, |b, base| {
            b.iter(|| {
                let mut arr = base.clone();
                black_box(&mut arr).sort_unstable();
                arr
            })
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_sorted");

    for &n in SIZES {
        let base = reverse_array(n);

        group.bench_with_input(BenchmarkId::new("standard", n), &base, |b, base| {
            b.iter(|| {
                let mut arr = base.clone();
                SelectionSorter::new().sort(black_box(&mut arr));
                arr
            })
        });

        group.bench_with_input(BenchmarkId::new("bidirectional", n), &base, |b, base| {
            b.iter(|| {
                let mut arr = base.clone();
                SelectionSorter::new().sort_bidirectional(black_box(&mut arr));
                arr
            })
        });
    }

    group.finish();
}

fn bench_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("presorted");

    // Early termination makes this the best case for the standard variant.
    for &n in SIZES {
        let base: Vec<i32> = (0..n as i32).collect();

        group.bench_with_input(BenchmarkId::new("standard", n), &base, |b, base| {
            b.iter(|| {
                let mut arr = base.clone();
                SelectionSorter::new().sort(black_box(&mut arr));
                arr
            })
        });

        group.bench_with_input(BenchmarkId::new("bidirectional", n), &base, |b, base| {
            b.iter(|| {
                let mut arr = base.clone();
                SelectionSorter::new().sort_bidirectional(black_box(&mut arr));
                arr
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random, bench_reverse, bench_presorted);
criterion_main!(benches);
