//! Benchmarks comparing `setkit::Set` with `std::collections::HashSet`.
//!
//! Element counts are reported as criterion throughput so `cargo xtask bench`
//! can turn estimates into ops/s.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use setkit::Set;
use std::collections::HashSet;

const N: u64 = 1000;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_insert");
    group.throughput(Throughput::Elements(N));

    group.bench_function("Set_insert", |b| {
        b.iter(|| {
            let mut set = Set::new();
            for i in 0..N {
                set.insert(black_box(i));
            }
            black_box(set.len());
        });
    });

    group.bench_function("HashSet_insert", |b| {
        b.iter(|| {
            let mut set = HashSet::new();
            for i in 0..N {
                set.insert(black_box(i));
            }
            black_box(set.len());
        });
    });

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_contains");
    group.throughput(Throughput::Elements(2 * N));

    let set: Set<u64> = (0..N).collect();
    let std_set: HashSet<u64> = (0..N).collect();

    // Half hits, half misses.
    group.bench_function("Set_contains", |b| {
        b.iter(|| {
            let hits = (0..2 * N).filter(|i| set.contains(black_box(i))).count();
            black_box(hits);
        });
    });

    group.bench_function("HashSet_contains", |b| {
        b.iter(|| {
            let hits = (0..2 * N).filter(|i| std_set.contains(black_box(i))).count();
            black_box(hits);
        });
    });

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_churn");
    group.throughput(Throughput::Elements(N));

    group.bench_function("Set_insert_remove", |b| {
        let mut set: Set<u64> = (0..N / 2).collect();
        b.iter(|| {
            for i in 0..N {
                set.insert(i + N);
                set.discard(&(i + N / 2));
            }
            black_box(set.len());
        });
    });

    group.bench_function("HashSet_insert_remove", |b| {
        let mut set: HashSet<u64> = (0..N / 2).collect();
        b.iter(|| {
            for i in 0..N {
                set.insert(i + N);
                set.remove(&(i + N / 2));
            }
            black_box(set.len());
        });
    });

    group.finish();
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");
    group.throughput(Throughput::Elements(N));

    let a: Set<u64> = (0..N).collect();
    let b_set: Set<u64> = (N / 2..N + N / 2).collect();
    let std_a: HashSet<u64> = (0..N).collect();
    let std_b: HashSet<u64> = (N / 2..N + N / 2).collect();

    group.bench_function("Set_union", |b| {
        b.iter(|| black_box(a.union(&b_set)));
    });
    group.bench_function("HashSet_union", |b| {
        b.iter(|| black_box(std_a.union(&std_b).copied().collect::<HashSet<u64>>()));
    });

    group.bench_function("Set_intersection", |b| {
        b.iter(|| black_box(a.intersection(&b_set)));
    });
    group.bench_function("HashSet_intersection", |b| {
        b.iter(|| black_box(std_a.intersection(&std_b).copied().collect::<HashSet<u64>>()));
    });

    group.bench_function("Set_difference", |b| {
        b.iter(|| black_box(a.difference(&b_set)));
    });
    group.bench_function("HashSet_difference", |b| {
        b.iter(|| black_box(std_a.difference(&std_b).copied().collect::<HashSet<u64>>()));
    });

    group.bench_function("Set_is_subset", |b| {
        b.iter(|| black_box(a.is_subset(&b_set)));
    });
    group.bench_function("HashSet_is_subset", |b| {
        b.iter(|| black_box(std_a.is_subset(&std_b)));
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_churn, bench_algebra);
criterion_main!(benches);
