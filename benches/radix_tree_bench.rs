//! Benchmarks for the radix tree against std::collections::BTreeSet.
//!
//! Key sets are generated over a fixed four-letter alphabet so path
//! compression has realistic shared prefixes to work with.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::BTreeSet;

use radixset::{RadixTree, VecSink};

const ALPHABET: &[u8] = b"ACGT";

/// Deterministic fixed-alphabet keys of mixed lengths.
fn generate_keys(count: usize) -> Vec<Vec<u8>> {
    let mut state = 0x9e3779b97f4a7c15u64;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let len = 4 + (state % 12) as usize;
            (0..len)
                .map(|i| {
                    let shift = (i % 8) * 8;
                    ALPHABET[((state >> shift) % 4) as usize]
                })
                .collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1_000, 10_000] {
        let keys = generate_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radix_tree", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RadixTree::with_capacity(keys.len());
                for key in keys {
                    tree.insert(black_box(key)).unwrap();
                }
                tree
            });
        });

        group.bench_with_input(BenchmarkId::new("btree_set", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for key in keys {
                    set.insert(black_box(key.clone()));
                }
                set
            });
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in [100, 1_000, 10_000] {
        let keys = generate_keys(size);
        let mut tree = RadixTree::with_capacity(keys.len());
        let mut set = BTreeSet::new();
        for key in &keys {
            tree.insert(key).unwrap();
            set.insert(key.clone());
        }
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radix_tree", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(tree.contains(black_box(key)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("btree_set", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(set.contains(black_box(key)));
                }
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in [100, 1_000, 10_000] {
        let keys = generate_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radix_tree", size), &keys, |b, keys| {
            b.iter_batched(
                || {
                    let mut tree = RadixTree::with_capacity(keys.len());
                    for key in keys {
                        tree.insert(key).unwrap();
                    }
                    tree
                },
                |mut tree| {
                    for key in keys {
                        tree.remove(black_box(key)).unwrap();
                    }
                    tree
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_report_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_strings");

    for size in [100, 1_000, 10_000] {
        let keys = generate_keys(size);
        let mut tree = RadixTree::with_capacity(keys.len());
        for key in &keys {
            tree.insert(key).unwrap();
        }
        group.throughput(Throughput::Elements(tree.len() as u64));

        group.bench_with_input(BenchmarkId::new("sorted", size), &tree, |b, tree| {
            b.iter(|| {
                let mut sink = VecSink::new();
                tree.report_strings(&mut sink, None).unwrap();
                sink
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_remove,
    bench_report_strings
);
criterion_main!(benches);
