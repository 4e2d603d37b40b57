//! How the order keys are inserted in affects the unbalanced tree
//!
//! Sorted input builds a list-like tree so every insert and lookup walks the whole tree. Balanced
//! input keeps every path logarithmic.

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};

use unbalanced_bst::{BSTree, balanced_order};

const SIZES: &[usize] = &[50, 100, 500, 1000, 2000];

fn orders(n: usize) -> [(&'static str, Vec<i64>); 3] {
    // Multiply by 10 so that keys aren't consecutive
    let sorted: Vec<i64> = (0..n as i64).map(|i| i * 10).collect();

    let mut shuffled = sorted.clone();
    // Use seed to make this deterministic
    let mut rng = StdRng::seed_from_u64(8675309);
    shuffled.shuffle(&mut rng);

    let balanced = balanced_order(&sorted);

    [("sorted", sorted), ("random", shuffled), ("balanced", balanced)]
}

pub fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build tree");
    for &size in SIZES {
        for (label, keys) in orders(size).iter() {
            group.bench_with_input(BenchmarkId::new(*label, size), keys, |b, keys| {
                b.iter(|| keys.iter().copied().collect::<BSTree<_>>())
            });
        }
    }
    group.finish();
}

pub fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup every key");
    for &size in SIZES {
        for (label, keys) in orders(size).iter() {
            let tree: BSTree<_> = keys.iter().copied().collect();
            group.bench_with_input(BenchmarkId::new(*label, size), keys, |b, keys| {
                b.iter(|| {
                    for key in keys {
                        black_box(tree.contains(key));
                    }
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches,
    bench_build,
    bench_lookup,
);

criterion_main!(benches);
