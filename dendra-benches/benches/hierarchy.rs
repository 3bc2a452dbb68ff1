//! Benchmarks for the two binary partition tree builders.
//!
//! Measures the canonical (Kruskal-style) builder and the generic fusion
//! builder with single linkage over the same seeded grid inputs, isolating
//! the tree construction from input generation.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use dendra_benches::weighted_grid;
use dendra_core::{binary_partition_tree, bpt_canonical, SingleLinkage};

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Grid side lengths to benchmark; vertex counts are the squares.
const SIDES: &[usize] = &[16, 32, 64];

fn bench_bpt_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("bpt_canonical");
    for &side in SIDES {
        let input = weighted_grid(side, SEED);
        group.bench_with_input(
            BenchmarkId::from_parameter(side * side),
            &input,
            |b, input| {
                b.iter(|| {
                    let _hierarchy = bpt_canonical(&input.graph, &input.weights);
                });
            },
        );
    }
    group.finish();
}

fn bench_binary_partition_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_partition_tree_single_linkage");
    group.sample_size(20);
    for &side in SIDES {
        let input = weighted_grid(side, SEED);
        group.bench_with_input(
            BenchmarkId::from_parameter(side * side),
            &input,
            |b, input| {
                b.iter(|| {
                    let _tree = binary_partition_tree(
                        &input.graph,
                        &input.weights,
                        SingleLinkage::new(input.weights.clone()),
                    );
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_bpt_canonical, bench_binary_partition_tree);
criterion_main!(benches);
