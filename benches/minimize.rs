// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Benchmarks for the G_N search.
//!
//! The search is O(N⁴); these establish how the constant behaves for the
//! point-set sizes used in practice.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use n1graph::{regular_polygon, Matching, Minimizer, WeightedGraph};

/// Full minimization of a regular polygon at increasing sizes.
fn bench_minimize_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize_polygon");
    for n in [8, 16, 32] {
        let graph = WeightedGraph::complete_euclidean(&regular_polygon(n, 1.0));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| Minimizer::new().minimize(black_box(graph)));
        });
    }
    group.finish();
}

/// Registration of two minimized graphs (row sums plus rank tables).
fn bench_register(c: &mut Criterion) {
    let mut minimizer = Minimizer::new();
    let g1 = minimizer.minimize(&WeightedGraph::complete_euclidean(&regular_polygon(32, 1.0)));
    let g2 = minimizer.minimize(&WeightedGraph::complete_euclidean(&regular_polygon(32, 3.0)));

    c.bench_function("register_32", |b| {
        b.iter(|| {
            let mut matching = Matching::new();
            matching.register(black_box(&g1), black_box(&g2));
            matching
        });
    });
}

criterion_group!(benches, bench_minimize_polygon, bench_register);
criterion_main!(benches);
