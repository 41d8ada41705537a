// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use n1graph::{regular_polygon, Point, WeightedGraph};

/// Complete Euclidean graph over a regular `n`-gon of radius 1.
pub fn polygon_graph(n: usize) -> WeightedGraph {
    WeightedGraph::complete_euclidean(&regular_polygon(n, 1.0))
}

/// A fixed, irregular point set of `n` points (deterministic, no rand).
pub fn scattered_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f32;
            Point::new((t * 1.7).sin() * (1.0 + t * 0.3), (t * 2.3).cos() * (2.0 - t * 0.1))
        })
        .collect()
}

/// Rotate and translate `points` rigidly.
pub fn moved(points: &[Point], angle_degrees: f32, offset: Point) -> Vec<Point> {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    points
        .iter()
        .map(|p| Point::new(c * p.x - s * p.y, s * p.x + c * p.y) + offset)
        .collect()
}

/// True if `values` is a permutation of `0..values.len()`.
pub fn is_permutation(values: &[usize]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.iter().copied().eq(0..values.len())
}
