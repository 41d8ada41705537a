// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Node degrees of a weight table.
//!
//! An entry counts towards a node's degree when it is positive and finite.
//! G_N graphs aim for as many distinct degrees as possible, so
//! [`distinct_degrees`] is the quantity the construction maximizes.

use std::collections::BTreeSet;

use crate::tensor::Tensor;

/// Degree of every node (row) of `adjacency`.
pub fn degree_vector(adjacency: &Tensor<f32>) -> Vec<usize> {
    assert_eq!(
        adjacency.rows(),
        adjacency.cols(),
        "Adjacency table must be square"
    );
    (0..adjacency.rows())
        .map(|row| {
            (0..adjacency.cols())
                .filter(|&col| {
                    let weight = adjacency[(row, col)];
                    weight > 0.0 && weight.is_finite()
                })
                .count()
        })
        .collect()
}

/// Number of distinct degree values among the nodes selected by `mask`.
///
/// # Panics
///
/// Panics if `mask.len()` differs from the node count.
pub fn distinct_degrees(adjacency: &Tensor<f32>, mask: &[bool]) -> usize {
    assert_eq!(
        adjacency.rows(),
        mask.len(),
        "Degree mask length must equal the node count"
    );
    degree_vector(adjacency)
        .into_iter()
        .zip(mask)
        .filter(|(_, selected)| **selected)
        .map(|(degree, _)| degree)
        .collect::<BTreeSet<_>>()
        .len()
}
