// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for registration of two G_N graphs.

mod common;

use common::{is_permutation, moved, scattered_points};
use n1graph::graph::degree_vector;
use n1graph::registration::UNMAPPED;
use n1graph::{build_graph, Matching, Minimizer, Point, WeightedGraph};

#[test]
fn test_four_node_graphs_register_bijectively() {
    let g1 = build_graph(&[0, 1, 2, 3], &[Point::ORIGIN; 4]);
    let g2 = build_graph(&[3, 1, 0, 2], &[Point::ORIGIN; 4]);
    let mut matching = Matching::new();
    matching.register_graphs(&g1, &g2);

    let image = matching.correspondences();
    assert!(is_permutation(&image));

    let d1 = degree_vector(g1.adjacency());
    let d2 = degree_vector(g2.adjacency());
    for p in 0..4 {
        let q = matching.correspondence(0, p);
        assert_eq!(matching.rank(0, p), matching.rank(1, q));
        assert_eq!(d1[p], d2[q]);
    }
}

#[test]
fn test_rigid_motion_preserves_structure() {
    let points = scattered_points(8);
    let copy = moved(&points, 30.0, Point::new(5.0, -3.0));

    let mut minimizer = Minimizer::new();
    let g1 = minimizer.minimize(&WeightedGraph::complete_euclidean(&points));
    let g2 = minimizer.minimize(&WeightedGraph::complete_euclidean(&copy));

    let mut matching = Matching::new();
    matching.register(&g1, &g2);
    let image = matching.correspondences();
    assert!(is_permutation(&image));

    // Matched nodes always have equal degree.
    let d1 = degree_vector(g1.graph().adjacency());
    let d2 = degree_vector(g2.graph().adjacency());
    for (p, &q) in image.iter().enumerate() {
        assert_eq!(d1[p], d2[q]);
    }
}

#[test]
fn test_odd_graphs_match_isolated_nodes() {
    let mut minimizer = Minimizer::new();
    let g1 = minimizer.minimize(&WeightedGraph::complete_euclidean(&scattered_points(7)));
    let g2 = minimizer.minimize(&WeightedGraph::complete_euclidean(&moved(
        &scattered_points(7),
        90.0,
        Point::ORIGIN,
    )));

    let mut matching = Matching::new();
    matching.register(&g1, &g2);
    assert!(is_permutation(&matching.correspondences()));

    let isolated_1 = *g1.ordering().last().unwrap();
    let isolated_2 = *g2.ordering().last().unwrap();
    assert_eq!(matching.correspondence(0, isolated_1), isolated_2);
}

#[test]
fn test_reverse_direction_is_sentinel() {
    let mut minimizer = Minimizer::new();
    let g = minimizer.minimize(&WeightedGraph::complete_euclidean(&scattered_points(6)));
    let mut matching = Matching::new();
    matching.register(&g, &g);
    for p in 0..6 {
        assert_eq!(matching.correspondence(0, p), p);
        assert_eq!(matching.correspondence(1, p), UNMAPPED);
    }
}

#[test]
fn test_diagram_has_both_node_sets() {
    let mut minimizer = Minimizer::new();
    let g1 = minimizer.minimize(&WeightedGraph::complete_euclidean(&scattered_points(6)));
    let g2 = minimizer.minimize(&WeightedGraph::complete_euclidean(&scattered_points(6)));
    let mut matching = Matching::new();
    matching.register(&g1, &g2);

    let tex = matching.to_tikz(g1.graph(), g2.graph(), Point::new(25.0, 0.0), 1.0);
    assert_eq!(tex.matches("\\node[g1]").count(), 6);
    assert_eq!(tex.matches("\\node[g2]").count(), 6);
    // Exactly one node holds rank N / 2 and is not connected.
    assert_eq!(tex.matches("\\path[edge]").count(), 5);
    assert!(tex.trim_end().ends_with("\\end{tikzpicture}"));
}
