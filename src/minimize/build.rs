// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reconstruction of a G_N graph from an insertion ordering.

use crate::geometry::Point;
use crate::graph::{GraphType, WeightedGraph};

/// Build the G_N graph for `ordering`, placing node `i` at `locations[i]`.
///
/// The first two nodes are joined. From position 2 onwards the rule
/// alternates, starting with a join step:
///
/// - join: connect `ordering[t]` to every earlier node of the ordering;
/// - isolate: connect `ordering[t]` to `ordering[t - 1]` only.
///
/// The alternation always starts in join mode, whatever mode the search was
/// in at that step, which gives the non-homogeneous degree distribution
/// (NHDD) registration relies on. Only the first `(N / 2) * 2` positions are
/// connected, so for odd `N` the last node of the ordering stays isolated.
///
/// Edges have unit weight, so a row sum of the result is a node degree.
///
/// # Panics
///
/// Panics if the ordering has fewer than 3 nodes, if its length differs
/// from `locations.len()`, or if it names a node out of range.
///
/// # Example
///
/// ```
/// use n1graph::geometry::Point;
/// use n1graph::minimize::build_graph;
///
/// let graph = build_graph(&[0, 1, 2, 3], &[Point::ORIGIN; 4]);
/// let edges: Vec<_> = graph.edges().iter().map(|e| (e.source, e.target)).collect();
/// assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
/// ```
pub fn build_graph(ordering: &[usize], locations: &[Point]) -> WeightedGraph {
    assert!(
        ordering.len() > 2,
        "Ordering needs more than 2 nodes, got {}",
        ordering.len()
    );
    assert_eq!(
        ordering.len(),
        locations.len(),
        "Ordering length must equal the node count"
    );

    let mut graph = WeightedGraph::new(locations.len(), GraphType::Undirected, 0.0);
    for (node, &location) in locations.iter().enumerate() {
        graph.set_location(node, location);
    }

    graph.add_edge(ordering[0], ordering[1]);
    let mut join = true;
    for t in 2..(ordering.len() / 2) * 2 {
        if join {
            for &earlier in &ordering[..t] {
                graph.add_edge(earlier, ordering[t]);
            }
        } else {
            graph.add_edge(ordering[t], ordering[t - 1]);
        }
        join = !join;
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::degree_vector;

    fn edge_pairs(graph: &WeightedGraph) -> Vec<(usize, usize)> {
        graph.edges().iter().map(|e| (e.source, e.target)).collect()
    }

    #[test]
    fn test_four_nodes() {
        let graph = build_graph(&[0, 1, 2, 3], &[Point::ORIGIN; 4]);
        assert_eq!(edge_pairs(&graph), vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
        assert_eq!(degree_vector(graph.adjacency()), vec![2, 2, 3, 1]);
    }

    #[test]
    fn test_follows_ordering_not_indices() {
        let graph = build_graph(&[3, 0, 2, 1], &[Point::ORIGIN; 4]);
        // 3-0, then 2 joins {3, 0}, then 1 attaches to 2.
        assert_eq!(edge_pairs(&graph), vec![(0, 2), (0, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_six_nodes_degrees() {
        let graph = build_graph(&[0, 1, 2, 3, 4, 5], &[Point::ORIGIN; 6]);
        assert_eq!(degree_vector(graph.adjacency()), vec![3, 3, 4, 2, 5, 1]);
        assert_eq!(graph.edges().len(), 9);
    }

    #[test]
    fn test_odd_count_leaves_last_isolated() {
        let graph = build_graph(&[4, 3, 2, 1, 0], &[Point::ORIGIN; 5]);
        let degrees = degree_vector(graph.adjacency());
        assert_eq!(degrees[0], 0);
        assert_eq!(degrees, vec![0, 1, 3, 2, 2]);
    }

    #[test]
    fn test_three_nodes_single_edge() {
        let graph = build_graph(&[2, 0, 1], &[Point::ORIGIN; 3]);
        assert_eq!(edge_pairs(&graph), vec![(0, 2)]);
    }

    #[test]
    fn test_copies_locations() {
        let locations = [
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        ];
        let graph = build_graph(&[0, 1, 2], &locations);
        assert_eq!(graph.locations(), &locations);
    }

    #[test]
    #[should_panic(expected = "more than 2 nodes")]
    fn test_too_short() {
        build_graph(&[0, 1], &[Point::ORIGIN; 2]);
    }
}
