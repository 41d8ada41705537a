// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weighted graphs over a fixed node set.
//!
//! A [`WeightedGraph`] is an `N × N` weight table plus one optional planar
//! location per node. A weight of zero means "no edge". Undirected graphs
//! keep the table symmetric: every mutation writes both halves. No
//! operation in this crate sets a diagonal entry.
//!
//! # Submodules
//!
//! - `degree`: degree sequences and the distinct-degree ("entropy") count
//! - `format`: the line-oriented text serialization and TikZ export

pub mod degree;
pub mod format;

pub use degree::{degree_vector, distinct_degrees};

use crate::geometry::Point;
use crate::tensor::Tensor;

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphType {
    Directed,
    Undirected,
}

/// A weighted edge. For undirected graphs `source < target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    graph_type: GraphType,
    locations: Vec<Point>,
    adjacency: Tensor<f32>,
}

impl WeightedGraph {
    /// Create a graph with `n` nodes at the origin and every weight set to
    /// `default_weight`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize, graph_type: GraphType, default_weight: f32) -> Self {
        assert!(n > 0, "Graph needs at least one node");
        Self {
            graph_type,
            locations: vec![Point::ORIGIN; n],
            adjacency: Tensor::matrix(n, n, default_weight),
        }
    }

    /// The complete undirected graph over `points`, weighted by Euclidean
    /// distance.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty.
    pub fn complete_euclidean(points: &[Point]) -> Self {
        let mut graph = Self::new(points.len(), GraphType::Undirected, 0.0);
        for (node, &p) in points.iter().enumerate() {
            graph.set_location(node, p);
        }
        for source in 0..points.len() {
            for target in (source + 1)..points.len() {
                graph.add_euclidean_edge(source, target);
            }
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.rows()
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn is_directed(&self) -> bool {
        self.graph_type == GraphType::Directed
    }

    /// The full weight table.
    pub fn adjacency(&self) -> &Tensor<f32> {
        &self.adjacency
    }

    pub fn weight(&self, source: usize, target: usize) -> f32 {
        self.adjacency[(source, target)]
    }

    fn check_node(&self, node: usize) {
        assert!(
            node < self.node_count(),
            "Node {} out of range ({} nodes)",
            node,
            self.node_count()
        );
    }

    /// Add an unweighted edge (weight 1).
    pub fn add_edge(&mut self, source: usize, target: usize) {
        self.add_weighted_edge(source, target, 1.0);
    }

    pub fn add_weighted_edge(&mut self, source: usize, target: usize, weight: f32) {
        self.check_node(source);
        self.check_node(target);
        self.adjacency[(source, target)] = weight;
        if self.graph_type == GraphType::Undirected {
            self.adjacency[(target, source)] = weight;
        }
    }

    /// Add an edge weighted by the distance between the two node locations.
    pub fn add_euclidean_edge(&mut self, source: usize, target: usize) {
        self.check_node(source);
        self.check_node(target);
        let weight = self.locations[source].distance(self.locations[target]);
        self.add_weighted_edge(source, target, weight);
    }

    pub fn set_location(&mut self, node: usize, location: Point) {
        self.check_node(node);
        self.locations[node] = location;
    }

    pub fn location(&self, node: usize) -> Point {
        self.check_node(node);
        self.locations[node]
    }

    pub fn locations(&self) -> &[Point] {
        &self.locations
    }

    /// All edges with positive weight, row-major. Undirected graphs report
    /// each edge once with `source < target`.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.node_count();
        let mut edges = Vec::new();
        for source in 0..n {
            for target in 0..n {
                if !self.is_directed() && target <= source {
                    continue;
                }
                let weight = self.adjacency[(source, target)];
                if weight > 0.0 {
                    edges.push(Edge {
                        source,
                        target,
                        weight,
                    });
                }
            }
        }
        edges
    }

    /// Sum of all weights reported by [`WeightedGraph::edges`].
    pub fn total_weight(&self) -> f32 {
        self.edges().iter().map(|e| e.weight).sum()
    }
}
