// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Degree-based registration between two G_N graphs.
//!
//! G_N graphs have a non-homogeneous degree distribution (NHDD): almost
//! every node has its own degree. Registration therefore reduces to sorting
//! nodes by degree. A node's *degree rank* is its degree minus one, used
//! directly as an index; two nodes in different graphs correspond when they
//! share a rank.
//!
//! # Rank collisions and isolated nodes
//!
//! The construction is not a perfect permutation of degrees: the first two
//! nodes of an ordering always share a degree, and for odd node counts the
//! last node is isolated (degree 0). Such nodes are given the lowest vacant
//! ranks, colliding nodes first and isolated nodes after, each group in
//! node-index order. The rank table is therefore always a bijection on
//! `0..N`, and structurally identical graphs register onto each other one to
//! one.

mod tikz;

pub use tikz::DIAGRAM_NODE_SCALE;

use tracing::{debug, info};

use crate::graph::WeightedGraph;
use crate::minimize::GnGraph;

/// Value returned by [`Matching::correspondence`] for the second graph,
/// whose reverse lookup is not defined.
pub const UNMAPPED: usize = 0;

/// Node ↔ rank tables for one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RankTable {
    /// `mapping[node]` is the node's rank.
    mapping: Vec<usize>,
    /// `reverse[rank]` is the node holding that rank.
    reverse: Vec<usize>,
}

impl RankTable {
    /// Rank every node of `graph` by its rounded row sum.
    fn from_graph(graph: &WeightedGraph) -> Self {
        let degrees: Vec<i64> = (0..graph.node_count())
            .map(|node| graph.adjacency().row_sum(node).round() as i64)
            .collect();
        Self::from_degrees(&degrees)
    }

    fn from_degrees(degrees: &[i64]) -> Self {
        let n = degrees.len();
        let mut mapping: Vec<Option<usize>> = vec![None; n];
        let mut reverse: Vec<Option<usize>> = vec![None; n];
        let mut colliding = Vec::new();
        let mut isolated = Vec::new();

        for (node, &degree) in degrees.iter().enumerate() {
            if degree <= 0 {
                isolated.push(node);
                continue;
            }
            let rank = (degree - 1) as usize;
            if rank < n && reverse[rank].is_none() {
                mapping[node] = Some(rank);
                reverse[rank] = Some(node);
            } else {
                colliding.push(node);
            }
        }

        let vacant: Vec<usize> = (0..n).filter(|&rank| reverse[rank].is_none()).collect();
        for (node, rank) in colliding.iter().chain(&isolated).zip(vacant) {
            debug!(node, degree = degrees[*node], rank, "rank reassigned");
            mapping[*node] = Some(rank);
            reverse[rank] = Some(*node);
        }

        Self {
            mapping: mapping
                .into_iter()
                .map(|rank| rank.expect("every node receives a vacant rank"))
                .collect(),
            reverse: reverse
                .into_iter()
                .map(|node| node.expect("every rank is held by a node"))
                .collect(),
        }
    }
}

/// Correspondence between the nodes of two registered G_N graphs.
///
/// Re-registering overwrites the previous tables.
#[derive(Debug, Clone, Default)]
pub struct Matching {
    number_of_points: usize,
    g1: RankTable,
    g2: RankTable,
}

impl Matching {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register two G_N graphs produced by the minimizer.
    ///
    /// # Panics
    ///
    /// See [`Matching::register_graphs`].
    pub fn register(&mut self, g1: &GnGraph, g2: &GnGraph) {
        self.register_graphs(g1.graph(), g2.graph());
    }

    /// Register two graphs whose row sums are node degrees.
    ///
    /// Time O(V²) for the row sums, space O(V).
    ///
    /// # Panics
    ///
    /// Panics if either graph has 2 nodes or fewer, or if the node counts
    /// differ.
    pub fn register_graphs(&mut self, g1: &WeightedGraph, g2: &WeightedGraph) {
        info!("Registering point sets");
        let n = g1.node_count();
        assert!(n > 2, "Registration needs more than 2 nodes, got {}", n);
        assert_eq!(
            n,
            g2.node_count(),
            "Registered graphs must have the same node count"
        );

        self.number_of_points = n;
        self.g1 = RankTable::from_graph(g1);
        self.g2 = RankTable::from_graph(g2);

        for node in 0..n {
            debug!(
                node,
                g1_rank = self.g1.mapping[node],
                g2_rank = self.g2.mapping[node],
                "degree ranks"
            );
        }
        info!(mapping = ?self.correspondences(), "Mapping");
    }

    pub fn is_registered(&self) -> bool {
        self.number_of_points > 0
    }

    pub fn node_count(&self) -> usize {
        self.number_of_points
    }

    fn check_lookup(&self, graph: usize, node: usize) {
        assert!(graph < 2, "Graph selector must be 0 or 1, got {}", graph);
        assert!(self.is_registered(), "Lookup before registration");
        assert!(
            node < self.number_of_points,
            "Node {} out of range ({} nodes)",
            node,
            self.number_of_points
        );
    }

    /// Degree rank of `node` in graph `graph` (0 or 1).
    ///
    /// # Panics
    ///
    /// Panics before registration, or if `graph` or `node` is out of range.
    pub fn rank(&self, graph: usize, node: usize) -> usize {
        self.check_lookup(graph, node);
        if graph == 0 {
            self.g1.mapping[node]
        } else {
            self.g2.mapping[node]
        }
    }

    /// The node corresponding to `point`.
    ///
    /// For `graph == 0`, `point` is a node of the first graph and the result
    /// is the node of the second graph with the same degree rank. The
    /// reverse direction (`graph == 1`) is not defined and always returns
    /// [`UNMAPPED`].
    ///
    /// # Panics
    ///
    /// Panics before registration, or if `graph` or `point` is out of range.
    pub fn correspondence(&self, graph: usize, point: usize) -> usize {
        self.check_lookup(graph, point);
        if graph == 0 {
            self.g2.reverse[self.g1.mapping[point]]
        } else {
            UNMAPPED
        }
    }

    /// `correspondence(0, p)` for every node `p` of the first graph.
    pub fn correspondences(&self) -> Vec<usize> {
        (0..self.number_of_points)
            .map(|point| self.correspondence(0, point))
            .collect()
    }
}
