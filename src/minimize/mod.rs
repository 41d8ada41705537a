// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum-weight maximum-entropy graph search.
//!
//! Given a weighted graph (usually the complete Euclidean graph of a point
//! set), the [`Minimizer`] looks for the node insertion ordering that
//! minimizes the total weight of an alternating construction:
//!
//! - a *join-isolate* step connects the new node to the previously admitted
//!   node only;
//! - a *join-graph* step connects the new node to every admitted node.
//!
//! # Search Algorithm
//!
//! For every start node `i`:
//!
//! 1. Admit `i`, begin in join-isolate mode.
//! 2. For each insertion step `k` in `1..N`, scan candidates `j` in index
//!    order. Used candidates carry the running cost forward. Unused
//!    candidates cost `costs[(k-1, N-1, i)]` plus the step's incremental
//!    weight; the first is accepted, later ones only if strictly cheaper.
//! 3. Admit the accepted candidate and flip the mode.
//!
//! The start node with the lowest final cost wins (earliest on ties) and its
//! ordering is handed to [`build_graph`].
//!
//! The scan is greedy per step: a cell of the search tensor is never
//! revisited once the scan has moved past it.
//!
//! # Complexity
//!
//! O(N⁴) time (N start nodes × N steps × N candidates × O(N) join cost) and
//! O(N³) space for the search tensor.
//!
//! # References
//!
//! - de Sousa, S., Kropatsch, W. (2015). "Data Graph Formulation as the
//!   Minimum-Weight Maximum-Entropy Problem." GbR 2015.

mod build;

pub use build::build_graph;

use tracing::{debug, info, trace};

use crate::context::{DynamicState, SearchContext};
use crate::graph::{distinct_degrees, WeightedGraph};
use crate::state::{Counters, Statistics};

/// Smallest graph the search is defined for.
pub const MIN_NODES: usize = 3;

/// Weight of connecting `candidate` to the most recently admitted node.
fn join_isolate(input: &WeightedGraph, candidate: usize, latest: usize) -> f32 {
    input.weight(candidate, latest)
}

/// Weight of connecting `candidate` to every admitted node.
fn join_graph(input: &WeightedGraph, candidate: usize, state: &DynamicState) -> f32 {
    state
        .used_nodes()
        .map(|node| input.weight(candidate, node))
        .sum()
}

/// Search the insertion ordering for one start node.
///
/// Leaves the ordering in `ctx.state.ordering` and returns its total cost.
fn scan_start_node(ctx: &mut SearchContext<'_>, start: usize) -> f32 {
    let n = ctx.node_count();
    ctx.state.reset(start);

    for k in 1..n {
        let base = ctx.costs[(k - 1, n - 1, start)];
        let mut chosen = None;

        for j in 0..n {
            let previous = ctx.costs[(k, j.saturating_sub(1), start)];
            if ctx.state.is_used(j) {
                ctx.costs[(k, j, start)] = previous;
                continue;
            }

            let step = if ctx.state.join_mode {
                join_graph(ctx.input, j, &ctx.state)
            } else {
                join_isolate(ctx.input, j, ctx.state.latest)
            };
            let cost = base + step;
            ctx.statistics.increment(Counters::CandidatesEvaluated);

            if chosen.is_none() || cost < previous {
                trace!(start, k, candidate = j, cost, "candidate accepted");
                ctx.costs[(k, j, start)] = cost;
                chosen = Some(j);
            } else {
                ctx.costs[(k, j, start)] = previous;
            }
        }

        let chosen = chosen.unwrap_or_else(|| {
            panic!(
                "No unused candidate for insertion {} from start node {}",
                k, start
            )
        });
        ctx.statistics.increment(Counters::CandidatesAccepted);
        ctx.state.admit(chosen);
    }

    ctx.final_cost(start)
}

/// Scan every start node and return the winner's start node, cost and
/// ordering. An empty ordering means no start node beat `f32::MAX`.
fn search(ctx: &mut SearchContext<'_>) -> (usize, f32, Vec<usize>) {
    let n = ctx.node_count();
    let last = n - 1;
    let mut best_cost = f32::MAX;
    let mut best_start = 0;
    let mut best_nodes = Vec::new();

    for start in 0..n {
        ctx.statistics.increment(Counters::StartNodes);
        let cost = scan_start_node(ctx, start);
        debug!(start, cost, ordering = ?ctx.state.ordering, "start node scanned");

        if cost < best_cost {
            best_cost = cost;
            best_start = start;
            best_nodes.clone_from(&ctx.state.ordering);
            ctx.statistics.increment(Counters::BestImprovements);
        }

        // Fold the corner cell into a running minimum, so that the last
        // layer's corner holds the global optimum once every start node
        // has been scanned.
        let carried = ctx.costs[(last, last, start.saturating_sub(1))];
        if carried < ctx.costs[(last, last, start)] {
            ctx.costs[(last, last, start)] = carried;
        }
    }

    (best_start, best_cost, best_nodes)
}

/// A G_N graph together with the ordering it was built from.
#[derive(Debug, Clone)]
pub struct GnGraph {
    graph: WeightedGraph,
    ordering: Vec<usize>,
    start_node: usize,
    cost: f32,
}

impl GnGraph {
    /// The optimized graph (unit weights, input locations).
    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn into_graph(self) -> WeightedGraph {
        self.graph
    }

    /// Winning insertion ordering, a permutation of the node indices.
    pub fn ordering(&self) -> &[usize] {
        &self.ordering
    }

    pub fn start_node(&self) -> usize {
        self.start_node
    }

    /// Total weight of the winning ordering under the alternating rule.
    pub fn cost(&self) -> f32 {
        self.cost
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}

/// Runs the G_N search and keeps the statistics of the latest run.
#[derive(Debug, Default)]
pub struct Minimizer {
    statistics: Statistics,
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent [`Minimizer::minimize`] call.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Find the cheapest insertion ordering over all start nodes and build
    /// the corresponding G_N graph.
    ///
    /// The result has the same node count and locations as `input`.
    ///
    /// # Panics
    ///
    /// Panics if `input` has fewer than [`MIN_NODES`] nodes, or if the
    /// winning ordering is not a permutation of the nodes.
    pub fn minimize(&mut self, input: &WeightedGraph) -> GnGraph {
        let n = input.node_count();
        assert!(
            n >= MIN_NODES,
            "Minimization needs at least {} nodes, got {}",
            MIN_NODES,
            n
        );
        info!(nodes = n, "Minimizing cost function");

        let mut ctx = SearchContext::new(input);
        let (best_start, best_cost, best_nodes) = search(&mut ctx);
        check_permutation(&best_nodes, n);

        let graph = build_graph(&best_nodes, input.locations());
        let entropy = distinct_degrees(graph.adjacency(), &vec![true; n]);
        info!(
            start = best_start,
            cost = best_cost,
            distinct_degrees = entropy,
            "G_N graph selected"
        );

        self.statistics = std::mem::take(&mut ctx.statistics);
        debug!(statistics = %self.statistics, "Minimization complete");

        GnGraph {
            graph,
            ordering: best_nodes,
            start_node: best_start,
            cost: best_cost,
        }
    }
}

fn check_permutation(ordering: &[usize], n: usize) {
    assert_eq!(
        ordering.len(),
        n,
        "Winning ordering has {} nodes, expected {}",
        ordering.len(),
        n
    );
    let mut seen = vec![false; n];
    for &node in ordering {
        assert!(
            node < n && !seen[node],
            "Winning ordering is not a permutation: {:?}",
            ordering
        );
        seen[node] = true;
    }
}
