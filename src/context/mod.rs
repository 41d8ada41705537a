// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one minimization run.
//!
//! The SearchContext combines:
//! - the input graph, borrowed and never modified
//! - the search tensor, one cost layer per start node
//! - the dynamic state of the start node currently being scanned
//! - run statistics
//!
//! A context is created by [`Minimizer::minimize`](crate::minimize::Minimizer::minimize)
//! and dropped when it returns.

mod dynamic;

pub use dynamic::DynamicState;

use crate::graph::WeightedGraph;
use crate::state::Statistics;
use crate::tensor::Tensor;

/// Search context combining the input weights and the mutable search state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     input: &WeightedGraph,      // immutable, borrowed
///     costs: Tensor<f32>,         // N × N × N, owned
///     state: DynamicState,        // O(N), reset per start node
///     statistics: Statistics,     // owned
/// }
/// ```
///
/// `costs[(k, j, i)]` is the best total cost found for the `k`-th insertion
/// when the search started from node `i` and has scanned candidates up to
/// `j`. Layer `k = 0` stays zero: a lone start node costs nothing.
#[derive(Debug)]
pub struct SearchContext<'g> {
    pub input: &'g WeightedGraph,
    pub costs: Tensor<f32>,
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl<'g> SearchContext<'g> {
    pub fn new(input: &'g WeightedGraph) -> Self {
        let n = input.node_count();
        Self {
            input,
            costs: Tensor::new(n, n, n, 0.0),
            state: DynamicState::new(n),
            statistics: Statistics::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.input.node_count()
    }

    /// Best cost recorded for the last insertion step of `start`.
    pub fn final_cost(&self, start: usize) -> f32 {
        let last = self.node_count() - 1;
        self.costs[(last, last, start)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::regular_polygon;

    #[test]
    fn test_search_context_new() {
        let graph = WeightedGraph::complete_euclidean(&regular_polygon(5, 1.0));
        let ctx = SearchContext::new(&graph);
        assert_eq!(ctx.node_count(), 5);
        assert_eq!(ctx.costs.rows(), 5);
        assert_eq!(ctx.costs.cols(), 5);
        assert_eq!(ctx.costs.channels(), 5);
        assert_eq!(ctx.final_cost(4), 0.0);
        assert!(ctx.state.ordering.is_empty());
    }

    #[test]
    fn test_independent_contexts() {
        let graph = WeightedGraph::complete_euclidean(&regular_polygon(4, 1.0));
        let mut ctx1 = SearchContext::new(&graph);
        let ctx2 = SearchContext::new(&graph);
        ctx1.costs[(3, 3, 0)] = 2.0;
        ctx1.state.reset(1);
        assert_eq!(ctx1.final_cost(0), 2.0);
        assert_eq!(ctx2.final_cost(0), 0.0);
        assert!(ctx2.state.ordering.is_empty());
    }
}
