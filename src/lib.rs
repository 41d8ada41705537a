// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum-weight maximum-entropy graphs (G_N graphs) and their registration.
//!
//! Given a point set, the crate derives a sparse graph that keeps total edge
//! weight low while making node degrees as diverse as possible, then uses
//! those degrees to match the nodes of two such graphs.
//!
//! # Pipeline
//!
//! ```text
//! points ─► complete Euclidean WeightedGraph ─► Minimizer ─► GnGraph
//!                                                               │
//!                        (second point set, same pipeline) ─► Matching ─► correspondences, TikZ
//! ```
//!
//! 1. [`WeightedGraph::complete_euclidean`] weights every pair of points by
//!    distance.
//! 2. [`Minimizer::minimize`] scans every start node for the cheapest
//!    insertion ordering under the alternating join-isolate / join-graph
//!    rule, and rebuilds the winning ordering as a unit-weight graph.
//! 3. [`Matching::register`] ranks the nodes of two G_N graphs by degree and
//!    pairs nodes of equal rank.
//!
//! # Example
//!
//! ```
//! use n1graph::{regular_polygon, Matching, Minimizer, WeightedGraph};
//!
//! let a = WeightedGraph::complete_euclidean(&regular_polygon(6, 1.0));
//! let b = WeightedGraph::complete_euclidean(&regular_polygon(6, 2.0));
//!
//! let mut minimizer = Minimizer::new();
//! let ga = minimizer.minimize(&a);
//! let gb = minimizer.minimize(&b);
//!
//! let mut matching = Matching::new();
//! matching.register(&ga, &gb);
//! let mut image = matching.correspondences();
//! image.sort();
//! assert_eq!(image, vec![0, 1, 2, 3, 4, 5]);
//! ```
//!
//! # Architecture
//!
//! Everything is single threaded and synchronous. A minimization run owns
//! its [`SearchContext`] (the O(N³) search tensor and the per-start-node
//! dynamic state) and drops it on return. Violated preconditions panic with
//! a diagnostic; only input parsing and file I/O return [`Error`]s.
//!
//! # References
//!
//! - de Sousa, S., Kropatsch, W. (2015). "Data Graph Formulation as the
//!   Minimum-Weight Maximum-Entropy Problem." 10th IAPR-TC15 Workshop on
//!   Graph-based Representations in Pattern Recognition (GbR 2015).

pub mod context;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod minimize;
pub mod registration;
pub mod state;
pub mod tensor;

// Re-export commonly used types
pub use context::SearchContext;
pub use errors::{Error, Result};
pub use geometry::{regular_polygon, Point};
pub use graph::{Edge, GraphType, WeightedGraph};
pub use minimize::{build_graph, GnGraph, Minimizer};
pub use registration::Matching;
pub use tensor::Tensor;
