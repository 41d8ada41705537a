// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Planar geometry for point sets.
//!
//! Nodes of a weighted graph may carry a 2-D location. Locations are used
//! for Euclidean edge weights and for placing nodes in diagrams; the
//! optimizer itself only ever sees the weights.

pub mod point;

pub use point::{regular_polygon, Point};
