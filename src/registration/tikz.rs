// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Side-by-side TikZ diagram of a registration.

use std::fmt;

use tracing::info;

use super::Matching;
use crate::geometry::Point;
use crate::graph::WeightedGraph;

/// Node coordinates are divided by this before placement.
pub const DIAGRAM_NODE_SCALE: f32 = 10.0;

const PICTURE_SCALE: f32 = 0.8;
const NODE_SIZE_PT: u32 = 25;
const G1_CLASS: &str = "g1";
const G2_CLASS: &str = "g2";
const EDGE_CLASS: &str = "edge";

/// [`fmt::Display`] adapter drawing a registered pair side by side.
struct Diagram<'a> {
    matching: &'a Matching,
    g1: &'a WeightedGraph,
    g2: &'a WeightedGraph,
    gap: Point,
    edge_fraction: f32,
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.g1.node_count();
        for (class, colour) in [(G1_CLASS, "red!25"), (G2_CLASS, "blue!25")] {
            writeln!(
                f,
                "\\tikzstyle{{{}}}=[circle,draw,fill={},minimum size={}pt,inner sep=0pt]",
                class, colour, NODE_SIZE_PT
            )?;
        }
        writeln!(f, "\\tikzstyle{{{}}} = [draw,thick,-]", EDGE_CLASS)?;
        writeln!(
            f,
            "\\begin{{tikzpicture}}[scale={:.6}, auto,swap]",
            PICTURE_SCALE
        )?;

        for node in 0..n {
            let p1 = self.g1.location(node);
            let p2 = self.g2.location(node);
            writeln!(
                f,
                "\t\\node[{}] ({}a) at ({:.6},{:.6}) {{}};",
                G1_CLASS,
                self.matching.rank(0, node),
                p1.x / DIAGRAM_NODE_SCALE,
                p1.y / DIAGRAM_NODE_SCALE
            )?;
            writeln!(
                f,
                "\t\\node[{}] ({}b) at ({:.6},{:.6}) {{}};",
                G2_CLASS,
                self.matching.rank(1, node),
                self.gap.x + p2.x / DIAGRAM_NODE_SCALE,
                self.gap.y + p2.y / DIAGRAM_NODE_SCALE
            )?;
        }

        let edges_to_draw = (n as f32 * self.edge_fraction) as usize;
        for node in 0..edges_to_draw.min(n) {
            let rank = self.matching.rank(0, node);
            if rank == n / 2 {
                continue;
            }
            writeln!(f, "\t\\path[{}] ({}a) -- ({}b);", EDGE_CLASS, rank, rank)?;
        }

        writeln!(f, "\\end{{tikzpicture}}")
    }
}

impl Matching {
    /// Draw both graphs' nodes, labelled by degree rank, and connect
    /// corresponding nodes.
    ///
    /// Nodes of `g2` are shifted by `gap`. Correspondence edges are drawn
    /// for the first `floor(N * edge_fraction)` node indices of `g1`,
    /// skipping a node whose rank is exactly `N / 2`.
    ///
    /// # Panics
    ///
    /// Panics before registration, if the graphs' node counts differ from
    /// each other or from the registered count, or if `edge_fraction` is
    /// outside `[0, 1]`.
    pub fn to_tikz(
        &self,
        g1: &WeightedGraph,
        g2: &WeightedGraph,
        gap: Point,
        edge_fraction: f32,
    ) -> String {
        info!("Generating TikZ code");
        assert!(self.is_registered(), "Diagram requested before registration");
        let n = g1.node_count();
        assert_eq!(n, g2.node_count(), "Graphs must have the same node count");
        assert_eq!(
            n,
            self.node_count(),
            "Graphs must match the registered node count"
        );
        assert!(
            (0.0..=1.0).contains(&edge_fraction),
            "Edge fraction {} outside [0, 1]",
            edge_fraction
        );

        Diagram {
            matching: self,
            g1,
            g2,
            gap,
            edge_fraction,
        }
        .to_string()
    }
}
