// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text forms of a [`WeightedGraph`].
//!
//! # Serialization
//!
//! ```text
//! <node_count>,<directed_flag>      directed_flag is 1 or 0
//! <x>,<y>                           one line per node
//! <source>,<target>,<weight>        one line per positive, finite edge
//! ```
//!
//! Undirected graphs list each edge once with `source < target`. Floats are
//! printed with six decimals, so a round trip is exact up to that precision.
//!
//! # TikZ
//!
//! [`WeightedGraph::to_tikz`] draws the graph alone, with 1-based node names.

use std::fmt;
use std::str::FromStr;

use super::{GraphType, WeightedGraph};
use crate::errors::Error;
use crate::geometry::Point;

const SINGLE_GRAPH_SCALE: f32 = 1.8;

fn is_drawable(weight: f32) -> bool {
    weight > 0.0 && weight.is_finite()
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{},{}",
            self.node_count(),
            if self.is_directed() { 1 } else { 0 }
        )?;
        for p in self.locations() {
            writeln!(f, "{:.6},{:.6}", p.x, p.y)?;
        }
        for edge in self.edges() {
            if is_drawable(edge.weight) {
                writeln!(f, "{},{},{:.6}", edge.source, edge.target, edge.weight)?;
            }
        }
        Ok(())
    }
}

fn parse_field<T: FromStr>(token: &str, line: usize) -> Result<T, Error> {
    token.trim().parse().map_err(|_| Error::InvalidNumber {
        line,
        token: token.trim().to_string(),
    })
}

fn split_fields(text: &str, line: usize, expected: usize) -> Result<Vec<&str>, Error> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != expected {
        return Err(Error::MalformedLine {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

impl FromStr for WeightedGraph {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        // Line numbers in errors are 1-based.
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let malformed_header = |header: &str| Error::MalformedHeader {
            header: header.to_string(),
        };
        let (_, header) = lines.next().ok_or_else(|| malformed_header(""))?;
        let (count, flag) = header.split_once(',').ok_or_else(|| malformed_header(header))?;
        let node_count: usize = count.trim().parse().map_err(|_| malformed_header(header))?;
        let graph_type = match flag.trim() {
            "1" => GraphType::Directed,
            "0" => GraphType::Undirected,
            _ => return Err(malformed_header(header)),
        };
        if node_count == 0 {
            return Err(malformed_header(header));
        }

        let mut graph = WeightedGraph::new(node_count, graph_type, 0.0);
        for node in 0..node_count {
            let (line, text) = lines.next().ok_or(Error::MalformedLine {
                line: node + 2,
                expected: 2,
                found: 0,
            })?;
            let fields = split_fields(text, line, 2)?;
            let x = parse_field(fields[0], line)?;
            let y = parse_field(fields[1], line)?;
            graph.set_location(node, Point::new(x, y));
        }

        for (line, text) in lines {
            let fields = split_fields(text, line, 3)?;
            let source: usize = parse_field(fields[0], line)?;
            let target: usize = parse_field(fields[1], line)?;
            let weight: f32 = parse_field(fields[2], line)?;
            for node in [source, target] {
                if node >= node_count {
                    return Err(Error::NodeOutOfRange {
                        line,
                        node,
                        node_count,
                    });
                }
            }
            graph.add_weighted_edge(source, target, weight);
        }
        Ok(graph)
    }
}

/// [`fmt::Display`] adapter drawing a graph as a TikZ picture.
struct Tikz<'a>(&'a WeightedGraph);

impl fmt::Display for Tikz<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(
            f,
            "\\begin{{tikzpicture}}[scale={:.6}, auto,swap]",
            SINGLE_GRAPH_SCALE
        )?;
        for (node, p) in graph.locations().iter().enumerate() {
            writeln!(
                f,
                "\t\\node[vertex] ({}) at ({:.6},{:.6}) {{}};",
                node + 1,
                p.x,
                p.y
            )?;
        }
        let n = graph.node_count();
        for source in 0..n {
            for target in 0..n {
                if !graph.is_directed() && target <= source {
                    continue;
                }
                if is_drawable(graph.weight(source, target)) {
                    writeln!(f, "\t\\path[edge] ({}) -- ({});", source + 1, target + 1)?;
                }
            }
        }
        writeln!(f, "\\end{{tikzpicture}}")
    }
}

impl WeightedGraph {
    /// TikZ picture of this graph on its own.
    pub fn to_tikz(&self) -> String {
        Tikz(self).to_string()
    }
}
