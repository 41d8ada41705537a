// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for point-list and graph text input.
//!
//! Violated preconditions inside the engines are not represented here: they
//! panic with a diagnostic, because the computation is single-shot and has
//! no partial-result mode. Only malformed input and I/O failures are
//! recoverable values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or parsing input text.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying filesystem failure (other than a missing point list).
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A coordinate or weight token is not a valid number.
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    /// The first line of a serialized graph is not `<node_count>,<directed_flag>`.
    #[error("malformed graph header {header:?}")]
    MalformedHeader { header: String },

    /// A location, point or edge line has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// An edge line refers to a node outside the graph.
    #[error("line {line}: node {node} out of range for {node_count} nodes")]
    NodeOutOfRange {
        line: usize,
        node: usize,
        node_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
