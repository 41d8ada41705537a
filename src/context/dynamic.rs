// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state for the start node being scanned.

/// Mutable search state.
///
/// Reset once per start node. The ordering grows by one admitted node per
/// insertion step and alternates the insertion rule each time.
#[derive(Debug, Clone)]
pub struct DynamicState {
    /// Nodes already admitted for the current start node (the used-set).
    pub used: Vec<bool>,

    /// Admission order, starting with the start node.
    pub ordering: Vec<usize>,

    /// Most recently admitted node.
    pub latest: usize,

    /// When true the next admission is a join-graph step (connect to every
    /// used node), otherwise a join-isolate step (connect to `latest` only).
    pub join_mode: bool,
}

impl DynamicState {
    pub fn new(n: usize) -> Self {
        Self {
            used: vec![false; n],
            ordering: Vec::with_capacity(n),
            latest: 0,
            join_mode: false,
        }
    }

    /// Start a fresh scan from `start`, which is admitted immediately.
    pub fn reset(&mut self, start: usize) {
        assert!(
            start < self.used.len(),
            "Start node {} out of range ({} nodes)",
            start,
            self.used.len()
        );
        self.used.fill(false);
        self.used[start] = true;
        self.ordering.clear();
        self.ordering.push(start);
        self.latest = start;
        self.join_mode = false;
    }

    /// Admit the node chosen for the current insertion step and flip the
    /// insertion rule.
    pub fn admit(&mut self, node: usize) {
        assert!(!self.used[node], "Node {} admitted twice", node);
        self.used[node] = true;
        self.ordering.push(node);
        self.latest = node;
        self.join_mode = !self.join_mode;
    }

    pub fn is_used(&self, node: usize) -> bool {
        self.used[node]
    }

    /// Indices of all admitted nodes.
    pub fn used_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.used
            .iter()
            .enumerate()
            .filter(|(_, used)| **used)
            .map(|(node, _)| node)
    }
}
