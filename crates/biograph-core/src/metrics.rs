//! Degree centrality over the adjacency index.
//!
//! Opt-in analysis for callers that want a computed ranking (the sidebar
//! sorts nodes by it). The per-node `centrality` field on [`Node`] is an
//! externally supplied scalar and is deliberately left untouched — this
//! helper returns fresh maps instead of rewriting the graph.
//!
//! [`Node`]: crate::graph::Node

use std::collections::HashMap;

use crate::graph::Graph;

/// Adjacency-list degree and normalized degree centrality per node.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeCentrality {
    /// Degree per node id. A self-loop contributes two (both inserted
    /// adjacency directions).
    pub degree: HashMap<String, usize>,
    /// Degree normalized by `1/(n-1)`; all zeros when `n < 2`.
    pub centrality: HashMap<String, f64>,
}

/// Compute degree centrality for every node.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &Graph) -> DegreeCentrality {
    let n = graph.node_count();
    let factor = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };

    let mut degree = HashMap::with_capacity(n);
    let mut centrality = HashMap::with_capacity(n);
    for (idx, node) in graph.nodes().iter().enumerate() {
        let d = graph.neighbors(idx).len();
        degree.insert(node.id.clone(), d);
        centrality.insert(node.id.clone(), d as f64 * factor);
    }

    DegreeCentrality { degree, centrality }
}
