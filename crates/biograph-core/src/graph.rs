//! Graph model: typed node and edge containers plus the adjacency index.
//!
//! # Overview
//!
//! A [`Graph`] is constructed once from a [`GraphData`] record and replaced
//! wholesale when new input arrives — there is no incremental mutation API.
//! Construction validates the record ([`ValidationError`]) and builds the
//! adjacency index up front, so traversal and layout never hit a missing
//! node at runtime.
//!
//! ## Ordering
//!
//! Insertion order is preserved everywhere and is part of the contract:
//!
//! - `nodes()` iterates in input order (the first node is the default
//!   traversal start and circular layouts place nodes in this order).
//! - `neighbors(idx)` lists adjacent nodes in edge input order, with both
//!   directions inserted per undirected edge. BFS/DFS visit neighbors in
//!   exactly this order, which makes traversal output reproducible.
//!
//! Self-loops and parallel edges are allowed; each occurrence is kept as
//! an independent entry in both the edge list and the adjacency index.

use std::collections::HashMap;

use crate::error::{UnknownNode, ValidationError};
use crate::input::GraphData;

/// Index of a node within a [`Graph`], assigned in insertion order.
pub type NodeIdx = usize;

/// A validated node. Positions and velocities live in the layout state,
/// not here; the graph side is immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Identifier, unique within the graph.
    pub id: String,
    /// Externally supplied degree (informational).
    pub degree: usize,
    /// Externally supplied centrality scalar (sizing/ranking only).
    pub centrality: f64,
}

/// A validated undirected edge, endpoints resolved to node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// One endpoint.
    pub source: NodeIdx,
    /// Other endpoint.
    pub target: NodeIdx,
    /// Interaction weight (visual thickness, link rest length).
    pub weight: f64,
}

/// An immutable undirected graph with an insertion-ordered adjacency index.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, NodeIdx>,
    adjacency: Vec<Vec<NodeIdx>>,
}

impl Graph {
    /// Build a graph from a boundary record, validating as we go.
    ///
    /// The adjacency index is constructed here, once: for every edge
    /// `source -- target`, `target` is appended to `source`'s list and
    /// `source` to `target`'s (a self-loop therefore appears twice in its
    /// own list, matching adjacency-list degree semantics).
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyGraph`] when the node list is empty.
    /// - [`ValidationError::DuplicateNode`] when two nodes share an id.
    /// - [`ValidationError::DanglingEdge`] when an edge endpoint names an
    ///   unknown node.
    pub fn build(data: &GraphData) -> Result<Self, ValidationError> {
        if data.nodes.is_empty() {
            return Err(ValidationError::EmptyGraph);
        }

        let mut nodes = Vec::with_capacity(data.nodes.len());
        let mut index = HashMap::with_capacity(data.nodes.len());
        for record in &data.nodes {
            if index.insert(record.id.clone(), nodes.len()).is_some() {
                return Err(ValidationError::DuplicateNode(record.id.clone()));
            }
            nodes.push(Node {
                id: record.id.clone(),
                degree: record.degree,
                centrality: record.centrality,
            });
        }

        let mut edges = Vec::with_capacity(data.edges.len());
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for record in &data.edges {
            let resolve = |endpoint: &String| {
                index
                    .get(endpoint)
                    .copied()
                    .ok_or_else(|| ValidationError::DanglingEdge {
                        source_id: record.source.clone(),
                        target_id: record.target.clone(),
                        missing: endpoint.clone(),
                    })
            };
            let source = resolve(&record.source)?;
            let target = resolve(&record.target)?;

            adjacency[source].push(target);
            adjacency[target].push(source);
            edges.push(Edge {
                source,
                target,
                weight: record.weight,
            });
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "graph constructed"
        );

        Ok(Self {
            nodes,
            edges,
            index,
            adjacency,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges (parallel edges and self-loops all count).
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up the index for a node id.
    #[must_use]
    pub fn node_index(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    /// Look up the index for a node id, or fail with [`UnknownNode`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownNode`] when `id` is not in the graph.
    pub fn require(&self, id: &str) -> Result<NodeIdx, UnknownNode> {
        self.node_index(id)
            .ok_or_else(|| UnknownNode(id.to_string()))
    }

    /// The id of the node at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range; indices come from this graph's
    /// own lookups, so a bad index is a caller bug.
    #[must_use]
    pub fn node_id(&self, idx: NodeIdx) -> &str {
        &self.nodes[idx].id
    }

    /// Adjacent node indices in edge input order (both directions of
    /// every undirected edge were inserted at construction).
    #[must_use]
    pub fn neighbors(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.adjacency[idx]
    }

    /// Adjacent node ids for `id`, in edge input order.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownNode`] when `id` is not in the graph.
    pub fn neighbors_of(&self, id: &str) -> Result<Vec<&str>, UnknownNode> {
        let idx = self.require(id)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&n| self.nodes[n].id.as_str())
            .collect())
    }

    /// The default traversal start: the first node in insertion order.
    #[must_use]
    pub fn first_node_id(&self) -> &str {
        &self.nodes[0].id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{EdgeRecord, NodeRecord};

    fn data(nodes: &[&str], edges: &[(&str, &str)]) -> GraphData {
        GraphData {
            nodes: nodes
                .iter()
                .map(|id| NodeRecord {
                    id: (*id).to_string(),
                    degree: 0,
                    centrality: 0.0,
                })
                .collect(),
            edges: edges
                .iter()
                .map(|(s, t)| EdgeRecord {
                    source: (*s).to_string(),
                    target: (*t).to_string(),
                    weight: 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_node_list_is_rejected() {
        let err = Graph::build(&data(&[], &[])).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyGraph);
    }

    #[test]
    fn duplicate_node_id_is_rejected() {
        let err = Graph::build(&data(&["A", "B", "A"], &[])).expect_err("must fail");
        assert_eq!(err, ValidationError::DuplicateNode("A".to_string()));
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let err = Graph::build(&data(&["A"], &[("A", "Z")])).expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::DanglingEdge {
                source_id: "A".to_string(),
                target_id: "Z".to_string(),
                missing: "Z".to_string(),
            }
        );
    }

    #[test]
    fn adjacency_preserves_edge_input_order() {
        let g = Graph::build(&data(
            &["A", "B", "C", "D"],
            &[("A", "C"), ("A", "B"), ("D", "A")],
        ))
        .expect("build");
        // A saw C first, then B, then D (reverse direction of D--A).
        assert_eq!(g.neighbors_of("A").expect("known"), vec!["C", "B", "D"]);
    }

    #[test]
    fn self_loop_appears_twice_in_own_adjacency() {
        let g = Graph::build(&data(&["A", "B"], &[("A", "A"), ("A", "B")])).expect("build");
        assert_eq!(g.neighbors_of("A").expect("known"), vec!["A", "A", "B"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let g = Graph::build(&data(&["A", "B"], &[("A", "B"), ("B", "A")])).expect("build");
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors_of("A").expect("known"), vec!["B", "B"]);
    }

    #[test]
    fn require_unknown_node_fails() {
        let g = Graph::build(&data(&["A"], &[])).expect("build");
        assert_eq!(
            g.require("Q").expect_err("unknown"),
            UnknownNode("Q".to_string())
        );
    }

    #[test]
    fn first_node_follows_insertion_order() {
        let g = Graph::build(&data(&["M", "A", "Z"], &[])).expect("build");
        assert_eq!(g.first_node_id(), "M");
    }
}
