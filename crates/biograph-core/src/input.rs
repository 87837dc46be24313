//! Boundary records consumed from the (external) data-loading layer.
//!
//! The loading layer hands the engine one record shaped like:
//!
//! ```json
//! {
//!   "nodes": [{"id": "A", "degree": 3, "centrality": 0.12}],
//!   "edges": [{"source": "A", "target": "B", "weight": 0.9}]
//! }
//! ```
//!
//! Optional fields get their defaults applied exactly once, here at the
//! serde boundary — `weight` to 1.0, `degree` and `centrality` to zero —
//! so the rest of the crate never re-checks for missing values.

use serde::{Deserialize, Serialize};

/// One node as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Identifier, unique within a graph.
    pub id: String,
    /// Externally computed degree. Informational; the adjacency index is
    /// the source of truth once the graph is built.
    #[serde(default)]
    pub degree: usize,
    /// Externally supplied centrality scalar, used only for sizing and
    /// ranking. Never recomputed by the engine.
    #[serde(default)]
    pub centrality: f64,
}

/// One undirected edge as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// One endpoint id.
    pub source: String,
    /// Other endpoint id.
    pub target: String,
    /// Interaction weight. Scales visual thickness and the link-force
    /// rest length; never used in shortest-path cost.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

const fn default_weight() -> f64 {
    1.0
}

/// The full input record: node list plus edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    /// Nodes in input order. Insertion order is load-bearing: it fixes
    /// the default traversal start and the circular layout order.
    pub nodes: Vec<NodeRecord>,
    /// Edges in input order. Order is load-bearing for adjacency.
    pub edges: Vec<EdgeRecord>,
}

impl GraphData {
    /// Parse a `GraphData` record from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the document is
    /// malformed or a required field (`id`, `source`, `target`) is
    /// missing.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_defaults_to_one() {
        let data = GraphData::from_json(
            r#"{"nodes":[{"id":"A"},{"id":"B"}],"edges":[{"source":"A","target":"B"}]}"#,
        )
        .expect("parse");
        assert!((data.edges[0].weight - 1.0).abs() < f64::EPSILON);
        assert_eq!(data.nodes[0].degree, 0);
        assert!(data.nodes[0].centrality.abs() < f64::EPSILON);
    }

    #[test]
    fn missing_id_is_rejected() {
        let result = GraphData::from_json(r#"{"nodes":[{"degree":2}],"edges":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn full_record_round_trips() {
        let data = GraphData::from_json(
            r#"{
                "nodes": [
                    {"id": "A", "degree": 3, "centrality": 0.12},
                    {"id": "B", "degree": 1, "centrality": 0.04}
                ],
                "edges": [
                    {"source": "A", "target": "B", "weight": 0.9}
                ]
            }"#,
        )
        .expect("parse");
        assert_eq!(data.nodes.len(), 2);
        assert_eq!(data.nodes[0].degree, 3);
        assert!((data.edges[0].weight - 0.9).abs() < f64::EPSILON);
    }
}
