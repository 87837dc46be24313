//! Error types shared across the graph model and traversal engine.
//!
//! Construction failures are fatal to `build`/`rebuild` and are returned
//! synchronously; callers keep whatever valid graph they held before.
//! [`UnknownNode`] is the only traversal-time failure — disconnected or
//! single-node graphs are never errors.

/// A graph could not be constructed from the supplied records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The node list was empty. Traversal and layout are undefined on an
    /// empty graph, so construction refuses it outright.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Two node records carried the same id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// An edge referenced a node id that is not in the node set.
    ///
    /// The endpoint fields avoid the name `source`, which thiserror
    /// would otherwise wire up as the error's cause.
    #[error("edge {source_id} -- {target_id} references unknown node {missing}")]
    DanglingEdge {
        /// Source endpoint as supplied.
        source_id: String,
        /// Target endpoint as supplied.
        target_id: String,
        /// Whichever endpoint failed the lookup.
        missing: String,
    },
}

/// A traversal, path query, or command named a node id that does not
/// exist in the graph. Reported to the caller; no state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node id: {0}")]
pub struct UnknownNode(pub String);
