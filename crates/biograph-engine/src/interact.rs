//! Interaction state machine types.
//!
//! The phases mirror what the (external) pointer/timer layer can put the
//! engine into: at rest, simulating, mid-drag, playing back a traversal,
//! or displaying a highlighted path. Transition logic lives on
//! [`GraphEngine`]; this module owns the types and the small predicates
//! the engine dispatches on.
//!
//! [`GraphEngine`]: crate::engine::GraphEngine

use biograph_core::{NodeIdx, UnknownNode};

/// Which traversal order an animation plays back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Breadth-first order.
    Bfs,
    /// Depth-first order.
    Dfs,
}

/// The engine's interaction phase.
///
/// `Dragging` and `PathHighlighted` remember the phase they interrupted
/// so it can be restored; the restore path reconciles a remembered
/// `Simulating` against the actual settle state (the simulation may have
/// finished in the meantime).
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Nothing in flight; layout is settled or static.
    Idle,
    /// The force simulation is running.
    Simulating,
    /// A pointer drag holds `node` pinned.
    Dragging {
        /// The dragged node.
        node: NodeIdx,
        /// Phase to restore on pointer-up (static strategies).
        prior: Box<Phase>,
    },
    /// Traversal playback, one node per animation tick.
    AnimatingTraversal {
        /// Which order is playing.
        kind: TraversalKind,
        /// Nodes visited so far (prefix length of the order).
        cursor: usize,
    },
    /// A shortest path to `selected` is highlighted.
    PathHighlighted {
        /// The toggled node.
        selected: NodeIdx,
        /// Phase to restore when the highlight is cleared.
        prior: Box<Phase>,
    },
}

impl Phase {
    /// Whether a traversal animation is in flight (including one parked
    /// under a drag or a highlight).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self {
            Self::AnimatingTraversal { .. } => true,
            Self::Dragging { prior, .. } | Self::PathHighlighted { prior, .. } => {
                prior.is_animating()
            }
            Self::Idle | Self::Simulating => false,
        }
    }

    /// Whether a drag is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Rejected interaction commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The command named a node that is not in the graph.
    #[error(transparent)]
    UnknownNode(#[from] UnknownNode),
    /// A traversal animation is already running; re-entrant requests are
    /// rejected, not queued.
    #[error("a traversal animation is already in progress")]
    AnimationInProgress,
    /// Animations cannot start while a drag is in flight.
    #[error("a drag is in progress")]
    DragInProgress,
    /// `update_drag`/`end_drag` without a matching `begin_drag`.
    #[error("no drag is active for node {0}")]
    NoActiveDrag(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_is_visible_through_a_drag() {
        let phase = Phase::Dragging {
            node: 0,
            prior: Box::new(Phase::AnimatingTraversal {
                kind: TraversalKind::Bfs,
                cursor: 2,
            }),
        };
        assert!(phase.is_animating());
        assert!(phase.is_dragging());
    }

    #[test]
    fn idle_and_simulating_are_quiet() {
        assert!(!Phase::Idle.is_animating());
        assert!(!Phase::Simulating.is_animating());
        assert!(!Phase::Simulating.is_dragging());
    }
}
