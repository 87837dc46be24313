//! Layout state: per-node kinematics plus the global simulation scalars.
//!
//! [`LayoutState`] is owned exclusively by the layout side of the engine.
//! The interaction layer requests pins and position overrides through the
//! engine facade; it never writes velocities directly.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A 2-D position handed to the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate in layout units.
    pub x: f64,
    /// Vertical coordinate in layout units.
    pub y: f64,
}

/// Kinematic state for one node, parallel to the graph's node list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeState {
    /// Current position.
    pub position: Vector2<f64>,
    /// Current velocity (force simulation internal).
    pub velocity: Vector2<f64>,
    /// When true the node is externally fixed: forces are still computed
    /// from it, but integration never moves it.
    pub pinned: bool,
    /// Whether any strategy has assigned this node a coordinate yet.
    /// Hierarchical layout leaves unreachable nodes unplaced.
    pub placed: bool,
}

impl NodeState {
    /// A fresh, unplaced node at the origin.
    #[must_use]
    pub fn unplaced() -> Self {
        Self {
            position: Vector2::zeros(),
            velocity: Vector2::zeros(),
            pinned: false,
            placed: false,
        }
    }
}

/// Non-fatal anomalies surfaced by layout passes. Drained from the
/// engine by the render layer; also logged via `tracing::warn!`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutWarning {
    /// A force or integrated coordinate went non-finite. The node's
    /// velocity was zeroed and its previous position restored.
    #[error("non-finite force on node {node}; velocity clamped to zero")]
    NumericInstability {
        /// Id of the affected node.
        node: String,
    },
    /// Hierarchical layout found nodes unreachable from the root; they
    /// were left at their prior coordinates (or unplaced).
    #[error("{} node(s) unreachable from the hierarchy root", nodes.len())]
    DisconnectedNodes {
        /// Ids of the unreachable nodes, in insertion order.
        nodes: Vec<String>,
    },
}

/// Per-node kinematics plus the decaying alpha and settle indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    /// One entry per graph node, in node insertion order.
    pub nodes: Vec<NodeState>,
    /// Simulated-annealing temperature for the force strategy.
    pub alpha: f64,
    /// Force ticks taken since the last restart.
    pub iterations: usize,
    /// True once alpha fell below threshold or the iteration cap was hit.
    /// Circular and hierarchical layouts are settled immediately.
    pub settled: bool,
}

impl LayoutState {
    /// Fresh state for `node_count` nodes, unsettled, at full alpha.
    #[must_use]
    pub fn new(node_count: usize, alpha_initial: f64) -> Self {
        Self {
            nodes: vec![NodeState::unplaced(); node_count],
            alpha: alpha_initial,
            iterations: 0,
            settled: false,
        }
    }

    /// Total kinetic energy (sum of squared speeds). Used by tests and
    /// by callers that display convergence progress.
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        self.nodes.iter().map(|n| n.velocity.norm_squared()).sum()
    }

    /// Raise alpha to resume motion (drag release), clearing the settled
    /// flag and the iteration count.
    pub fn reheat(&mut self, alpha: f64) {
        self.alpha = self.alpha.max(alpha);
        self.iterations = 0;
        self.settled = false;
    }

    /// Discard all velocities, keeping positions. Strategy switches call
    /// this so the new strategy starts from the prior geometry at rest.
    pub fn discard_velocities(&mut self) {
        for node in &mut self.nodes {
            node.velocity = Vector2::zeros();
        }
    }

    /// Mark the layout settled and quench alpha (static strategies).
    pub fn settle(&mut self) {
        self.alpha = 0.0;
        self.settled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_unsettled_and_still() {
        let state = LayoutState::new(3, 1.0);
        assert!(!state.settled);
        assert!(state.kinetic_energy().abs() < f64::EPSILON);
        assert!(state.nodes.iter().all(|n| !n.placed && !n.pinned));
    }

    #[test]
    fn reheat_clears_settled_and_raises_alpha() {
        let mut state = LayoutState::new(1, 1.0);
        state.settle();
        state.reheat(0.3);
        assert!(!state.settled);
        assert!((state.alpha - 0.3).abs() < f64::EPSILON);
        assert_eq!(state.iterations, 0);
    }

    #[test]
    fn reheat_never_lowers_alpha() {
        let mut state = LayoutState::new(1, 1.0);
        state.alpha = 0.8;
        state.reheat(0.3);
        assert!((state.alpha - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn kinetic_energy_sums_squared_speeds() {
        let mut state = LayoutState::new(2, 1.0);
        state.nodes[0].velocity = Vector2::new(3.0, 4.0);
        state.nodes[1].velocity = Vector2::new(1.0, 0.0);
        assert!((state.kinetic_energy() - 26.0).abs() < 1e-12);
    }
}
