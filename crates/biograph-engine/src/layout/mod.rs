//! Layout strategies: circular, hierarchical, and force-directed.
//!
//! # Overview
//!
//! The three strategies form a closed set dispatched by match on
//! [`LayoutKind`] — never trait objects. Circular and hierarchical are
//! one-shot placements that settle immediately; force-directed is an
//! iterated simulation advanced one [`force::step`] per driver tick.
//!
//! Switching strategy discards velocities but reuses prior positions as
//! the new starting configuration ([`initialize`]).

pub mod circular;
pub mod force;
pub mod hierarchical;

use serde::{Deserialize, Serialize};

use biograph_core::Graph;

use crate::config::LayoutConfig;
use crate::state::{LayoutState, LayoutWarning};

/// The closed set of layout strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Equal angular spacing on a circle, node insertion order.
    Circular,
    /// BFS-level bands from the first node.
    Hierarchical,
    /// Iterated spring/charge/centering simulation.
    ForceDirected,
}

/// (Re)start the given strategy over `state`.
///
/// Prior positions survive as the starting configuration; velocities are
/// discarded. Static strategies place nodes and settle in one pass; the
/// force strategy scatters any unplaced nodes and leaves the state hot
/// for subsequent [`force::step`] calls.
pub fn initialize(
    kind: LayoutKind,
    graph: &Graph,
    config: &LayoutConfig,
    state: &mut LayoutState,
) -> Vec<LayoutWarning> {
    state.discard_velocities();
    match kind {
        LayoutKind::Circular => {
            circular::apply(graph, config, state);
            Vec::new()
        }
        LayoutKind::Hierarchical => hierarchical::apply(graph, config, state),
        LayoutKind::ForceDirected => {
            force::seed(graph, config, state);
            state.alpha = config.alpha_initial;
            state.iterations = 0;
            state.settled = false;
            Vec::new()
        }
    }
}
