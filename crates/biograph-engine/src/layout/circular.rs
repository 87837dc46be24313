//! Circular layout: equal angular spacing in node insertion order.
//!
//! Deterministic, O(n), settled in one pass. Pinned nodes keep their
//! dropped position and their circle slot is simply left vacant.

use std::f64::consts::TAU;

use biograph_core::Graph;
use nalgebra::Vector2;

use crate::config::LayoutConfig;
use crate::state::LayoutState;

/// Place every unpinned node on a circle of radius
/// `min(width, height) * radius_fraction` around the viewport center,
/// at angle `TAU / n * index`.
#[allow(clippy::cast_precision_loss)]
pub fn apply(graph: &Graph, config: &LayoutConfig, state: &mut LayoutState) {
    let n = graph.node_count();
    let radius = config.width.min(config.height) * config.radius_fraction;
    let center = config.center();
    let angle_step = TAU / n as f64;

    for (idx, node) in state.nodes.iter_mut().enumerate() {
        if node.pinned {
            continue;
        }
        let angle = angle_step * idx as f64;
        node.position = center + Vector2::new(radius * angle.cos(), radius * angle.sin());
        node.velocity = Vector2::zeros();
        node.placed = true;
    }

    state.settle();
}
