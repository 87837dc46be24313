//! Hierarchical layout: BFS-level bands from the first node.
//!
//! Each node reachable from the root gets a level equal to its BFS depth;
//! a level's band sits at `y = height / (max_level + 1) * (level + 1)` and
//! nodes within the band are spaced evenly. Unreachable nodes receive no
//! coordinates and are surfaced as a [`LayoutWarning::DisconnectedNodes`]
//! rather than silently dropped. O(n + e), settled in one pass.

use std::collections::VecDeque;

use biograph_core::Graph;
use nalgebra::Vector2;
use tracing::warn;

use crate::config::LayoutConfig;
use crate::state::{LayoutState, LayoutWarning};

/// Assign level-band positions; returns at most one warning listing the
/// unreachable nodes.
#[allow(clippy::cast_precision_loss)]
pub fn apply(graph: &Graph, config: &LayoutConfig, state: &mut LayoutState) -> Vec<LayoutWarning> {
    // BFS depth per node, levels grouped in discovery order.
    let mut level_of: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut levels: Vec<Vec<usize>> = Vec::new();
    let mut queue = VecDeque::new();

    level_of[0] = Some(0);
    queue.push_back(0);

    while let Some(current) = queue.pop_front() {
        let level = level_of[current].unwrap_or(0);
        if levels.len() <= level {
            levels.push(Vec::new());
        }
        levels[level].push(current);

        for &neighbor in graph.neighbors(current) {
            if level_of[neighbor].is_none() {
                level_of[neighbor] = Some(level + 1);
                queue.push_back(neighbor);
            }
        }
    }

    let max_level = levels.len().saturating_sub(1);
    for (level, members) in levels.iter().enumerate() {
        let y = config.height / (max_level + 1) as f64 * (level + 1) as f64;
        for (slot, &idx) in members.iter().enumerate() {
            let node = &mut state.nodes[idx];
            if node.pinned {
                continue;
            }
            let x = config.width / (members.len() + 1) as f64 * (slot + 1) as f64;
            node.position = Vector2::new(x, y);
            node.velocity = Vector2::zeros();
            node.placed = true;
        }
    }

    state.settle();

    let unreachable: Vec<String> = graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|&(idx, _)| level_of[idx].is_none())
        .map(|(_, node)| node.id.clone())
        .collect();

    if unreachable.is_empty() {
        Vec::new()
    } else {
        warn!(count = unreachable.len(), "hierarchical layout left nodes unplaced");
        vec![LayoutWarning::DisconnectedNodes { nodes: unreachable }]
    }
}
