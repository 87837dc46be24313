//! Force-directed layout: iterated spring, charge, and centering forces.
//!
//! # Per-tick pipeline
//!
//! 1. Snapshot all positions (forces read only the previous-tick state,
//!    so partially updated neighbors can never leak into a computation).
//! 2. Accumulate three forces per node: link springs along every edge
//!    occurrence (parallel edges apply independently), O(n^2) pairwise
//!    repulsion below the node-count ceiling, and a centering pull.
//! 3. Integrate unpinned nodes: `v = (v + f * alpha) * damping`,
//!    `p += v`, with a per-component velocity clamp.
//! 4. Decay alpha geometrically; settle when alpha drops below
//!    `alpha_min` or the iteration cap is reached.
//!
//! Pinned nodes contribute forces to their neighbors but their own
//! velocity is clamped to zero and their position never changes.
//!
//! Non-finite forces or coordinates are contained per node: velocity is
//! zeroed, the previous position restored, and a
//! [`LayoutWarning::NumericInstability`] surfaced. A tick never fails.
//!
//! Determinism is not guaranteed here (unseeded nodes scatter randomly,
//! floating-point order matters); the no-NaN and convergence invariants
//! are.

use biograph_core::Graph;
use nalgebra::Vector2;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::state::{LayoutState, LayoutWarning};

/// Distance floor guarding the 1/d^2 repulsion term.
const MIN_DISTANCE_SQUARED: f64 = 0.01;

/// Weight floor for the link rest length (`link_distance / weight`).
const MIN_WEIGHT: f64 = 1e-3;

/// Scatter every unplaced node uniformly over the viewport so the first
/// tick has finite pairwise distances to work with.
pub fn seed(graph: &Graph, config: &LayoutConfig, state: &mut LayoutState) {
    let mut rng = rand::thread_rng();
    for idx in 0..graph.node_count() {
        let node = &mut state.nodes[idx];
        if node.placed {
            continue;
        }
        node.position = Vector2::new(
            rng.gen_range(0.0..config.width),
            rng.gen_range(0.0..config.height),
        );
        node.velocity = Vector2::zeros();
        node.placed = true;
    }
}

/// Advance the simulation by one tick.
///
/// No-op once settled. Returns the numeric-instability warnings raised
/// during this tick (usually none).
pub fn step(graph: &Graph, config: &LayoutConfig, state: &mut LayoutState) -> Vec<LayoutWarning> {
    if state.settled {
        return Vec::new();
    }

    let positions: Vec<Vector2<f64>> = state.nodes.iter().map(|n| n.position).collect();
    let mut forces = vec![Vector2::zeros(); positions.len()];

    accumulate_link_forces(graph, config, &positions, &mut forces);
    if positions.len() <= config.repulsion_node_ceiling {
        accumulate_repulsion(config, &positions, &mut forces);
    }
    accumulate_centering(config, &positions, &mut forces);

    let warnings = integrate(graph, config, state, &forces);

    state.alpha *= 1.0 - config.alpha_decay;
    state.iterations += 1;
    if state.alpha < config.alpha_min || state.iterations >= config.max_iterations {
        state.settled = true;
        debug!(
            iterations = state.iterations,
            alpha = state.alpha,
            "force simulation settled"
        );
    }

    warnings
}

/// Spring force per edge occurrence, rest length `link_distance / weight`.
fn accumulate_link_forces(
    graph: &Graph,
    config: &LayoutConfig,
    positions: &[Vector2<f64>],
    forces: &mut [Vector2<f64>],
) {
    for edge in graph.edges() {
        let delta = positions[edge.target] - positions[edge.source];
        let distance = delta.norm();
        if distance < f64::EPSILON {
            // Coincident endpoints (including self-loops) exert no spring
            // direction; repulsion separates coincident distinct nodes.
            continue;
        }
        let rest = config.link_distance / edge.weight.max(MIN_WEIGHT);
        let magnitude = config.spring_strength * (distance - rest);
        let pull = delta / distance * magnitude;
        forces[edge.source] += pull;
        forces[edge.target] -= pull;
    }
}

/// All-pairs charge repulsion, `charge / d^2` with a distance floor.
fn accumulate_repulsion(
    config: &LayoutConfig,
    positions: &[Vector2<f64>],
    forces: &mut [Vector2<f64>],
) {
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let delta = positions[j] - positions[i];
            let d2 = delta.norm_squared().max(MIN_DISTANCE_SQUARED);
            let direction = if delta.norm_squared() < f64::EPSILON {
                // Coincident pair: push apart along a fixed axis.
                Vector2::new(1.0, 0.0)
            } else {
                delta / d2.sqrt()
            };
            let push = direction * (config.charge_strength / d2);
            forces[i] -= push;
            forces[j] += push;
        }
    }
}

fn accumulate_centering(
    config: &LayoutConfig,
    positions: &[Vector2<f64>],
    forces: &mut [Vector2<f64>],
) {
    let center = config.center();
    for (position, force) in positions.iter().zip(forces.iter_mut()) {
        *force += (center - position) * config.center_strength;
    }
}

/// Apply accumulated forces, containing any non-finite results.
fn integrate(
    graph: &Graph,
    config: &LayoutConfig,
    state: &mut LayoutState,
    forces: &[Vector2<f64>],
) -> Vec<LayoutWarning> {
    let mut warnings = Vec::new();
    let alpha = state.alpha;

    for (idx, node) in state.nodes.iter_mut().enumerate() {
        if !is_finite(node.position) {
            // A non-finite coordinate must never survive a tick; recenter
            // the node and let the next tick place it properly.
            node.position = config.center();
            node.velocity = Vector2::zeros();
            let id = graph.node_id(idx).to_string();
            warn!(node = %id, "non-finite position entering tick; recentered");
            warnings.push(LayoutWarning::NumericInstability { node: id });
            continue;
        }
        if node.pinned {
            node.velocity = Vector2::zeros();
            continue;
        }

        let force = forces[idx];
        if !is_finite(force) {
            node.velocity = Vector2::zeros();
            let id = graph.node_id(idx).to_string();
            warn!(node = %id, "non-finite force; clamping velocity");
            warnings.push(LayoutWarning::NumericInstability { node: id });
            continue;
        }

        let mut velocity = (node.velocity + force * alpha) * config.damping;
        velocity.x = velocity.x.clamp(-config.max_velocity, config.max_velocity);
        velocity.y = velocity.y.clamp(-config.max_velocity, config.max_velocity);

        let next = node.position + velocity;
        if is_finite(next) {
            node.velocity = velocity;
            node.position = next;
        } else {
            node.velocity = Vector2::zeros();
            let id = graph.node_id(idx).to_string();
            warn!(node = %id, "non-finite position; keeping previous");
            warnings.push(LayoutWarning::NumericInstability { node: id });
        }
    }

    warnings
}

fn is_finite(v: Vector2<f64>) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
