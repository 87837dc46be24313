//! The engine facade: one instance owning a `Graph` + `LayoutState` pair.
//!
//! # Overview
//!
//! `GraphEngine` is the narrow boundary the (external) rendering and
//! interaction layers talk to. Data flows in as a [`GraphData`] record
//! and out as queries (`positions`, `traversal_orders`,
//! `highlighted_path`, …); pointer and timer events arrive as command
//! methods (`begin_drag`, `select_node`, …). Every call is synchronous
//! and leaves a fully valid, inspectable state.
//!
//! ## Driving the engine
//!
//! The external driver calls [`GraphEngine::tick`] once per animation
//! frame (advancing the force simulation one step) and
//! [`GraphEngine::animation_tick`] once per timer tick (advancing
//! traversal playback one node). The engine never sleeps and never runs
//! its own loop; stopping the calls stops the motion.
//!
//! ## Atomic rebuilds
//!
//! [`GraphEngine::rebuild`] constructs the new graph before touching any
//! state: a validation failure leaves the previous graph, layout, and
//! interaction state fully active. On success all prior state — pins,
//! highlight, in-flight animation, drag — is discarded wholesale.

use std::collections::HashMap;

use biograph_core::{Graph, GraphData, UnknownNode, ValidationError, bfs_order, dfs_order, shortest_path};
use nalgebra::Vector2;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::interact::{CommandError, Phase, TraversalKind};
use crate::layout::{self, LayoutKind, force};
use crate::state::{LayoutState, LayoutWarning, Position};

/// BFS and DFS visit orders, recomputed on every (re)build from the
/// first node in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOrders {
    /// Breadth-first order (always a permutation of the node set).
    pub bfs: Vec<String>,
    /// Depth-first order (always a permutation of the node set).
    pub dfs: Vec<String>,
}

/// The graph analysis and layout engine.
///
/// Exclusively owns its graph and layout state; hold one instance per
/// visualization and pass commands/ticks to it from the host loop.
#[derive(Debug, Clone)]
pub struct GraphEngine {
    graph: Graph,
    config: LayoutConfig,
    strategy: LayoutKind,
    state: LayoutState,
    phase: Phase,
    orders: TraversalOrders,
    highlight: Vec<String>,
    warnings: Vec<LayoutWarning>,
}

impl GraphEngine {
    /// Build an engine from an input record and start the configured
    /// layout strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty node list, duplicate node
    /// ids, or dangling edge endpoints.
    pub fn new(
        data: &GraphData,
        strategy: LayoutKind,
        config: LayoutConfig,
    ) -> Result<Self, ValidationError> {
        let graph = Graph::build(data)?;
        let orders = compute_orders(&graph);
        let state = LayoutState::new(graph.node_count(), config.alpha_initial);
        let mut engine = Self {
            graph,
            config,
            strategy,
            state,
            phase: Phase::Idle,
            orders,
            highlight: Vec::new(),
            warnings: Vec::new(),
        };
        engine.start_strategy();
        Ok(engine)
    }

    /// Replace the graph wholesale. Prior layout state, pins, highlight,
    /// and any in-flight animation or drag are discarded atomically; a
    /// validation failure leaves everything untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] without changing state.
    pub fn rebuild(&mut self, data: &GraphData) -> Result<(), ValidationError> {
        let graph = Graph::build(data)?;
        if self.phase.is_animating() {
            debug!("rebuild cancelled in-flight traversal animation");
        }
        self.orders = compute_orders(&graph);
        self.state = LayoutState::new(graph.node_count(), self.config.alpha_initial);
        self.graph = graph;
        self.highlight.clear();
        self.warnings.clear();
        self.start_strategy();
        Ok(())
    }

    /// Switch the active layout strategy.
    ///
    /// Velocities are discarded, prior positions are reused as the new
    /// starting configuration, and pins survive until the next rebuild.
    /// Any in-flight animation or drag is cancelled; the highlight is
    /// cleared.
    pub fn set_layout_strategy(&mut self, kind: LayoutKind) {
        self.strategy = kind;
        self.highlight.clear();
        self.start_strategy();
    }

    /// Advance the force simulation by one step, if it is running.
    /// Circular and hierarchical layouts are settled on application, so
    /// this is a no-op for them.
    pub fn tick(&mut self) {
        if self.strategy != LayoutKind::ForceDirected || self.state.settled {
            return;
        }
        let warnings = force::step(&self.graph, &self.config, &mut self.state);
        self.warnings.extend(warnings);
        if self.state.settled && self.phase == Phase::Simulating {
            self.phase = Phase::Idle;
        }
    }

    /// Advance traversal playback by one node. Returns true while an
    /// animation remains in flight after this tick.
    ///
    /// The cursor runs all the way to the order length, so the final
    /// node is marked visited like every other; the phase resets on the
    /// tick after that, giving the full order one trailing tick of
    /// visibility.
    pub fn animation_tick(&mut self) -> bool {
        let (kind, cursor) = match &self.phase {
            Phase::AnimatingTraversal { kind, cursor } => (*kind, *cursor),
            _ => return false,
        };
        let len = match kind {
            TraversalKind::Bfs => self.orders.bfs.len(),
            TraversalKind::Dfs => self.orders.dfs.len(),
        };
        if cursor >= len {
            self.phase = self.resume_phase();
            return false;
        }
        self.phase = Phase::AnimatingTraversal {
            kind,
            cursor: cursor + 1,
        };
        true
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Toggle the shortest-path highlight from the traversal start to
    /// `id`. Selecting the already-selected node clears the highlight
    /// and restores the interrupted phase; selecting a node with no path
    /// just clears.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownNode`] when `id` is not in the
    /// graph; no state changes.
    pub fn select_node(&mut self, id: &str) -> Result<(), CommandError> {
        let idx = self.graph.require(id)?;
        if self.phase.is_dragging() {
            return Err(CommandError::DragInProgress);
        }

        if let Phase::PathHighlighted { selected, prior } = &self.phase {
            if *selected == idx {
                // Toggle off.
                let restored = self.reconcile((**prior).clone());
                self.highlight.clear();
                self.phase = restored;
                return Ok(());
            }
        }

        let start = self.graph.first_node_id();
        match shortest_path(&self.graph, start, id)? {
            Some(path) => {
                self.highlight = path;
                let prior = match std::mem::replace(&mut self.phase, Phase::Idle) {
                    // Re-selection keeps the originally interrupted phase.
                    Phase::PathHighlighted { prior, .. } => prior,
                    other => Box::new(other),
                };
                self.phase = Phase::PathHighlighted {
                    selected: idx,
                    prior,
                };
            }
            None => {
                // No path: clear any live highlight, leave other phases
                // (a running animation, the simulation) untouched.
                self.highlight.clear();
                if matches!(self.phase, Phase::PathHighlighted { .. }) {
                    if let Phase::PathHighlighted { prior, .. } =
                        std::mem::replace(&mut self.phase, Phase::Idle)
                    {
                        self.phase = self.reconcile(*prior);
                    }
                }
            }
        }
        Ok(())
    }

    /// Begin dragging `id`: the node is pinned and follows
    /// [`GraphEngine::update_drag`] positions until released.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownNode`] for an unknown id,
    /// [`CommandError::DragInProgress`] if another drag is active.
    pub fn begin_drag(&mut self, id: &str) -> Result<(), CommandError> {
        let idx = self.graph.require(id)?;
        if self.phase.is_dragging() {
            return Err(CommandError::DragInProgress);
        }
        let node = &mut self.state.nodes[idx];
        node.pinned = true;
        node.velocity = Vector2::zeros();
        let prior = Box::new(std::mem::replace(&mut self.phase, Phase::Idle));
        self.phase = Phase::Dragging { node: idx, prior };
        Ok(())
    }

    /// Move the dragged node to the pointer location. Non-finite
    /// coordinates are rejected as a numeric-instability warning rather
    /// than poisoning the layout.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownNode`] for an unknown id,
    /// [`CommandError::NoActiveDrag`] when `id` is not the dragged node.
    pub fn update_drag(&mut self, id: &str, x: f64, y: f64) -> Result<(), CommandError> {
        let idx = self.graph.require(id)?;
        if !matches!(&self.phase, Phase::Dragging { node, .. } if *node == idx) {
            return Err(CommandError::NoActiveDrag(id.to_string()));
        }
        if !(x.is_finite() && y.is_finite()) {
            warn!(node = id, "ignoring non-finite drag position");
            self.warnings.push(LayoutWarning::NumericInstability {
                node: id.to_string(),
            });
            return Ok(());
        }
        let node = &mut self.state.nodes[idx];
        node.position = Vector2::new(x, y);
        node.velocity = Vector2::zeros();
        node.placed = true;
        Ok(())
    }

    /// Release the drag. With the force strategy active the node is
    /// unpinned and the simulation reheated; with a static strategy the
    /// node stays pinned at the dropped location until the next rebuild.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownNode`] for an unknown id,
    /// [`CommandError::NoActiveDrag`] when `id` is not the dragged node.
    pub fn end_drag(&mut self, id: &str) -> Result<(), CommandError> {
        let idx = self.graph.require(id)?;
        let Phase::Dragging { node, prior } = &self.phase else {
            return Err(CommandError::NoActiveDrag(id.to_string()));
        };
        if *node != idx {
            return Err(CommandError::NoActiveDrag(id.to_string()));
        }
        let prior = *prior.clone();

        if self.strategy == LayoutKind::ForceDirected {
            self.state.nodes[idx].pinned = false;
            self.state.reheat(self.config.alpha_reheat);
            // An interrupted animation resumes; otherwise the reheated
            // simulation takes over.
            self.phase = match prior {
                Phase::Idle | Phase::Simulating => Phase::Simulating,
                other => other,
            };
        } else {
            self.phase = self.reconcile(prior);
        }
        Ok(())
    }

    /// Start traversal playback over the BFS or DFS order.
    ///
    /// # Errors
    ///
    /// [`CommandError::AnimationInProgress`] for re-entrant requests
    /// (they are rejected, not queued) and
    /// [`CommandError::DragInProgress`] during a drag.
    pub fn start_traversal_animation(&mut self, kind: TraversalKind) -> Result<(), CommandError> {
        if self.phase.is_animating() {
            return Err(CommandError::AnimationInProgress);
        }
        if self.phase.is_dragging() {
            return Err(CommandError::DragInProgress);
        }
        // A live highlight yields to the animation.
        if matches!(self.phase, Phase::PathHighlighted { .. }) {
            self.highlight.clear();
        }
        self.phase = Phase::AnimatingTraversal { kind, cursor: 0 };
        Ok(())
    }

    /// Cancel any in-flight traversal animation, including one parked
    /// under a drag or highlight. No-op otherwise.
    pub fn cancel_animation(&mut self) {
        let resume = self.resume_phase();
        match &mut self.phase {
            Phase::AnimatingTraversal { .. } => self.phase = resume,
            Phase::Dragging { prior, .. } | Phase::PathHighlighted { prior, .. }
                if prior.is_animating() =>
            {
                **prior = resume;
            }
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Queries (the render adapter contract)
    // -----------------------------------------------------------------------

    /// Current position per node id. Nodes no strategy has placed yet
    /// (hierarchical layout's unreachable nodes) are absent.
    #[must_use]
    pub fn positions(&self) -> HashMap<String, Position> {
        self.graph
            .nodes()
            .iter()
            .zip(&self.state.nodes)
            .filter(|(_, s)| s.placed)
            .map(|(n, s)| {
                (
                    n.id.clone(),
                    Position {
                        x: s.position.x,
                        y: s.position.y,
                    },
                )
            })
            .collect()
    }

    /// BFS and DFS orders from the current graph's first node.
    #[must_use]
    pub const fn traversal_orders(&self) -> &TraversalOrders {
        &self.orders
    }

    /// The highlighted shortest path, empty when nothing is highlighted.
    #[must_use]
    pub fn highlighted_path(&self) -> &[String] {
        &self.highlight
    }

    /// Nodes visited so far by the running traversal animation, in visit
    /// order. Empty when no animation is in flight.
    #[must_use]
    pub fn visited(&self) -> &[String] {
        match animation_progress(&self.phase) {
            Some((TraversalKind::Bfs, cursor)) => &self.orders.bfs[..cursor],
            Some((TraversalKind::Dfs, cursor)) => &self.orders.dfs[..cursor],
            None => &[],
        }
    }

    /// Whether `id` is currently pinned.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownNode`] when `id` is not in the graph.
    pub fn pinned(&self, id: &str) -> Result<bool, UnknownNode> {
        let idx = self.graph.require(id)?;
        Ok(self.state.nodes[idx].pinned)
    }

    /// Whether the active layout has settled.
    #[must_use]
    pub const fn settled(&self) -> bool {
        self.state.settled
    }

    /// Current simulation alpha.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.state.alpha
    }

    /// Current interaction phase.
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The active layout strategy.
    #[must_use]
    pub const fn strategy(&self) -> LayoutKind {
        self.strategy
    }

    /// The owned graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Drain accumulated non-fatal warnings (numeric instability,
    /// disconnected hierarchy nodes).
    pub fn take_warnings(&mut self) -> Vec<LayoutWarning> {
        std::mem::take(&mut self.warnings)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    /// (Re)start the active strategy and reset the interaction phase.
    fn start_strategy(&mut self) {
        let warnings =
            layout::initialize(self.strategy, &self.graph, &self.config, &mut self.state);
        self.warnings.extend(warnings);
        self.phase = self.resume_phase();
    }

    /// The quiescent phase for the current strategy and settle state.
    fn resume_phase(&self) -> Phase {
        if self.strategy == LayoutKind::ForceDirected && !self.state.settled {
            Phase::Simulating
        } else {
            Phase::Idle
        }
    }

    /// Restore an interrupted phase, degrading a remembered `Simulating`
    /// to `Idle` when the simulation finished in the meantime.
    fn reconcile(&self, prior: Phase) -> Phase {
        match prior {
            Phase::Idle | Phase::Simulating => self.resume_phase(),
            other => other,
        }
    }
}

/// Traversal progress, looking through a drag or highlight.
fn animation_progress(phase: &Phase) -> Option<(TraversalKind, usize)> {
    match phase {
        Phase::AnimatingTraversal { kind, cursor } => Some((*kind, *cursor)),
        Phase::Dragging { prior, .. } | Phase::PathHighlighted { prior, .. } => {
            animation_progress(prior)
        }
        Phase::Idle | Phase::Simulating => None,
    }
}

/// Orders from the first node; infallible because construction rejects
/// empty graphs.
fn compute_orders(graph: &Graph) -> TraversalOrders {
    let start = graph.first_node_id();
    TraversalOrders {
        bfs: bfs_order(graph, start).unwrap_or_default(),
        dfs: dfs_order(graph, start).unwrap_or_default(),
    }
}
