//! Traversal engine: BFS and DFS orders plus unweighted shortest paths.
//!
//! # Determinism
//!
//! Neighbors are visited in adjacency-index order, i.e. the order edges
//! were supplied. Identical input therefore yields identical output, and
//! shortest-path ties break to the first-discovered path.
//!
//! # Unreachable nodes
//!
//! Both order functions append unreachable nodes in insertion order after
//! all reachable nodes are exhausted, so the output is always a
//! permutation of the node set. Downstream sidebar rendering (and the
//! animation cursor) rely on the order length equalling the node count.

use std::collections::VecDeque;

use crate::error::UnknownNode;
use crate::graph::{Graph, NodeIdx};

/// Breadth-first visit order from `start`.
///
/// # Errors
///
/// Returns [`UnknownNode`] when `start` is not in the graph. Disconnected
/// and single-node graphs are fine.
pub fn bfs_order(graph: &Graph, start: &str) -> Result<Vec<String>, UnknownNode> {
    let root = graph.require(start)?;

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::with_capacity(graph.node_count());
    let mut queue = VecDeque::new();

    visited[root] = true;
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    append_unreachable(graph, &mut visited, &mut order);
    Ok(to_ids(graph, &order))
}

/// Pre-order depth-first visit order from `start`.
///
/// Iterative with an explicit stack; neighbors are pushed in reverse so
/// the first-supplied edge is explored first, matching the recursive
/// formulation.
///
/// # Errors
///
/// Returns [`UnknownNode`] when `start` is not in the graph.
pub fn dfs_order(graph: &Graph, start: &str) -> Result<Vec<String>, UnknownNode> {
    let root = graph.require(start)?;

    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::with_capacity(graph.node_count());
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);
        for &neighbor in graph.neighbors(current).iter().rev() {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }

    append_unreachable(graph, &mut visited, &mut order);
    Ok(to_ids(graph, &order))
}

/// Unweighted (hop-count) shortest path from `a` to `b`.
///
/// Returns `Ok(Some(path))` including both endpoints, `Ok(Some([a]))`
/// when `a == b`, and `Ok(None)` when no path exists. Edge weights are
/// never consulted. Among equal-length paths the first one discovered by
/// BFS wins, which is deterministic for identical input.
///
/// # Errors
///
/// Returns [`UnknownNode`] when either endpoint is not in the graph.
pub fn shortest_path(
    graph: &Graph,
    a: &str,
    b: &str,
) -> Result<Option<Vec<String>>, UnknownNode> {
    let source = graph.require(a)?;
    let target = graph.require(b)?;

    if source == target {
        return Ok(Some(vec![graph.node_id(source).to_string()]));
    }

    let mut prev: Vec<Option<NodeIdx>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    'search: while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                prev[neighbor] = Some(current);
                if neighbor == target {
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }
    }

    if !visited[target] {
        return Ok(None);
    }

    // Walk the predecessor chain back from the target, then reverse.
    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = prev[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    Ok(Some(to_ids(graph, &path)))
}

/// Append every not-yet-visited node in insertion order.
fn append_unreachable(graph: &Graph, visited: &mut [bool], order: &mut Vec<NodeIdx>) {
    for idx in 0..graph.node_count() {
        if !visited[idx] {
            visited[idx] = true;
            order.push(idx);
        }
    }
}

fn to_ids(graph: &Graph, order: &[NodeIdx]) -> Vec<String> {
    order.iter().map(|&i| graph.node_id(i).to_string()).collect()
}
