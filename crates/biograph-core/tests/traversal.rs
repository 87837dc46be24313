//! Known-topology regression tests for traversal and shortest paths.
//!
//! Each test uses a hand-crafted graph with known properties. Expected
//! orders are derived by hand from the adjacency-order contract, making
//! these true regression tests — any change to visitation order will be
//! caught.

use biograph_core::input::{EdgeRecord, GraphData, NodeRecord};
use biograph_core::metrics::degree_centrality;
use biograph_core::{Graph, bfs_order, dfs_order, shortest_path};

// ---------------------------------------------------------------------------
// Helper: build Graph from node and edge lists
// ---------------------------------------------------------------------------

fn build_graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let data = GraphData {
        nodes: nodes
            .iter()
            .map(|id| NodeRecord {
                id: (*id).to_string(),
                degree: 0,
                centrality: 0.0,
            })
            .collect(),
        edges: edges
            .iter()
            .map(|(s, t)| EdgeRecord {
                source: (*s).to_string(),
                target: (*t).to_string(),
                weight: 1.0,
            })
            .collect(),
    };
    Graph::build(&data).expect("valid test graph")
}

// ===========================================================================
// Topology 1: the original sample dataset
//
//   A -- B -- E
//   A -- C
//   A -- D
//
// Properties:
//   - BFS from A: [A, B, C, D, E]
//   - DFS from A: [A, B, E, C, D]
//   - shortest A→E: [A, B, E]
// ===========================================================================

#[test]
fn sample_bfs_order() {
    let g = build_graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("A", "D"), ("B", "E")],
    );
    assert_eq!(
        bfs_order(&g, "A").expect("A exists"),
        vec!["A", "B", "C", "D", "E"]
    );
}

#[test]
fn sample_dfs_order() {
    let g = build_graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("A", "D"), ("B", "E")],
    );
    assert_eq!(
        dfs_order(&g, "A").expect("A exists"),
        vec!["A", "B", "E", "C", "D"]
    );
}

#[test]
fn sample_shortest_path_a_to_e() {
    let g = build_graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("A", "D"), ("B", "E")],
    );
    assert_eq!(
        shortest_path(&g, "A", "E").expect("both exist"),
        Some(vec!["A".to_string(), "B".to_string(), "E".to_string()])
    );
}

#[test]
fn sample_degree_centrality_matches_original_normalization() {
    let g = build_graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("A", "D"), ("B", "E")],
    );
    let dc = degree_centrality(&g);
    // n = 5, so the factor is 1/4.
    assert_eq!(dc.degree["A"], 3);
    assert!((dc.centrality["A"] - 0.75).abs() < 1e-12);
    assert_eq!(dc.degree["B"], 2);
    assert!((dc.centrality["B"] - 0.5).abs() < 1e-12);
    assert_eq!(dc.degree["E"], 1);
    assert!((dc.centrality["E"] - 0.25).abs() < 1e-12);
}

// ===========================================================================
// Topology 2: cycle C4 (A -- B -- C -- D -- A)
// ===========================================================================

#[test]
fn cycle_bfs_spreads_both_ways() {
    let g = build_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    );
    // A's neighbors in adjacency order: B (edge 0), D (edge 3).
    assert_eq!(bfs_order(&g, "A").expect("A exists"), vec!["A", "B", "D", "C"]);
}

#[test]
fn cycle_dfs_goes_all_the_way_around() {
    let g = build_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    );
    assert_eq!(dfs_order(&g, "A").expect("A exists"), vec!["A", "B", "C", "D"]);
}

#[test]
fn cycle_opposite_corner_path_is_first_discovered() {
    let g = build_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    );
    // Two 2-hop routes to C; B is discovered before D.
    assert_eq!(
        shortest_path(&g, "A", "C").expect("both exist"),
        Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );
}

// ===========================================================================
// Topology 3: disconnected components and isolated nodes
// ===========================================================================

#[test]
fn disconnected_orders_cover_every_node() {
    let g = build_graph(
        &["A", "B", "X", "Y", "LONER"],
        &[("A", "B"), ("X", "Y")],
    );
    let bfs = bfs_order(&g, "X").expect("X exists");
    assert_eq!(bfs, vec!["X", "Y", "A", "B", "LONER"]);
    assert_eq!(bfs.len(), g.node_count());
}

#[test]
fn no_path_between_components() {
    let g = build_graph(&["A", "B", "X"], &[("A", "B")]);
    assert_eq!(shortest_path(&g, "B", "X").expect("both exist"), None);
    assert_eq!(shortest_path(&g, "X", "B").expect("both exist"), None);
}
