use graphwalk::{Graph, alg};

fn weighted_graph() -> Graph {
    [
        (0, 1, 4),
        (0, 2, 4),
        (1, 2, 2),
        (1, 3, 3),
        (2, 3, 1),
        (2, 4, 5),
        (3, 4, 7),
    ]
    .into_iter()
    .collect()
}

#[test]
fn kruskal_returns_edges_in_acceptance_order() {
    let g = weighted_graph();
    let forest = g.kruskal();
    assert_eq!(forest, vec![(2, 3, 1), (1, 2, 2), (0, 1, 4), (2, 4, 5)]);
    assert_eq!(alg::total_weight(&forest), 12);
}

#[test]
fn kruskal_spans_every_touched_vertex() {
    let g = weighted_graph();
    let forest = g.kruskal();
    // One component over five vertices.
    assert_eq!(forest.len(), g.vertices().len() - 1);
}

#[test]
fn kruskal_on_an_empty_graph_is_empty() {
    assert!(Graph::new().kruskal().is_empty());
}

#[test]
fn kruskal_builds_a_forest_for_disconnected_graphs() {
    let g: Graph = [(0, 1, 3), (1, 2, 1), (0, 2, 2), (10, 11, 5), (11, 12, 5), (10, 12, 1)]
        .into_iter()
        .collect();
    let forest = g.kruskal();
    assert_eq!(forest, vec![(1, 2, 1), (10, 12, 1), (0, 2, 2), (10, 11, 5)]);
    // 6 vertices, 2 components.
    assert_eq!(forest.len(), 6 - 2);
    assert_eq!(alg::total_weight(&forest), 9);
}

#[test]
fn kruskal_breaks_weight_ties_by_source_then_destination() {
    let g: Graph = [(3, 4, 1), (1, 4, 1), (1, 2, 1), (2, 4, 1)]
        .into_iter()
        .collect();
    assert_eq!(g.kruskal(), vec![(1, 2, 1), (1, 4, 1), (3, 4, 1)]);
}

#[test]
fn kruskal_rejects_self_loops() {
    let mut g = Graph::new();
    g.add_edge_with_weight(0, 0, -10).add_edge_with_weight(0, 1, 2);
    assert_eq!(g.kruskal(), vec![(0, 1, 2)]);
}

#[test]
fn kruskal_treats_opposite_directions_as_one_connection() {
    let mut g = Graph::new();
    g.add_edge_with_weight(0, 1, 5).add_edge_with_weight(1, 0, 2);
    assert_eq!(g.kruskal(), vec![(1, 0, 2)]);
}

#[test]
fn kruskal_accepts_negative_weights() {
    let g: Graph = [(0, 1, -3), (1, 2, 4), (0, 2, -1)].into_iter().collect();
    assert_eq!(g.kruskal(), vec![(0, 1, -3), (0, 2, -1)]);
}

#[test]
fn kruskal_is_repeatable() {
    let g = weighted_graph();
    assert_eq!(g.kruskal(), g.kruskal());
}
