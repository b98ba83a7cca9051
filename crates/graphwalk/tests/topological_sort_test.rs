use graphwalk::{Error, Graph, alg};

fn dependency_graph() -> Graph {
    let mut g = Graph::new();
    g.add_edge(5, 2)
        .add_edge(5, 0)
        .add_edge(4, 0)
        .add_edge(4, 1)
        .add_edge(2, 3)
        .add_edge(3, 1);
    g
}

fn position(order: &[i64], v: i64) -> usize {
    order
        .iter()
        .position(|&x| x == v)
        .unwrap_or_else(|| panic!("vertex {v} missing from {order:?}"))
}

#[test]
fn topological_sort_orders_every_edge_forward() {
    let g = dependency_graph();
    let order = g.topological_sort().expect("acyclic");

    assert_eq!(order.len(), 6);
    for (u, v) in [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)] {
        assert!(
            position(&order, u) < position(&order, v),
            "{u} should precede {v} in {order:?}"
        );
    }
    assert!(alg::is_topological_order(&g, &order));
}

#[test]
fn topological_sort_breaks_ties_by_insertion_order() {
    let g = dependency_graph();
    assert_eq!(g.topological_sort(), Ok(vec![4, 5, 0, 2, 3, 1]));
}

#[test]
fn topological_sort_is_repeatable() {
    let g = dependency_graph();
    let first = g.topological_sort();
    let second = g.topological_sort();
    assert_eq!(first, second);
}

#[test]
fn topological_sort_reports_a_simple_cycle() {
    let mut g = Graph::new();
    g.add_edge(1, 2).add_edge(2, 3).add_edge(3, 1);
    assert_eq!(g.topological_sort(), Err(Error::Cycle { vertex: 1 }));
}

#[test]
fn topological_sort_reports_a_self_loop() {
    let mut g = Graph::new();
    g.add_edge(1, 2).add_edge(7, 7);
    assert_eq!(g.topological_sort(), Err(Error::Cycle { vertex: 7 }));
}

#[test]
fn topological_sort_aborts_even_when_other_branches_are_acyclic() {
    let mut g = Graph::new();
    g.add_edge(0, 1).add_edge(0, 2).add_edge(2, 3).add_edge(3, 2);
    let err = g.topological_sort().unwrap_err();
    assert_eq!(err, Error::Cycle { vertex: 2 });
    assert!(err.to_string().contains("graph has a cycle"));
}

#[test]
fn topological_sort_includes_sinks_reached_through_edges() {
    let mut g = Graph::new();
    g.add_edge(1, 2);
    // 2 is never a source, yet it is discovered through 1.
    assert_eq!(g.topological_sort(), Ok(vec![1, 2]));
}

#[test]
fn topological_sort_allows_diamonds_and_parallel_edges() {
    let mut g = Graph::new();
    g.add_edge(0, 1)
        .add_edge(0, 2)
        .add_edge(1, 3)
        .add_edge(2, 3)
        .add_edge(0, 1);
    let order = g.topological_sort().expect("diamond is acyclic");
    assert_eq!(order, vec![0, 2, 1, 3]);
    assert!(alg::is_topological_order(&g, &order));
}

#[test]
fn topological_sort_of_an_empty_graph_is_empty() {
    assert_eq!(Graph::new().topological_sort(), Ok(Vec::new()));
}

#[test]
fn topological_sort_handles_long_chains_without_recursion() {
    let mut g = Graph::new();
    for v in 0..200_000 {
        g.add_edge(v, v + 1);
    }
    let order = g.topological_sort().expect("chain is acyclic");
    assert_eq!(order.len(), 200_001);
    assert_eq!(order.first(), Some(&0));
    assert_eq!(order.last(), Some(&200_000));
}

#[test]
fn is_topological_order_rejects_reversed_edges() {
    let g = dependency_graph();
    assert!(!alg::is_topological_order(&g, &[1, 3, 2, 0, 4, 5]));
    assert!(!alg::is_topological_order(&g, &[5, 4, 2, 3]));
}
