//! Self-contained demonstration scenarios.
//!
//! Each scenario builds its own graph, runs one algorithm and reports the computed result
//! next to the expected one. Nothing is printed here; `graphwalk-cli` owns the output.

use crate::graph::{Graph, Vertex, WeightedEdge, alg};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Order(Vec<Vertex>),
    Edges(Vec<WeightedEdge>),
    Failed(String),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Order(vs) => write!(f, "{vs:?}"),
            Outcome::Edges(es) => write!(f, "{es:?}"),
            Outcome::Failed(msg) => write!(f, "error: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub description: &'static str,
    pub expected: Outcome,
    pub actual: Outcome,
    pub passed: bool,
}

pub const NAMES: [&str; 3] = ["topo", "dfs", "kruskal"];

pub fn by_name(name: &str) -> Option<ScenarioReport> {
    match name {
        "topo" => Some(topological_sort()),
        "dfs" => Some(dfs()),
        "kruskal" => Some(kruskal()),
        _ => None,
    }
}

pub fn all() -> Vec<ScenarioReport> {
    vec![topological_sort(), dfs(), kruskal()]
}

/// Dependency graph with several valid orders; passes on any of them.
pub fn topological_sort() -> ScenarioReport {
    let mut g = Graph::new();
    g.add_edge(5, 2)
        .add_edge(5, 0)
        .add_edge(4, 0)
        .add_edge(4, 1)
        .add_edge(2, 3)
        .add_edge(3, 1);

    let (actual, passed) = match g.topological_sort() {
        Ok(order) => {
            let passed = alg::is_topological_order(&g, &order);
            (Outcome::Order(order), passed)
        }
        Err(err) => (Outcome::Failed(err.to_string()), false),
    };

    ScenarioReport {
        name: "topo",
        description: "topological sort of 5->2, 5->0, 4->0, 4->1, 2->3, 3->1 (any valid order)",
        expected: Outcome::Order(vec![4, 5, 0, 2, 3, 1]),
        actual,
        passed,
    }
}

pub fn dfs() -> ScenarioReport {
    let mut g = Graph::new();
    g.add_edge(0, 1)
        .add_edge(0, 2)
        .add_edge(1, 3)
        .add_edge(1, 4)
        .add_edge(2, 5);

    let expected = vec![0, 1, 3, 4, 2, 5];
    let actual = g.dfs(0);
    let passed = actual == expected;

    ScenarioReport {
        name: "dfs",
        description: "depth-first walk from 0 over 0->1, 0->2, 1->3, 1->4, 2->5",
        expected: Outcome::Order(expected),
        actual: Outcome::Order(actual),
        passed,
    }
}

pub fn kruskal() -> ScenarioReport {
    let g: Graph = [
        (0, 1, 4),
        (0, 2, 4),
        (1, 2, 2),
        (1, 3, 3),
        (2, 3, 1),
        (2, 4, 5),
        (3, 4, 7),
    ]
    .into_iter()
    .collect();

    let expected: Vec<WeightedEdge> = vec![(2, 3, 1), (1, 2, 2), (0, 1, 4), (2, 4, 5)];
    let actual = g.kruskal();
    let passed = actual == expected;

    ScenarioReport {
        name: "kruskal",
        description: "minimum spanning forest of a 5-vertex weighted graph (total weight 12)",
        expected: Outcome::Edges(expected),
        actual: Outcome::Edges(actual),
        passed,
    }
}
