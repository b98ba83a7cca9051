//! Traversal and spanning-forest algorithms over [`Graph`].
//!
//! Both depth-first walks use an explicit frame stack instead of call-stack recursion. Each
//! frame remembers the index of the next neighbour to consider, which reproduces the visit
//! order of the recursive formulation exactly.

use super::{Graph, Vertex, Weight, WeightedEdge};
use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Finished,
}

/// Orders vertices so that every edge leaving an adjacency key points forward.
///
/// Top-level walks start from adjacency keys in insertion order. Reaching a vertex that is
/// still on the walk stack aborts the whole sort with [`Error::Cycle`].
pub fn topological_sort(g: &Graph) -> Result<Vec<Vertex>> {
    let mut marks: HashMap<Vertex, Mark> = HashMap::default();
    let mut finished: Vec<Vertex> = Vec::new();
    let mut stack: Vec<(Vertex, usize)> = Vec::new();

    for root in g.sources() {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root, Mark::InProgress);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            let Some(&w) = g.neighbors(v).get(next) else {
                stack.pop();
                marks.insert(v, Mark::Finished);
                finished.push(v);
                continue;
            };
            frame.1 += 1;

            match marks.get(&w) {
                Some(Mark::InProgress) => {
                    tracing::debug!(
                        vertex = w,
                        from = v,
                        "cycle detected during topological sort"
                    );
                    return Err(Error::Cycle { vertex: w });
                }
                Some(Mark::Finished) => {}
                None => {
                    marks.insert(w, Mark::InProgress);
                    stack.push((w, 0));
                }
            }
        }
    }

    finished.reverse();
    tracing::debug!(vertices = finished.len(), "topological sort complete");
    Ok(finished)
}

/// Pre-order depth-first walk from `start`, following neighbours in edge-add order.
///
/// Cycles are harmless here: a neighbour already visited is skipped.
pub fn preorder(g: &Graph, start: Vertex) -> Vec<Vertex> {
    let mut visited: HashSet<Vertex> = HashSet::default();
    let mut out: Vec<Vertex> = Vec::new();
    let mut stack: Vec<(Vertex, usize)> = Vec::new();

    visited.insert(start);
    out.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (v, next) = *frame;
        let Some(&w) = g.neighbors(v).get(next) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;
        if visited.insert(w) {
            out.push(w);
            stack.push((w, 0));
        }
    }

    tracing::debug!(start, visited = out.len(), "depth-first walk complete");
    out
}

/// Minimum spanning forest by Kruskal's algorithm.
///
/// Candidates are the weighted pairs (one per ordered pair, final weight), sorted by
/// `(weight, source, destination)`. Accepted edges are returned in that order.
pub fn kruskal(g: &Graph) -> Vec<WeightedEdge> {
    let mut candidates: Vec<(Weight, Vertex, Vertex)> =
        g.weighted_edges().map(|(u, v, w)| (w, u, v)).collect();
    candidates.sort_unstable();

    let mut sets = DisjointSet::new();
    let mut forest: Vec<WeightedEdge> = Vec::new();
    for (w, u, v) in candidates {
        if sets.find(u) != sets.find(v) {
            sets.union(u, v);
            tracing::trace!(u, v, weight = w, "spanning edge accepted");
            forest.push((u, v, w));
        } else {
            tracing::trace!(u, v, weight = w, "spanning edge rejected");
        }
    }

    tracing::debug!(
        edges = forest.len(),
        vertices = sets.len(),
        "spanning forest complete"
    );
    forest
}

pub fn total_weight(edges: &[WeightedEdge]) -> Weight {
    edges.iter().map(|&(_, _, w)| w).sum()
}

/// Whether `order` places every source of an edge before its destination.
///
/// Only edges leaving adjacency keys are checked; vertices missing from `order` fail the check
/// when they take part in such an edge.
pub fn is_topological_order(g: &Graph, order: &[Vertex]) -> bool {
    let position: HashMap<Vertex, usize> =
        order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    g.sources().all(|u| {
        g.neighbors(u)
            .iter()
            .all(|w| match (position.get(&u), position.get(w)) {
                (Some(pu), Some(pw)) => pu < pw,
                _ => false,
            })
    })
}
