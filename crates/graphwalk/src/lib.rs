#![forbid(unsafe_code)]

//! Directed, weighted adjacency-list graph with three classical algorithms:
//!
//! - [`Graph::topological_sort`]: three-colour depth-first ordering that fails on cycles,
//! - [`Graph::dfs`]: pre-order depth-first traversal,
//! - [`Graph::kruskal`]: minimum spanning forest over a lazily built [`DisjointSet`].
//!
//! All algorithms are deterministic: ties are broken by edge-add order (traversals) or by
//! `(weight, source, destination)` (spanning forest).

pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod scenario;

pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use graph::{Graph, GraphOptions, Vertex, Weight, WeightedEdge, alg};
