//! Directed, weighted adjacency-list graph.
//!
//! Vertices are plain integers and exist implicitly once they appear as an edge endpoint.
//! Adjacency lists keep edge-add order (parallel edges included) while the weight map keeps a
//! single entry per ordered pair, so re-adding a pair overwrites its weight but still appends a
//! second adjacency entry.

pub mod alg;
mod options;

pub use options::GraphOptions;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

pub type Vertex = i64;
pub type Weight = i64;

/// A spanning-forest edge: `(source, destination, weight)`.
pub type WeightedEdge = (Vertex, Vertex, Weight);

#[derive(Debug, Clone, Default)]
pub struct Graph {
    options: GraphOptions,
    adjacency: FxIndexMap<Vertex, Vec<Vertex>>,
    weights: FxIndexMap<(Vertex, Vertex), Weight>,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            adjacency: FxIndexMap::default(),
            weights: FxIndexMap::default(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Adds `source -> destination` with the configured default weight.
    pub fn add_edge(&mut self, source: Vertex, destination: Vertex) -> &mut Self {
        let weight = self.options.default_weight;
        self.add_edge_with_weight(source, destination, weight)
    }

    /// Adds `source -> destination` carrying `weight`.
    ///
    /// Self-loops, negative weights and repeated pairs are all accepted. A repeated pair
    /// appends another adjacency entry and overwrites the stored weight.
    pub fn add_edge_with_weight(
        &mut self,
        source: Vertex,
        destination: Vertex,
        weight: Weight,
    ) -> &mut Self {
        self.adjacency.entry(source).or_default().push(destination);
        self.weights.insert((source, destination), weight);
        self
    }

    /// Outgoing neighbours of `v` in edge-add order. Unknown vertices have none.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn weight(&self, source: Vertex, destination: Vertex) -> Option<Weight> {
        self.weights.get(&(source, destination)).copied()
    }

    /// Vertices with an adjacency entry, in first-insertion order.
    pub fn sources(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every vertex touched by an edge, in first-seen order.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut seen: HashSet<Vertex> = HashSet::default();
        let mut out: Vec<Vertex> = Vec::new();
        for (&v, ws) in &self.adjacency {
            for u in std::iter::once(v).chain(ws.iter().copied()) {
                if seen.insert(u) {
                    out.push(u);
                }
            }
        }
        out
    }

    /// Number of adjacency entries; parallel edges count once each.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Weighted pairs in first-insertion order, one per ordered pair.
    pub fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weights.iter().map(|(&(u, v), &w)| (u, v, w))
    }

    pub fn topological_sort(&self) -> crate::Result<Vec<Vertex>> {
        alg::topological_sort(self)
    }

    pub fn dfs(&self, start: Vertex) -> Vec<Vertex> {
        alg::preorder(self, start)
    }

    pub fn kruskal(&self) -> Vec<WeightedEdge> {
        alg::kruskal(self)
    }
}

impl Extend<WeightedEdge> for Graph {
    fn extend<I: IntoIterator<Item = WeightedEdge>>(&mut self, iter: I) {
        for (u, v, w) in iter {
            self.add_edge_with_weight(u, v, w);
        }
    }
}

impl FromIterator<WeightedEdge> for Graph {
    fn from_iter<I: IntoIterator<Item = WeightedEdge>>(iter: I) -> Self {
        let mut g = Graph::new();
        g.extend(iter);
        g
    }
}
