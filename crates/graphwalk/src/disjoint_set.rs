//! Disjoint-set forest with union by rank and path compression.
//!
//! Membership is lazy: a vertex joins the structure as a singleton the first time it is passed
//! to [`DisjointSet::find`], so vertices never looked up never appear in `parent` or `rank`.

use crate::graph::Vertex;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: HashMap<Vertex, Vertex>,
    rank: HashMap<Vertex, u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the representative of `v`'s set, registering `v` if it is new.
    ///
    /// Every vertex on the walked path is re-pointed directly at the root.
    pub fn find(&mut self, v: Vertex) -> Vertex {
        if !self.parent.contains_key(&v) {
            self.parent.insert(v, v);
            self.rank.insert(v, 0);
            return v;
        }

        let mut root = v;
        while let Some(&p) = self.parent.get(&root) {
            if p == root {
                break;
            }
            root = p;
        }

        let mut cur = v;
        while cur != root {
            let Some(next) = self.parent.insert(cur, root) else {
                debug_assert!(false, "disjoint-set parent missing on compressed path");
                break;
            };
            cur = next;
        }
        root
    }

    /// Merges the sets containing `u` and `v`. Returns `false` when they already shared one.
    pub fn union(&mut self, u: Vertex, v: Vertex) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        let rank_u = self.rank_of(ru);
        let rank_v = self.rank_of(rv);
        match rank_u.cmp(&rank_v) {
            std::cmp::Ordering::Less => {
                self.parent.insert(ru, rv);
            }
            std::cmp::Ordering::Greater => {
                self.parent.insert(rv, ru);
            }
            std::cmp::Ordering::Equal => {
                self.parent.insert(rv, ru);
                self.rank.insert(ru, rank_u + 1);
            }
        }
        true
    }

    pub fn connected(&mut self, u: Vertex, v: Vertex) -> bool {
        self.find(u) == self.find(v)
    }

    /// Whether `v` has been registered by a previous `find`.
    pub fn contains(&self, v: Vertex) -> bool {
        self.parent.contains_key(&v)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn rank_of(&self, v: Vertex) -> u32 {
        self.rank.get(&v).copied().unwrap_or(0)
    }

    /// Direct parent pointer of `v`, without compression.
    pub fn parent_of(&self, v: Vertex) -> Option<Vertex> {
        self.parent.get(&v).copied()
    }
}
