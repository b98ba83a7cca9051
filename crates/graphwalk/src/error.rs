use crate::graph::Vertex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("graph has a cycle (vertex {vertex} revisited while on the DFS stack)")]
    Cycle { vertex: Vertex },
}

pub type Result<T> = std::result::Result<T, Error>;
