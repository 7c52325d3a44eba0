//! Error types shared by every graph operation in the crate.

use thiserror::Error;

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// Combinations of `m` out of `n` need `n > m >= 1`.
    #[error("cannot choose {m} of {n} items: expected n > m >= 1")]
    InvalidCombinationSize { n: usize, m: usize },

    /// Asked for zero edges, or more edges than there are slots.
    #[error("cannot place {edge_count} edges: expected between 1 and {max_edges}")]
    DegenerateCombinationRequest { edge_count: usize, max_edges: usize },

    #[error("vertex count {vertex_count} is below the minimum of {min}")]
    VertexCountTooSmall { vertex_count: usize, min: usize },

    /// The edge slots of this many vertices do not fit in a `usize`.
    #[error("vertex count {vertex_count} has more edge slots than fit in a usize")]
    VertexCountTooLarge { vertex_count: usize },

    /// Prim's search found no boundary edge before the tree spanned every vertex.
    #[error("graph is disconnected: spanning tree stalled at {tree_edges} edges for {vertex_count} vertices")]
    DisconnectedGraph {
        tree_edges: usize,
        vertex_count: usize,
    },

    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
