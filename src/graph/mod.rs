pub use common::*;
pub use edge_list::Graph;
pub use graph_dense_matrix::{slot_pairs, AdjacencyMatrix};

pub mod algo;
pub mod combination;
mod common;
mod edge_list;
pub mod generate;
mod graph_dense_matrix;

pub trait IntoWeightedEdge<E> {
    type NodeId;

    fn into_weighted_edge(self) -> (Self::NodeId, Self::NodeId, E);
}

impl<N, E> IntoWeightedEdge<E> for (N, N, E) {
    type NodeId = N;

    fn into_weighted_edge(self) -> (Self::NodeId, Self::NodeId, E) {
        self
    }
}

impl<E> IntoWeightedEdge<E> for WeightedEdge<E> {
    type NodeId = usize;

    fn into_weighted_edge(self) -> (Self::NodeId, Self::NodeId, E) {
        let (u, v) = self.endpoints();
        (u, v, self.into_weight())
    }
}
