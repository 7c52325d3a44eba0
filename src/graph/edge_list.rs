use std::fmt;

use super::{algo::Measure, fmt_edge_list, IntoWeightedEdge, WeightedEdge};
use crate::error::{GraphError, Result};

/// An undirected weighted graph stored as a flat edge list.
///
/// The vertex count is kept next to the edges because isolated vertices have
/// no edge to be recovered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<W = i64> {
    vertex_count: usize,
    edges: Vec<WeightedEdge<W>>,
}

impl<W: Measure> Graph<W> {
    /// Build a graph from the rows of a symmetric weight matrix.
    ///
    /// Only the half where row >= column is read, in row-major order, so each
    /// undirected edge is stored once as `(column, row, w)`. The other half is
    /// ignored, as are zero weights. Rows and columns past `vertex_count` are
    /// never consumed.
    pub fn from_matrix<R, I>(vertex_count: usize, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = W>,
    {
        let zero = W::default();
        let mut edges = Vec::new();
        for (row, weights) in rows.into_iter().take(vertex_count).enumerate() {
            for (column, w) in weights.into_iter().take(row + 1).enumerate() {
                if w != zero {
                    edges.push(WeightedEdge::new(column, row, w));
                }
            }
        }

        Self {
            vertex_count,
            edges,
        }
    }

    /// Build a graph from an edge list, keeping the given order.
    /// Zero-weight edges are dropped the same way matrix zeros are.
    pub fn from_edges<I>(vertex_count: usize, iterable: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoWeightedEdge<W, NodeId = usize>,
    {
        let zero = W::default();
        let mut edges = Vec::new();
        for item in iterable {
            let (u, v, w) = item.into_weighted_edge();
            if let Some(vertex) = [u, v].into_iter().find(|&n| n >= vertex_count) {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
            if w != zero {
                edges.push(WeightedEdge::new(u, v, w));
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }
}

impl<W> Graph<W> {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_weight(&self) -> W
    where
        W: Measure,
    {
        self.edges
            .iter()
            .fold(W::default(), |acc, edge| acc + edge.weight())
    }
}

impl<W: fmt::Display> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_edge_list(&self.edges, f)
    }
}
