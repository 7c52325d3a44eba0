//! Exhaustive generation of labeled simple graphs as adjacency matrices.
//!
//! Every possible edge of the complete graph on `v` vertices is a slot (see
//! [`slot_pairs`](super::slot_pairs)), and every
//! `e`-subset of the slots produced by [`Combinations`] becomes one graph.

use std::iter::FusedIterator;

use tracing::{debug, info};

use super::{combination::Combinations, AdjacencyMatrix};
use crate::error::{GraphError, Result};

/// the triangle number of k, `k (k + 1) / 2`.
/// `triangle_number(v - 1)` is the number of edge slots among `v` vertices.
///
/// # Panics
/// if the result does not fit in a `usize`, see [`checked_triangle_number`]
pub fn triangle_number(k: usize) -> usize {
    match checked_triangle_number(k) {
        Some(t) => t,
        None => panic!("triangle number of {k} overflows usize"),
    }
}

/// `k (k + 1) / 2`, or `None` if it does not fit in a `usize`
pub fn checked_triangle_number(k: usize) -> Option<usize> {
    // halve the even factor first so only the result has to fit
    if k % 2 == 0 {
        (k / 2).checked_mul(k.checked_add(1)?)
    } else {
        k.checked_mul(k / 2 + 1)
    }
}

/// the number of edge slots among `vertex_count >= 2` vertices
fn max_edges_of(vertex_count: usize) -> Result<usize> {
    checked_triangle_number(vertex_count - 1)
        .ok_or(GraphError::VertexCountTooLarge { vertex_count })
}

#[derive(Debug, Clone)]
enum Slots {
    /// every slot is taken, there is a single graph
    Complete { emitted: bool },
    Subsets(Combinations),
}

/// Every labeled graph with exactly `edge_count` edges on `vertex_count`
/// vertices, in the enumerator's decreasing minimal-change order.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    vertex_count: usize,
    edge_count: usize,
    max_edges: usize,
    slots: Slots,
}

impl GraphGenerator {
    /// Requires `vertex_count >= 2` and `1 <= edge_count <= triangle_number(vertex_count - 1)`.
    pub fn new(vertex_count: usize, edge_count: usize) -> Result<Self> {
        if vertex_count < 2 {
            return Err(GraphError::VertexCountTooSmall {
                vertex_count,
                min: 2,
            });
        }
        let max_edges = max_edges_of(vertex_count)?;
        if edge_count == 0 || edge_count > max_edges {
            return Err(GraphError::DegenerateCombinationRequest {
                edge_count,
                max_edges,
            });
        }

        Ok(Self::with_shape(vertex_count, edge_count, max_edges))
    }

    /// the caller guarantees `vertex_count >= 2`, `max_edges` is the slot count
    /// of `vertex_count` and `1 <= edge_count <= max_edges`
    fn with_shape(vertex_count: usize, edge_count: usize, max_edges: usize) -> Self {
        debug_assert!(vertex_count >= 2);
        debug_assert_eq!(checked_triangle_number(vertex_count - 1), Some(max_edges));
        debug_assert!((1..=max_edges).contains(&edge_count));

        let slots = if edge_count == max_edges {
            debug!(vertex_count, "only the complete graph has every edge");
            Slots::Complete { emitted: false }
        } else {
            Slots::Subsets(Combinations::with_size(max_edges, edge_count))
        };

        Self {
            vertex_count,
            edge_count,
            max_edges,
            slots,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn max_edges(&self) -> usize {
        self.max_edges
    }
}

impl Iterator for GraphGenerator {
    type Item = AdjacencyMatrix;

    fn next(&mut self) -> Option<Self::Item> {
        let order = self.vertex_count;
        match &mut self.slots {
            Slots::Complete { emitted } => {
                if *emitted {
                    None
                } else {
                    *emitted = true;
                    Some(AdjacencyMatrix::complete(order))
                }
            }
            Slots::Subsets(combinations) => combinations
                .next_ref()
                .map(|slots| AdjacencyMatrix::from_slots(order, slots.iter().copied())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.slots {
            Slots::Complete { emitted } => {
                let left = usize::from(!*emitted);
                (left, Some(left))
            }
            Slots::Subsets(combinations) => combinations.size_hint(),
        }
    }
}

impl FusedIterator for GraphGenerator {}

/// Every non-empty labeled graph on `2..=max_vertices` vertices, ordered by
/// vertex count, then edge count, then combination order.
#[derive(Debug, Clone)]
pub struct AllGraphs {
    max_vertices: usize,
    /// the (vertex count, edge count) batch after the current one
    pending: Option<(usize, usize)>,
    batch: Option<GraphGenerator>,
    emitted: usize,
}

impl AllGraphs {
    pub fn new(max_vertices: usize) -> Result<Self> {
        if max_vertices < 2 {
            return Err(GraphError::VertexCountTooSmall {
                vertex_count: max_vertices,
                min: 2,
            });
        }
        // every smaller vertex count has fewer slots
        max_edges_of(max_vertices)?;

        Ok(Self {
            max_vertices,
            pending: Some((2, 1)),
            batch: None,
            emitted: 0,
        })
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// the number of graphs `AllGraphs::new(max_vertices)` yields,
    /// `sum(2^triangle_number(v - 1) - 1)` for `v` in `2..=max_vertices`.
    /// `None` if that does not fit in a `usize`.
    pub fn total(max_vertices: usize) -> Option<usize> {
        (2..=max_vertices).try_fold(0usize, |acc, v| {
            let slots = u32::try_from(checked_triangle_number(v - 1)?).ok()?;
            let graphs = 1usize.checked_shl(slots)? - 1;
            acc.checked_add(graphs)
        })
    }

    fn next_batch(&mut self) -> Option<GraphGenerator> {
        let (vertex_count, edge_count) = self.pending?;
        // vertex_count <= max_vertices, whose slot count was checked in `new`
        let max_edges = triangle_number(vertex_count - 1);
        self.pending = if edge_count < max_edges {
            Some((vertex_count, edge_count + 1))
        } else if vertex_count < self.max_vertices {
            Some((vertex_count + 1, 1))
        } else {
            None
        };

        Some(GraphGenerator::with_shape(vertex_count, edge_count, max_edges))
    }
}

impl Iterator for AllGraphs {
    type Item = AdjacencyMatrix;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(batch) = self.batch.as_mut() {
                if let Some(matrix) = batch.next() {
                    self.emitted += 1;
                    return Some(matrix);
                }
                info!(
                    edge_count = batch.edge_count(),
                    vertex_count = batch.vertex_count(),
                    graphs = self.emitted,
                    "edge combinations complete"
                );
                self.batch = None;
            }

            self.batch = Some(self.next_batch()?);
            self.emitted = 0;
        }
    }
}

impl FusedIterator for AllGraphs {}
