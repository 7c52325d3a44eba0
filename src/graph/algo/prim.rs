// Prim's algorithm over a flat edge list.
//
// The tree grows from one endpoint of the first edge. Every round scans all
// edges for boundary edges, those with exactly one endpoint in the frontier,
// and takes the lightest one. Ties go to the edge listed first, since the
// scan only replaces its pick on a strictly smaller weight. The new endpoint
// joins the frontier and the round repeats until the tree has one edge less
// than the graph has vertices.
//
// There is no priority queue: each round is O(|E|), so the whole run is
// O(|V| |E|), which is fine for the small dense graphs this crate targets.

use std::fmt;

use indexmap::IndexSet;
use tracing::debug;

use super::Measure;
use crate::error::{GraphError, Result};
use crate::graph::{fmt_edge_list, Graph, WeightedEdge};

/// A spanning tree produced by [`prim`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W = i64> {
    vertex_count: usize,
    edges: Vec<WeightedEdge<W>>,
    total_weight: W,
    /// vertices in the order they joined the tree
    frontier: IndexSet<usize>,
}

impl<W: Copy> SpanningTree<W> {
    /// tree edges in the order they were selected
    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// the vertices spanned by the tree, in the order they joined the frontier
    pub fn frontier(&self) -> impl Iterator<Item = usize> + '_ {
        self.frontier.iter().copied()
    }

    pub fn contains_vertex(&self, n: usize) -> bool {
        self.frontier.contains(&n)
    }
}

impl<W: fmt::Display> fmt::Display for SpanningTree<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_edge_list(&self.edges, f)
    }
}

/// Build a minimum spanning tree of `graph` with Prim's algorithm.
///
/// A graph with at most one vertex has an empty tree. Otherwise the graph must
/// be connected: if a round finds no boundary edge, or there are no edges at
/// all, this fails with [`GraphError::DisconnectedGraph`].
pub fn prim<W: Measure>(graph: &Graph<W>) -> Result<SpanningTree<W>> {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);
    let mut edges = Vec::with_capacity(target);
    let mut total_weight = W::default();
    let mut frontier = IndexSet::with_capacity(vertex_count);

    debug!(vertex_count, edge_count = graph.edge_count(), "building spanning tree");

    let disconnected = |tree_edges| GraphError::DisconnectedGraph {
        tree_edges,
        vertex_count,
    };

    match graph.edges().first() {
        Some(first) if vertex_count > 1 => {
            frontier.insert(first.u());
        }
        // a lone vertex spans itself
        _ if vertex_count == 1 => {
            frontier.insert(0);
        }
        None if vertex_count > 1 => return Err(disconnected(0)),
        _ => {}
    }

    while edges.len() < target {
        let (edge, joined) =
            min_boundary_edge(graph.edges(), &frontier).ok_or_else(|| disconnected(edges.len()))?;
        frontier.insert(joined);
        total_weight = total_weight + edge.weight();
        edges.push(*edge);
    }

    Ok(SpanningTree {
        vertex_count,
        edges,
        total_weight,
        frontier,
    })
}

/// the lightest edge with exactly one endpoint in `frontier`, and its endpoint
/// outside of it. the first of several equally light edges wins.
fn min_boundary_edge<'a, W: Measure>(
    edges: &'a [WeightedEdge<W>],
    frontier: &IndexSet<usize>,
) -> Option<(&'a WeightedEdge<W>, usize)> {
    let mut best: Option<(&WeightedEdge<W>, usize)> = None;
    for edge in edges {
        let (u, v) = edge.endpoints();
        let outside = match (frontier.contains(&u), frontier.contains(&v)) {
            (true, false) => v,
            (false, true) => u,
            _ => continue,
        };
        if best.map_or(true, |(min, _)| edge.weight() < min.weight()) {
            best = Some((edge, outside));
        }
    }
    best
}
