use std::fmt;

/// An undirected edge `{u, v}` with a weight. The storage order of the two
/// endpoints carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge<W = i64> {
    u: usize,
    v: usize,
    w: W,
}

impl<W> WeightedEdge<W> {
    pub fn new(u: usize, v: usize, w: W) -> Self {
        Self { u, v, w }
    }

    pub fn u(&self) -> usize {
        self.u
    }

    pub fn v(&self) -> usize {
        self.v
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    pub fn weight(&self) -> W
    where
        W: Copy,
    {
        self.w
    }

    pub fn into_weight(self) -> W {
        self.w
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// true if this edge joins `a` and `b`, in either order
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// return the endpoint on the other side of `n`, or `None` if `n` is not
    /// an endpoint of this edge
    pub fn opposite(&self, n: usize) -> Option<usize> {
        if n == self.u {
            Some(self.v)
        } else if n == self.v {
            Some(self.u)
        } else {
            None
        }
    }
}

impl<W> From<(usize, usize, W)> for WeightedEdge<W> {
    fn from((u, v, w): (usize, usize, W)) -> Self {
        Self::new(u, v, w)
    }
}

impl<W: fmt::Display> fmt::Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}> weight[ {} ]", self.u, self.v, self.w)
    }
}

/// write one `Edge i: <u, v> weight[ w ]` line per edge, followed by a blank line
pub(crate) fn fmt_edge_list<W: fmt::Display>(
    edges: &[WeightedEdge<W>],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (i, edge) in edges.iter().enumerate() {
        writeln!(f, "   Edge {i}: {edge}")?;
    }
    writeln!(f)
}
