use std::fmt;

use fixedbitset::FixedBitSet;
use itertools::Itertools;

use super::{algo::Measure, Graph};
use crate::graph::generate::triangle_number;

/// A simple undirected graph as a dense boolean adjacency matrix.
///
/// Only the strictly lower triangle is stored, packed into a bitset: the
/// diagonal is always zero and the upper triangle mirrors the lower one, so
/// the full matrix is symmetric by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdjacencyMatrix {
    order: usize,
    slots: FixedBitSet,
}

/// return the slot of the edge between a and b.
/// slots are numbered column by column, and within a column by the rows below
/// the diagonal: (1, 0), (2, 0), .., (n - 1, 0), (2, 1), ..
fn get_slot_pos(a: usize, b: usize, order: usize) -> usize {
    let (row, column) = if a > b { (a, b) } else { (b, a) };
    column * (2 * order - column - 1) / 2 + (row - column - 1)
}

/// every vertex pair `(column, row)` with `column < row`, in slot order
pub fn slot_pairs(order: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..order).tuple_combinations()
}

impl AdjacencyMatrix {
    /// `order` vertices and no edges
    pub fn empty(order: usize) -> Self {
        Self {
            order,
            slots: FixedBitSet::with_capacity(Self::slot_count_of(order)),
        }
    }

    pub fn complete(order: usize) -> Self {
        let mut matrix = Self::empty(order);
        matrix.slots.insert_range(..);
        matrix
    }

    /// mark the given slots as present, see [`slot_pairs`] for the numbering
    ///
    /// # Panics
    /// if a slot is not below `triangle_number(order - 1)`
    pub fn from_slots<I>(order: usize, slots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut matrix = Self::empty(order);
        for slot in slots {
            matrix.slots.insert(slot);
        }
        matrix
    }

    fn slot_count_of(order: usize) -> usize {
        if order == 0 {
            0
        } else {
            triangle_number(order - 1)
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// the number of possible edges, `triangle_number(order - 1)`
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn edge_count(&self) -> usize {
        self.slots.count_ones(..)
    }

    /// # Panics
    /// if either vertex is out of range
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        assert!(a < self.order && b < self.order, "node index out of bound");
        a != b && self.slots.contains(get_slot_pos(a, b, self.order))
    }

    /// add the edge between a and b, returning false if it already existed.
    ///
    /// # Panics
    /// if either vertex is out of range, or if `a == b`
    pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
        assert!(a < self.order && b < self.order, "node index out of bound");
        assert_ne!(a, b, "self-loops are not representable");
        !self.slots.put(get_slot_pos(a, b, self.order))
    }

    /// present edges as `(column, row)` pairs, in slot order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        slot_pairs(self.order)
            .enumerate()
            .filter(move |(slot, _)| self.slots.contains(*slot))
            .map(|(_, pair)| pair)
    }

    /// one row of the full matrix, including the zero diagonal
    pub fn row(&self, r: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.order).map(move |c| self.contains_edge(r, c))
    }

    /// the full `order x order` matrix as 0/1 entries
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.order)
            .map(|r| self.row(r).map(u8::from).collect())
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.order).all(|r| {
            !self.contains_edge(r, r)
                && (0..r).all(|c| self.contains_edge(r, c) == self.contains_edge(c, r))
        })
    }

    /// the same graph with every present edge carrying `weight`
    pub fn to_graph<W: Measure>(&self, weight: W) -> Graph<W> {
        let zero = W::default();
        let rows = (0..self.order).map(|r| {
            self.row(r)
                .map(|present| if present { weight } else { zero })
                .collect::<Vec<_>>()
        });
        Graph::from_matrix(self.order, rows)
    }
}

impl fmt::Display for AdjacencyMatrix {
    /// `order` lines of space-free 0/1 digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.order {
            for present in self.row(r) {
                f.write_str(if present { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
