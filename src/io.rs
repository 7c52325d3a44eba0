//! Flat text formats: the weight matrix read in MST mode and the adjacency
//! matrix stream written in generation mode.

use std::io::{Read, Write};
use std::str::FromStr;

use tracing::info;

use crate::error::{GraphError, Result};
use crate::graph::algo::Measure;
use crate::graph::generate::AllGraphs;
use crate::graph::{AdjacencyMatrix, Graph};

/// Read a weight matrix: the vertex count `V` followed by `V * V` weights,
/// all separated by whitespace. Tokens after the last weight are ignored.
///
/// Only the row >= column half ends up in the graph, see [`Graph::from_matrix`].
pub fn read_weight_matrix<W, R>(mut reader: R) -> Result<Graph<W>>
where
    W: Measure + FromStr,
    R: Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_weight_matrix(&text)
}

pub fn parse_weight_matrix<W>(text: &str) -> Result<Graph<W>>
where
    W: Measure + FromStr,
{
    let mut tokens = text.split_whitespace();
    let count = tokens
        .next()
        .ok_or_else(|| GraphError::MalformedInput("missing vertex count".to_string()))?;
    let vertex_count: usize = count
        .parse()
        .map_err(|_| GraphError::MalformedInput(format!("invalid vertex count `{count}`")))?;

    // the header is untrusted, so rows grow with the tokens actually present
    let mut rows = Vec::new();
    for row in 0..vertex_count {
        let mut weights = Vec::new();
        for column in 0..vertex_count {
            let token = tokens.next().ok_or_else(|| {
                GraphError::MalformedInput(format!("missing weight at row {row}, column {column}"))
            })?;
            let w = token.parse().map_err(|_| {
                GraphError::MalformedInput(format!(
                    "invalid weight `{token}` at row {row}, column {column}"
                ))
            })?;
            weights.push(w);
        }
        rows.push(weights);
    }

    Ok(Graph::from_matrix(vertex_count, rows))
}

/// Appends adjacency matrices to a text stream: a line with the vertex count,
/// one line of `0`/`1` digits per row, then a blank line.
pub struct MatrixWriter<T: Write> {
    inner: T,
    written: usize,
}

impl<T: Write> MatrixWriter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, written: 0 }
    }

    pub fn write_matrix(&mut self, matrix: &AdjacencyMatrix) -> Result<()> {
        writeln!(self.inner, "{}", matrix.order())?;
        write!(self.inner, "{matrix}")?;
        writeln!(self.inner)?;
        self.written += 1;
        Ok(())
    }

    /// number of matrices written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

/// Write every graph on `2..=max_vertices` vertices to `writer`, returning how
/// many were written.
pub fn write_all_graphs<T: Write>(max_vertices: usize, writer: T) -> Result<usize> {
    let graphs = AllGraphs::new(max_vertices)?;
    let mut out = MatrixWriter::new(writer);
    for matrix in graphs {
        out.write_matrix(&matrix)?;
    }
    out.flush()?;

    info!(max_vertices, graphs = out.written(), "graph generation complete");
    Ok(out.written())
}
