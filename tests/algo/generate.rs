use std::collections::HashSet;

use graph_works::graph::generate::{triangle_number, AllGraphs, GraphGenerator};
use graph_works::graph::AdjacencyMatrix;
use graph_works::io::write_all_graphs;
use rstest::rstest;

fn assert_well_formed(m: &AdjacencyMatrix, edge_count: usize) {
    let rows = m.to_rows();
    let n = m.order();
    let mut upper = 0;
    for r in 0..n {
        assert_eq!(rows[r][r], 0, "diagonal of {rows:?} must be zero");
        for c in 0..n {
            assert_eq!(rows[r][c], rows[c][r], "{rows:?} is not symmetric");
            if c > r {
                upper += usize::from(rows[r][c]);
            }
        }
    }
    assert_eq!(upper, edge_count);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
fn every_nonempty_edge_subset_once(#[case] vertex_count: usize) {
    let max_edges = triangle_number(vertex_count - 1);
    let mut seen = HashSet::new();
    for edge_count in 1..=max_edges {
        for m in GraphGenerator::new(vertex_count, edge_count).unwrap() {
            assert_eq!(m.order(), vertex_count);
            assert_well_formed(&m, edge_count);
            assert!(seen.insert(m.to_rows()), "duplicate graph");
        }
    }
    assert_eq!(seen.len(), (1 << max_edges) - 1);
}

#[test]
fn three_vertices_one_edge() {
    let graphs: Vec<_> = GraphGenerator::new(3, 1).unwrap().collect();
    assert_eq!(graphs.len(), 3);
    for m in &graphs {
        assert_well_formed(m, 1);
    }
}

#[test]
fn three_vertices_complete() {
    let graphs: Vec<_> = GraphGenerator::new(3, 3).unwrap().collect();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].to_rows(), vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
}

#[test]
fn batches_are_nested_by_vertex_then_edge_count() {
    let shapes: Vec<_> = AllGraphs::new(4)
        .unwrap()
        .map(|m| (m.order(), m.edge_count()))
        .collect();
    assert_eq!(Some(shapes.len()), AllGraphs::total(4));

    let mut sorted = shapes.clone();
    sorted.sort();
    assert_eq!(shapes, sorted);
}

#[test]
fn output_stream_format() {
    let mut buf = Vec::new();
    let written = write_all_graphs(4, &mut buf).unwrap();
    assert_eq!(Some(written), AllGraphs::total(4));

    let text = String::from_utf8(buf).unwrap();
    let blocks: Vec<_> = text.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), written);
    for block in blocks {
        let mut lines = block.lines();
        let order: usize = lines.next().unwrap().parse().unwrap();
        let rows: Vec<_> = lines.collect();
        assert_eq!(rows.len(), order);
        assert!(rows
            .iter()
            .all(|row| row.len() == order && row.chars().all(|c| c == '0' || c == '1')));
    }
}
