use graph_works::graph::algo::prim;
use graph_works::graph::generate::{triangle_number, GraphGenerator};
use graph_works::graph::{Graph, WeightedEdge};
use graph_works::io::parse_weight_matrix;
use graph_works::GraphError;
use petgraph::algo::{connected_components, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use rstest::{fixture, rstest};

/// the total weight of a minimum spanning forest computed by petgraph (Kruskal)
fn kruskal_weight(g: &Graph) -> i64 {
    let pg = to_petgraph(g);
    min_spanning_tree(&pg)
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

fn to_petgraph(g: &Graph) -> UnGraph<(), i64> {
    let mut pg = UnGraph::with_capacity(g.vertex_count(), g.edge_count());
    for _ in 0..g.vertex_count() {
        pg.add_node(());
    }
    for edge in g.edges() {
        pg.add_edge(NodeIndex::new(edge.u()), NodeIndex::new(edge.v()), edge.weight());
    }
    pg
}

/// deterministic, deliberately tie-heavy weights
fn weigh(g: &Graph) -> Graph {
    let edges = g
        .edges()
        .iter()
        .map(|e| (e.u(), e.v(), ((e.u() * 7 + e.v() * 13) % 5 + 1) as i64));
    Graph::from_edges(g.vertex_count(), edges).unwrap()
}

#[fixture]
fn kite() -> Graph {
    parse_weight_matrix(
        "4
         0 1 4 0
         1 0 2 5
         4 2 0 3
         0 5 3 0",
    )
    .unwrap()
}

#[rstest]
fn spans_the_kite(kite: Graph) {
    let tree = prim(&kite).unwrap();
    assert_eq!(
        tree.edges(),
        &[
            WeightedEdge::new(0, 1, 1),
            WeightedEdge::new(1, 2, 2),
            WeightedEdge::new(2, 3, 3),
        ]
    );
    assert_eq!(tree.total_weight(), 6);
    assert_eq!(tree.total_weight(), kruskal_weight(&kite));
    assert_eq!(tree.frontier().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[rstest]
fn is_idempotent(kite: Graph) {
    let first = prim(&kite).unwrap();
    let second = prim(&kite).unwrap();
    assert_eq!(first.total_weight(), second.total_weight());
    assert_eq!(first, second);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
fn matches_kruskal_on_every_small_graph(#[case] vertex_count: usize) {
    for edge_count in 1..=triangle_number(vertex_count - 1) {
        for matrix in GraphGenerator::new(vertex_count, edge_count).unwrap() {
            let g = weigh(&matrix.to_graph(1i64));
            let connected = connected_components(&to_petgraph(&g)) == 1;

            match prim(&g) {
                Ok(tree) => {
                    assert!(connected, "prim spanned a disconnected graph:\n{matrix}");
                    assert_eq!(tree.edges().len(), vertex_count - 1);
                    assert!((0..vertex_count).all(|n| tree.contains_vertex(n)));
                    assert_eq!(tree.total_weight(), kruskal_weight(&g), "\n{matrix}");
                }
                Err(GraphError::DisconnectedGraph { .. }) => {
                    assert!(!connected, "prim rejected a connected graph:\n{matrix}");
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        }
    }
}

#[test]
fn unit_weights_give_vertex_count_minus_one() {
    for matrix in GraphGenerator::new(4, 5).unwrap() {
        let tree = prim(&matrix.to_graph(1i64)).unwrap();
        assert_eq!(tree.total_weight(), 3);
    }
}
