use std::collections::HashSet;

use graph_works::graph::combination::{binomial, Combinations};
use graph_works::GraphError;
use itertools::{assert_equal, Itertools};
use rstest::rstest;

#[rstest]
#[case(2, 1)]
#[case(5, 1)]
#[case(5, 2)]
#[case(5, 4)]
#[case(7, 3)]
#[case(9, 5)]
#[case(10, 1)]
#[case(12, 6)]
fn visits_every_subset_once(#[case] n: usize, #[case] m: usize) {
    let all: Vec<Vec<usize>> = Combinations::new(n, m).unwrap().collect();
    assert_eq!(Some(all.len()), binomial(n, m));

    let distinct: HashSet<_> = all.iter().cloned().collect();
    assert_eq!(distinct.len(), all.len(), "a combination was visited twice");

    let reference: HashSet<Vec<usize>> = (0..n).combinations(m).collect();
    assert_eq!(distinct, reference);

    for comb in &all {
        assert!(comb.windows(2).all(|w| w[0] < w[1]), "{comb:?} is not increasing");
    }
}

#[rstest]
#[case(4, 3)]
#[case(6, 2)]
#[case(8, 5)]
fn starts_at_maximum_and_ends_at_minimum(#[case] n: usize, #[case] m: usize) {
    let all: Vec<_> = Combinations::new(n, m).unwrap().collect();
    assert_eq!(all.first(), Some(&(n - m..n).collect::<Vec<_>>()));
    assert_eq!(all.last(), Some(&(0..m).collect::<Vec<_>>()));
}

#[test]
fn runs_in_decreasing_order() {
    // compare combinations by their largest element first
    let colex = |c: &Vec<usize>| c.iter().rev().copied().collect::<Vec<_>>();
    let all: Vec<_> = Combinations::new(7, 3).unwrap().map(|c| colex(&c)).collect();
    for pair in all.windows(2) {
        assert!(pair[0] > pair[1], "{:?} should come before {:?}", pair[1], pair[0]);
    }
}

#[test]
fn single_item_counts_down() {
    assert_equal(Combinations::new(4, 1).unwrap(), vec![vec![3], vec![2], vec![1], vec![0]]);
}

#[test]
fn rejects_invalid_sizes() {
    for (n, m) in [(1, 1), (3, 3), (3, 4), (5, 0)] {
        match Combinations::new(n, m) {
            Err(GraphError::InvalidCombinationSize { n: got_n, m: got_m }) => {
                assert_eq!((got_n, got_m), (n, m));
            }
            other => panic!("expected InvalidCombinationSize for ({n}, {m}), got {other:?}"),
        }
    }
}
