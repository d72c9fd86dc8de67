use algos_core::{AlgoError, Direction, EdgeId, Graph};
use algos_graph::{AdjacencyList, AdjacencyMatrix, WeightMatrix};

#[test]
fn neighbour_lists_reject_foreign_vertices() {
    let err = AdjacencyList::from_neighbours(2, vec![vec![5], vec![]]).unwrap_err();
    assert!(matches!(&err, AlgoError::InvalidGraph(info) if info.code == "vertex-out-of-range"));
    assert_eq!(err.info().context.get("endpoint"), Some(&"to".to_string()));
    assert_eq!(err.info().context.get("vertex"), Some(&"5".to_string()));

    let err = AdjacencyList::from_weighted(1, vec![vec![(1, 3)]]).unwrap_err();
    assert_eq!(err.code(), "vertex-out-of-range");
}

#[test]
fn row_count_must_match_vertex_count() {
    let err = AdjacencyList::from_neighbours(3, vec![vec![]]).unwrap_err();
    assert_eq!(err.code(), "vertex-count-mismatch");
    assert_eq!(err.info().context.get("rows"), Some(&"1".to_string()));
}

#[test]
fn edges_are_checked_on_insertion() {
    let mut graph = AdjacencyList::undirected(2);
    let err = graph.add_edge(2, 0).unwrap_err();
    assert_eq!(err.info().context.get("endpoint"), Some(&"from".to_string()));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.arcs(0).is_empty());
}

#[test]
fn ragged_matrices_are_rejected() {
    let err = AdjacencyMatrix::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
    assert!(matches!(&err, AlgoError::InvalidGraph(info) if info.code == "non-square-matrix"));
    assert_eq!(err.info().context.get("row"), Some(&"1".to_string()));

    let err = WeightMatrix::from_rows(vec![vec![Some(1)], vec![None]]).unwrap_err();
    assert_eq!(err.code(), "non-square-matrix");

    let mut matrix = AdjacencyMatrix::new(2);
    assert_eq!(matrix.set_edge(0, 2).unwrap_err().code(), "vertex-out-of-range");
}

#[test]
fn unknown_edges_are_reported() {
    let graph = AdjacencyList::directed(2);
    let err = graph.edge(EdgeId::from_raw(9)).unwrap_err();
    assert_eq!(err.code(), "unknown-edge");
    assert_eq!(err.info().context.get("edge"), Some(&"9".to_string()));
}

#[test]
fn undirected_edge_is_one_record_with_two_arcs() {
    let mut graph = AdjacencyList::new(3, Direction::Undirected);
    let id = graph.add_weighted_edge(0, 2, 7).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.out_degree(0), 1);
    assert_eq!(graph.out_degree(2), 1);
    assert_eq!(graph.in_degree(0), 1);
    assert_eq!(graph.arcs(2)[0].edge, id);

    let record = graph.edge(id).unwrap();
    assert_eq!((record.from(), record.to()), (0, 2));
    assert_eq!(record.weight(), Some(7));
    assert_eq!(graph.max_cost(), Some(7));
}

#[test]
fn directed_edge_only_leaves_its_source() {
    let mut graph = AdjacencyList::directed(2);
    graph.add_edge(0, 1).unwrap();
    assert_eq!(graph.neighbours(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(graph.neighbours(1).count(), 0);
    assert_eq!(graph.in_degree(1), 1);
    assert_eq!(graph.max_cost(), Some(1));
}

#[test]
fn conversions_preserve_structure() {
    let mut list = AdjacencyList::undirected(3);
    list.add_weighted_edge(0, 1, 6).unwrap();
    list.add_weighted_edge(1, 0, 2).unwrap();
    list.add_edge(1, 2).unwrap();

    let matrix = AdjacencyMatrix::from(&list);
    assert!(matrix.is_symmetric());
    assert!(matrix.has_edge(2, 1));
    assert!(!matrix.has_edge(0, 2));

    let weights = WeightMatrix::from(&list);
    assert_eq!(weights.weight(0, 1), Some(2));
    assert_eq!(weights.weight(1, 2), Some(1));
    assert_eq!(weights.weight(0, 2), None);
    assert_eq!(weights.weight(9, 0), None);
}

#[test]
fn matrix_rows_round_trip() {
    let matrix =
        AdjacencyMatrix::from_rows(vec![vec![false, true], vec![false, false]]).unwrap();
    assert!(!matrix.is_symmetric());
    assert_eq!(matrix.row(0), &[false, true]);
    assert!(matrix.row(5).is_empty());
}
