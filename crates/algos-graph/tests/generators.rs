use algos_core::rng::RngHandle;
use algos_core::{Direction, Graph};
use algos_graph::{
    format_walk, gen_random_list, gen_random_matrix, AdjacencyMatrix, RandomGraphConfig,
};

#[test]
fn same_seed_same_graph() {
    let config = RandomGraphConfig::default().weighted(20);
    let first = gen_random_list(&config, &mut RngHandle::from_seed(11)).unwrap();
    let second = gen_random_list(&config, &mut RngHandle::from_seed(11)).unwrap();
    assert_eq!(first, second);

    let matrix_a = gen_random_matrix(9, 0.4, &mut RngHandle::from_seed(3));
    let matrix_b = gen_random_matrix(9, 0.4, &mut RngHandle::from_seed(3));
    assert_eq!(matrix_a, matrix_b);
}

#[test]
fn generated_list_honours_config() {
    let config = RandomGraphConfig {
        vertices: 6,
        edges: 40,
        allow_self_loops: false,
        ..RandomGraphConfig::default()
    }
    .weighted(5)
    .undirected();
    let graph = gen_random_list(&config, &mut RngHandle::from_seed(99)).unwrap();

    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 40);
    assert_eq!(graph.direction(), Direction::Undirected);
    assert!(graph.max_cost().is_some_and(|cost| cost <= 5));
    for (_, record) in graph.edges() {
        assert_ne!(record.from(), record.to());
        assert!(record.weight().is_some());
    }
}

#[test]
fn unweighted_config_leaves_weights_empty() {
    let graph =
        gen_random_list(&RandomGraphConfig::default(), &mut RngHandle::from_seed(1)).unwrap();
    assert!(graph.edges().all(|(_, record)| record.weight().is_none()));
    assert_eq!(graph.direction(), Direction::Directed);
}

#[test]
fn impossible_requests_are_rejected() {
    let config = RandomGraphConfig {
        vertices: 0,
        edges: 3,
        ..RandomGraphConfig::default()
    };
    let err = gen_random_list(&config, &mut RngHandle::from_seed(0)).unwrap_err();
    assert_eq!(err.code(), "empty-graph");

    let config = RandomGraphConfig {
        vertices: 1,
        edges: 1,
        allow_self_loops: false,
        ..RandomGraphConfig::default()
    };
    assert!(gen_random_list(&config, &mut RngHandle::from_seed(0)).is_err());

    let config = RandomGraphConfig {
        vertices: 0,
        edges: 0,
        ..RandomGraphConfig::default()
    };
    let graph = gen_random_list(&config, &mut RngHandle::from_seed(0)).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn matrix_density_extremes() {
    let mut rng = RngHandle::from_seed(5);
    let empty = gen_random_matrix(5, 0.0, &mut rng);
    assert_eq!(empty, AdjacencyMatrix::new(5));

    let full = gen_random_matrix(5, 1.0, &mut rng);
    assert_eq!(full, AdjacencyMatrix::complete(5));

    let clamped = gen_random_matrix(5, 3.5, &mut rng);
    assert_eq!(clamped, AdjacencyMatrix::complete(5));

    let random = gen_random_matrix(12, 0.5, &mut rng);
    assert!(random.is_symmetric());
    assert!((0..12).all(|vertex| !random.has_edge(vertex, vertex)));
}

#[test]
fn full_density_links_every_pair() {
    let mut rng = RngHandle::from_seed(17);
    for vertices in [0, 1, 2, 30] {
        let matrix = gen_random_matrix(vertices, 1.0, &mut rng);
        assert_eq!(matrix, AdjacencyMatrix::complete(vertices));
    }
}

#[test]
fn walks_render_with_arrows() {
    assert_eq!(format_walk(&[0, 1, 2]), "0 -> 1 -> 2");
    assert_eq!(format_walk(&[7]), "7");
    assert_eq!(format_walk(&[]), "");
}
