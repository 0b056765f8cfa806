use std::collections::HashSet;

use adjgraph::{
    DenseFlags, prelude::*,
    tracing_support::{dump_method_timings, info_span, init_tracing, method_timings},
};
use quickcheck_macros::quickcheck;

fn five_cycle_graph() -> AdjacencyListGraph {
    [
        (1, 2),
        (1, 5),
        (2, 5),
        (2, 3),
        (3, 4),
        (4, 1),
        (10, 12),
        (1024, 1025),
    ]
    .into_iter()
    .collect()
}

fn six_vertex_matrix() -> AdjacencyMatrixGraph {
    let mut graph = AdjacencyMatrixGraph::with_size(6);
    for (from, to) in [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (2, 3), (2, 4)] {
        assert!(graph.add_edge(from, to));
    }
    graph
}

#[test]
fn test_list_scenario() {
    let graph = five_cycle_graph();
    assert_eq!(graph.num_vertices(), 9);
    assert_eq!(graph.num_edges(), 8);
    assert_eq!(graph.count_connected_components(), 3);
    let visited: HashSet<_> = graph
        .depth_first_search(5)
        .expect("5 is a vertex")
        .into_iter()
        .collect();
    assert_eq!(visited, HashSet::from([1, 2, 3, 4, 5]));
}

#[test]
fn test_matrix_scenario() {
    let graph = six_vertex_matrix();
    let visited = graph.depth_first_search(0).expect("0 is a vertex");
    assert_eq!(visited.len(), 5);
    assert_eq!(
        visited.into_iter().collect::<HashSet<_>>(),
        HashSet::from([0, 1, 2, 3, 4])
    );
    assert_eq!(graph.count_connected_components(), 2);
}

#[test]
fn test_matrix_size_zero_has_no_components() {
    let graph: AdjacencyMatrixGraph = AdjacencyMatrixGraph::with_size(0);
    assert_eq!(graph.count_connected_components(), 0);
}

#[test]
fn test_matrix_lone_self_loop() {
    for size in 2..6 {
        let mut graph: AdjacencyMatrixGraph<DenseFlags> = AdjacencyMatrixGraph::with_size(size);
        assert!(graph.add_edge(0, 0));
        assert_eq!(graph.count_connected_components(), size);
    }
}

#[test]
fn test_remove_vertex_scenario() {
    let mut graph = five_cycle_graph();
    assert!(graph.remove_vertex(1));
    assert_eq!(graph.num_vertices(), 8);
    assert!(!graph.neighbors(2).any(|n| n == 1));
    assert!(!graph.neighbors(4).any(|n| n == 1));
    assert!(!graph.neighbors(5).any(|n| n == 1));
    assert!(!graph.remove_vertex(1));
    assert_eq!(graph.count_connected_components(), 3);
    assert!(graph.remove_vertex(12));
    assert_eq!(graph.count_connected_components(), 3);
    assert!(graph.remove_vertex(10));
    assert_eq!(graph.count_connected_components(), 2);
}

#[test]
fn test_list_complete_graph() {
    let size = 200;
    let mut graph = AdjacencyListGraph::new();
    for from in 0..size {
        for to in from + 1..size {
            assert!(graph.add_edge(from, to));
        }
    }
    assert_eq!(graph.num_edges(), (size * (size - 1) / 2) as usize);
    assert_eq!(graph.degree(0), Some(size as usize - 1));
    assert_eq!(graph.count_connected_components(), 1);
    assert_eq!(graph.check_consistency(), Ok(()));
}

/// Builds the same edges in both representations, using payload `i` for
/// matrix index `i`, and compares what the shared contract reports.
#[quickcheck]
fn prop_list_and_matrix_agree(edges: Vec<(u8, u8)>) -> bool {
    let size = 12;
    let edges: Vec<_> = edges
        .into_iter()
        .map(|(a, b)| (a as usize % size, b as usize % size))
        .collect();

    let list: AdjacencyListGraph = edges
        .iter()
        .map(|&(a, b)| (a as i32, b as i32))
        .collect();
    let mut matrix: AdjacencyMatrixGraph = AdjacencyMatrixGraph::with_size(size);
    for &(a, b) in &edges {
        matrix.add_edge(a, b);
    }

    let isolated_in_matrix = (0..size)
        .filter(|&i| !list.contains_vertex(i as i32))
        .count();

    list.num_edges() == matrix.num_edges()
        && list.count_connected_components() + isolated_in_matrix
            == matrix.count_connected_components()
        && list.vertex_ids().all(|v| {
            let from_list: HashSet<_> = list
                .depth_first_search(v)
                .unwrap_or_default()
                .into_iter()
                .map(|p| p as usize)
                .collect();
            let from_matrix: HashSet<_> = matrix
                .depth_first_search(v as usize)
                .unwrap_or_default()
                .into_iter()
                .collect();
            from_list == from_matrix
        })
}

fn long_path_dfs(len: i32) {
    init_tracing();
    let graph = {
        let _span = info_span!("build_long_path").entered();
        (1..len).map(|i| (i - 1, i)).collect::<AdjacencyListGraph>()
    };
    let visited = graph.depth_first_search(0).expect("0 is a vertex");
    assert_eq!(visited.len(), len as usize);
    assert!(visited.iter().copied().eq(0..len));
    assert_eq!(graph.count_connected_components(), 1);
    dump_method_timings();
}

#[test]
fn test_long_path_does_not_exhaust_stack() {
    long_path_dfs(100_000);
    if cfg!(feature = "tracing") {
        assert!(method_timings().contains_key("depth_first_search"));
    }
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_very_long_path_does_not_exhaust_stack() {
    long_path_dfs(1_000_000);
}
