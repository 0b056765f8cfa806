mod list {
    pub use adjgraph::{AdjacencyListGraph, graph_tests, graph_tests::TestDataBuilder};

    pub struct AdjacencyListBuilder;

    impl TestDataBuilder for AdjacencyListBuilder {
        type Graph = AdjacencyListGraph;

        fn new_graph(_num_vertices: usize) -> AdjacencyListGraph {
            AdjacencyListGraph::new()
        }

        // Spread payloads out and below zero so nothing relies on them
        // looking like indices.
        fn vertex_id(i: usize) -> i32 {
            i as i32 * 7 - 20
        }
    }

    graph_tests!(adjacency_list, AdjacencyListBuilder);
}

mod matrix {
    pub use adjgraph::{
        AdjacencyMatrixGraph, DenseFlags, FlagMatrix, graph_tests, graph_tests::TestDataBuilder,
    };
    use std::marker::PhantomData;

    pub struct AdjacencyMatrixBuilder<S>(PhantomData<S>);

    impl<S: FlagMatrix> TestDataBuilder for AdjacencyMatrixBuilder<S> {
        type Graph = AdjacencyMatrixGraph<S>;

        fn new_graph(num_vertices: usize) -> AdjacencyMatrixGraph<S> {
            AdjacencyMatrixGraph::with_size(num_vertices)
        }

        fn vertex_id(i: usize) -> usize {
            i
        }
    }

    #[cfg(feature = "bitvec")]
    graph_tests!(bitvec_matrix, AdjacencyMatrixBuilder<adjgraph::BitvecFlags>);

    graph_tests!(dense_matrix, AdjacencyMatrixBuilder<DenseFlags>);
}
