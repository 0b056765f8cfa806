pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod error;
pub mod graph;
pub mod graph_test_support;
pub mod prelude;
pub mod search;
pub mod tracing_support;

pub use crate::adjacency_list::AdjacencyListGraph;
pub use crate::adjacency_matrix::{AdjacencyMatrixGraph, DenseFlags, FlagMatrix};
#[cfg(feature = "bitvec")]
pub use crate::adjacency_matrix::BitvecFlags;
pub use crate::error::GraphError;
pub use crate::graph::{Graph, VertexId};
pub use crate::search::DfsIterator;
