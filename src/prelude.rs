pub use crate::adjacency_list::AdjacencyListGraph;
pub use crate::adjacency_matrix::AdjacencyMatrixGraph;
pub use crate::error::GraphError;
pub use crate::graph::{Graph, VertexId};
