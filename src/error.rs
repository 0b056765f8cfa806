use std::fmt::Debug;

/// Reasons a vertex reference or a graph's internal state can be invalid.
///
/// The graph operations themselves report absence through `bool` and
/// `Option` returns; this type is only produced by the explicit checks
/// [`Graph::check_valid_vertex`](crate::Graph::check_valid_vertex) and
/// [`Graph::check_consistency`](crate::Graph::check_consistency).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError<V: Debug> {
    /// No vertex with this payload exists in the graph.
    #[error("vertex {0:?} not found in graph")]
    VertexNotFound(V),
    /// The index is outside the fixed vertex range of a matrix graph.
    #[error("vertex {vertex:?} out of range for a graph of {size} vertices")]
    VertexOutOfRange { vertex: V, size: usize },
    /// `from` lists `to` as a neighbor but not the other way around.
    #[error("edge {from:?} -- {to:?} is only recorded on one side")]
    AsymmetricEdge { from: V, to: V },
    /// A vertex lists the same neighbor more than once.
    #[error("vertex {vertex:?} lists neighbor {neighbor:?} more than once")]
    DuplicateNeighbor { vertex: V, neighbor: V },
    /// The tracked vertex count disagrees with the stored vertices.
    #[error("vertex count is {counted} but {stored} vertices are stored")]
    VertexCountMismatch { counted: usize, stored: usize },
    /// The payload index points at the wrong position.
    #[error("index entry for vertex {0:?} is stale")]
    StaleIndex(V),
}
