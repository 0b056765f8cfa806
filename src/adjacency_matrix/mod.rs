use std::fmt::{self, Debug, Formatter};

use crate::{
    Graph,
    error::GraphError,
    graph::debug_assert_edge_mirrored,
    tracing_support::debug,
};

#[cfg(feature = "bitvec")]
mod bit_flags;
mod dense;
pub mod trait_def;

#[cfg(feature = "bitvec")]
pub use bit_flags::BitvecFlags;
pub use dense::DenseFlags;
pub use trait_def::FlagMatrix;

/// The flag storage used when none is named.
#[cfg(feature = "bitvec")]
pub type DefaultFlags = BitvecFlags;
/// The flag storage used when none is named.
#[cfg(not(feature = "bitvec"))]
pub type DefaultFlags = DenseFlags;

/// An undirected graph over the fixed vertex set `0..size`, storing one
/// edge flag per ordered pair of vertices.
///
/// The size is set at construction and never changes; vertices are neither
/// created nor removed.  Every edge sets two flags, `(from, to)` and
/// `(to, from)`, and a self-loop sets the single diagonal flag.  Neighbors
/// are reported in increasing index order.
///
/// # Type Parameters
/// * `S` - The flag storage ([`BitvecFlags`] by default, or [`DenseFlags`])
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrixGraph<S: FlagMatrix = DefaultFlags> {
    flags: S,
}

impl<S: FlagMatrix> AdjacencyMatrixGraph<S> {
    /// Creates a graph with `size` vertices and no edges.
    pub fn with_size(size: usize) -> Self {
        Self {
            flags: S::with_size(size),
        }
    }

    /// Removes every edge, keeping the vertex set.
    pub fn clear(&mut self) {
        self.flags.clear();
    }

    /// Gets the number of neighbors of a vertex, or `None` if the index is
    /// out of range.  A self-loop contributes one.
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.contains_vertex(vertex)
            .then(|| self.flags.ones_in_row(vertex).count())
    }

    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.flags.size()).flat_map(move |row| {
            self.flags
                .ones_in_row(row)
                .filter(move |&col| col >= row)
                .map(move |col| (row, col))
        })
    }
}

impl<S: FlagMatrix> Default for AdjacencyMatrixGraph<S> {
    fn default() -> Self {
        Self::with_size(0)
    }
}

impl<S: FlagMatrix> Graph for AdjacencyMatrixGraph<S> {
    type VertexId = usize;

    /// Returns `false` if either index is out of range.
    fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return false;
        }
        self.flags.set(from, to, true);
        self.flags.set(to, from, true);
        debug!(from, to, "added edge");
        debug_assert_edge_mirrored(self, from, to);
        true
    }

    /// Returns `false` only if either index is out of range; clearing an
    /// edge that was never added succeeds.
    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return false;
        }
        self.flags.set(from, to, false);
        self.flags.set(to, from, false);
        debug!(from, to, "removed edge");
        debug_assert_edge_mirrored(self, from, to);
        true
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.contains_vertex(from) && self.contains_vertex(to) && self.flags.get(from, to)
    }

    /// Every edge sets two flags except a self-loop, which sets one.
    fn num_edges(&self) -> usize {
        let self_loops = (0..self.flags.size())
            .filter(|&vertex| self.flags.get(vertex, vertex))
            .count();
        (self.flags.count_ones() + self_loops) / 2
    }

    fn vertex_ids(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.flags.size()
    }

    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.contains_vertex(vertex)
            .then(|| self.flags.ones_in_row(vertex))
            .into_iter()
            .flatten()
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.flags.size()
    }

    fn num_vertices(&self) -> usize {
        self.flags.size()
    }

    fn check_valid_vertex(&self, vertex: usize) -> Result<(), GraphError<usize>> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                size: self.flags.size(),
            })
        }
    }

    fn check_vertex_consistency(&self, vertex: usize) -> Result<(), GraphError<usize>> {
        self.check_valid_vertex(vertex)?;
        match self
            .flags
            .ones_in_row(vertex)
            .find(|&col| !self.flags.get(col, vertex))
        {
            Some(col) => Err(GraphError::AsymmetricEdge {
                from: vertex,
                to: col,
            }),
            None => Ok(()),
        }
    }
}

impl<S: FlagMatrix> Debug for AdjacencyMatrixGraph<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyMatrixGraph")
            .field("size", &self.flags.size())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}
