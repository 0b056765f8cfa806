//! [`Graph`] is the contract shared by every graph representation in this
//! library.  Implementations supply storage-level primitives (adding and
//! removing edges, enumerating vertices and neighbors); traversal and
//! connectivity are provided as default methods written against those
//! primitives, so all representations agree on them.
//!
//! This module provides:
//!
//! - [`VertexId`] trait: marker for types usable as vertex identifiers
//! - [`Graph`] trait: the shared capability set for undirected graphs
//!
//! # Features
//!
//! - Depth-first traversal with an explicit stack, see [`DfsIterator`]
//! - Connected components, with a cross-check through the `pathfinding`
//!   crate when the `pathfinding` feature is enabled
//! - On-demand invariant checks returning [`GraphError`]
use std::{collections::HashSet, fmt::Debug, hash::Hash};

use crate::error::GraphError;
use crate::search::DfsIterator;
use crate::tracing_support::info_span;

/// A trait for types that identify a vertex.
///
/// The adjacency-list graph identifies vertices by their integer payload,
/// the adjacency-matrix graph by their row index.
pub trait VertexId: Eq + Hash + Copy + Debug + Ord {}

impl VertexId for i32 {}
impl VertexId for usize {}

/// An undirected, unweighted graph.
///
/// Methods that return iterators over vertices return them in the
/// representation's natural order: creation order for adjacency lists,
/// index order for adjacency matrices.
///
/// Implementations must keep every edge symmetric: if `b` is among the
/// neighbors of `a`, then `a` is among the neighbors of `b`.  A self-loop
/// makes a vertex its own neighbor, listed once.
pub trait Graph: Sized {
    type VertexId: VertexId;

    // Edges

    /// Adds an undirected edge between two vertices.  Returns `false` if the
    /// edge cannot be stored, e.g. because an endpoint is outside the
    /// representation's vertex range.  Adding an existing edge again is a
    /// no-op that returns `true`.
    fn add_edge(&mut self, from: Self::VertexId, to: Self::VertexId) -> bool;

    /// Removes the undirected edge between two vertices.  Returns `false`
    /// when an endpoint is not a vertex of the graph; representation-specific
    /// rules decide what happens when both exist but are not adjacent.
    fn remove_edge(&mut self, from: Self::VertexId, to: Self::VertexId) -> bool;

    /// Checks whether two vertices are adjacent.
    fn has_edge(&self, from: Self::VertexId, to: Self::VertexId) -> bool {
        self.contains_vertex(from) && self.neighbors(from).any(|n| n == to)
    }

    /// Gets the number of distinct edges.  A self-loop counts once.
    fn num_edges(&self) -> usize {
        let mut count = 0;
        for vid in self.vertex_ids() {
            count += self.neighbors(vid).filter(|&n| n >= vid).count();
        }
        count
    }

    // Vertices

    /// Gets an iterator over every vertex in the graph.
    fn vertex_ids(&self) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Gets an iterator over the vertices adjacent to `vertex`.  Yields
    /// nothing if `vertex` is not in the graph.
    fn neighbors(&self, vertex: Self::VertexId) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Checks whether `vertex` is part of the graph.
    fn contains_vertex(&self, vertex: Self::VertexId) -> bool;

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize {
        self.vertex_ids().count()
    }

    /// Returns true if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Checks if a vertex is valid in the graph, returning the reason if it
    /// is not.
    fn check_valid_vertex(
        &self,
        vertex: Self::VertexId,
    ) -> Result<(), GraphError<Self::VertexId>> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(vertex))
        }
    }

    /// Panics if the given vertex is not valid in the graph, according to
    /// [`Self::check_valid_vertex`].
    fn assert_valid_vertex(&self, vertex: Self::VertexId) {
        if let Err(reason) = self.check_valid_vertex(vertex) {
            panic!("Invalid vertex: {}", reason);
        }
    }

    /// Checks the invariants local to one vertex: its neighbors are
    /// distinct and each of them lists it back.
    fn check_vertex_consistency(
        &self,
        vertex: Self::VertexId,
    ) -> Result<(), GraphError<Self::VertexId>> {
        let mut seen = HashSet::new();
        for neighbor in self.neighbors(vertex) {
            if !seen.insert(neighbor) {
                return Err(GraphError::DuplicateNeighbor { vertex, neighbor });
            }
            if !self.neighbors(neighbor).any(|n| n == vertex) {
                return Err(GraphError::AsymmetricEdge {
                    from: vertex,
                    to: neighbor,
                });
            }
        }
        Ok(())
    }

    /// Checks the structural invariants of the whole graph.  The default
    /// checks every vertex with [`Self::check_vertex_consistency`];
    /// representations with more internal state should extend it.
    fn check_consistency(&self) -> Result<(), GraphError<Self::VertexId>> {
        self.vertex_ids()
            .try_for_each(|vid| self.check_vertex_consistency(vid))
    }

    // Searches

    /// Performs a depth-first search starting from the given vertex.  The
    /// caller is responsible for passing a vertex of this graph.
    fn dfs(&self, start: Self::VertexId) -> DfsIterator<'_, Self> {
        self.dfs_multi(vec![start])
    }

    /// Performs a depth-first search starting from each of the given
    /// vertices in turn, never visiting a vertex twice.
    fn dfs_multi(&self, start: Vec<Self::VertexId>) -> DfsIterator<'_, Self> {
        DfsIterator::new(self, start)
    }

    /// Lists the vertices reachable from `start` in depth-first pre-order,
    /// taking neighbors in [`Self::neighbors`] order.  Returns `None` when
    /// `start` is not a vertex; an isolated vertex yields just itself.
    fn depth_first_search(&self, start: Self::VertexId) -> Option<Vec<Self::VertexId>> {
        if !self.contains_vertex(start) {
            return None;
        }
        let _span = info_span!("depth_first_search").entered();
        Some(self.dfs(start).collect())
    }

    /// Partitions the graph into connected components.  Components appear in
    /// the order of their first vertex in [`Self::vertex_ids`]; each lists its
    /// vertices in depth-first order.
    fn connected_components(&self) -> Vec<Vec<Self::VertexId>> {
        let _span = info_span!("connected_components").entered();
        let mut covered = HashSet::with_capacity(self.num_vertices());
        let mut components = Vec::new();
        for vid in self.vertex_ids() {
            if covered.contains(&vid) {
                continue;
            }
            let component: Vec<_> = self.dfs(vid).collect();
            covered.extend(component.iter().copied());
            components.push(component);
        }
        components
    }

    /// Counts the connected components.  The empty graph has none.
    fn count_connected_components(&self) -> usize {
        let _span = info_span!("count_connected_components").entered();
        let mut covered = HashSet::with_capacity(self.num_vertices());
        let mut count = 0;
        for vid in self.vertex_ids() {
            if covered.insert(vid) {
                covered.extend(self.dfs(vid).skip(1));
                count += 1;
            }
        }
        count
    }

    /// Partitions the graph into connected components using the
    /// `pathfinding` crate.
    #[cfg(feature = "pathfinding")]
    fn connected_component_sets(&self) -> Vec<HashSet<Self::VertexId>> {
        pathfinding::prelude::connected_components(
            &self.vertex_ids().collect::<Vec<_>>(),
            |&vid| self.neighbors(vid).collect::<Vec<_>>(),
        )
    }
}

/// Panics if `from` and `to` disagree about whether they are adjacent.
/// Mutations call this on the pair they touched; it is compiled out of
/// release builds and builds with the `unchecked` feature.
pub(crate) fn debug_assert_edge_mirrored<G: Graph>(
    graph: &G,
    from: G::VertexId,
    to: G::VertexId,
) {
    #[cfg(all(debug_assertions, not(feature = "unchecked")))]
    {
        assert_eq!(
            graph.has_edge(from, to),
            graph.has_edge(to, from),
            "Inconsistent graph: edge {from:?} -- {to:?} is only recorded on one side"
        );
    }
    #[cfg(not(all(debug_assertions, not(feature = "unchecked"))))]
    {
        let _ = (graph, from, to);
    }
}
