use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
};

use derivative::Derivative;
use indexmap::IndexSet;

use crate::{
    Graph,
    error::GraphError,
    graph::debug_assert_edge_mirrored,
    tracing_support::{debug, info_span},
};

/// A vertex record: the payload and the set of its neighbors' payloads, in
/// the order the edges were added.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Vertex {
    data: i32,
    adjacent: IndexSet<i32>,
}

impl Vertex {
    fn new(data: i32) -> Self {
        Self {
            data,
            adjacent: IndexSet::new(),
        }
    }

    /// Adds `other` as a neighbor unless it already is one.
    fn add_adjacent(&mut self, other: i32) {
        self.adjacent.insert(other);
    }

    /// Removes `other` from the neighbors, returning whether it was present.
    /// The remaining neighbors keep their order.
    fn remove_adjacent(&mut self, other: i32) -> bool {
        self.adjacent.shift_remove(&other)
    }
}

/// An undirected graph storing, for each vertex, a list of its neighbors.
///
/// Vertices are identified by their `i32` payload and are created on first
/// mention by [`Graph::add_edge`].  They are kept in creation order, which
/// is the order of [`Graph::vertex_ids`]; neighbors are kept in the order
/// their edges were added, which is the order [`Graph::depth_first_search`]
/// follows.
///
/// Adding an edge that already exists is a no-op.  Self-loops are allowed
/// and make a vertex its own (single) neighbor.
#[derive(Clone, Default, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct AdjacencyListGraph {
    vertices: Vec<Vertex>,
    #[derivative(PartialEq = "ignore")]
    index: HashMap<i32, usize>,
}

impl AdjacencyListGraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn vertex(&self, data: i32) -> Option<&Vertex> {
        self.index.get(&data).map(|&pos| &self.vertices[pos])
    }

    fn vertex_mut(&mut self, data: i32) -> Option<&mut Vertex> {
        self.index.get(&data).map(|&pos| &mut self.vertices[pos])
    }

    /// Gets the position of the vertex with the given payload, appending a
    /// new vertex if there is none.
    fn find_or_insert(&mut self, data: i32) -> usize {
        if let Some(&pos) = self.index.get(&data) {
            return pos;
        }
        let pos = self.vertices.len();
        self.vertices.push(Vertex::new(data));
        self.index.insert(data, pos);
        debug!(vertex = data, "created vertex");
        pos
    }

    /// Removes a vertex and every edge touching it.  Returns `false` if
    /// there is no such vertex.
    ///
    /// Edges are detached one at a time, re-reading the neighbor list after
    /// each removal, before the vertex record itself is dropped, so no
    /// neighbor is left pointing at a vertex that no longer exists.
    pub fn remove_vertex(&mut self, vertex: i32) -> bool {
        let _span = info_span!("remove_vertex").entered();
        let Some(&pos) = self.index.get(&vertex) else {
            return false;
        };
        while let Some(&neighbor) = self.vertices[pos].adjacent.last() {
            let removed = self.remove_edge(vertex, neighbor);
            debug_assert!(removed, "neighbor {neighbor} of {vertex} had no edge back");
        }
        self.vertices.remove(pos);
        self.index.remove(&vertex);
        for (i, v) in self.vertices.iter().enumerate().skip(pos) {
            self.index.insert(v.data, i);
        }
        debug_assert_eq!(self.index.len(), self.vertices.len());
        debug!(vertex, "removed vertex");
        true
    }

    /// Gets the number of neighbors of a vertex, or `None` if there is no
    /// such vertex.  A self-loop contributes one.
    pub fn degree(&self, vertex: i32) -> Option<usize> {
        self.vertex(vertex).map(|v| v.adjacent.len())
    }
}

impl Graph for AdjacencyListGraph {
    type VertexId = i32;

    fn add_edge(&mut self, from: i32, to: i32) -> bool {
        let from_pos = self.find_or_insert(from);
        let to_pos = self.find_or_insert(to);
        self.vertices[from_pos].add_adjacent(to);
        self.vertices[to_pos].add_adjacent(from);
        debug!(from, to, "added edge");
        debug_assert_edge_mirrored(self, from, to);
        true
    }

    /// Returns `false` if either endpoint is missing, the two are not
    /// adjacent, or the edge was only recorded on the `from` side.
    fn remove_edge(&mut self, from: i32, to: i32) -> bool {
        if !self.contains_vertex(to) {
            return false;
        }
        let Some(from_v) = self.vertex_mut(from) else {
            return false;
        };
        if !from_v.remove_adjacent(to) {
            return false;
        }
        let removed_back =
            from == to || self.vertex_mut(to).is_some_and(|to_v| to_v.remove_adjacent(from));
        if !removed_back {
            debug!(from, to, "edge was missing its reverse side");
            return false;
        }
        debug!(from, to, "removed edge");
        debug_assert_edge_mirrored(self, from, to);
        true
    }

    fn has_edge(&self, from: i32, to: i32) -> bool {
        self.vertex(from).is_some_and(|v| v.adjacent.contains(&to))
    }

    fn vertex_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.vertices.iter().map(|v| v.data)
    }

    fn neighbors(&self, vertex: i32) -> impl Iterator<Item = i32> + '_ {
        self.vertex(vertex)
            .into_iter()
            .flat_map(|v| v.adjacent.iter().copied())
    }

    fn contains_vertex(&self, vertex: i32) -> bool {
        self.index.contains_key(&vertex)
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn check_consistency(&self) -> Result<(), GraphError<i32>> {
        if self.index.len() != self.vertices.len() {
            return Err(GraphError::VertexCountMismatch {
                counted: self.index.len(),
                stored: self.vertices.len(),
            });
        }
        for (pos, v) in self.vertices.iter().enumerate() {
            if self.index.get(&v.data) != Some(&pos) {
                return Err(GraphError::StaleIndex(v.data));
            }
            self.check_vertex_consistency(v.data)?;
        }
        Ok(())
    }
}

impl Extend<(i32, i32)> for AdjacencyListGraph {
    fn extend<T: IntoIterator<Item = (i32, i32)>>(&mut self, edges: T) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl FromIterator<(i32, i32)> for AdjacencyListGraph {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(edges: T) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

impl Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.vertices
                    .iter()
                    .map(|v| (v.data, v.adjacent.iter().collect::<Vec<_>>())),
            )
            .finish()
    }
}
