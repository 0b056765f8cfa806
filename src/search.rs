use std::collections::HashSet;

use derivative::Derivative;

use crate::Graph;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Depth-first traversal over a [`Graph`], yielding vertices in pre-order.
///
/// Uses an explicit stack rather than recursion, so long paths cannot
/// exhaust the call stack.  Neighbors are pushed in reverse and the visited
/// check happens on pop, which reproduces the visit order of the recursive
/// formulation: a vertex, then each unvisited neighbor's subtree in
/// [`Graph::neighbors`] order.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::VertexId>,
    stack: Vec<G::VertexId>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::VertexId>) -> Self {
        let mut stack = start;
        stack.reverse();
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        }
    }

    /// Gets the vertices yielded so far.
    pub fn visited(&self) -> &HashSet<G::VertexId> {
        &self.visited
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vid) = self.stack.pop() {
            if self.visited.insert(vid) {
                let start = self.stack.len();
                self.stack.extend(
                    self.graph
                        .neighbors(vid)
                        .filter(|neighbor| !self.visited.contains(neighbor)),
                );
                self.stack[start..].reverse();
                return Some(vid);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::adjacency_list::AdjacencyListGraph;

    use super::*;

    fn create_simple_graph() -> AdjacencyListGraph {
        [(0, 1), (0, 2), (1, 3)].into_iter().collect()
    }

    fn create_cyclic_graph() -> AdjacencyListGraph {
        [(0, 1), (1, 2), (2, 0)].into_iter().collect()
    }

    #[test]
    fn test_dfs_simple_graph() {
        let graph = create_simple_graph();
        let visited: Vec<_> = DfsIterator::new(&graph, vec![0]).collect();
        assert_eq!(visited, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_dfs_visits_all_reachable() {
        let graph = create_simple_graph();
        let visited: HashSet<_> = DfsIterator::new(&graph, vec![3]).collect();
        assert_eq!(visited, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_dfs_empty_start() {
        let graph = create_simple_graph();
        let visited: Vec<_> = DfsIterator::new(&graph, vec![]).collect();
        assert_eq!(visited.len(), 0);
    }

    #[test]
    fn test_dfs_multiple_start_nodes() {
        let mut graph = create_simple_graph();
        graph.add_edge(7, 8);
        let visited: Vec<_> = DfsIterator::new(&graph, vec![7, 1, 0]).collect();
        assert_eq!(visited, vec![7, 8, 1, 0, 2, 3]);
    }

    #[test]
    fn test_dfs_handles_cycles() {
        let graph = create_cyclic_graph();
        let visited: Vec<_> = DfsIterator::new(&graph, vec![0]).collect();
        assert_eq!(visited, vec![0, 1, 2]);
    }

    #[test]
    fn test_dfs_self_loop_visits_once() {
        let mut graph = AdjacencyListGraph::new();
        graph.add_edge(4, 4);
        let visited: Vec<_> = DfsIterator::new(&graph, vec![4]).collect();
        assert_eq!(visited, vec![4]);
    }

    #[test]
    fn test_dfs_clone_resumes_independently() {
        let graph = create_simple_graph();
        let mut iter = DfsIterator::new(&graph, vec![0]);
        assert_eq!(iter.next(), Some(0));
        let copy = iter.clone();
        assert_eq!(iter.visited(), &HashSet::from([0]));
        assert_eq!(copy.collect::<Vec<_>>(), vec![1, 3, 2]);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 3, 2]);
    }
}
