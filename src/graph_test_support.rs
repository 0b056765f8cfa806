use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use quickcheck::Arbitrary;

use crate::Graph;
use crate::tracing_support::{info_span, init_tracing};

/// An arbitrary graph description in terms of abstract vertex numbers
/// `0..num_vertices`, for use with
/// [`TestDataBuilder`](crate::graph_tests::TestDataBuilder).
#[derive(Debug, Clone)]
pub struct ArbEdges {
    pub num_vertices: usize,
    pub edges: Vec<(usize, usize)>,
}

impl Arbitrary for ArbEdges {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut edges = Vec::with_capacity(num_edges + num_extra_self_loops);
        if num_vertices > 0 {
            for _ in 0..num_edges {
                let from = usize::arbitrary(g) % num_vertices;
                let to = usize::arbitrary(g) % num_vertices;
                edges.push((from, to));
            }
            for _ in 0..num_extra_self_loops {
                let vertex = usize::arbitrary(g) % num_vertices;
                edges.push((vertex, vertex));
            }
        }

        ArbEdges {
            num_vertices,
            edges,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let num_vertices = self.num_vertices;
        Box::new(self.edges.shrink().map(move |edges| ArbEdges {
            num_vertices,
            edges,
        }))
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Counts the connected components of the graph with the given vertices and
/// edges using union-find.  Endpoints missing from `vertices` are ignored.
pub fn reference_component_count<V: Eq + Hash + Copy>(vertices: &[V], edges: &[(V, V)]) -> usize {
    fn find<V: Eq + Hash + Copy>(parent: &mut HashMap<V, V>, v: V) -> V {
        let mut root = v;
        while parent[&root] != root {
            root = parent[&root];
        }
        let mut current = v;
        while current != root {
            let next = parent[&current];
            parent.insert(current, root);
            current = next;
        }
        root
    }

    let mut parent: HashMap<V, V> = vertices.iter().map(|&v| (v, v)).collect();
    let mut count = parent.len();
    for &(a, b) in edges {
        if !parent.contains_key(&a) || !parent.contains_key(&b) {
            continue;
        }
        let (root_a, root_b) = (find(&mut parent, a), find(&mut parent, b));
        if root_a != root_b {
            parent.insert(root_a, root_b);
            count -= 1;
        }
    }
    count
}

/// Checks the internal consistency of a graph, panicking on the first
/// problem found.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();

    {
        let _span = info_span!("check_consistency").entered();
        assert_eq!(graph.check_consistency(), Ok(()));
    }

    // Verify all vertices are valid and unique
    assert!(!has_duplicates(graph.vertex_ids()));
    for vid in graph.vertex_ids() {
        assert_eq!(graph.check_valid_vertex(vid), Ok(()));
        assert!(!has_duplicates(graph.neighbors(vid)));
        for neighbor in graph.neighbors(vid) {
            assert!(graph.contains_vertex(neighbor));
            assert!(graph.has_edge(vid, neighbor));
            assert!(graph.has_edge(neighbor, vid));
        }
    }

    // Verify counts are correct
    assert_eq!(graph.vertex_ids().count(), graph.num_vertices());
    let mut pairs = HashSet::new();
    for vid in graph.vertex_ids() {
        for neighbor in graph.neighbors(vid) {
            pairs.insert((vid.min(neighbor), vid.max(neighbor)));
        }
    }
    assert_eq!(pairs.len(), graph.num_edges());

    // Check is_empty consistency
    assert_eq!(graph.is_empty(), graph.num_vertices() == 0);

    // If there are edges, there must be vertices
    assert!(graph.num_vertices() > 0 || graph.num_edges() == 0);
}
