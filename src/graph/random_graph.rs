use rand::Rng;

use super::node::NodeId;

/// An edge between two nodes
/// Invariant: always stored in canonical form with from < to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    /// Create a new edge, automatically ordering nodes
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Edge { from: a, to: b }
        } else {
            Edge { from: b, to: a }
        }
    }

    /// Check if this edge contains a given node
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

/// An undirected simple graph over nodes `0..node_count`.
/// Immutable once generated; a puzzle keeps the same topology for its
/// whole lifetime.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<Edge>,
}

impl RandomGraph {
    /// Generate a G(n, p) random graph: each unordered pair of nodes
    /// becomes an edge independently with probability `edge_probability`.
    pub fn generate<R: Rng + ?Sized>(
        node_count: usize,
        edge_probability: f64,
        rng: &mut R,
    ) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        let mut edges = Vec::new();

        for i in 0..node_count {
            for j in (i + 1)..node_count {
                if rng.random_bool(edge_probability) {
                    adjacency[i].push(NodeId(j));
                    adjacency[j].push(NodeId(i));
                    edges.push(Edge::new(NodeId(i), NodeId(j)));
                }
            }
        }

        RandomGraph { adjacency, edges }
    }

    /// Build a fixed topology from explicit node pairs. Self loops are
    /// rejected; duplicate pairs collapse to one edge.
    pub fn from_edges(node_count: usize, pairs: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        let mut edges: Vec<Edge> = Vec::new();

        for &(a, b) in pairs {
            assert!(a < node_count && b < node_count, "edge endpoint out of range");
            assert_ne!(a, b, "self loops are not allowed");

            let edge = Edge::new(NodeId(a), NodeId(b));
            if edges.contains(&edge) {
                continue;
            }
            edges.push(edge);
            adjacency[a].push(NodeId(b));
            adjacency[b].push(NodeId(a));
        }

        RandomGraph { adjacency, edges }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the given id names a node of this graph
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    /// Get all neighbors of a node
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node.index()]
    }

    /// Check if two nodes are adjacent
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        self.adjacency[a.index()].contains(&b)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges incident to a node
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node.index()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_edge_canonical_form() {
        let e1 = Edge::new(NodeId(1), NodeId(3));
        let e2 = Edge::new(NodeId(3), NodeId(1));

        assert_eq!(e1, e2, "Edges should be equal regardless of order");
        assert_eq!(e1.from, NodeId(1));
        assert_eq!(e1.to, NodeId(3));
    }

    #[test]
    fn test_edge_contains_node() {
        let edge = Edge::new(NodeId(1), NodeId(3));

        assert!(edge.contains_node(NodeId(1)));
        assert!(edge.contains_node(NodeId(3)));
        assert!(!edge.contains_node(NodeId(2)));
    }

    #[test]
    fn test_generate_no_edges_at_p_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = RandomGraph::generate(8, 0.0, &mut rng);

        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), 0);
        for i in 0..8 {
            assert!(graph.neighbors(NodeId(i)).is_empty());
        }
    }

    #[test]
    fn test_generate_complete_at_p_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = RandomGraph::generate(6, 1.0, &mut rng);

        assert_eq!(graph.edge_count(), 6 * 5 / 2);
        for i in 0..6 {
            assert_eq!(graph.degree(NodeId(i)), 5);
        }
    }

    #[test]
    fn test_generate_adjacency_is_symmetric_and_simple() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = RandomGraph::generate(10, 0.5, &mut rng);

        for i in 0..10 {
            let node = NodeId(i);
            assert!(!graph.are_adjacent(node, node), "no self loops");

            // No duplicate neighbors
            let mut seen = graph.neighbors(node).to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), graph.neighbors(node).len());

            for j in 0..10 {
                let other = NodeId(j);
                assert_eq!(
                    graph.are_adjacent(node, other),
                    graph.are_adjacent(other, node),
                    "Adjacency should be symmetric"
                );
            }
        }
    }

    #[test]
    fn test_from_edges() {
        let graph = RandomGraph::from_edges(4, &[(0, 1), (1, 0), (2, 3)]);

        assert_eq!(graph.edge_count(), 2, "duplicate pair collapses");
        assert!(graph.are_adjacent(NodeId(0), NodeId(1)));
        assert!(graph.are_adjacent(NodeId(2), NodeId(3)));
        assert!(!graph.are_adjacent(NodeId(0), NodeId(2)));
    }

    #[test]
    fn test_contains() {
        let graph = RandomGraph::from_edges(3, &[(0, 1)]);

        assert!(graph.contains(NodeId(0)));
        assert!(graph.contains(NodeId(2)));
        assert!(!graph.contains(NodeId(3)));
    }
}
