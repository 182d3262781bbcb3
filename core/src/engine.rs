use crate::graph::Graph;
use crate::index::NodeId;
use crate::{query, traversal};

/// The query surface of a loaded sparse graph.
///
/// Every method is read-only and total: unknown nodes produce empty or zero
/// results rather than errors.
pub trait SparseGraph {
    /// BFS emission order from `start`. A negative `max_depth` is unbounded.
    fn bfs(&self, start: NodeId, max_depth: i64) -> Vec<NodeId>;
    fn dfs(&self, start: NodeId) -> Vec<NodeId>;
    fn degree(&self, node: NodeId) -> usize;
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;
    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    /// `None` only for an empty graph.
    fn max_degree_node(&self) -> Option<NodeId>;
    fn induced_subgraph_edges(&self, nodes: &[NodeId]) -> Vec<(NodeId, NodeId)>;
    fn estimated_memory_bytes(&self) -> usize;
}

impl SparseGraph for Graph {
    fn bfs(&self, start: NodeId, max_depth: i64) -> Vec<NodeId> {
        traversal::bfs(self, start, traversal::depth_limit(max_depth))
    }

    fn dfs(&self, start: NodeId) -> Vec<NodeId> {
        traversal::dfs(self, start)
    }

    fn degree(&self, node: NodeId) -> usize {
        Graph::degree(self, node)
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        Graph::neighbors(self, node)
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }

    fn max_degree_node(&self) -> Option<NodeId> {
        query::max_degree_node(self)
    }

    fn induced_subgraph_edges(&self, nodes: &[NodeId]) -> Vec<(NodeId, NodeId)> {
        query::induced_subgraph_edges(self, nodes)
    }

    fn estimated_memory_bytes(&self) -> usize {
        self.memory_usage()
    }
}
