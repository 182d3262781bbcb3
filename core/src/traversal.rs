use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::index::{NodeId, NodeIndex};
use crate::query::induced_subgraph_edges;

/// A node emitted by BFS, with its hop distance from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeighborResult {
    pub node_id: NodeId,
    pub distance: u32,
}

/// Result of a BFS traversal. `neighbors` is in emission order and starts
/// with the start node itself at distance 0.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraversalResult {
    pub neighbors: Vec<NeighborResult>,
    pub nodes_visited: usize,
}

/// Node set reached by a bounded BFS together with the edges it induces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubgraphResult {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Map the signed depth convention (any negative value = unbounded) onto
/// `Option<u32>`.
pub fn depth_limit(max_depth: i64) -> Option<u32> {
    if max_depth < 0 {
        None
    } else {
        Some(u32::try_from(max_depth).unwrap_or(u32::MAX))
    }
}

/// Breadth-first traversal from `start`, following edges in their stored
/// direction.
///
/// A node at exactly `max_depth` is emitted but not expanded; `None` means
/// unbounded. Neighbors are queued in CSR order, so the result is
/// deterministic. Each node is queued at most once, at its minimum distance.
/// An unknown start yields an empty result.
pub fn bfs_neighborhood(graph: &Graph, start: NodeId, max_depth: Option<u32>) -> TraversalResult {
    let Some(start_idx) = graph.index_of(start) else {
        debug!(start, "bfs start node not in graph");
        return TraversalResult::default();
    };
    let timer = Instant::now();
    let csr = graph.csr();

    let mut queued = vec![false; graph.node_count()];
    let mut queue: VecDeque<(NodeIndex, u32)> = VecDeque::new();
    let mut neighbors = Vec::new();

    queued[start_idx as usize] = true;
    queue.push_back((start_idx, 0));

    while let Some((current, depth)) = queue.pop_front() {
        neighbors.push(NeighborResult {
            node_id: node_id(graph, current),
            distance: depth,
        });

        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for &next in csr.row(current) {
            if !queued[next as usize] {
                queued[next as usize] = true;
                queue.push_back((next, depth + 1));
            }
        }
    }

    debug!(
        start,
        max_depth = ?max_depth,
        found = neighbors.len(),
        elapsed_us = timer.elapsed().as_micros() as u64,
        "bfs complete"
    );

    let nodes_visited = neighbors.len();
    TraversalResult {
        neighbors,
        nodes_visited,
    }
}

/// BFS returning only the ids, in emission order.
pub fn bfs(graph: &Graph, start: NodeId, max_depth: Option<u32>) -> Vec<NodeId> {
    bfs_neighborhood(graph, start, max_depth)
        .neighbors
        .into_iter()
        .map(|n| n.node_id)
        .collect()
}

/// Iterative depth-first traversal from `start`.
///
/// Neighbors are pushed in descending index order so they pop in ascending
/// order. A node may sit on the stack more than once; only the first pop of
/// an unvisited node emits it. An unknown start yields an empty result.
pub fn dfs(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let Some(start_idx) = graph.index_of(start) else {
        debug!(start, "dfs start node not in graph");
        return Vec::new();
    };
    let timer = Instant::now();
    let csr = graph.csr();

    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<NodeIndex> = vec![start_idx];
    let mut result = Vec::new();

    while let Some(current) = stack.pop() {
        if visited[current as usize] {
            continue;
        }
        visited[current as usize] = true;
        result.push(node_id(graph, current));

        for &next in csr.row(current).iter().rev() {
            if !visited[next as usize] {
                stack.push(next);
            }
        }
    }

    debug!(
        start,
        visited = result.len(),
        elapsed_us = timer.elapsed().as_micros() as u64,
        "dfs complete"
    );
    result
}

/// Bounded BFS from `start`, then the edges induced by the reached node set.
///
/// Edges come out grouped by source in BFS emission order.
pub fn extract_subgraph(graph: &Graph, start: NodeId, max_depth: Option<u32>) -> SubgraphResult {
    let nodes = bfs(graph, start, max_depth);
    let edges = induced_subgraph_edges(graph, &nodes);
    SubgraphResult { nodes, edges }
}

fn node_id(graph: &Graph, index: NodeIndex) -> NodeId {
    graph.node_ids()[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chain(n: i64) -> Graph {
        Graph::from_edges((1..n).map(|i| (i, i + 1))).unwrap()
    }

    fn make_star(center: i64, leaves: i64) -> Graph {
        Graph::from_edges((1..=leaves).map(|i| (center, center + i))).unwrap()
    }

    fn make_cycle(n: i64) -> Graph {
        Graph::from_edges((0..n).map(|i| (i, (i + 1) % n))).unwrap()
    }

    // --- BFS tests ---

    #[test]
    fn test_bfs_chain_bounded() {
        let g = make_chain(4);
        assert_eq!(bfs(&g, 1, Some(1)), vec![1, 2]);
        assert_eq!(bfs(&g, 1, None), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bfs_distances() {
        let g = make_chain(6);
        let result = bfs_neighborhood(&g, 1, None);
        assert_eq!(result.nodes_visited, 6);
        for (i, n) in result.neighbors.iter().enumerate() {
            assert_eq!(n.node_id, i as i64 + 1);
            assert_eq!(n.distance, i as u32);
        }
    }

    #[test]
    fn test_bfs_depth_zero() {
        let g = make_chain(5);
        // Depth 0 = only the start node
        assert_eq!(bfs(&g, 1, Some(0)), vec![1]);
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(0, 100);
        let result = bfs_neighborhood(&g, 0, Some(1));
        assert_eq!(result.nodes_visited, 101);
        assert!(result.neighbors[1..].iter().all(|n| n.distance == 1));
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(5);
        assert_eq!(bfs(&g, 0, Some(100)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_bfs_follows_direction() {
        let g = make_chain(4);
        assert_eq!(bfs(&g, 4, None), vec![4]);
        assert_eq!(bfs(&g, 3, None), vec![3, 4]);
    }

    #[test]
    fn test_bfs_unknown_start() {
        let g = make_chain(3);
        assert!(bfs(&g, 99, None).is_empty());
        assert_eq!(bfs_neighborhood(&g, 99, Some(3)).nodes_visited, 0);
    }

    #[test]
    fn test_bfs_empty_graph() {
        let g = Graph::new();
        assert!(bfs(&g, 0, None).is_empty());
    }

    #[test]
    fn test_bfs_self_loop_and_parallel_edges() {
        let g = Graph::from_edges(vec![(0, 0), (0, 1), (0, 1), (0, 1)]).unwrap();
        assert_eq!(bfs(&g, 0, None), vec![0, 1]);
    }

    #[test]
    fn test_bfs_tie_order_is_csr_order() {
        // Interning order: 1, 9, 5, 3, so row of 1 sorts to [9, 5, 3].
        let g = Graph::from_edges(vec![(1, 9), (1, 5), (1, 3)]).unwrap();
        assert_eq!(bfs(&g, 1, Some(1)), vec![1, 9, 5, 3]);
    }

    #[test]
    fn test_bfs_diamond_min_distance() {
        // 1→2, 1→3, 2→4, 3→4, 4→5
        let g = Graph::from_edges(vec![(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]).unwrap();
        let result = bfs_neighborhood(&g, 1, None);
        let four = result.neighbors.iter().find(|n| n.node_id == 4).unwrap();
        assert_eq!(four.distance, 2);
        assert_eq!(bfs(&g, 1, Some(2)), vec![1, 2, 3, 4]);
    }

    // --- DFS tests ---

    #[test]
    fn test_dfs_chain() {
        let g = make_chain(5);
        assert_eq!(dfs(&g, 1), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dfs_ascending_order() {
        // 1→2, 1→3, 2→4, 3→5: left subtree fully before right
        let g = Graph::from_edges(vec![(1, 2), (1, 3), (2, 4), (3, 5)]).unwrap();
        assert_eq!(dfs(&g, 1), vec![1, 2, 4, 3, 5]);
    }

    #[test]
    fn test_dfs_duplicate_stack_entries_skipped() {
        // 3 is pushed from 1 and again from 2; emitted once.
        let g = Graph::from_edges(vec![(1, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(dfs(&g, 1), vec![1, 2, 3]);
    }

    #[test]
    fn test_dfs_cycle() {
        let g = make_cycle(4);
        assert_eq!(dfs(&g, 2), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_dfs_unknown_start() {
        let g = make_chain(3);
        assert!(dfs(&g, 42).is_empty());
    }

    #[test]
    fn test_dfs_reachable_only() {
        let g = Graph::from_edges(vec![(1, 2), (3, 1)]).unwrap();
        assert_eq!(dfs(&g, 1), vec![1, 2]);
    }

    // --- Depth convention ---

    #[test]
    fn test_depth_limit() {
        assert_eq!(depth_limit(-1), None);
        assert_eq!(depth_limit(-50), None);
        assert_eq!(depth_limit(0), Some(0));
        assert_eq!(depth_limit(3), Some(3));
        assert_eq!(depth_limit(i64::MAX), Some(u32::MAX));
    }

    // --- Subgraph extraction ---

    #[test]
    fn test_subgraph_chain() {
        let g = make_chain(5);
        let sub = extract_subgraph(&g, 1, Some(2));
        assert_eq!(sub.nodes, vec![1, 2, 3]);
        assert_eq!(sub.edges, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_subgraph_cycle_closes() {
        let g = make_cycle(5);
        let sub = extract_subgraph(&g, 0, None);
        assert_eq!(sub.nodes.len(), 5);
        assert_eq!(sub.edges.len(), 5);
    }

    #[test]
    fn test_subgraph_unknown_start() {
        let g = make_chain(5);
        let sub = extract_subgraph(&g, 999, Some(5));
        assert!(sub.nodes.is_empty());
        assert!(sub.edges.is_empty());
    }
}
