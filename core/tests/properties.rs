use std::collections::{HashMap, HashSet, VecDeque};

use csr_graph_core::{
    bfs, bfs_neighborhood, dfs, induced_subgraph_edges, max_degree_node, Graph, NodeId,
};
use proptest::prelude::*;

fn edge_lists() -> impl Strategy<Value = Vec<(NodeId, NodeId)>> {
    prop::collection::vec((-20i64..20, -20i64..20), 0..80)
}

/// Shortest hop distances from `start` over the raw edge list.
fn reference_distances(edges: &[(NodeId, NodeId)], start: NodeId) -> HashMap<NodeId, u32> {
    let mut adj: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for &(f, t) in edges {
        adj.entry(f).or_default().push(t);
    }
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(n) = queue.pop_front() {
        let d = dist[&n];
        for &m in adj.get(&n).map(|v| v.as_slice()).unwrap_or(&[]) {
            if !dist.contains_key(&m) {
                dist.insert(m, d + 1);
                queue.push_back(m);
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn bijection_holds(edges in edge_lists()) {
        let g = Graph::from_edges(edges.clone()).unwrap();
        let distinct: HashSet<NodeId> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        prop_assert_eq!(g.node_count(), distinct.len());
        for &id in &distinct {
            let i = g.index_of(id).unwrap();
            prop_assert!((i as usize) < g.node_count());
            prop_assert_eq!(g.id_of(i), Some(id));
        }
    }

    #[test]
    fn degree_sum_equals_edge_count(edges in edge_lists()) {
        let g = Graph::from_edges(edges.clone()).unwrap();
        let total: usize = g.node_ids().iter().map(|&id| g.degree(id)).sum();
        prop_assert_eq!(total, g.edge_count());
        prop_assert_eq!(g.edge_count(), edges.len());
    }

    #[test]
    fn csr_well_formed(edges in edge_lists()) {
        let g = Graph::from_edges(edges).unwrap();
        let csr = g.csr();
        let row_ptr = csr.row_ptr();
        prop_assert_eq!(row_ptr.len(), g.node_count() + 1);
        prop_assert_eq!(row_ptr[0], 0);
        prop_assert_eq!(row_ptr[g.node_count()], g.edge_count());
        prop_assert!(row_ptr.windows(2).all(|w| w[0] <= w[1]));
        for i in 0..g.node_count() as u32 {
            let row = csr.row(i);
            prop_assert!(row.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(row.iter().all(|&n| (n as usize) < g.node_count()));
        }
        prop_assert!(csr.values().iter().all(|&v| v == 1));
    }

    #[test]
    fn bfs_respects_depth_bound(edges in edge_lists(), start in -20i64..20, depth in 0u32..5) {
        let g = Graph::from_edges(edges.clone()).unwrap();
        let result = bfs_neighborhood(&g, start, Some(depth));
        if !g.contains(start) {
            prop_assert!(result.neighbors.is_empty());
            return Ok(());
        }
        let expected = reference_distances(&edges, start);
        let within: HashSet<NodeId> = expected
            .iter()
            .filter(|&(_, &d)| d <= depth)
            .map(|(&id, _)| id)
            .collect();
        let emitted: HashSet<NodeId> = result.neighbors.iter().map(|n| n.node_id).collect();
        prop_assert_eq!(emitted.len(), result.neighbors.len());
        prop_assert_eq!(&emitted, &within);
        for n in &result.neighbors {
            prop_assert_eq!(n.distance, expected[&n.node_id]);
        }
    }

    #[test]
    fn dfs_visits_reachable_once(edges in edge_lists(), start in -20i64..20) {
        let g = Graph::from_edges(edges.clone()).unwrap();
        let order = dfs(&g, start);
        if !g.contains(start) {
            prop_assert!(order.is_empty());
            return Ok(());
        }
        let reachable = reference_distances(&edges, start);
        let seen: HashSet<NodeId> = order.iter().copied().collect();
        prop_assert_eq!(seen.len(), order.len());
        prop_assert_eq!(order.len(), reachable.len());
        prop_assert_eq!(order[0], start);
        prop_assert_eq!(bfs(&g, start, None).len(), reachable.len());
    }

    #[test]
    fn queries_are_idempotent(edges in edge_lists(), node in -20i64..20) {
        let g = Graph::from_edges(edges).unwrap();
        prop_assert_eq!(g.neighbors(node), g.neighbors(node));
        prop_assert_eq!(g.degree(node), g.degree(node));
        prop_assert_eq!(max_degree_node(&g), max_degree_node(&g));
    }

    #[test]
    fn induced_edges_stay_inside(
        edges in edge_lists(),
        subset in prop::collection::vec(-20i64..20, 0..10),
    ) {
        let g = Graph::from_edges(edges).unwrap();
        let members: HashSet<NodeId> = subset.iter().copied().collect();
        for (from, to) in induced_subgraph_edges(&g, &subset) {
            prop_assert!(members.contains(&from));
            prop_assert!(members.contains(&to));
        }
    }
}
