use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::index::{NodeId, NodeIndex};

/// Out-degree of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeResult {
    pub node_id: NodeId,
    pub out_degree: usize,
}

/// Whole-graph summary.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// `None` only for an empty graph.
    pub max_degree_node: Option<NodeId>,
    pub max_degree: usize,
    pub memory_bytes: usize,
}

/// The node with the highest out-degree and that degree.
///
/// Linear scan in internal-index order; the first index reaching the
/// maximum wins ties. `None` for an empty graph.
pub fn max_degree(graph: &Graph) -> Option<(NodeId, usize)> {
    let csr = graph.csr();
    let mut best: Option<(NodeIndex, usize)> = None;

    for i in 0..csr.node_count() as NodeIndex {
        let degree = csr.degree(i);
        if best.map_or(true, |(_, d)| degree > d) {
            best = Some((i, degree));
        }
    }

    let (index, degree) = best?;
    let id = graph.id_of(index)?;
    debug!(node = id, degree, "max degree node");
    Some((id, degree))
}

/// External id of the highest out-degree node; `None` for an empty graph.
pub fn max_degree_node(graph: &Graph) -> Option<NodeId> {
    max_degree(graph).map(|(id, _)| id)
}

/// Directed edges whose endpoints both lie in `nodes`.
///
/// Sources are visited in the order given (unknown ids skipped, repeated ids
/// visited again); each source's edges follow CSR order.
pub fn induced_subgraph_edges(graph: &Graph, nodes: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    let members: HashSet<NodeId> = nodes.iter().copied().collect();
    let mut edges = Vec::new();

    for &node in nodes {
        let Some(index) = graph.index_of(node) else {
            continue;
        };
        for neighbor in graph.neighbor_ids(index) {
            if members.contains(&neighbor) {
                edges.push((node, neighbor));
            }
        }
    }

    edges
}

/// Nodes ranked by out-degree, descending.
///
/// Ties are broken by internal index (ascending). `top_n = 0` returns all nodes.
pub fn degree_ranking(graph: &Graph, top_n: usize) -> Vec<DegreeResult> {
    let csr = graph.csr();
    let mut order: Vec<NodeIndex> = (0..csr.node_count() as NodeIndex).collect();
    // Stable sort keeps ascending index order among equal degrees.
    order.sort_by(|&a, &b| csr.degree(b).cmp(&csr.degree(a)));

    if top_n > 0 && top_n < order.len() {
        order.truncate(top_n);
    }

    let ids = graph.node_ids();
    order
        .into_iter()
        .map(|i| DegreeResult {
            node_id: ids[i as usize],
            out_degree: csr.degree(i),
        })
        .collect()
}

pub fn graph_stats(graph: &Graph) -> GraphStats {
    let max = max_degree(graph);
    GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        max_degree_node: max.map(|(id, _)| id),
        max_degree: max.map_or(0, |(_, d)| d),
        memory_bytes: graph.memory_usage(),
    }
}
