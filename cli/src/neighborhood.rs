use std::io::Write;

use csr_graph_core::{bfs_neighborhood, depth_limit, dfs, extract_subgraph, Graph, NodeId};

use crate::error::CliError;
use crate::util::{emit, write_edges, write_line, OutputFormat};

/// BFS from `start`; `--json` includes each node's hop distance.
pub fn bfs<W: Write>(
    graph: &Graph,
    start: NodeId,
    max_depth: i64,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let result = bfs_neighborhood(graph, start, depth_limit(max_depth));
    emit(out, format, &result, |out| {
        let ids: Vec<NodeId> = result.neighbors.iter().map(|n| n.node_id).collect();
        write_line(out, &ids)
    })
}

pub fn dfs_order<W: Write>(
    graph: &Graph,
    start: NodeId,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let ids = dfs(graph, start);
    emit(out, format, &ids, |out| write_line(out, &ids))
}

/// Bounded BFS followed by the edges induced on the reached nodes.
/// Text output: the node line, then one edge per line.
pub fn neighborhood<W: Write>(
    graph: &Graph,
    start: NodeId,
    max_depth: i64,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let sub = extract_subgraph(graph, start, depth_limit(max_depth));
    emit(out, format, &sub, |out| {
        write_line(out, &sub.nodes)?;
        write_edges(out, &sub.edges)
    })
}
