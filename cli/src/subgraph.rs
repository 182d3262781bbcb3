use std::io::Write;

use csr_graph_core::{induced_subgraph_edges, Graph, NodeId};

use crate::error::CliError;
use crate::util::{emit, write_edges, OutputFormat};

pub fn subgraph<W: Write>(
    graph: &Graph,
    nodes: &[NodeId],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let edges = induced_subgraph_edges(graph, nodes);
    emit(out, format, &edges, |out| write_edges(out, &edges))
}
