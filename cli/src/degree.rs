use std::io::Write;

use csr_graph_core::{degree_ranking, max_degree, DegreeResult, Graph, NodeId};

use crate::error::CliError;
use crate::util::{emit, write_line, OutputFormat};

pub fn degree<W: Write>(
    graph: &Graph,
    node: NodeId,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let result = DegreeResult {
        node_id: node,
        out_degree: graph.degree(node),
    };
    emit(out, format, &result, |out| writeln!(out, "{}", result.out_degree))
}

pub fn neighbors<W: Write>(
    graph: &Graph,
    node: NodeId,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let ids = graph.neighbors(node);
    emit(out, format, &ids, |out| write_line(out, &ids))
}

pub fn max_degree_node<W: Write>(
    graph: &Graph,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let result = max_degree(graph).map(|(node_id, out_degree)| DegreeResult {
        node_id,
        out_degree,
    });
    emit(out, format, &result, |out| match result {
        Some(r) => writeln!(out, "{} {}", r.node_id, r.out_degree),
        None => writeln!(out, "none"),
    })
}

pub fn top_degree<W: Write>(
    graph: &Graph,
    top_n: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let ranking = degree_ranking(graph, top_n);
    emit(out, format, &ranking, |out| {
        for r in &ranking {
            writeln!(out, "{} {}", r.node_id, r.out_degree)?;
        }
        Ok(())
    })
}
