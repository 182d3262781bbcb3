use std::io::Write;

use csr_graph_core::{graph_stats, Graph, GraphStats, LoadStats};
use serde::Serialize;

use crate::error::CliError;
use crate::util::{emit, OutputFormat};

#[derive(Serialize)]
struct StatusReport<'a> {
    load: &'a LoadStats,
    graph: GraphStats,
}

pub fn stats<W: Write>(
    graph: &Graph,
    load: &LoadStats,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let report = StatusReport {
        load,
        graph: graph_stats(graph),
    };

    emit(out, format, &report, |out| {
        let g = &report.graph;
        writeln!(out, "nodes {}", g.node_count)?;
        writeln!(out, "edges {}", g.edge_count)?;
        match g.max_degree_node {
            Some(id) => writeln!(out, "max_degree_node {id}")?,
            None => writeln!(out, "max_degree_node none")?,
        }
        writeln!(out, "max_degree {}", g.max_degree)?;
        writeln!(out, "memory_bytes {}", g.memory_bytes)?;
        writeln!(out, "skipped_lines {}", load.skipped_lines)?;
        writeln!(out, "load_ms {:.3}", load.load_time.as_secs_f64() * 1000.0)
    })
}
