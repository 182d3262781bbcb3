//! csr-graph: command-line front-end for csr-graph-core.
//!
//! Each invocation loads one edge list, runs one query and prints the result
//! to stdout (plain text or JSON). Logs go to stderr.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use csr_graph_core::NodeId;

pub mod config;
mod degree;
pub mod error;
mod load;
pub mod logging;
mod neighborhood;
mod status;
mod subgraph;
mod util;

pub use config::Settings;
pub use error::CliError;
pub use util::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "csr-graph", version, about = "Query a static directed graph stored as CSR")]
pub struct Cli {
    /// TOML config file.
    #[arg(long, global = true, env = "CSR_GRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `csr_graph_core=debug`.
    #[arg(long, global = true, env = "CSR_GRAPH_LOG")]
    pub log_level: Option<String>,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct Source {
    /// Edge-list file; defaults to `dataset` from the config.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Node/edge counts, max-degree node, memory estimate and load time.
    Stats {
        #[command(flatten)]
        source: Source,
    },
    /// Breadth-first order from a start node.
    Bfs {
        #[command(flatten)]
        source: Source,
        #[arg(long, allow_negative_numbers = true)]
        start: NodeId,
        /// Maximum depth; negative means unbounded.
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i64>,
    },
    /// Depth-first order from a start node.
    Dfs {
        #[command(flatten)]
        source: Source,
        #[arg(long, allow_negative_numbers = true)]
        start: NodeId,
    },
    /// Out-degree of a node (0 if unknown).
    Degree {
        #[command(flatten)]
        source: Source,
        #[arg(long, allow_negative_numbers = true)]
        node: NodeId,
    },
    /// Out-neighbors of a node.
    Neighbors {
        #[command(flatten)]
        source: Source,
        #[arg(long, allow_negative_numbers = true)]
        node: NodeId,
    },
    /// The node with the highest out-degree.
    MaxDegree {
        #[command(flatten)]
        source: Source,
    },
    /// Nodes ranked by out-degree.
    TopDegree {
        #[command(flatten)]
        source: Source,
        /// Number of nodes to list; 0 lists all.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Edges induced by a node set.
    Subgraph {
        #[command(flatten)]
        source: Source,
        /// Comma-separated node ids.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        nodes: Vec<NodeId>,
    },
    /// Bounded BFS plus the edges induced on the reached nodes.
    Neighborhood {
        #[command(flatten)]
        source: Source,
        #[arg(long, allow_negative_numbers = true)]
        start: NodeId,
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i64>,
    },
}

impl Command {
    fn source(&self) -> &Source {
        match self {
            Command::Stats { source }
            | Command::Bfs { source, .. }
            | Command::Dfs { source, .. }
            | Command::Degree { source, .. }
            | Command::Neighbors { source, .. }
            | Command::MaxDegree { source }
            | Command::TopDegree { source, .. }
            | Command::Subgraph { source, .. }
            | Command::Neighborhood { source, .. } => source,
        }
    }
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Log filter: flag or env first, then the config file.
    pub fn log_filter<'a>(&'a self, settings: &'a Settings) -> &'a str {
        self.log_level.as_deref().unwrap_or(&settings.log_level)
    }
}

/// Load the graph named by `cli` and run its command, writing to `out`.
pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<(), CliError> {
    let format = cli.output_format();
    let (graph, load_stats) = load::load_graph(cli.command.source().file.as_deref(), settings)?;

    match &cli.command {
        Command::Stats { .. } => status::stats(&graph, &load_stats, format, out),
        Command::Bfs { start, depth, .. } => {
            let depth = depth.unwrap_or(settings.default_depth);
            neighborhood::bfs(&graph, *start, depth, format, out)
        }
        Command::Dfs { start, .. } => neighborhood::dfs_order(&graph, *start, format, out),
        Command::Degree { node, .. } => degree::degree(&graph, *node, format, out),
        Command::Neighbors { node, .. } => degree::neighbors(&graph, *node, format, out),
        Command::MaxDegree { .. } => degree::max_degree_node(&graph, format, out),
        Command::TopDegree { top, .. } => degree::top_degree(&graph, *top, format, out),
        Command::Subgraph { nodes, .. } => subgraph::subgraph(&graph, nodes, format, out),
        Command::Neighborhood { start, depth, .. } => {
            let depth = depth.unwrap_or(settings.default_depth);
            neighborhood::neighborhood(&graph, *start, depth, format, out)
        }
    }
}
