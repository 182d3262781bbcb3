use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use csr_graph_core::{bfs, dfs, max_degree, Graph, NodeId};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod generators;

use generators::{Generator, GENERATORS};

#[derive(Debug, Parser)]
#[command(name = "csr-graph-bench", about = "Benchmark csr-graph-core on synthetic graphs")]
struct Args {
    /// Generator to run (star, linear, tree, scalefree, smallworld, random) or `all`.
    #[arg(default_value = "all")]
    mode: String,

    /// Target node count.
    #[arg(long, default_value_t = 1_000_000)]
    nodes: u64,

    /// Write each generated graph as `<DIR>/<mode>.txt` instead of benchmarking.
    #[arg(long, value_name = "DIR")]
    write: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let selected: Vec<Generator> = if args.mode == "all" {
        GENERATORS.to_vec()
    } else {
        match generators::find(&args.mode) {
            Some(g) => vec![g],
            None => {
                error!(mode = %args.mode, "unknown generator");
                eprintln!("Unknown mode: {}. Use --help for options.", args.mode);
                return ExitCode::FAILURE;
            }
        }
    };

    for (mode, name, generate) in selected {
        let result = match &args.write {
            Some(dir) => write_dataset(dir, mode, name, generate(args.nodes)),
            None => {
                run_benchmark(name, generate, args.nodes);
                Ok(())
            }
        };
        if let Err(e) = result {
            eprintln!("{mode}: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn run_benchmark(name: &str, generate: fn(u64) -> Vec<(NodeId, NodeId)>, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let edges = generate(node_count);
    let gen_time = t.elapsed();

    let t = Instant::now();
    let graph = match Graph::from_edges(edges) {
        Ok(g) => g,
        Err(e) => {
            println!("Build failed: {e}");
            return;
        }
    };
    let build_time = t.elapsed();
    println!(
        "Generated in {:.2}s, CSR built in {:.2}s — {} nodes, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        build_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );
    info!(name, nodes = graph.node_count(), edges = graph.edge_count(), "graph built");

    // BFS from node 0 (the hub or root in every generator)
    println!();
    println!("{:>8} {:>12} {:>10}", "depth", "found", "time");
    println!("{:->8} {:->12} {:->10}", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let found = bfs(&graph, 0, Some(depth)).len();
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>8.1}ms",
            depth,
            found,
            elapsed.as_secs_f64() * 1000.0
        );
        if found >= graph.node_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    println!();
    let t = Instant::now();
    let reached = dfs(&graph, 0).len();
    println!(
        "DFS from 0: {} nodes in {:.1}ms",
        reached,
        t.elapsed().as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    match max_degree(&graph) {
        Some((node, degree)) => println!(
            "Max out-degree: node {} ({} edges) in {:.1}ms",
            node,
            degree,
            t.elapsed().as_secs_f64() * 1000.0
        ),
        None => println!("Max out-degree: empty graph"),
    }
    println!();
}

/// Write an edge list with a `#` header, in the format the loader reads back.
fn write_dataset(
    dir: &Path,
    mode: &str,
    name: &str,
    edges: Vec<(NodeId, NodeId)>,
) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{mode}.txt"));
    let mut out = BufWriter::new(File::create(&path)?);
    writeln!(out, "# {name}")?;
    writeln!(out, "# Edges: {}", edges.len())?;
    for (from, to) in &edges {
        writeln!(out, "{from} {to}")?;
    }
    out.flush()?;
    println!("Wrote {} ({} edges)", path.display(), edges.len());
    Ok(())
}
