//! csr-graph-core: static sparse-graph engine.
//!
//! Loads a whitespace-separated edge list, remaps node ids onto dense
//! indices, compresses the adjacency into CSR arrays and answers BFS, DFS,
//! degree and induced-subgraph queries over the immutable result.
//! No CLI or configuration concerns live here.

mod csr;
mod engine;
mod error;
mod graph;
mod index;
mod loader;
mod query;
mod traversal;

pub use csr::{AdjacencyBuilder, Csr, EDGE_PRESENT};
pub use engine::SparseGraph;
pub use error::{GraphError, Result};
pub use graph::{Graph, LoadStats};
pub use index::{IdIndex, NodeId, NodeIndex};
pub use loader::{parse_edge_line, read_edge_list, read_edge_list_file, EdgeList};
pub use query::{
    degree_ranking, graph_stats, induced_subgraph_edges, max_degree, max_degree_node,
    DegreeResult, GraphStats,
};
pub use traversal::{
    bfs, bfs_neighborhood, depth_limit, dfs, extract_subgraph, NeighborResult, SubgraphResult,
    TraversalResult,
};
