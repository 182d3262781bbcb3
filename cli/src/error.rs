use std::io;

use csr_graph_core::GraphError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("no edge list given; pass FILE or set `dataset` in the config file")]
    NoDataset,
    #[error("loaded graph uses {used_mb}MB, exceeds max_memory_mb={max_mb}MB")]
    MemoryLimit { used_mb: u64, max_mb: u64 },
    #[error("invalid log filter '{filter}': {reason}")]
    LogFilter { filter: String, reason: String },
}
