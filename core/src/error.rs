use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Load-time failures. Queries never fail; unknown nodes degrade to empty results.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cannot open edge list {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while reading edge list: {0}")]
    Io(#[from] io::Error),
    #[error("edge list has more than {limit} distinct nodes")]
    TooManyNodes { limit: usize },
}
