use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::index::{IdIndex, NodeId};

/// Emit a progress event every this many parsed edges.
const PROGRESS_INTERVAL: usize = 100_000;

/// Raw result of reading an edge list: the distinct ids (already indexed in
/// first-appearance order) and the directed edges in file order.
#[derive(Debug, Default)]
pub struct EdgeList {
    pub nodes: IdIndex,
    pub edges: Vec<(NodeId, NodeId)>,
    /// Non-comment lines that did not parse as an edge. Informational only.
    pub skipped_lines: usize,
}

/// Parse one edge-list line.
///
/// Returns `None` for blank lines, `#` comments, and lines whose first two
/// whitespace-separated tokens are not both integers. Tokens after the
/// second are ignored.
pub fn parse_edge_line(line: &str) -> Option<(NodeId, NodeId)> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut tokens = line.split_whitespace();
    let from = tokens.next()?.parse().ok()?;
    let to = tokens.next()?.parse().ok()?;
    Some((from, to))
}

/// Read an edge list in a single streaming pass.
///
/// Lines are read as raw bytes. A `#` comment is skipped before any UTF-8
/// decoding, and a line that is not valid UTF-8 counts as malformed. Only a
/// failure of the underlying reader aborts the load.
pub fn read_edge_list<R: BufRead>(mut reader: R) -> Result<EdgeList> {
    let mut list = EdgeList::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = trim_line_ending(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }
        let Some((from, to)) = std::str::from_utf8(line).ok().and_then(parse_edge_line) else {
            list.skipped_lines += 1;
            continue;
        };

        list.nodes.intern(from)?;
        list.nodes.intern(to)?;
        list.edges.push((from, to));

        if list.edges.len() % PROGRESS_INTERVAL == 0 {
            debug!(edges = list.edges.len(), "edge list progress");
        }
    }

    Ok(list)
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Open `path` and read it with [`read_edge_list`].
pub fn read_edge_list_file(path: impl AsRef<Path>) -> Result<EdgeList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GraphError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_edge_list(BufReader::new(file))
}
