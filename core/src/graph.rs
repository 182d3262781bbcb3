use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::csr::{AdjacencyBuilder, Csr};
use crate::error::Result;
use crate::index::{IdIndex, NodeId, NodeIndex};
use crate::loader::{self, EdgeList};

/// Summary of a completed load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    pub skipped_lines: usize,
    #[serde(serialize_with = "serialize_millis")]
    pub load_time: Duration,
}

fn serialize_millis<S>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

/// Immutable directed graph in CSR form.
///
/// Built once by [`Graph::load`] (or one of the other constructors) and
/// never modified afterwards, so shared references can be read from many
/// threads at once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    csr: Csr,
    index: IdIndex,
}

impl Graph {
    /// An empty graph: no nodes, no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an edge-list file. Fails only if the file cannot be opened or read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_stats(path).map(|(graph, _)| graph)
    }

    /// Like [`load`](Self::load), also returning load statistics.
    pub fn load_with_stats(path: impl AsRef<Path>) -> Result<(Self, LoadStats)> {
        let path = path.as_ref();
        let start = Instant::now();
        let list = loader::read_edge_list_file(path)?;
        let skipped_lines = list.skipped_lines;
        let graph = Self::from_edge_list(list)?;

        let stats = LoadStats {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            memory_bytes: graph.memory_usage(),
            skipped_lines,
            load_time: start.elapsed(),
        };
        info!(
            path = %path.display(),
            nodes = stats.node_count,
            edges = stats.edge_count,
            memory_mb = stats.memory_bytes / (1024 * 1024),
            skipped = stats.skipped_lines,
            load_ms = stats.load_time.as_millis() as u64,
            "edge list loaded"
        );
        Ok((graph, stats))
    }

    /// Build from any buffered line source.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        loader::read_edge_list(reader).and_then(Self::from_edge_list)
    }

    /// Build from in-memory `(from, to)` pairs.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        Self::from_edge_list(EdgeList {
            edges: edges.into_iter().collect(),
            ..EdgeList::default()
        })
    }

    /// Index every edge and compress the adjacency. Endpoints the list has
    /// not seen yet are interned here in edge order. The temporary per-node
    /// lists are dropped inside [`AdjacencyBuilder::build`].
    pub(crate) fn from_edge_list(list: EdgeList) -> Result<Self> {
        let EdgeList {
            nodes: mut index,
            edges,
            ..
        } = list;

        for &(from, to) in &edges {
            index.intern(from)?;
            index.intern(to)?;
        }

        let mut adj = AdjacencyBuilder::new(index.len());
        for (from, to) in edges {
            if let (Some(f), Some(t)) = (index.index_of(from), index.index_of(to)) {
                adj.push(f, t);
            }
        }
        index.shrink_to_fit();

        Ok(Self {
            csr: adj.build(),
            index,
        })
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.csr.edge_count()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains(id)
    }

    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.index_of(id)
    }

    pub fn id_of(&self, index: NodeIndex) -> Option<NodeId> {
        self.index.id_of(index)
    }

    /// External ids in internal-index order.
    pub fn node_ids(&self) -> &[NodeId] {
        self.index.ids()
    }

    pub fn csr(&self) -> &Csr {
        &self.csr
    }

    pub fn id_index(&self) -> &IdIndex {
        &self.index
    }

    /// Out-degree of `id`; 0 when the node is unknown.
    pub fn degree(&self, id: NodeId) -> usize {
        self.index_of(id).map_or(0, |i| self.csr.degree(i))
    }

    /// Out-neighbors of `id` in ascending internal-index order; empty when unknown.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        match self.index_of(id) {
            Some(i) => self.neighbor_ids(i).collect(),
            None => Vec::new(),
        }
    }

    /// Out-neighbors of an internal index, mapped to external ids.
    pub(crate) fn neighbor_ids(&self, index: NodeIndex) -> impl Iterator<Item = NodeId> + '_ {
        let ids = self.index.ids();
        self.csr.row(index).iter().map(move |&n| ids[n as usize])
    }

    /// Approximate memory usage in bytes: CSR arrays plus id mappings.
    pub fn memory_usage(&self) -> usize {
        self.csr.memory_usage() + self.index.memory_usage()
    }
}
