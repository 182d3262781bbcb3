use std::mem::size_of;

use crate::index::NodeIndex;

/// Edge-presence marker stored in `values`. Reserved for future weighting.
pub const EDGE_PRESENT: u8 = 1;

/// Per-node neighbor lists used only while a graph is being built.
///
/// Consumed by [`AdjacencyBuilder::build`]; none of this storage survives
/// into the finished [`Csr`].
#[derive(Debug, Default)]
pub struct AdjacencyBuilder {
    rows: Vec<Vec<NodeIndex>>,
    edge_count: usize,
}

impl AdjacencyBuilder {
    /// One empty row per node.
    pub fn new(node_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Record a directed edge. Duplicates are kept.
    ///
    /// Both endpoints must be below the `node_count` given to [`new`](Self::new).
    pub fn push(&mut self, from: NodeIndex, to: NodeIndex) {
        debug_assert!((from as usize) < self.rows.len(), "source index out of range");
        debug_assert!((to as usize) < self.rows.len(), "target index out of range");
        self.rows[from as usize].push(to);
        self.edge_count += 1;
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sort every row and flatten into the three CSR arrays.
    pub fn build(self) -> Csr {
        let node_count = self.rows.len();
        let mut row_ptr = Vec::with_capacity(node_count + 1);
        let mut col_indices = Vec::with_capacity(self.edge_count);
        row_ptr.push(0);

        for mut row in self.rows {
            row.sort_unstable();
            col_indices.extend_from_slice(&row);
            row_ptr.push(col_indices.len());
        }

        let values = vec![EDGE_PRESENT; col_indices.len()];

        Csr {
            row_ptr,
            col_indices,
            values,
        }
    }
}

/// Compressed Sparse Row adjacency.
///
/// `row_ptr[i]..row_ptr[i + 1]` delimits the sorted out-neighbors of node `i`
/// in `col_indices`; `values` is parallel to `col_indices`.
#[derive(Debug, Clone)]
pub struct Csr {
    row_ptr: Vec<usize>,
    col_indices: Vec<NodeIndex>,
    values: Vec<u8>,
}

impl Csr {
    /// An empty structure with `row_ptr = [0]`.
    pub fn empty() -> Self {
        AdjacencyBuilder::new(0).build()
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_indices(&self) -> &[NodeIndex] {
        &self.col_indices
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn node_count(&self) -> usize {
        self.row_ptr.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.col_indices.len()
    }

    /// Sorted out-neighbors of `index`. Empty for out-of-range indices.
    pub fn row(&self, index: NodeIndex) -> &[NodeIndex] {
        let i = index as usize;
        if i >= self.node_count() {
            return &[];
        }
        &self.col_indices[self.row_ptr[i]..self.row_ptr[i + 1]]
    }

    /// Out-degree of `index`, 0 when out of range.
    pub fn degree(&self, index: NodeIndex) -> usize {
        let i = index as usize;
        if i >= self.node_count() {
            return 0;
        }
        self.row_ptr[i + 1] - self.row_ptr[i]
    }

    /// Bytes held by the three arrays.
    pub fn memory_usage(&self) -> usize {
        self.row_ptr.len() * size_of::<usize>()
            + self.col_indices.len() * size_of::<NodeIndex>()
            + self.values.len() * size_of::<u8>()
    }
}

impl Default for Csr {
    fn default() -> Self {
        Self::empty()
    }
}
