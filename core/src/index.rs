use std::collections::HashMap;
use std::mem::size_of;

use crate::error::{GraphError, Result};

/// External node identifier as it appears in the edge list.
pub type NodeId = i64;

/// Dense internal index in `[0, node_count)`.
pub type NodeIndex = u32;

/// Approximate per-entry overhead of a `HashMap` slot beyond key and value.
const MAP_ENTRY_OVERHEAD: usize = 32;

/// Bijection between external node ids and dense internal indices.
///
/// Indices are handed out in first-appearance order and never change once
/// assigned. The reverse direction is a plain vector since it is dense.
#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    id_to_index: HashMap<NodeId, NodeIndex>,
    index_to_id: Vec<NodeId>,
}

impl IdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(node_count),
            index_to_id: Vec::with_capacity(node_count),
        }
    }

    /// Return the index for `id`, assigning the next free one on first sight.
    pub fn intern(&mut self, id: NodeId) -> Result<NodeIndex> {
        if let Some(&index) = self.id_to_index.get(&id) {
            return Ok(index);
        }
        let index = next_index(self.index_to_id.len())?;
        self.id_to_index.insert(id, index);
        self.index_to_id.push(id);
        Ok(index)
    }

    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_to_index.get(&id).copied()
    }

    pub fn id_of(&self, index: NodeIndex) -> Option<NodeId> {
        self.index_to_id.get(index as usize).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.id_to_index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.index_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_id.is_empty()
    }

    /// External ids in index order.
    pub fn ids(&self) -> &[NodeId] {
        &self.index_to_id
    }

    /// `(index, id)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, NodeId)> + '_ {
        self.index_to_id
            .iter()
            .enumerate()
            .map(|(i, &id)| (i as NodeIndex, id))
    }

    /// Release excess capacity once loading has finished.
    pub(crate) fn shrink_to_fit(&mut self) {
        self.id_to_index.shrink_to_fit();
        self.index_to_id.shrink_to_fit();
    }

    /// Approximate memory usage of both directions, in bytes.
    pub fn memory_usage(&self) -> usize {
        let forward = self.id_to_index.len()
            * (size_of::<NodeId>() + size_of::<NodeIndex>() + MAP_ENTRY_OVERHEAD);
        let reverse = self.index_to_id.len() * size_of::<NodeId>();
        forward + reverse
    }
}

/// Index for the `len`-th distinct id. `NodeIndex::MAX` is never handed out,
/// so the node count itself always fits in a `NodeIndex`.
fn next_index(len: usize) -> Result<NodeIndex> {
    match NodeIndex::try_from(len) {
        Ok(index) if index < NodeIndex::MAX => Ok(index),
        _ => Err(GraphError::TooManyNodes {
            limit: NodeIndex::MAX as usize,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_assigns_dense_indices_in_order() {
        let mut index = IdIndex::new();
        assert_eq!(index.intern(42).unwrap(), 0);
        assert_eq!(index.intern(-7).unwrap(), 1);
        assert_eq!(index.intern(1_000_000).unwrap(), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut index = IdIndex::new();
        let a = index.intern(5).unwrap();
        let b = index.intern(9).unwrap();
        assert_eq!(index.intern(5).unwrap(), a);
        assert_eq!(index.intern(9).unwrap(), b);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_round_trip_both_directions() {
        let mut index = IdIndex::new();
        for id in [10, 3, 77, -1, 0] {
            index.intern(id).unwrap();
        }
        for (i, id) in index.iter() {
            assert_eq!(index.index_of(id), Some(i));
            assert_eq!(index.id_of(i), Some(id));
        }
    }

    #[test]
    fn test_unknown_lookups() {
        let mut index = IdIndex::new();
        index.intern(1).unwrap();
        assert_eq!(index.index_of(2), None);
        assert_eq!(index.id_of(1), None);
        assert!(!index.contains(2));
    }

    #[test]
    fn test_empty_index() {
        let index = IdIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.memory_usage(), 0);
        assert!(index.ids().is_empty());
    }

    #[test]
    fn test_index_limit_leaves_room_for_node_count() {
        assert_eq!(next_index(0).unwrap(), 0);
        let last = NodeIndex::MAX as usize - 1;
        assert_eq!(next_index(last).unwrap(), NodeIndex::MAX - 1);
        assert!(matches!(
            next_index(last + 1),
            Err(GraphError::TooManyNodes { .. })
        ));
        assert!(next_index(usize::MAX).is_err());
    }
}
