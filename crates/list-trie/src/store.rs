//! Backing store boundary for committed trie nodes.
use crate::trie::B256Map;
use alloy_primitives::{B256, Bytes};
use thiserror::Error;

/// The backing store failed to serve a read or write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store is unreachable or rejected the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A key-value store holding node encodings under their digest.
///
/// `Ok(None)` means the key is absent. Implementations must report failures as
/// [`StoreError`], a failed read is never an absent key.
pub trait NodeStore {
    /// Reads the encoding stored under `key`.
    fn get(&self, key: &B256) -> Result<Option<Bytes>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn put(&mut self, key: B256, value: Bytes) -> Result<(), StoreError>;
}

/// In-memory [`NodeStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    nodes: B256Map<Bytes>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing was stored yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if a node is stored under `key`.
    pub fn contains(&self, key: &B256) -> bool {
        self.nodes.contains_key(key)
    }

    /// Removes the node stored under `key`, returning it.
    pub fn remove(&mut self, key: &B256) -> Option<Bytes> {
        self.nodes.remove(key)
    }

    /// Iterates over the stored digests.
    pub fn keys(&self) -> impl Iterator<Item = &B256> {
        self.nodes.keys()
    }
}

impl NodeStore for MemoryStore {
    fn get(&self, key: &B256) -> Result<Option<Bytes>, StoreError> {
        Ok(self.nodes.get(key).cloned())
    }

    fn put(&mut self, key: B256, value: Bytes) -> Result<(), StoreError> {
        self.nodes.insert(key, value);
        Ok(())
    }
}

impl FromIterator<(B256, Bytes)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (B256, Bytes)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_overwrite() {
        let mut store = MemoryStore::new();
        let key = B256::repeat_byte(0x01);
        assert_eq!(store.get(&key), Ok(None));

        store.put(key, Bytes::from_static(b"first")).unwrap();
        store.put(key, Bytes::from_static(b"second")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key), Ok(Some(Bytes::from_static(b"second"))));

        assert!(store.remove(&key).is_some());
        assert!(store.is_empty());
    }
}
