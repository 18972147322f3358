//! Implementation of the public trie operations.
use super::commit::put_node;
use super::nodes::{LeafNode, NodeRef};
use crate::error::TrieError;
use crate::hasher::{Keccak256, NodeHasher};
use crate::store::NodeStore;
use crate::trie::Trie;
use crate::trie::TrieNode::Leaf;
use alloy_primitives::map::{FbBuildHasher, HashMap};
use alloy_primitives::{B256, Bytes};
use alloy_trie::Nibbles;
use tracing::debug;

/// Added only to make an IDE happy. It is defined in alloy_primitives::map
pub type B256Map<V> = HashMap<B256, V, FbBuildHasher<32>>;

impl Trie {
    /// Creates an empty trie hashing nodes with Keccak-256.
    pub const fn new() -> Self {
        Self {
            root: None,
            hasher: Keccak256,
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: NodeHasher> Trie<H> {
    /// Creates an empty trie hashing nodes with `hasher`.
    pub const fn with_hasher(hasher: H) -> Self {
        Self { root: None, hasher }
    }

    /// Returns `true` if nothing was inserted yet.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` under `key`. Overrides the previous value if it exists.
    pub fn update(&mut self, key: impl AsRef<[u8]>, value: impl Into<Bytes>) {
        self.insert_path(Nibbles::unpack(key), value.into());
    }

    pub(crate) fn insert_path(&mut self, path: Nibbles, value: Bytes) {
        match self.root.as_mut() {
            Some(root) => root.insert(path, value),
            None => self.root = Some(Leaf(LeafNode::new(path, value))),
        }
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Bytes> {
        self.get_path(Nibbles::unpack(key))
    }

    pub(crate) fn get_path(&self, path: Nibbles) -> Option<&Bytes> {
        self.root.as_ref().and_then(|root| root.get(path))
    }

    /// Returns the root digest of the trie.
    ///
    /// Digests of unchanged subtries are cached, so repeated calls only re-hash the paths
    /// touched by updates in between.
    pub fn root(&mut self) -> B256 {
        match self.root.as_mut() {
            Some(root) => root.hash(&self.hasher),
            None => self.hasher.empty_root(),
        }
    }

    /// Computes the root digest and writes the nodes to `store`.
    ///
    /// Every node referenced by digest and the root node are stored under their digest,
    /// which is what [`Trie::load`] needs to rebuild the trie. An empty trie writes nothing.
    pub fn commit<S>(&mut self, store: &mut S) -> Result<B256, TrieError>
    where
        S: NodeStore + ?Sized,
    {
        let Some(root) = self.root.as_mut() else {
            return Ok(self.hasher.empty_root());
        };
        let root_digest = match root.commit(&self.hasher, store)? {
            NodeRef::Digest(digest) => digest,
            NodeRef::Inline(encoded) => put_node(&self.hasher, store, encoded)?,
        };
        debug!(root = %root_digest, "committed trie");
        Ok(root_digest)
    }

    /// Returns the nodes proving the presence or absence of `key`, root first.
    ///
    /// Check it with [`crate::verify_proof`]. The proof of any key in an empty trie is empty.
    pub fn proof(&mut self, key: impl AsRef<[u8]>) -> Vec<Bytes> {
        let mut proof = Vec::new();
        if let Some(root) = self.root.as_mut() {
            root.collect_proof(Nibbles::unpack(key), &self.hasher, true, &mut proof);
        }
        proof
    }
}
