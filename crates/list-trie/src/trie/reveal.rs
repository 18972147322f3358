//! Building the trie from the root digest and the nodes kept in a backing store.
//! Each fetched node is checked against the digest it was requested under.
use super::nodes::{BranchNode, ExtensionNode, LeafNode, NodeRef, TrieNode};
use super::rlp::RawNode;
use crate::error::TrieError;
use crate::hasher::NodeHasher;
use crate::store::NodeStore;
use crate::trie::Trie;
use crate::trie::TrieNode::{Branch, Extension, Leaf};
use alloy_primitives::{B256, Bytes};
use tracing::debug;

impl<H: NodeHasher> Trie<H> {
    /// Rebuilds the trie committed under `root`.
    ///
    /// Fails with [`TrieError::MissingNode`] when the store lacks a referenced node and with
    /// [`TrieError::Storage`] when the store itself fails.
    pub fn load<S>(root: B256, store: &S, hasher: H) -> Result<Self, TrieError>
    where
        S: NodeStore + ?Sized,
    {
        if root == hasher.empty_root() {
            return Ok(Self::with_hasher(hasher));
        }
        let node = TrieNode::load(NodeRef::Digest(root), store, &hasher)?;
        debug!(%root, "loaded trie");
        Ok(Self {
            root: Some(node),
            hasher,
        })
    }
}

impl TrieNode {
    fn load<H, S>(reference: NodeRef, store: &S, hasher: &H) -> Result<Self, TrieError>
    where
        H: NodeHasher,
        S: NodeStore + ?Sized,
    {
        let encoded = match reference {
            NodeRef::Inline(encoded) => Bytes::from(encoded),
            NodeRef::Digest(digest) => {
                let encoded = store.get(&digest)?.ok_or(TrieError::MissingNode(digest))?;
                let actual = hasher.hash(&encoded);
                if actual != digest {
                    return Err(TrieError::HashMismatch {
                        expected: digest,
                        actual,
                    });
                }
                encoded
            }
        };

        match RawNode::decode(&encoded)? {
            RawNode::Leaf { path, value } => Ok(Leaf(LeafNode::new(path, value))),
            RawNode::Extension { path, child } => {
                let child = Self::load(child, store, hasher)?;
                if !matches!(child, Branch(_)) {
                    return Err(TrieError::InvalidNode("extension child is not a branch"));
                }
                Ok(Extension(ExtensionNode::new(path, child)))
            }
            RawNode::Branch { children, value } => {
                let mut branch = BranchNode {
                    value,
                    ..Default::default()
                };
                for (idx, child) in children.into_iter().enumerate() {
                    if let Some(child) = child {
                        branch
                            .children
                            .insert(idx, Box::new(Self::load(child, store, hasher)?));
                    }
                }
                // An empty value turns into no value, which may leave a single child.
                if branch.children.len() == 0 {
                    return Err(TrieError::InvalidNode("branch without children"));
                }
                Ok(Branch(branch))
            }
        }
    }
}
