//! Writing the trie nodes into a backing store.
//! Every node referenced by digest is stored as `digest -> encoding`, the root always is.
use super::hash::{encode_branch, encode_extension, encode_leaf};
use super::nodes::{INLINE_THRESHOLD, NodeRef, TrieNode};
use crate::hasher::NodeHasher;
use crate::store::{NodeStore, StoreError};
use alloy_primitives::{B256, Bytes};
use tracing::trace;

impl TrieNode {
    pub(super) fn commit<H, S>(&mut self, hasher: &H, store: &mut S) -> Result<NodeRef, StoreError>
    where
        H: NodeHasher,
        S: NodeStore + ?Sized,
    {
        let encoded = match self {
            Self::Leaf(leaf) => encode_leaf(&leaf.path, &leaf.value),
            Self::Extension(extension) => {
                let child = extension.child.commit(hasher, store)?;
                encode_extension(&extension.path, &child)
            }
            Self::Branch(branch) => {
                let mut children: [Option<NodeRef>; 16] = Default::default();
                for (slot, child) in children.iter_mut().zip(branch.children.iter_mut()) {
                    if let Some(child) = child {
                        *slot = Some(child.commit(hasher, store)?);
                    }
                }
                encode_branch(&children, branch.value.as_ref().map(|value| &value[..]))
            }
        };

        let reference = if encoded.len() < INLINE_THRESHOLD {
            NodeRef::Inline(encoded)
        } else {
            NodeRef::Digest(put_node(hasher, store, encoded)?)
        };
        self.set_cache(reference.clone());
        Ok(reference)
    }
}

/// Hashes `encoded` and writes it to the store under its digest.
pub(super) fn put_node<H, S>(hasher: &H, store: &mut S, encoded: Vec<u8>) -> Result<B256, StoreError>
where
    H: NodeHasher,
    S: NodeStore + ?Sized,
{
    let digest = hasher.hash(&encoded);
    trace!(%digest, len = encoded.len(), "storing trie node");
    store.put(digest, Bytes::from(encoded))?;
    Ok(digest)
}
