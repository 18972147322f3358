//! Merkle proofs: collecting the nodes on the path to a key and replaying them against a root.
//!
//! A proof lists the encodings of the nodes referenced by digest along the path, root first.
//! Embedded nodes travel inside their parent's encoding.
use super::nodes::{INLINE_THRESHOLD, NodeRef, TrieNode};
use super::rlp::RawNode;
use crate::error::ProofError;
use crate::hasher::NodeHasher;
use crate::trie::TrieNode::{Branch, Extension, Leaf};
use alloy_primitives::{B256, Bytes};
use alloy_trie::Nibbles;

impl TrieNode {
    pub(super) fn collect_proof<H: NodeHasher>(
        &mut self,
        path: Nibbles,
        hasher: &H,
        is_root: bool,
        proof: &mut Vec<Bytes>,
    ) {
        let encoded = self.encode(hasher);
        if is_root || encoded.len() >= INLINE_THRESHOLD {
            proof.push(Bytes::from(encoded));
        }
        match self {
            Leaf(_) => {}
            Extension(extension) => {
                if path.starts_with(&extension.path) {
                    extension.child.collect_proof(
                        path.slice(extension.path.len()..),
                        hasher,
                        false,
                        proof,
                    );
                }
            }
            Branch(branch) => {
                if path.is_empty() {
                    return;
                }
                if let Some(child) = branch.children.get_mut(path.at(0)) {
                    child.collect_proof(path.slice(1..), hasher, false, proof);
                }
            }
        }
    }
}

/// Replays `proof` for `key` against `root`.
///
/// Returns `Some(value)` when the proof shows `key` maps to `value` and `None` when it shows
/// the key is absent. An empty proof is only valid against the empty root, and a proof with
/// nodes left over after the walk is rejected.
pub fn verify_proof<H: NodeHasher>(
    hasher: &H,
    root: B256,
    key: &[u8],
    proof: &[Bytes],
) -> Result<Option<Bytes>, ProofError> {
    let mut nodes = proof.iter();
    let Some(first) = nodes.next() else {
        return if root == hasher.empty_root() {
            Ok(None)
        } else {
            Err(ProofError::MissingNode(root))
        };
    };
    check_digest(hasher, root, first)?;

    let mut path = Nibbles::unpack(key);
    let mut encoded = first.to_vec();
    let value = loop {
        let next = match RawNode::decode(&encoded)? {
            RawNode::Leaf {
                path: leaf_path,
                value,
            } => break (leaf_path == path).then_some(value),
            RawNode::Extension {
                path: prefix,
                child,
            } => {
                if !path.starts_with(&prefix) {
                    break None;
                }
                path = path.slice(prefix.len()..);
                child
            }
            RawNode::Branch {
                mut children,
                value,
            } => {
                if path.is_empty() {
                    break value;
                }
                let Some(child) = children[path.at(0)].take() else {
                    break None;
                };
                path = path.slice(1..);
                child
            }
        };

        encoded = match next {
            NodeRef::Inline(inline) => inline,
            NodeRef::Digest(digest) => {
                let node = nodes.next().ok_or(ProofError::MissingNode(digest))?;
                check_digest(hasher, digest, node)?;
                node.to_vec()
            }
        };
    };

    match nodes.count() {
        0 => Ok(value),
        unused => Err(ProofError::UnusedNodes(unused)),
    }
}

fn check_digest<H: NodeHasher>(hasher: &H, expected: B256, node: &[u8]) -> Result<(), ProofError> {
    let actual = hasher.hash(node);
    if actual == expected {
        Ok(())
    } else {
        Err(ProofError::HashMismatch { expected, actual })
    }
}
