//! Canonical encoding and hashing of the different node types.
//!
//! - leaf: `[hex_prefix(path, leaf), value]`
//! - extension: `[hex_prefix(path, extension), child]`
//! - branch: `[child_0, ..., child_15, value]`, empty slots and a missing value are `0x80`
//!
//! A child is embedded when its encoding is shorter than 32 bytes and referenced by digest
//! otherwise. The root is always hashed.
use super::nodes::{BranchNode, ExtensionNode, LeafNode, NodeRef, TrieNode};
use super::rlp::encode_list_header;
use crate::hasher::NodeHasher;
use alloy_primitives::B256;
use alloy_rlp::{EMPTY_STRING_CODE, Encodable};
use alloy_trie::Nibbles;
use alloy_trie::nodes::encode_path_leaf;

pub(super) fn encode_leaf(path: &Nibbles, value: &[u8]) -> Vec<u8> {
    // Encoding of the path according to the hex-prefix rules. It is not an RLP encoding yet.
    let path = encode_path_leaf(path, true);
    // Warning: `.length()` computes the *RLP* representation length of the value it is called on.
    let mut out = encode_list_header(path[..].length() + value.length());
    path[..].encode(&mut out);
    value.encode(&mut out);
    out
}

pub(super) fn encode_extension(path: &Nibbles, child: &NodeRef) -> Vec<u8> {
    let path = encode_path_leaf(path, false);
    let mut out = encode_list_header(path[..].length() + child.length());
    path[..].encode(&mut out);
    child.encode(&mut out);
    out
}

pub(super) fn encode_branch(children: &[Option<NodeRef>; 16], value: Option<&[u8]>) -> Vec<u8> {
    let payload_length = children
        .iter()
        .map(|child| child.as_ref().map_or(1, NodeRef::length))
        .sum::<usize>()
        + value.map_or(1, |value| value.length());

    let mut out = encode_list_header(payload_length);
    for child in children {
        match child {
            Some(child) => child.encode(&mut out),
            None => out.push(EMPTY_STRING_CODE),
        }
    }
    match value {
        Some(value) => value.encode(&mut out),
        None => out.push(EMPTY_STRING_CODE),
    }
    out
}

impl LeafNode {
    fn encode(&self) -> Vec<u8> {
        encode_leaf(&self.path, &self.value)
    }
}

impl ExtensionNode {
    fn encode<H: NodeHasher>(&mut self, hasher: &H) -> Vec<u8> {
        let child = self.child.reference(hasher);
        encode_extension(&self.path, &child)
    }
}

impl BranchNode {
    fn encode<H: NodeHasher>(&mut self, hasher: &H) -> Vec<u8> {
        let mut children: [Option<NodeRef>; 16] = Default::default();
        for (slot, child) in children.iter_mut().zip(self.children.iter_mut()) {
            if let Some(child) = child {
                *slot = Some(child.reference(hasher));
            }
        }
        encode_branch(&children, self.value.as_ref().map(|value| &value[..]))
    }
}

impl TrieNode {
    /// Returns the canonical encoding of the node, computing children references on the way.
    pub(super) fn encode<H: NodeHasher>(&mut self, hasher: &H) -> Vec<u8> {
        match self {
            Self::Leaf(leaf) => leaf.encode(),
            Self::Extension(extension) => extension.encode(hasher),
            Self::Branch(branch) => branch.encode(hasher),
        }
    }

    /// Returns how a parent refers to this node.
    /// Caches the reference to avoid re-encoding unchanged subtries.
    pub(super) fn reference<H: NodeHasher>(&mut self, hasher: &H) -> NodeRef {
        if let Some(cached) = self.cached() {
            return cached.clone();
        }
        let reference = NodeRef::new(self.encode(hasher), hasher);
        self.set_cache(reference.clone());
        reference
    }

    /// Returns the digest of the node encoding, also when the node would be embedded.
    pub(super) fn hash<H: NodeHasher>(&mut self, hasher: &H) -> B256 {
        match self.reference(hasher) {
            NodeRef::Digest(digest) => digest,
            NodeRef::Inline(encoded) => hasher.hash(&encoded),
        }
    }
}
