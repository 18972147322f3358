//! Definition of the 3 node types building the trie.
//!
//! Every node owns its children exclusively and caches the reference its parent embeds
//! (see [`NodeRef`]). The cache is cleared on every node along a modified path.
use super::children::BranchNodeChildrenArray;
use crate::hasher::NodeHasher;
use alloy_primitives::{B256, Bytes};
use alloy_rlp::Encodable;
use alloy_trie::Nibbles;

/// Encodings shorter than this are embedded in the parent instead of referenced by digest.
pub(super) const INLINE_THRESHOLD: usize = 32;

/// How a parent refers to a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum NodeRef {
    /// The complete encoding of a small child.
    Inline(Vec<u8>),
    /// Digest of the child encoding.
    Digest(B256),
}

impl NodeRef {
    pub(super) fn new<H: NodeHasher>(encoded: Vec<u8>, hasher: &H) -> Self {
        if encoded.len() < INLINE_THRESHOLD {
            Self::Inline(encoded)
        } else {
            Self::Digest(hasher.hash(&encoded))
        }
    }

    /// Appends the reference as an item of the parent RLP list.
    pub(super) fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Self::Inline(encoded) => out.extend_from_slice(encoded),
            Self::Digest(digest) => digest.encode(out),
        }
    }

    /// Length of the reference inside the parent RLP list.
    pub(super) fn length(&self) -> usize {
        match self {
            Self::Inline(encoded) => encoded.len(),
            // 0xa0 string header followed by the digest
            Self::Digest(_) => 33,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LeafNode {
    pub(crate) path: Nibbles,
    pub(crate) value: Bytes,
    pub(super) cached: Option<NodeRef>,
}

/// Shared prefix in front of a branch. The path is never empty and the child is always a branch.
#[derive(Debug, Clone)]
pub(crate) struct ExtensionNode {
    pub(crate) path: Nibbles,
    pub(crate) child: Box<TrieNode>,
    pub(super) cached: Option<NodeRef>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct BranchNode {
    pub(crate) children: BranchNodeChildrenArray,
    pub(crate) value: Option<Bytes>,
    pub(super) cached: Option<NodeRef>,
}

#[derive(Debug, Clone)]
pub(crate) enum TrieNode {
    Leaf(LeafNode),
    Extension(ExtensionNode),
    Branch(BranchNode),
}

impl LeafNode {
    pub(super) const fn new(path: Nibbles, value: Bytes) -> Self {
        Self {
            path,
            value,
            cached: None,
        }
    }
}

impl ExtensionNode {
    pub(super) fn new(path: Nibbles, child: TrieNode) -> Self {
        debug_assert!(!path.is_empty(), "extension with an empty path");
        debug_assert!(matches!(child, TrieNode::Branch(_)), "extension child is not a branch");
        Self {
            path,
            child: Box::new(child),
            cached: None,
        }
    }
}

impl TrieNode {
    /// Wraps `branch` into an extension when `prefix` is not empty.
    pub(super) fn with_prefix(prefix: Nibbles, branch: BranchNode) -> Self {
        if prefix.is_empty() {
            Self::Branch(branch)
        } else {
            Self::Extension(ExtensionNode::new(prefix, Self::Branch(branch)))
        }
    }

    pub(super) const fn cached(&self) -> Option<&NodeRef> {
        match self {
            Self::Leaf(leaf) => leaf.cached.as_ref(),
            Self::Extension(extension) => extension.cached.as_ref(),
            Self::Branch(branch) => branch.cached.as_ref(),
        }
    }

    pub(super) fn set_cache(&mut self, reference: NodeRef) {
        match self {
            Self::Leaf(leaf) => leaf.cached = Some(reference),
            Self::Extension(extension) => extension.cached = Some(reference),
            Self::Branch(branch) => branch.cached = Some(reference),
        }
    }

    pub(super) fn clear_cache(&mut self) {
        match self {
            Self::Leaf(leaf) => leaf.cached = None,
            Self::Extension(extension) => extension.cached = None,
            Self::Branch(branch) => branch.cached = None,
        }
    }
}
