//! Inserting an element to the trie implementation for different node's types.
use super::nodes::{BranchNode, ExtensionNode, LeafNode, TrieNode};
use crate::trie::TrieNode::{Branch, Extension, Leaf};
use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

impl BranchNode {
    /// Stores `value` under the `path` relative to this branch, as the branch value when the
    /// path is empty or as a new leaf otherwise. The target slot must be free.
    ///
    /// An empty branch value encodes the same as no value, so it is stored as `None`.
    fn place(&mut self, path: Nibbles, value: Bytes) {
        if path.is_empty() {
            self.value = (!value.is_empty()).then_some(value);
        } else {
            let idx = path.at(0);
            debug_assert!(self.children.get(idx).is_none(), "branch slot is taken");
            self.children
                .insert(idx, Box::new(Leaf(LeafNode::new(path.slice(1..), value))));
        }
    }

    fn insert(&mut self, path: Nibbles, value: Bytes) {
        if !path.is_empty() {
            if let Some(child) = self.children.get_mut(path.at(0)) {
                // Consume the first path nibble as it encodes the branch index.
                child.insert(path.slice(1..), value);
                return;
            }
        }
        self.place(path, value);
    }
}

impl TrieNode {
    pub(super) fn insert(&mut self, path: Nibbles, value: Bytes) {
        self.clear_cache();
        match self {
            Leaf(leaf) => {
                if path == leaf.path {
                    // Override leaf node value.
                    leaf.value = value;
                    return;
                }
                // Create a new branch at the end of the common path and attach both values to
                // it, adjusting their paths. The branch gets an extension in front of it when the
                // common path is not empty.
                let common_prefix_len = leaf.path.common_prefix_length(&path);
                let mut branch = BranchNode::default();
                branch.place(
                    leaf.path.slice(common_prefix_len..),
                    core::mem::take(&mut leaf.value),
                );
                branch.place(path.slice(common_prefix_len..), value);
                *self = Self::with_prefix(path.slice(..common_prefix_len), branch);
            }
            Extension(extension) => {
                let common_prefix_len = extension.path.common_prefix_length(&path);
                if common_prefix_len == extension.path.len() {
                    extension
                        .child
                        .insert(path.slice(common_prefix_len..), value);
                    return;
                }
                // The new path leaves the extension in the middle. Split the extension at the
                // divergence point: the part before it stays in front of a new branch, the part
                // after it (if any) keeps leading to the current child.
                let current_idx = extension.path.at(common_prefix_len);
                let remainder = extension.path.slice(common_prefix_len + 1..);
                let child = core::mem::replace(&mut extension.child, Box::default());
                let current = if remainder.is_empty() {
                    child
                } else {
                    Box::new(Extension(ExtensionNode {
                        path: remainder,
                        child,
                        cached: None,
                    }))
                };

                let mut branch = BranchNode::default();
                branch.children.insert(current_idx, current);
                branch.place(path.slice(common_prefix_len..), value);
                *self = Self::with_prefix(path.slice(..common_prefix_len), branch);
            }
            Branch(branch) => branch.insert(path, value),
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Branch(BranchNode::default())
    }
}
