//! Implementation of getting an element from the trie according to the element's path value.
use super::nodes::{BranchNode, ExtensionNode, LeafNode, TrieNode};
use crate::trie::TrieNode::{Branch, Extension, Leaf};
use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

impl LeafNode {
    fn get(&self, path: Nibbles) -> Option<&Bytes> {
        (self.path == path).then_some(&self.value)
    }
}

impl ExtensionNode {
    fn get(&self, path: Nibbles) -> Option<&Bytes> {
        // Only keys continuing the extension path can be below it.
        if path.starts_with(&self.path) {
            self.child.get(path.slice(self.path.len()..))
        } else {
            None
        }
    }
}

impl BranchNode {
    fn get(&self, path: Nibbles) -> Option<&Bytes> {
        if path.is_empty() {
            return self.value.as_ref();
        }
        self.children
            .get(path.at(0))
            .and_then(|child| child.get(path.slice(1..)))
    }
}

impl TrieNode {
    pub(super) fn get(&self, path: Nibbles) -> Option<&Bytes> {
        match self {
            Leaf(leaf) => leaf.get(path),
            Extension(extension) => extension.get(path),
            Branch(branch) => branch.get(path),
        }
    }
}
