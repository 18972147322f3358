//! Implementation of a 16-element branch node children array.
//! It keeps a bit flag per occupied slot so counting children does not scan the array.
use super::nodes::TrieNode;
use core::slice::{Iter, IterMut};

#[derive(Debug, Clone, Default)]
pub(crate) struct BranchNodeChildrenArray {
    children: [Option<Box<TrieNode>>; 16],
    flags: u16,
}

impl BranchNodeChildrenArray {
    #[inline]
    pub(super) fn get(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    #[inline]
    pub(super) fn get_mut(&mut self, idx: usize) -> Option<&mut TrieNode> {
        self.children[idx].as_deref_mut()
    }

    #[inline]
    pub(super) fn insert(&mut self, idx: usize, node: Box<TrieNode>) {
        self.children[idx] = Some(node);
        self.flags |= 1 << idx;
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.flags.count_ones() as usize
    }

    #[inline]
    pub(super) fn iter_mut(&mut self) -> IterMut<'_, Option<Box<TrieNode>>> {
        self.children.iter_mut()
    }

    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, Option<Box<TrieNode>>> {
        self.children.iter()
    }
}
