//! Proving single items against a list root.
use crate::encoding::encode_key;
use crate::list::DerivableList;
use crate::root::build_trie;
use alloy_primitives::{B256, Bytes};
use list_trie::{NodeHasher, ProofError, verify_proof};

/// Proof that `item` sits at position `index` of a committed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProof {
    /// Position of the item in the list.
    pub index: usize,
    /// The committed item bytes.
    pub item: Bytes,
    /// Trie nodes on the path to the item, root first.
    pub nodes: Vec<Bytes>,
}

impl ItemProof {
    /// Returns `true` if the proof shows `item` at `index` under `root`.
    ///
    /// A proof for another item or position is `Ok(false)`, nodes not matching `root` are an error.
    pub fn verify<H: NodeHasher>(&self, hasher: &H, root: B256) -> Result<bool, ProofError> {
        let committed = verify_item(hasher, root, self.index, &self.nodes)?;
        Ok(committed.is_some_and(|item| item == self.item))
    }
}

/// Builds the proof of the item at `index`, `None` if the list is shorter.
pub fn prove_item<H, L>(hasher: H, list: &L, index: usize) -> Option<ItemProof>
where
    H: NodeHasher,
    L: DerivableList + ?Sized,
{
    if index >= list.item_count() {
        return None;
    }
    let mut trie = build_trie(hasher, list);
    Some(ItemProof {
        index,
        item: list.encoded_item(index),
        nodes: trie.proof(encode_key(index)),
    })
}

/// Replays `nodes` against `root` and returns the item committed at `index`.
///
/// `Ok(None)` proves that the list has no item at `index`.
pub fn verify_item<H: NodeHasher>(
    hasher: &H,
    root: B256,
    index: usize,
    nodes: &[Bytes],
) -> Result<Option<Bytes>, ProofError> {
    verify_proof(hasher, root, &encode_key(index), nodes)
}
