//! Deriving the root digest of a list.
use crate::encoding::encode_key;
use crate::list::DerivableList;
use alloy_primitives::B256;
use list_trie::{Keccak256, NodeHasher, NodeStore, Trie, TrieError};
use tracing::debug;

/// Returns the Keccak-256 trie root of `list`.
///
/// The empty list yields the well-known empty root. Swapping two different items always
/// changes the root.
pub fn derive_root<L: DerivableList + ?Sized>(list: &L) -> B256 {
    derive_root_with(Keccak256, list)
}

/// Returns the trie root of `list` with node digests computed by `hasher`.
pub fn derive_root_with<H, L>(hasher: H, list: &L) -> B256
where
    H: NodeHasher,
    L: DerivableList + ?Sized,
{
    let root = build_trie(hasher, list).root();
    debug!(items = list.item_count(), %root, "derived list root");
    root
}

/// Derives the root of `list` like [`derive_root_with`] and writes the trie nodes into `store`.
///
/// Store failures are returned as [`TrieError::Storage`], the returned root is the one
/// [`derive_root_with`] computes.
pub fn commit_root<H, L, S>(hasher: H, list: &L, store: &mut S) -> Result<B256, TrieError>
where
    H: NodeHasher,
    L: DerivableList + ?Sized,
    S: NodeStore + ?Sized,
{
    let root = build_trie(hasher, list).commit(store)?;
    debug!(items = list.item_count(), %root, "committed list root");
    Ok(root)
}

/// Inserts every item of `list` under its index key into a fresh trie.
pub(crate) fn build_trie<H, L>(hasher: H, list: &L) -> Trie<H>
where
    H: NodeHasher,
    L: DerivableList + ?Sized,
{
    let mut trie = Trie::with_hasher(hasher);
    for index in 0..list.item_count() {
        trie.update(encode_key(index), list.encoded_item(index));
    }
    trie
}
