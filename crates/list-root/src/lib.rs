//! Ordered-list commitments.
//!
//! Every item of a list is inserted into a [`Trie`] under the canonical encoding of its
//! index, the trie root commits to both the items and their order. Individual items can be
//! proven against that root with [`prove_item`] and [`verify_item`].
mod encoding;
mod list;
mod proof;
mod root;

pub use encoding::{encode_key, encode_value};
pub use list::{DerivableList, RlpList};
pub use list_trie::{
    B256, Bytes, Keccak256, MemoryStore, NodeHasher, NodeStore, ProofError, Sha256, StoreError,
    Trie, TrieError,
};
pub use proof::{ItemProof, prove_item, verify_item};
pub use root::{commit_root, derive_root, derive_root_with};
