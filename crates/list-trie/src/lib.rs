//! A path-compressed Merkle radix trie over arbitrary byte-string keys.
//!
//! Nodes are encoded with RLP and hex-prefix paths, children shorter than 32 encoded bytes are
//! embedded in their parent and larger ones are referenced by digest. The digest function is
//! injected through [`NodeHasher`], committed nodes can be written to any [`NodeStore`].
mod error;
mod hasher;
mod store;
mod trie;

pub use alloy_primitives::{B256, Bytes};
pub use alloy_trie::Nibbles;
pub use error::{ProofError, TrieError};
pub use hasher::{Keccak256, NodeHasher, Sha256};
pub use store::{MemoryStore, NodeStore, StoreError};
pub use trie::{B256Map, Trie, verify_proof};
