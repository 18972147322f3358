//! Errors surfaced by trie storage and proof checking.
use crate::store::StoreError;
use alloy_primitives::B256;
use thiserror::Error;

/// Failures while committing a trie to, or loading it from, a [`crate::NodeStore`].
#[derive(Debug, Error)]
pub enum TrieError {
    /// The backing store could not serve the request.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// A referenced node is not present in the store.
    #[error("trie node {0} not found")]
    MissingNode(B256),

    /// The store returned bytes that do not hash to the requested digest.
    #[error("trie node hashes to {actual}, expected {expected}")]
    HashMismatch {
        /// Digest the node was requested under.
        expected: B256,
        /// Digest of the bytes actually returned.
        actual: B256,
    },

    /// A stored node is not a valid RLP trie node.
    #[error("malformed trie node: {0}")]
    Decode(#[from] alloy_rlp::Error),

    /// A node decoded fine but breaks a structural rule of the trie.
    #[error("invalid trie node: {0}")]
    InvalidNode(&'static str),
}

/// Failures while replaying a proof against a root digest.
#[derive(Debug, Error)]
pub enum ProofError {
    /// The proof ends before reaching the node referenced by this digest.
    #[error("proof node {0} is missing")]
    MissingNode(B256),

    /// A proof node does not hash to the digest its parent references.
    #[error("proof node hashes to {actual}, expected {expected}")]
    HashMismatch {
        /// Digest referenced by the parent (or the root).
        expected: B256,
        /// Digest of the supplied node.
        actual: B256,
    },

    /// A proof node is not a valid RLP trie node.
    #[error("malformed proof node: {0}")]
    Decode(#[from] alloy_rlp::Error),

    /// The proof carries nodes the walk to the key never reached.
    #[error("proof has {0} unused nodes")]
    UnusedNodes(usize),
}
