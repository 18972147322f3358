//! Hash functions deriving node digests from canonical node encodings.
use alloy_primitives::{B256, keccak256};
use alloy_rlp::EMPTY_STRING_CODE;
use alloy_trie::EMPTY_ROOT_HASH;
use sha2::Digest;

/// A collision-resistant hash function producing 32-byte node digests.
///
/// Swapping the hasher changes every digest a trie produces but none of its structure. Any
/// `Fn(&[u8]) -> B256` closure is a hasher, which keeps fast stand-ins cheap to write in tests.
pub trait NodeHasher {
    /// Hashes `data` into a digest.
    fn hash(&self, data: &[u8]) -> B256;

    /// Digest of a trie without entries: the hash of the RLP empty string.
    fn empty_root(&self) -> B256 {
        self.hash(&[EMPTY_STRING_CODE])
    }
}

/// Keccak-256, the hash used by Ethereum tries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl NodeHasher for Keccak256 {
    #[inline]
    fn hash(&self, data: &[u8]) -> B256 {
        keccak256(data)
    }

    #[inline]
    fn empty_root(&self) -> B256 {
        EMPTY_ROOT_HASH
    }
}

/// SHA-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl NodeHasher for Sha256 {
    #[inline]
    fn hash(&self, data: &[u8]) -> B256 {
        B256::from_slice(&sha2::Sha256::digest(data))
    }
}

impl<F> NodeHasher for F
where
    F: Fn(&[u8]) -> B256,
{
    #[inline]
    fn hash(&self, data: &[u8]) -> B256 {
        self(data)
    }
}
