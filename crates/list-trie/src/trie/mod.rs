mod children;
mod commit;
mod display;
mod get;
mod hash;
mod insert;
mod nodes;
mod proof;
mod reveal;
mod rlp;
mod trie;

use crate::hasher::Keccak256;
use nodes::TrieNode;
pub use proof::verify_proof;
pub use trie::B256Map;

/// A Merkle radix trie with leaf, extension and branch nodes.
///
/// Digests are computed with `H`, Keccak-256 unless another [`crate::NodeHasher`] is injected.
#[derive(Debug, Clone)]
pub struct Trie<H = Keccak256> {
    root: Option<TrieNode>,
    hasher: H,
}
