//! Trie keys and values derived from list positions and items.
use alloy_rlp::Encodable;

/// Returns the trie key of the item at `index`.
///
/// The key is the RLP string holding the minimal big-endian bytes of the index. Index 0 has
/// no significant bytes and encodes as the empty string `0x80`, indices below 128 are the
/// byte itself and larger ones get a length prefix (`128` is `0x8180`). The prefix keeps the
/// keys prefix-free.
pub fn encode_key(index: usize) -> Vec<u8> {
    let mut key = Vec::with_capacity(index.length());
    index.encode(&mut key);
    key
}

/// Returns the trie value of `item`. Items are stored verbatim.
#[inline]
pub const fn encode_value(item: &[u8]) -> &[u8] {
    item
}
