#![allow(unused_crate_dependencies)]
//! Benchmark utilities for comparing list root implementations.

use alloy_primitives::{B256, keccak256};
use alloy_trie::root::ordered_trie_root_with_encoder;

/// Configuration for generating a benchmark list.
#[derive(Debug, Clone, Copy)]
pub struct ListConfig {
    /// Number of items in the list.
    pub num_items: usize,
    /// Length of the longest item. Item lengths cycle from 1 up to this value.
    pub max_item_len: usize,
}

/// Generates a deterministic list of pseudo-random items.
pub fn generate_items(config: &ListConfig) -> Vec<Vec<u8>> {
    (0..config.num_items)
        .map(|i| {
            let len = 1 + i % config.max_item_len.max(1);
            let mut item = Vec::with_capacity(len);
            let mut seed = keccak256((i as u64).to_be_bytes());
            while item.len() < len {
                let take = (len - item.len()).min(B256::len_bytes());
                item.extend_from_slice(&seed[..take]);
                seed = keccak256(seed);
            }
            item
        })
        .collect()
}

/// Root of `items` computed by `alloy-trie`'s `HashBuilder`, the reference implementation.
pub fn reference_root(items: &[Vec<u8>]) -> B256 {
    ordered_trie_root_with_encoder(items, |item, buf| buf.extend_from_slice(item))
}
