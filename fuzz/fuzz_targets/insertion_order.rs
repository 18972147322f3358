#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::Bytes;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use list_trie::Trie;

#[derive(Debug, Arbitrary)]
struct Input {
    // Short keys so that keys ending inside other keys are common.
    entries: Vec<([u8; 3], u8, Vec<u8>)>,
}

fuzz_target!(|input: Input| {
    let model: BTreeMap<Vec<u8>, Bytes> = input
        .entries
        .iter()
        .map(|(key, len, value)| (key[..*len as usize % 4].to_vec(), Bytes::copy_from_slice(value)))
        .collect();

    let mut forward = Trie::new();
    for (key, value) in &model {
        forward.update(key, value.clone());
    }
    let mut reverse = Trie::new();
    for (key, value) in model.iter().rev() {
        reverse.update(key, value.clone());
    }
    // Every key inserted twice must not change anything either.
    let mut twice = forward.clone();
    for (key, value) in &model {
        twice.update(key, value.clone());
    }

    let root = forward.root();
    assert_eq!(root, reverse.root(), "root depends on insertion order");
    assert_eq!(root, twice.root(), "re-insertion changed the root");
    for (key, value) in &model {
        let stored = reverse.get(key);
        assert_eq!(stored, forward.get(key));
        assert!(stored == Some(value) || (value.is_empty() && stored.is_none()));
    }
});
