#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::Bytes;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use list_trie::{Keccak256, MemoryStore, Trie, verify_proof};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    absent: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let model: BTreeMap<Vec<u8>, Bytes> = input
        .entries
        .into_iter()
        .map(|(key, value)| (key, Bytes::from(value)))
        .collect();

    let mut trie = Trie::new();
    for (key, value) in &model {
        trie.update(key, value.clone());
    }

    let mut store = MemoryStore::new();
    let root = trie.commit(&mut store).expect("memory store");
    assert_eq!(root, trie.root());

    let mut loaded = Trie::load(root, &store, Keccak256).expect("committed nodes load");
    assert_eq!(loaded.root(), root, "loaded trie has another root");

    for (key, value) in &model {
        let stored = trie.get(key).cloned();
        // An empty value under a key other keys extend encodes as no value.
        assert!(stored.as_ref() == Some(value) || (value.is_empty() && stored.is_none()));
        assert_eq!(loaded.get(key), stored.as_ref());
        let proof = trie.proof(key);
        assert_eq!(
            verify_proof(&Keccak256, root, key, &proof).expect("proof replays"),
            stored
        );
    }
    let proof = trie.proof(&input.absent);
    assert_eq!(
        verify_proof(&Keccak256, root, &input.absent, &proof).expect("proof replays"),
        trie.get(&input.absent).cloned()
    );
});
