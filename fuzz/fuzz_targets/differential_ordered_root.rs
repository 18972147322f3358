#![no_main]

use alloy_trie::root::ordered_trie_root_with_encoder;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use list_root::{Keccak256, derive_root, prove_item};

#[derive(Debug, Arbitrary)]
struct Input {
    items: Vec<Vec<u8>>,
    prove: u16,
}

fuzz_target!(|input: Input| {
    let root = derive_root(&input.items);
    let expected =
        ordered_trie_root_with_encoder(&input.items, |item, buf| buf.extend_from_slice(item));
    assert_eq!(root, expected, "list root != HashBuilder root");

    if !input.items.is_empty() {
        let index = input.prove as usize % input.items.len();
        let proof = prove_item(Keccak256, &input.items, index).expect("index in range");
        assert!(proof.verify(&Keccak256, root).expect("proof replays"));
    }
});
