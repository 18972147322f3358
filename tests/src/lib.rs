#![allow(missing_docs)]

#[cfg(test)]
mod tests {
    use alloy_primitives::{B256, Bytes, hex};
    use alloy_rlp::{Encodable, Header};
    use alloy_trie::root::{ordered_trie_root, ordered_trie_root_with_encoder};
    use list_root::{
        Keccak256, NodeHasher, RlpList, Sha256, commit_root, derive_root, derive_root_with,
        encode_key, prove_item, verify_item,
    };
    use list_trie::{MemoryStore, Trie, TrieError};
    use serde_json::Value;
    use std::{fs::File, path::PathBuf, str::FromStr};

    struct Case {
        name: String,
        hasher: String,
        items: Vec<Vec<u8>>,
        root: B256,
    }

    fn load_cases() -> Vec<Case> {
        let mut input_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        input_path.push("../test_data/list_roots.json");
        let fixtures: Value = serde_json::from_reader(
            File::open(&input_path).expect("failed to open list root fixtures"),
        )
        .expect("failed to parse list root fixtures");

        fixtures["cases"]
            .as_array()
            .expect("cases is not an array")
            .iter()
            .map(|case| Case {
                name: case["name"].as_str().expect("name").to_owned(),
                hasher: case["hasher"].as_str().expect("hasher").to_owned(),
                items: case["items"]
                    .as_array()
                    .expect("items")
                    .iter()
                    .map(|item| hex::decode(item.as_str().expect("hex item")).expect("valid hex"))
                    .collect(),
                root: B256::from_str(case["root"].as_str().expect("root")).expect("valid root"),
            })
            .collect()
    }

    fn root_of(case: &Case) -> B256 {
        match case.hasher.as_str() {
            "keccak" => derive_root(&case.items),
            "sha256" => derive_root_with(Sha256, &case.items),
            other => panic!("unknown hasher {other}"),
        }
    }

    /// A receipt-like item committed by its RLP list encoding.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Receipt {
        success: bool,
        gas_used: u64,
        logs: Vec<Bytes>,
    }

    impl Receipt {
        fn fields_length(&self) -> usize {
            self.success.length() + self.gas_used.length() + self.logs.length()
        }
    }

    impl Encodable for Receipt {
        fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
            Header {
                list: true,
                payload_length: self.fields_length(),
            }
            .encode(out);
            self.success.encode(out);
            self.gas_used.encode(out);
            self.logs.encode(out);
        }

        fn length(&self) -> usize {
            let payload_length = self.fields_length();
            payload_length + alloy_rlp::length_of_length(payload_length)
        }
    }

    fn receipts(count: u64) -> Vec<Receipt> {
        (0..count)
            .map(|i| Receipt {
                success: i % 3 != 0,
                gas_used: 21_000 * (i + 1),
                logs: (0..i % 4)
                    .map(|log| Bytes::from(vec![log as u8; 10 + i as usize]))
                    .collect(),
            })
            .collect()
    }

    #[test]
    fn fixture_roots() {
        let cases = load_cases();
        assert!(!cases.is_empty());
        for case in &cases {
            assert_eq!(root_of(case), case.root, "{}", case.name);
        }
    }

    #[test]
    fn fixture_roots_match_hash_builder() {
        for case in load_cases().iter().filter(|case| case.hasher == "keccak") {
            let reference =
                ordered_trie_root_with_encoder(&case.items, |item, buf| buf.extend_from_slice(item));
            assert_eq!(reference, case.root, "{}", case.name);
        }
    }

    #[test]
    fn fixture_items_prove() {
        for case in &load_cases() {
            for index in 0..case.items.len() {
                let valid = match case.hasher.as_str() {
                    "keccak" => prove_item(Keccak256, &case.items, index)
                        .expect("index in range")
                        .verify(&Keccak256, case.root),
                    _ => prove_item(Sha256, &case.items, index)
                        .expect("index in range")
                        .verify(&Sha256, case.root),
                };
                assert!(valid.expect("proof replays"), "{} item {index}", case.name);
            }
        }
    }

    #[test]
    fn rlp_items_match_ordered_trie_root() {
        for count in [0, 1, 5, 130, 300] {
            let receipts = receipts(count);
            assert_eq!(
                derive_root(&RlpList(&receipts)),
                ordered_trie_root(&receipts),
                "{count} receipts"
            );
        }
    }

    #[test]
    fn committed_list_can_be_reloaded_and_extended() {
        let receipts = receipts(200);
        let mut store = MemoryStore::new();
        let root = commit_root(Keccak256, &RlpList(&receipts), &mut store).expect("memory store");
        assert_eq!(root, derive_root(&RlpList(&receipts)));

        let mut trie = Trie::load(root, &store, Keccak256).expect("all nodes committed");
        assert_eq!(
            trie.get(encode_key(150)).map(|item| item.to_vec()),
            Some(alloy_rlp::encode(&receipts[150]))
        );

        let mut extended = receipts.clone();
        extended.push(receipts[0].clone());
        trie.update(encode_key(200), alloy_rlp::encode(&receipts[0]));
        assert_eq!(trie.root(), derive_root(&RlpList(&extended)));
    }

    #[test]
    fn missing_nodes_are_reported() {
        let items: Vec<Vec<u8>> = (0..100_u32).map(|i| i.to_be_bytes().repeat(10)).collect();
        let mut store = MemoryStore::new();
        let root = commit_root(Keccak256, &items, &mut store).expect("memory store");

        let store: MemoryStore = store
            .keys()
            .filter(|digest| **digest == root)
            .map(|digest| (*digest, Bytes::from(vec![])))
            .collect();
        assert!(matches!(
            Trie::load(root, &store, Keccak256),
            Err(TrieError::HashMismatch { .. })
        ));
        assert!(matches!(
            Trie::load(root, &MemoryStore::new(), Keccak256),
            Err(TrieError::MissingNode(digest)) if digest == root
        ));
    }

    #[test]
    fn proofs_do_not_transfer_between_lists() {
        let items: Vec<Vec<u8>> = (0..64_u8).map(|i| vec![i; 40]).collect();
        let mut other = items.clone();
        other[10] = vec![0xff; 40];

        let proof = prove_item(Keccak256, &items, 10).expect("index in range");
        assert!(proof.verify(&Keccak256, derive_root(&items)).expect("valid"));
        assert!(matches!(
            proof.verify(&Keccak256, derive_root(&other)),
            Err(list_root::ProofError::HashMismatch { .. })
        ));
        assert_eq!(
            verify_item(&Keccak256, derive_root(&items), 10, &proof.nodes).expect("valid"),
            Some(Bytes::from(vec![10_u8; 40]))
        );
    }

    #[test]
    fn concurrent_derivations_are_independent() {
        let lists: Vec<Vec<Vec<u8>>> = (0..8_u8)
            .map(|seed| (0..200_u8).map(|i| vec![seed ^ i; 1 + i as usize % 50]).collect())
            .collect();
        let sequential: Vec<B256> = lists.iter().map(|list| derive_root(list)).collect();

        let concurrent: Vec<B256> = std::thread::scope(|scope| {
            let handles: Vec<_> = lists
                .iter()
                .map(|list| scope.spawn(move || derive_root(list)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("derivation panicked"))
                .collect()
        });
        assert_eq!(concurrent, sequential);
    }

    #[test]
    fn empty_root_depends_only_on_hasher() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(derive_root(&empty), Keccak256.empty_root());
        assert_eq!(derive_root_with(Sha256, &empty), Sha256.empty_root());
        assert_eq!(Keccak256.empty_root(), Keccak256.hash(&hex!("80")));
    }
}
