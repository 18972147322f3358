#![allow(unused_crate_dependencies, missing_docs)]

use benchmarks::{ListConfig, generate_items, reference_root};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use list_root::{Keccak256, Sha256, commit_root, derive_root, derive_root_with, prove_item};
use list_trie::MemoryStore;

const SIZES: [usize; 3] = [10, 100, 1000];

fn items(num_items: usize) -> Vec<Vec<u8>> {
    generate_items(&ListConfig {
        num_items,
        max_item_len: 120,
    })
}

fn bench_derive_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_root");

    for num_items in SIZES {
        let items = items(num_items);

        group.bench_function(BenchmarkId::new("list_trie", num_items), |b| {
            b.iter(|| derive_root(&items));
        });

        group.bench_function(BenchmarkId::new("hash_builder", num_items), |b| {
            b.iter(|| reference_root(&items));
        });
    }

    group.finish();
}

fn bench_hashers(c: &mut Criterion) {
    let mut group = c.benchmark_group("hasher");
    let items = items(1000);

    group.bench_function("keccak256", |b| {
        b.iter(|| derive_root_with(Keccak256, &items));
    });

    group.bench_function("sha256", |b| {
        b.iter(|| derive_root_with(Sha256, &items));
    });

    group.finish();
}

fn bench_commit_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_root");

    for num_items in SIZES {
        let items = items(num_items);

        group.bench_function(BenchmarkId::new("memory_store", num_items), |b| {
            b.iter(|| {
                let mut store = MemoryStore::new();
                commit_root(Keccak256, &items, &mut store).expect("memory store failed")
            });
        });
    }

    group.finish();
}

fn bench_prove_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove_item");

    for num_items in SIZES {
        let items = items(num_items);
        let root = derive_root(&items);

        group.bench_function(BenchmarkId::new("prove", num_items), |b| {
            b.iter(|| prove_item(Keccak256, &items, num_items / 2).expect("index in range"));
        });

        let proof = prove_item(Keccak256, &items, num_items / 2).expect("index in range");
        group.bench_function(BenchmarkId::new("verify", num_items), |b| {
            b.iter(|| proof.verify(&Keccak256, root).expect("proof replays"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_derive_root,
    bench_hashers,
    bench_commit_root,
    bench_prove_item
);
criterion_main!(benches);
