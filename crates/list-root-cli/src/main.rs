//! `list-root` derives the trie root of a list of items read from a file or stdin and
//! optionally proves one of the items against it.
mod config;
mod input;

use alloy_primitives::hex;
use anyhow::{Context, Result, bail};
use clap::{CommandFactory, FromArgMatches};
use config::{Args, FlagConfig, HashAlgorithm};
use list_root::{B256, ItemProof, derive_root_with, prove_item};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Outcome of one invocation.
#[derive(Debug)]
struct Report {
    hasher: HashAlgorithm,
    items: usize,
    root: B256,
    proof: Option<ProofReport>,
}

#[derive(Debug)]
struct ProofReport {
    proof: ItemProof,
    verified: bool,
}

impl Report {
    fn to_json(&self) -> serde_json::Value {
        let mut report = json!({
            "hasher": self.hasher.name(),
            "items": self.items,
            "root": self.root.to_string(),
        });
        if let Some(ProofReport { proof, verified }) = &self.proof {
            report["proof"] = json!({
                "index": proof.index,
                "item": hex::encode_prefixed(&proof.item),
                "nodes": proof.nodes.iter().map(hex::encode_prefixed).collect::<Vec<_>>(),
                "verified": verified,
            });
        }
        report
    }

    fn to_text(&self) -> String {
        let mut out = self.root.to_string();
        if let Some(ProofReport { proof, verified }) = &self.proof {
            out.push_str(&format!(
                "\nitem {}: {}\nverified: {verified}",
                proof.index,
                hex::encode_prefixed(&proof.item)
            ));
            for node in &proof.nodes {
                out.push_str(&format!("\nnode: {}", hex::encode_prefixed(node)));
            }
        }
        out
    }
}

/// Derives the root of `items` and, if asked, proves the item at `prove`.
fn run(hasher: HashAlgorithm, items: &[Vec<u8>], prove: Option<usize>) -> Result<Report> {
    let root = derive_root_with(hasher, items);
    info!(items = items.len(), %root, hasher = hasher.name(), "derived list root");

    let proof = match prove {
        None => None,
        Some(index) => {
            let Some(proof) = prove_item(hasher, items, index) else {
                bail!("cannot prove item {index}, the list has {} items", items.len());
            };
            let verified = proof
                .verify(&hasher, root)
                .context("proof does not replay against the derived root")?;
            debug!(index, nodes = proof.nodes.len(), verified, "built item proof");
            Some(ProofReport { proof, verified })
        }
    };

    Ok(Report {
        hasher,
        items: items.len(),
        root,
        proof,
    })
}

/// Installs the log subscriber. An explicit `--log-level` wins over `RUST_LOG`.
fn init_logging(level: &str, explicit: bool) {
    let filter = if explicit {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = Args::command().get_matches();
    let config = FlagConfig::from_matches(&Args::command(), &matches);
    let args = Args::from_arg_matches(&matches)?;

    init_logging(&args.log_level, config.is_changed("log_level"));
    for (flag, value, changed) in config.iter() {
        debug!(flag, value, changed, "configuration");
    }

    let input = input::read_input(args.input.as_deref())?;
    let items = input::parse_items(&input, args.format)?;
    let report = run(args.hasher, &items, args.prove)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Vec<u8>> {
        vec![b"a".to_vec(), b"b".to_vec()]
    }

    #[test]
    fn root_only() {
        let report = run(HashAlgorithm::Keccak, &items(), None).unwrap();
        assert_eq!(
            report.to_text(),
            "0x60bf70c11e7040276c82c8d38090aae63edb63f8a3f232bfd652a454ace386b1"
        );
        assert_eq!(
            report.to_json(),
            json!({
                "hasher": "keccak",
                "items": 2,
                "root": "0x60bf70c11e7040276c82c8d38090aae63edb63f8a3f232bfd652a454ace386b1",
            })
        );
    }

    #[test]
    fn sha256_root() {
        let report = run(HashAlgorithm::Sha256, &items(), None).unwrap();
        assert_eq!(
            report.root.to_string(),
            "0xe43be20168faf0a246a42ee671f18b34ac693c0183919f6f8b93716de5305099"
        );
    }

    #[test]
    fn proof_report() {
        let report = run(HashAlgorithm::Keccak, &items(), Some(1)).unwrap();
        let json = report.to_json();
        assert_eq!(json["proof"]["index"], 1);
        assert_eq!(json["proof"]["item"], "0x62");
        assert_eq!(json["proof"]["verified"], true);
        // Both leaves are embedded in the root branch.
        assert_eq!(json["proof"]["nodes"].as_array().unwrap().len(), 1);
        assert!(report.to_text().contains("\nitem 1: 0x62\nverified: true\nnode: 0x"));
    }

    #[test]
    fn proving_past_the_end_fails() {
        let err = run(HashAlgorithm::Keccak, &items(), Some(2)).unwrap_err();
        assert_eq!(err.to_string(), "cannot prove item 2, the list has 2 items");
    }
}
