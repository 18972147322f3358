//! Command line flags and the flag-backed configuration view over them.
use clap::{ArgMatches, Command, Parser, ValueEnum, parser::ValueSource};
use list_root::{B256, Keccak256, NodeHasher, Sha256};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Derives the trie root of a list of items, one item per input line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// File to read items from. Reads stdin when omitted or `-`.
    #[arg(long, short)]
    pub(crate) input: Option<PathBuf>,

    /// How each line encodes its item.
    #[arg(long, value_enum, default_value_t = Format::Hex)]
    pub(crate) format: Format,

    /// Hash function for trie nodes.
    #[arg(long, value_enum, default_value_t = HashAlgorithm::Keccak)]
    pub(crate) hasher: HashAlgorithm,

    /// Also print the proof of the item at this index.
    #[arg(long)]
    pub(crate) prove: Option<usize>,

    /// Print the result as JSON.
    #[arg(long)]
    pub(crate) json: bool,

    /// Log filter, overrides `RUST_LOG` when given.
    #[arg(long, default_value = "info")]
    pub(crate) log_level: String,
}

/// Item encoding of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Hex bytes, `0x` prefix optional.
    Hex,
    /// The UTF-8 bytes of the line.
    Text,
}

/// Node hash function selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum HashAlgorithm {
    /// Keccak-256.
    Keccak,
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Name of the hash function as accepted by `--hasher`.
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Keccak => "keccak",
            Self::Sha256 => "sha256",
        }
    }
}

impl NodeHasher for HashAlgorithm {
    fn hash(&self, data: &[u8]) -> B256 {
        match self {
            Self::Keccak => Keccak256.hash(data),
            Self::Sha256 => Sha256.hash(data),
        }
    }

    fn empty_root(&self) -> B256 {
        match self {
            Self::Keccak => Keccak256.empty_root(),
            Self::Sha256 => Sha256.empty_root(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Flag {
    value: String,
    changed: bool,
}

/// String view of the parsed flags, remembering which ones differ from their defaults.
#[derive(Debug, Clone, Default)]
pub(crate) struct FlagConfig {
    flags: BTreeMap<String, Flag>,
}

impl FlagConfig {
    /// Collects the value of every argument of `command` from `matches`.
    pub(crate) fn from_matches(command: &Command, matches: &ArgMatches) -> Self {
        let flags = command
            .get_arguments()
            .filter_map(|arg| {
                let id = arg.get_id().as_str();
                let value = matches
                    .get_raw(id)?
                    .map(|raw| raw.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(",");
                let changed = !matches!(
                    matches.value_source(id),
                    None | Some(ValueSource::DefaultValue)
                );
                Some((id.to_owned(), Flag { value, changed }))
            })
            .collect();
        Self { flags }
    }

    /// Returns `true` if `key` was set on the command line or in the environment.
    pub(crate) fn is_changed(&self, key: &str) -> bool {
        self.flags.get(key).is_some_and(|flag| flag.changed)
    }

    /// Iterates over `(flag, value, changed)` for every flag that has a value.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str, bool)> {
        self.flags
            .iter()
            .map(|(key, flag)| (key.as_str(), flag.value.as_str(), flag.changed))
    }
}
