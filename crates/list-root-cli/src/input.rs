//! Reading list items from a file or stdin.
use crate::config::Format;
use alloy_primitives::hex;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the whole input, stdin when `path` is `None` or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    let mut input = String::new();
    match path {
        Some(path) if path != Path::new("-") => {
            input = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        _ => {
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
        }
    }
    Ok(input)
}

/// Splits `input` into items, one per line.
///
/// A final line break does not start another item. Blank lines are empty items.
pub(crate) fn parse_items(input: &str, format: Format) -> Result<Vec<Vec<u8>>> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| match format {
            Format::Text => Ok(line.as_bytes().to_vec()),
            Format::Hex => hex::decode(line.trim())
                .with_context(|| format!("line {}: invalid hex item", idx + 1)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lines() {
        let items = parse_items("0x61\n62\n\n0x\n  0xdead  \n", Format::Hex).unwrap();
        assert_eq!(
            items,
            vec![b"a".to_vec(), b"b".to_vec(), vec![], vec![], vec![0xde, 0xad]]
        );
    }

    #[test]
    fn text_lines() {
        let items = parse_items("a\r\nb c\n\n", Format::Text).unwrap();
        assert_eq!(items, vec![b"a".to_vec(), b"b c".to_vec(), vec![]]);
        assert!(parse_items("", Format::Text).unwrap().is_empty());
    }

    #[test]
    fn invalid_hex_names_the_line() {
        let err = parse_items("0x01\n0xzz\n", Format::Hex).unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid hex item");
    }
}
