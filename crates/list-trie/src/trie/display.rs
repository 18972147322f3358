//! Simple printing implementation of the trie.
use crate::trie::TrieNode::{Branch, Extension, Leaf};
use crate::trie::{Trie, TrieNode};
use std::fmt::Display;

impl<H> Display for Trie<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn fmt_node(
            f: &mut std::fmt::Formatter<'_>,
            node: &TrieNode,
            indent: usize,
        ) -> std::fmt::Result {
            match node {
                Branch(branch) => {
                    write!(f, "Branch {{ value: {:?} }}", branch.value)?;
                    for (idx, child) in branch.children.iter().enumerate() {
                        if let Some(child) = child {
                            write!(f, "\n{}[{:x}] ", " ".repeat(indent + 4), idx)?;
                            fmt_node(f, child, indent + 4)?;
                        }
                    }
                    Ok(())
                }
                Extension(extension) => {
                    write!(f, "Extension {{ path: {:?} }}", extension.path.to_vec())?;
                    write!(f, "\n{}", " ".repeat(indent + 4))?;
                    fmt_node(f, &extension.child, indent + 4)
                }
                Leaf(leaf) => write!(
                    f,
                    "Leaf {{ path: {:?}, value: {:?} }}",
                    leaf.path.to_vec(),
                    leaf.value
                ),
            }
        }

        match &self.root {
            None => write!(f, "Trie {{ EMPTY }}"),
            Some(root) => fmt_node(f, root, 0),
        }
    }
}
