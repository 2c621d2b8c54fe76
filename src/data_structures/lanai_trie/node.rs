//! Node implementation for the Lanai trie.
//!
//! Each node owns up to [`ALPHABET_SIZE`] children outright, one per slot,
//! so the whole graph is a tree released recursively when the root drops.

use super::alphabet::ALPHABET_SIZE;

/// A node in the Lanai trie.
///
/// Each node represents one symbol on a path from the root. Terminal nodes
/// mark the end of a complete entry.
#[derive(Debug)]
pub struct TrieNode {
    /// Child per slot index
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether the path to this node spells a complete entry
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            is_terminal: false,
        }
    }

    /// Returns the child in `slot`, if present.
    #[inline]
    pub fn child(&self, slot: usize) -> Option<&TrieNode> {
        self.children[slot].as_deref()
    }

    /// Returns the child in `slot`, creating an empty one if needed.
    #[inline]
    pub fn child_or_insert(&mut self, slot: usize) -> &mut TrieNode {
        self.children[slot].get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Returns `true` if any slot holds a child.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Returns the first populated slot at or after `from`, with its child.
    pub fn next_child_from(&self, from: usize) -> Option<(usize, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(slot, child)| child.as_deref().map(|node| (slot, node)))
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
