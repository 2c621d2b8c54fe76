//! Suggestion enumeration for the Lanai trie.
//!
//! [`Completions`] walks a subtree depth-first in preorder, visiting children
//! in ascending slot order, and yields every complete entry it passes. A
//! single buffer holds the current path: a symbol is pushed before descending
//! into a child and popped after leaving it.

use serde::Serialize;

use super::alphabet::symbol_for;
use super::node::TrieNode;

/// Outcome of a prefix query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "entries", rename_all = "snake_case")]
pub enum SuggestOutcome {
    /// No inserted entry starts with the prefix.
    NoSuchPrefix,

    /// The prefix is itself an entry and nothing extends it.
    ExactOnly,

    /// Every entry beneath the prefix, in slot order. Includes the prefix
    /// first when it is itself an entry.
    Suggestions(Vec<String>),
}

impl SuggestOutcome {
    /// Returns the suggestion list, or an empty slice for the other outcomes.
    pub fn entries(&self) -> &[String] {
        match self {
            Self::Suggestions(entries) => entries,
            Self::NoSuchPrefix | Self::ExactOnly => &[],
        }
    }

    /// Returns `true` if at least one entry starts with the queried prefix.
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoSuchPrefix)
    }
}

#[derive(Debug)]
struct Frame<'a> {
    node: &'a TrieNode,
    next_slot: usize,
    visited: bool,
}

impl<'a> Frame<'a> {
    fn new(node: &'a TrieNode) -> Self {
        Self {
            node,
            next_slot: 0,
            visited: false,
        }
    }
}

/// Lazy iterator over every complete entry beneath a node.
#[derive(Debug)]
pub struct Completions<'a> {
    stack: Vec<Frame<'a>>,
    buffer: String,
}

impl<'a> Completions<'a> {
    /// Starts an enumeration at `node`, with `prefix` as the path spelled so far.
    pub(crate) fn new(node: &'a TrieNode, prefix: &str) -> Self {
        Self {
            stack: vec![Frame::new(node)],
            buffer: prefix.to_owned(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;

            if !frame.visited {
                frame.visited = true;
                if frame.node.is_terminal {
                    return Some(self.buffer.clone());
                }
            }

            let node = frame.node;
            match node.next_child_from(frame.next_slot) {
                Some((slot, child)) => {
                    frame.next_slot = slot + 1;
                    self.buffer.push(symbol_for(slot));
                    self.stack.push(Frame::new(child));
                }
                None => {
                    self.stack.pop();
                    // The starting frame owns the prefix, not a pushed symbol.
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Completions<'_> {}
