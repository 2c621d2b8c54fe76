//! Lanai Trie Implementation
//!
//! This module provides a fixed-alphabet prefix tree for autocomplete. Entries
//! are built from the lowercase ASCII letters and the space character, so a
//! trie can hold single words as well as short phrases such as song titles.
//!
//! Key features:
//! * Exact membership lookup in O(length of entry)
//! * Prefix suggestions in deterministic alphabet order
//! * Input validation: characters outside the alphabet are rejected without
//!   mutating the trie

mod alphabet;
mod error;
mod node;
mod shared;
mod suggest;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use alphabet::{encode, slot_for, symbol_for, ALPHABET_SIZE, WHITESPACE, WHITESPACE_SLOT};
pub use error::LanaiTrieError;
pub use shared::SharedTrie;
pub use suggest::{Completions, SuggestOutcome};
use node::TrieNode;

/// Result type for Lanai trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// Configuration options for the Lanai trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanaiTrieConfig {
    /// Maximum entry length, which bounds the depth of the tree
    pub max_depth: usize,
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self { max_depth: 1024 }
    }
}

/// Lanai Trie stores entries over a 27-symbol alphabet and answers exact
/// and prefix queries.
///
/// The trie is single-threaded: `insert` takes `&mut self`. Wrap it in a
/// [`SharedTrie`] to share it between threads.
#[derive(Debug)]
pub struct LanaiTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct entries
    len: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            config,
        }
    }

    /// Inserts an entry into the trie.
    ///
    /// The whole entry is validated before any node is created, so a
    /// rejected entry leaves the trie untouched. Inserting the empty string
    /// marks the root itself as an entry.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the entry is new, `false` if it was already present.
    /// * `Err(LanaiTrieError)` - If the entry is too long or holds an invalid character.
    pub fn insert<E>(&mut self, entry: E) -> LanaiTrieResult<bool>
    where
        E: AsRef<str>,
    {
        let entry = entry.as_ref();
        let slots = self.encode_checked(entry)?;

        let mut node = &mut self.root;
        for slot in slots {
            node = node.child_or_insert(slot);
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.len += 1;
        }

        trace!(entry, is_new, "Inserted entry");
        Ok(is_new)
    }

    /// Inserts every entry from an iterator, stopping at the first error.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - How many of the entries were new.
    /// * `Err(LanaiTrieError)` - The first rejected entry's error. Entries
    ///   before it stay inserted.
    pub fn insert_all<I>(&mut self, entries: I) -> LanaiTrieResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut added = 0;
        for entry in entries {
            if self.insert(entry)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Checks if an entry was inserted.
    ///
    /// A path that exists only as the prefix of longer entries does not count.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the entry exists, `false` otherwise.
    /// * `Err(LanaiTrieError)` - If the entry holds an invalid character.
    pub fn contains<E>(&self, entry: E) -> LanaiTrieResult<bool>
    where
        E: AsRef<str>,
    {
        let found = self
            .walk(entry.as_ref())?
            .map_or(false, |node| node.is_terminal);
        Ok(found)
    }

    /// Suggests every entry that starts with `prefix`.
    ///
    /// # Returns
    ///
    /// * `Ok(SuggestOutcome::NoSuchPrefix)` - No entry starts with `prefix`.
    /// * `Ok(SuggestOutcome::ExactOnly)` - `prefix` is an entry and nothing extends it.
    /// * `Ok(SuggestOutcome::Suggestions(_))` - Every entry beneath `prefix`, in
    ///   alphabet order, with `prefix` first if it is itself an entry.
    /// * `Err(LanaiTrieError)` - If the prefix holds an invalid character.
    pub fn suggest<P>(&self, prefix: P) -> LanaiTrieResult<SuggestOutcome>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let outcome = match self.walk(prefix)? {
            None => SuggestOutcome::NoSuchPrefix,
            Some(node) if node.has_children() => {
                SuggestOutcome::Suggestions(Completions::new(node, prefix).collect())
            }
            Some(node) if node.is_terminal => SuggestOutcome::ExactOnly,
            // Only an empty root is neither terminal nor a parent.
            Some(_) => SuggestOutcome::NoSuchPrefix,
        };

        debug!(
            prefix,
            matches = outcome.entries().len(),
            "Computed suggestions"
        );
        Ok(outcome)
    }

    /// Lazily enumerates the entries beneath `prefix`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Completions))` - An iterator over every entry starting with `prefix`.
    /// * `Ok(None)` - If the path for `prefix` does not exist.
    /// * `Err(LanaiTrieError)` - If the prefix holds an invalid character.
    pub fn completions<'a>(&'a self, prefix: &str) -> LanaiTrieResult<Option<Completions<'a>>> {
        Ok(self
            .walk(prefix)?
            .map(|node| Completions::new(node, prefix)))
    }

    /// Lazily enumerates every entry in alphabet order.
    pub fn entries(&self) -> Completions<'_> {
        Completions::new(&self.root, "")
    }

    /// Returns the number of distinct entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Follows the path for `key` without creating nodes.
    ///
    /// Only the alphabet is checked here. A key longer than `max_depth` has
    /// no path, so it simply misses.
    fn walk(&self, key: &str) -> LanaiTrieResult<Option<&TrieNode>> {
        let slots = encode(key)?;
        if slots.len() > self.config.max_depth {
            return Ok(None);
        }

        let mut node = &self.root;
        for slot in slots {
            match node.child(slot) {
                Some(next) => node = next,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// Encodes an entry about to be inserted, enforcing `max_depth`.
    fn encode_checked(&self, key: &str) -> LanaiTrieResult<Vec<usize>> {
        let slots = encode(key)?;
        if slots.len() > self.config.max_depth {
            return Err(LanaiTrieError::EntryTooLong {
                length: slots.len(),
                max_depth: self.config.max_depth,
            });
        }
        Ok(slots)
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}
