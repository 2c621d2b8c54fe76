//! Thread-shareable handle around a [`LanaiTrie`].
//!
//! The trie itself holds no locks. `SharedTrie` serializes access from the
//! outside: any number of concurrent readers, or a single writer.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{LanaiTrie, LanaiTrieConfig, LanaiTrieResult, SuggestOutcome};

/// A cloneable, lock-protected handle to one trie.
#[derive(Debug, Clone, Default)]
pub struct SharedTrie {
    inner: Arc<RwLock<LanaiTrie>>,
}

impl SharedTrie {
    /// Creates a new empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::from_trie(LanaiTrie::new())
    }

    /// Creates a new empty shared trie with the specified configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self::from_trie(LanaiTrie::with_config(config))
    }

    /// Wraps an already populated trie.
    pub fn from_trie(trie: LanaiTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts an entry under the write lock. See [`LanaiTrie::insert`].
    pub fn insert<E: AsRef<str>>(&self, entry: E) -> LanaiTrieResult<bool> {
        self.inner.write().insert(entry)
    }

    /// See [`LanaiTrie::contains`].
    pub fn contains<E: AsRef<str>>(&self, entry: E) -> LanaiTrieResult<bool> {
        self.inner.read().contains(entry)
    }

    /// See [`LanaiTrie::suggest`].
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> LanaiTrieResult<SuggestOutcome> {
        self.inner.read().suggest(prefix)
    }

    /// Returns the number of distinct entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
