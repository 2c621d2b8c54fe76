//! Data structures for the Lanai autocomplete engine.
//!
//! The prefix tree lives here. Everything that feeds it (corpus files,
//! interactive sessions, the CLI) sits outside this module.

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{
    Completions, LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult, SharedTrie,
    SuggestOutcome,
};
