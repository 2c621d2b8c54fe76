//! Lanai autocomplete library
//!
//! This library contains a fixed-alphabet prefix tree together with the
//! pieces that put it to work: corpus loading, multi-corpus lookup, console
//! rendering, and an interactive dictionary session. The `lanai` binary wires
//! them to the command line.
//!
//! # Architecture
//!
//! - [`data_structures`] owns the trie. It never performs I/O.
//! - [`corpus`] reads newline-delimited files into tries.
//! - [`render`] and [`session`] turn results into console output.
//! - [`config`] and [`error`] carry the ambient configuration and error types.
//!
//! ```
//! use lanai::data_structures::{LanaiTrie, SuggestOutcome};
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("car").unwrap();
//! trie.insert("cat").unwrap();
//!
//! assert_eq!(
//!     trie.suggest("ca").unwrap(),
//!     SuggestOutcome::Suggestions(vec!["car".into(), "cat".into()])
//! );
//! ```

pub mod config;
pub mod corpus;
pub mod data_structures;
pub mod error;
pub mod render;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
