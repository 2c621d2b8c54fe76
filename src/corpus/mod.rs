//! Corpus handling for the Lanai autocomplete engine.
//!
//! The trie never touches files. This module reads newline-delimited corpora
//! into tries and groups several tries into a catalog for combined lookups.

pub mod catalog;
pub mod loader;

pub use catalog::{Catalog, Corpus};
pub use loader::{trim_entry, CorpusLoader, LoadReport};
