//! Corpus error module.
//!
//! This module defines error types that may occur while reading a corpus of
//! newline-delimited entries into a trie.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::LanaiTrieError;

/// Errors that can occur during corpus loading.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Error when a corpus file cannot be opened or read.
    #[error("Failed to read corpus {path}: {source}")]
    Io {
        /// The corpus file
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// Error when reading from a stream that has no file path.
    #[error("Corpus read error: {0}")]
    Read(#[from] io::Error),

    /// Error when a line is rejected by the trie and invalid lines are fatal.
    #[error("Invalid entry on line {line}: {source}")]
    InvalidEntry {
        /// One-based line number
        line: usize,
        /// Why the trie rejected the entry
        source: LanaiTrieError,
    },

    /// Error when a catalog lookup names a corpus that was never loaded.
    #[error("Unknown corpus: {0}")]
    UnknownCorpus(String),
}
