// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai trie.
//!
//! Only malformed input is an error. A missing entry or prefix is a normal
//! negative result and is reported through return values instead.

/// Errors that can occur in Lanai trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanaiTrieError {
    /// A character outside the lowercase letters and the space symbol.
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Zero-based character offset within the entry.
        position: usize,
    },

    /// An entry longer than the configured maximum depth.
    #[error("Entry of length {length} exceeds maximum trie depth of {max_depth}")]
    EntryTooLong {
        /// Length of the entry in characters.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LanaiTrieError::InvalidCharacter { ch: 'Q', position: 3 };
        assert_eq!(err.to_string(), "Invalid character 'Q' at position 3");

        let err = LanaiTrieError::EntryTooLong {
            length: 20,
            max_depth: 10,
        };
        assert_eq!(
            err.to_string(),
            "Entry of length 20 exceeds maximum trie depth of 10"
        );
    }
}
