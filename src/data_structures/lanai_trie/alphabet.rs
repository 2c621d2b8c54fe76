// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Symbol-to-slot mapping for the Lanai trie.
//!
//! The alphabet holds the 26 lowercase ASCII letters in slots `0..=25` and the
//! space character in slot `26`, so multi-word phrases sort after every
//! single word sharing their prefix.

use super::error::LanaiTrieError;

/// Number of child slots in every node.
pub const ALPHABET_SIZE: usize = 27;

/// Slot reserved for the whitespace symbol.
pub const WHITESPACE_SLOT: usize = 26;

/// The character stored in [`WHITESPACE_SLOT`].
pub const WHITESPACE: char = ' ';

/// Maps a character to its slot index, or `None` if it is not in the alphabet.
#[inline]
pub fn slot_for(ch: char) -> Option<usize> {
    match ch {
        'a'..='z' => Some(ch as usize - 'a' as usize),
        WHITESPACE => Some(WHITESPACE_SLOT),
        _ => None,
    }
}

/// Maps a slot index back to its character.
///
/// # Panics
///
/// Panics if `slot >= ALPHABET_SIZE`. Slots only ever come from
/// [`slot_for`] or from iterating a node's children.
#[inline]
pub fn symbol_for(slot: usize) -> char {
    assert!(slot < ALPHABET_SIZE, "slot {slot} outside the alphabet");
    if slot == WHITESPACE_SLOT {
        WHITESPACE
    } else {
        (b'a' + slot as u8) as char
    }
}

/// Encodes a whole entry into slot indices.
///
/// Fails on the first character outside the alphabet, reporting its position.
pub fn encode(entry: &str) -> Result<Vec<usize>, LanaiTrieError> {
    entry
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            slot_for(ch).ok_or(LanaiTrieError::InvalidCharacter { ch, position })
        })
        .collect()
}
