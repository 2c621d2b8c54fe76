//! Test modules for Lanai.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of the trie using proptest
//! - Shared fixtures and strategies

pub mod test_utils;

pub use test_utils::{corpus_strategy, entry_strategy, TestFixture};
