//! Test utilities and fixtures for Lanai.
//!
//! Strategies for generating alphabet-conforming entries and a fixture that
//! manages temporary corpus files and environment overrides.

use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum entry length for generated test data.
const MAX_ENTRY_LENGTH: usize = 12;

/// Maximum corpus size for generated test data.
const MAX_CORPUS_SIZE: usize = 40;

/// Generate entries over the trie alphabet: lowercase letters and spaces.
///
/// A small letter range keeps shared prefixes frequent.
pub fn entry_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!("[a-e ]{{0,{MAX_ENTRY_LENGTH}}}"))
        .expect("valid entry regex")
        .boxed()
}

/// Generate a corpus of entries, duplicates allowed.
pub fn corpus_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(entry_strategy(), 0..MAX_CORPUS_SIZE).boxed()
}

/// Test fixture for tests that need files on disk or environment overrides.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
