//! Newline-delimited corpus loading.
//!
//! Each line of a corpus is one entry. Trailing newline and control
//! characters are trimmed before the entry reaches the trie, and blank lines
//! are ignored. Lines are read as raw bytes: bytes that are not UTF-8 decode
//! to U+FFFD, which the trie rejects like any other foreign character.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::InvalidEntryPolicy;
use crate::data_structures::LanaiTrie;
use crate::error::corpus::CorpusError;

/// Counters describing one completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that added a new entry
    pub inserted: usize,

    /// Lines that repeated an entry already in the trie
    pub duplicates: usize,

    /// Lines skipped as blank or invalid
    pub skipped: usize,
}

/// Reads corpora into tries, one entry per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusLoader {
    policy: InvalidEntryPolicy,
}

impl CorpusLoader {
    /// Creates a loader with the given handling for invalid lines.
    pub fn new(policy: InvalidEntryPolicy) -> Self {
        Self { policy }
    }

    /// Loads every line of the file at `path` into `trie`.
    pub fn load_file<P: AsRef<Path>>(
        &self,
        path: P,
        trie: &mut LanaiTrie,
    ) -> Result<LoadReport, CorpusError> {
        let path = path.as_ref();
        let io_error = |source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let report = self.load_reader(BufReader::new(file), trie).map_err(|e| match e {
            CorpusError::Read(source) => io_error(source),
            other => other,
        })?;

        info!(
            path = %path.display(),
            inserted = report.inserted,
            duplicates = report.duplicates,
            skipped = report.skipped,
            "Corpus loaded"
        );
        Ok(report)
    }

    /// Loads every line from `reader` into `trie`.
    pub fn load_reader<R: BufRead>(
        &self,
        reader: R,
        trie: &mut LanaiTrie,
    ) -> Result<LoadReport, CorpusError> {
        let mut report = LoadReport::default();

        for (index, line) in reader.split(b'\n').enumerate() {
            let bytes = line?;
            let line = String::from_utf8_lossy(&bytes);
            let line_number = index + 1;
            let entry = trim_entry(&line);

            if entry.is_empty() {
                debug!(line = line_number, "Skipping blank line");
                report.skipped += 1;
                continue;
            }

            match trie.insert(entry) {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.duplicates += 1,
                Err(source) => match self.policy {
                    InvalidEntryPolicy::Skip => {
                        warn!(line = line_number, entry, error = %source, "Skipping invalid entry");
                        report.skipped += 1;
                    }
                    InvalidEntryPolicy::Fail => {
                        return Err(CorpusError::InvalidEntry {
                            line: line_number,
                            source,
                        })
                    }
                },
            }
        }

        Ok(report)
    }
}

/// Strips trailing newline, carriage return and other control characters.
pub fn trim_entry(line: &str) -> &str {
    line.trim_end_matches(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::LanaiTrieError;
    use std::io::Cursor;

    #[test]
    fn test_trim_entry() {
        assert_eq!(trim_entry("apple\r\n"), "apple");
        assert_eq!(trim_entry("apple pie\n"), "apple pie");
        assert_eq!(trim_entry("apple \u{7}"), "apple ");
        assert_eq!(trim_entry("\n"), "");
    }

    #[test]
    fn test_load_reader_counts() {
        let input = "cat\r\ncar\n\ncat\nDog\ndog\n";
        let mut trie = LanaiTrie::new();

        let report = CorpusLoader::default()
            .load_reader(Cursor::new(input), &mut trie)
            .unwrap();

        assert_eq!(
            report,
            LoadReport {
                inserted: 3,
                duplicates: 1,
                skipped: 2,
            }
        );
        assert!(trie.contains("car").unwrap());
        assert!(trie.contains("dog").unwrap());
        assert!(!trie.contains("").unwrap());
    }

    #[test]
    fn test_fail_policy_reports_line() {
        let input = "alpha\nbeta\nGamma\ndelta\n";
        let mut trie = LanaiTrie::new();

        let err = CorpusLoader::new(InvalidEntryPolicy::Fail)
            .load_reader(Cursor::new(input), &mut trie)
            .unwrap_err();

        match err {
            CorpusError::InvalidEntry { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_undecodable_line_follows_policy() {
        let input: &[u8] = b"cat\ncaf\xe9\ndog\n";

        let mut trie = LanaiTrie::new();
        let report = CorpusLoader::default()
            .load_reader(Cursor::new(input), &mut trie)
            .unwrap();
        assert_eq!(
            report,
            LoadReport {
                inserted: 2,
                duplicates: 0,
                skipped: 1,
            }
        );
        assert!(trie.contains("cat").unwrap());
        assert!(trie.contains("dog").unwrap());

        let mut strict = LanaiTrie::new();
        let err = CorpusLoader::new(InvalidEntryPolicy::Fail)
            .load_reader(Cursor::new(input), &mut strict)
            .unwrap_err();
        assert!(matches!(
            err,
            CorpusError::InvalidEntry {
                line: 2,
                source: LanaiTrieError::InvalidCharacter { position: 3, .. },
            }
        ));
        assert_eq!(strict.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let mut trie = LanaiTrie::new();
        let err = CorpusLoader::default()
            .load_file("definitely/not/here.txt", &mut trie)
            .unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
