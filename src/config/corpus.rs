//! Corpus configuration module.
//!
//! This module defines where the dictionary and music finder corpora are read
//! from and how malformed lines are handled while loading them.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the loader does with a line the trie rejects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidEntryPolicy {
    /// Log the line and keep loading
    #[default]
    Skip,
    /// Abort the load with an error
    Fail,
}

/// Corpus file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Word list for the dictionary front end
    pub dictionary: PathBuf,

    /// Album titles for the music finder
    pub albums: PathBuf,

    /// Song titles for the music finder
    pub songs: PathBuf,

    /// Artist names for the music finder
    pub artists: PathBuf,

    /// Handling of lines holding characters outside the alphabet
    pub on_invalid: InvalidEntryPolicy,
}

impl CorpusConfig {
    /// Music finder corpora in display order, paired with their section names.
    pub fn music_sources(&self) -> [(&'static str, &Path); 3] {
        [
            ("albums", self.albums.as_path()),
            ("songs", self.songs.as_path()),
            ("artists", self.artists.as_path()),
        ]
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("Dictionary.txt"),
            albums: PathBuf::from("albums.txt"),
            songs: PathBuf::from("songs.txt"),
            artists: PathBuf::from("artists.txt"),
            on_invalid: InvalidEntryPolicy::default(),
        }
    }
}

impl Validate for CorpusConfig {
    fn validate(&self) -> ConfigResult<()> {
        let paths = [
            ("dictionary", &self.dictionary),
            ("albums", &self.albums),
            ("songs", &self.songs),
            ("artists", &self.artists),
        ];

        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "corpus.{name} path cannot be empty"
                )));
            }
        }

        Ok(())
    }
}
