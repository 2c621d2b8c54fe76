//! Multi-corpus lookup.
//!
//! A catalog keeps several independent tries under display names, such as
//! the albums, songs and artists searched by the music finder. Each trie is
//! queried on its own; outcomes are never merged.

use std::path::Path;

use tracing::{debug, instrument};

use super::loader::{CorpusLoader, LoadReport};
use crate::data_structures::{LanaiTrie, LanaiTrieConfig, LanaiTrieResult, SuggestOutcome};
use crate::error::corpus::CorpusError;

/// One named trie inside a [`Catalog`].
#[derive(Debug)]
pub struct Corpus {
    /// Display name
    pub name: String,

    /// Entries of this corpus
    pub trie: LanaiTrie,
}

/// Ordered collection of named corpora.
#[derive(Debug, Default)]
pub struct Catalog {
    corpora: Vec<Corpus>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads one corpus per `(name, path)` source, in order.
    ///
    /// Stops at the first source that fails to load.
    pub fn load<'a, I>(
        sources: I,
        loader: &CorpusLoader,
        trie_config: &LanaiTrieConfig,
    ) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (&'a str, &'a Path)>,
    {
        let mut catalog = Self::new();
        for (name, path) in sources {
            let mut trie = LanaiTrie::with_config(trie_config.clone());
            let report: LoadReport = loader.load_file(path, &mut trie)?;
            debug!(corpus = name, entries = report.inserted, "Added corpus to catalog");
            catalog.push(name, trie);
        }
        Ok(catalog)
    }

    /// Appends a corpus. Names need not be unique; [`Catalog::get`] finds the first.
    pub fn push<S: Into<String>>(&mut self, name: S, trie: LanaiTrie) {
        self.corpora.push(Corpus {
            name: name.into(),
            trie,
        });
    }

    /// Returns the first corpus with the given name.
    pub fn get(&self, name: &str) -> Result<&Corpus, CorpusError> {
        self.corpora
            .iter()
            .find(|corpus| corpus.name == name)
            .ok_or_else(|| CorpusError::UnknownCorpus(name.to_string()))
    }

    /// Number of corpora.
    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    /// Checks if the catalog holds no corpora.
    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }

    /// Queries every corpus for `prefix`.
    ///
    /// # Returns
    ///
    /// One `(name, outcome)` pair per corpus, in catalog order, or the trie
    /// error if `prefix` holds a character outside the alphabet.
    #[instrument(skip(self))]
    pub fn suggest_all(&self, prefix: &str) -> LanaiTrieResult<Vec<(&str, SuggestOutcome)>> {
        self.corpora
            .iter()
            .map(|corpus| Ok((corpus.name.as_str(), corpus.trie.suggest(prefix)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn music_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for (name, entries) in [
            ("albums", vec!["abbey road", "thriller"]),
            ("songs", vec!["thrill", "thriller", "then"]),
            ("artists", vec!["abba", "the beatles"]),
        ] {
            let mut trie = LanaiTrie::new();
            trie.insert_all(entries).unwrap();
            catalog.push(name, trie);
        }
        catalog
    }

    #[test]
    fn test_each_corpus_answers_independently() {
        let catalog = music_catalog();
        let results = catalog.suggest_all("thriller").unwrap();

        assert_eq!(
            results,
            vec![
                ("albums", SuggestOutcome::ExactOnly),
                ("songs", SuggestOutcome::ExactOnly),
                ("artists", SuggestOutcome::NoSuchPrefix),
            ]
        );

        let results = catalog.suggest_all("th").unwrap();
        assert_eq!(
            results[1],
            (
                "songs",
                SuggestOutcome::Suggestions(vec!["then".into(), "thrill".into(), "thriller".into()])
            )
        );
        assert_eq!(
            results[2],
            ("artists", SuggestOutcome::Suggestions(vec!["the beatles".into()]))
        );
    }

    #[test]
    fn test_invalid_prefix_is_an_error() {
        let catalog = music_catalog();
        assert!(catalog.suggest_all("AB").is_err());
    }

    #[test]
    fn test_get_by_name() {
        assert!(Catalog::new().is_empty());

        let catalog = music_catalog();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("songs").unwrap().trie.contains("then").unwrap());
        assert!(matches!(
            catalog.get("podcasts"),
            Err(CorpusError::UnknownCorpus(name)) if name == "podcasts"
        ));
    }
}
