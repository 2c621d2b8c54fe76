//! Console rendering of suggestion outcomes.

use std::io::{self, Write};
use std::path::Path;

use crate::data_structures::SuggestOutcome;

/// Message printed when no entry starts with the prefix.
pub const NO_MATCH: &str = "No string found with this prefix";

/// Message printed after an exact match that nothing extends.
pub const NO_FURTHER_MATCHES: &str = "No other strings found with this prefix";

const RULE: &str = "===================";

/// Writes one outcome: suggestions as tab-indented lines, or a status message.
pub fn write_outcome<W: Write>(
    out: &mut W,
    prefix: &str,
    outcome: &SuggestOutcome,
) -> io::Result<()> {
    match outcome {
        SuggestOutcome::Suggestions(entries) => {
            for entry in entries {
                writeln!(out, "\t{entry}")?;
            }
        }
        SuggestOutcome::ExactOnly => {
            writeln!(out, "\t{prefix}")?;
            writeln!(out, "{NO_FURTHER_MATCHES}")?;
        }
        SuggestOutcome::NoSuchPrefix => writeln!(out, "{NO_MATCH}")?,
    }
    Ok(())
}

/// Writes the banner shown once a corpus has been read into its trie.
pub fn write_populated<W: Write>(out: &mut W, source: &Path) -> io::Result<()> {
    writeln!(
        out,
        "Successfully populated the trie with the words in {}",
        source.display()
    )
}

/// Writes one section per corpus, framed by horizontal rules.
pub fn write_catalog<W: Write>(
    out: &mut W,
    prefix: &str,
    results: &[(&str, SuggestOutcome)],
) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    for (index, (name, outcome)) in results.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "\t{}:", name.to_uppercase())?;
        write_outcome(out, prefix, outcome)?;
    }
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(prefix: &str, outcome: &SuggestOutcome) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, prefix, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_outcome_variants() {
        assert_eq!(
            render("ca", &SuggestOutcome::Suggestions(vec!["car".into(), "cat".into()])),
            "\tcar\n\tcat\n"
        );
        assert_eq!(
            render("a", &SuggestOutcome::ExactOnly),
            format!("\ta\n{NO_FURTHER_MATCHES}\n")
        );
        assert_eq!(render("z", &SuggestOutcome::NoSuchPrefix), format!("{NO_MATCH}\n"));
    }

    #[test]
    fn test_write_populated() {
        let mut out = Vec::new();
        write_populated(&mut out, Path::new("Dictionary.txt")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Successfully populated the trie with the words in Dictionary.txt\n"
        );
    }

    #[test]
    fn test_write_catalog_sections() {
        let results = vec![
            ("albums", SuggestOutcome::NoSuchPrefix),
            ("songs", SuggestOutcome::Suggestions(vec!["hey jude".into()])),
        ];
        let mut out = Vec::new();
        write_catalog(&mut out, "hey", &results).unwrap();

        let expected = format!(
            "{RULE}\n\tALBUMS:\n{NO_MATCH}\n\n\tSONGS:\n\they jude\n{RULE}\n"
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
