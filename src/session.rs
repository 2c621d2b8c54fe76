//! Interactive dictionary session.
//!
//! Drives a menu over any line-oriented input and output pair:
//! insert a word, check whether a word is present, or show autocomplete
//! suggestions for a prefix. Input ends at `x` or end of stream.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::data_structures::LanaiTrie;
use crate::render;

const MENU: &str = "\
a. Input words into a trie
b. Check whether a word is present in the trie
c. Search for words by showing autocomplete suggestions
x. Exit
";

/// Menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Insert,
    Check,
    Suggest,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "a" => Some(Self::Insert),
            "b" => Some(Self::Check),
            "c" => Some(Self::Suggest),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An interactive session over one dictionary trie.
#[derive(Debug)]
pub struct Session<'t, R, W> {
    trie: &'t mut LanaiTrie,
    input: R,
    output: W,
}

impl<'t, R: BufRead, W: Write> Session<'t, R, W> {
    /// Creates a session reading commands from `input` and writing to `output`.
    pub fn new(trie: &'t mut LanaiTrie, input: R, output: W) -> Self {
        Self {
            trie,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!(entries = self.trie.len(), "Dictionary session started");
        loop {
            write!(self.output, "\n{MENU}\n\tEnter your choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            writeln!(self.output, "\n")?;

            match Choice::parse(&line) {
                Some(Choice::Insert) => self.insert()?,
                Some(Choice::Check) => self.check()?,
                Some(Choice::Suggest) => self.suggest()?,
                Some(Choice::Exit) => break,
                None => writeln!(self.output, "Invalid choice")?,
            }
        }
        info!("Dictionary session ended");
        Ok(())
    }

    fn insert(&mut self) -> io::Result<()> {
        let Some(word) = self.prompt("Enter the word or phrase to be inserted into the trie: ")?
        else {
            return Ok(());
        };
        match self.trie.insert(&word) {
            Ok(_) => writeln!(self.output, "{word} has been successfully inserted"),
            Err(err) => self.report(&word, err),
        }
    }

    fn check(&mut self) -> io::Result<()> {
        let Some(word) = self.prompt("Enter the word to be searched for: ")? else {
            return Ok(());
        };
        match self.trie.contains(&word) {
            Ok(true) => writeln!(self.output, "{word} is present in the trie"),
            Ok(false) => writeln!(self.output, "{word} is not present in the trie"),
            Err(err) => self.report(&word, err),
        }
    }

    fn suggest(&mut self) -> io::Result<()> {
        let Some(prefix) = self.prompt("Enter search keyword: ")? else {
            return Ok(());
        };
        match self.trie.suggest(&prefix) {
            Ok(outcome) => {
                writeln!(self.output, "Search results:\n")?;
                render::write_outcome(&mut self.output, &prefix, &outcome)
            }
            Err(err) => self.report(&prefix, err),
        }
    }

    fn report(&mut self, input: &str, err: impl std::fmt::Display) -> io::Result<()> {
        debug!(input, error = %err, "Rejected session input");
        writeln!(self.output, "Error: {err}")
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line with surrounding whitespace removed; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
