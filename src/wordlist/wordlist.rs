use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use metrics::increment_counter;
use rayon::prelude::*;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::error::DictionaryError;
use crate::wordlist::trie::{InsertOutcome, Trie};

/// A dictionary loaded from a word list, answering spelling queries.
pub struct Wordlist {
    trie: Trie,
    stats: LoadStats,
}

#[derive(TypedBuilder, Debug, Clone, Copy)]
pub struct FileFormat {
    /// Column separator. Without one, the whole line is the word.
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str, DictionaryError> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .ok_or(DictionaryError::MissingColumn { line: line_no, column })
            }
        }
    }
}

#[derive(new, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub inserted: usize,
    pub rejected_empty: usize,
    pub rejected_invalid: usize,
}

impl LoadStats {
    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::RejectedEmpty => self.rejected_empty += 1,
            InsertOutcome::RejectedInvalidChar { .. } => self.rejected_invalid += 1,
        }
    }
}

#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub correct: bool,
}

impl Display for CheckResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.correct {
            write!(f, "Correct: {}", self.word)
        } else {
            write!(f, "Incorrect: {}", self.word)
        }
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist, DictionaryError> {
        let path = path.as_ref();
        info!(?path, "reading words");

        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), format)
    }

    /// Inserts every line of `reader`, trimmed and lowercased. Lines the trie
    /// rejects are counted in [`Wordlist::stats`], not reported as errors.
    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Wordlist, DictionaryError> {
        let start = Instant::now();
        let mut trie = Trie::new();
        let mut stats = LoadStats::default();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| DictionaryError::Read { line: line_no, source })?;
            let word = if line.trim().is_empty() {
                String::new()
            } else {
                normalize(format.parse_line(&line, line_no)?)
            };

            let outcome = trie.try_insert(&word);
            match outcome {
                InsertOutcome::Inserted => {
                    debug!(%word, "inserted");
                    increment_counter!("wordlist_words_inserted");
                }
                InsertOutcome::RejectedEmpty => {}
                InsertOutcome::RejectedInvalidChar { ch, position } => {
                    debug!(%word, %ch, position, "ignoring invalid character");
                    increment_counter!("wordlist_words_rejected");
                }
            }
            stats.record(outcome);
        }

        info!(inserted = stats.inserted,
              rejected_empty = stats.rejected_empty,
              rejected_invalid = stats.rejected_invalid,
              nodes = trie.node_count(),
              elapsed_ms = start.elapsed().as_millis() as u64,
              "loaded dictionary");
        Ok(Wordlist { trie, stats })
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    delegate! {
        to self.trie {
            pub fn search(&self, word: &str) -> bool;
            pub fn node_count(&self) -> usize;
        }
    }

    /// Normalizes `raw` the way the loader does, then looks it up.
    pub fn check(&self, raw: &str) -> CheckResult {
        let word = normalize(raw);
        let correct = self.trie.search(&word);
        debug!(%word, correct, "checked");
        CheckResult::new(word, correct)
    }

    /// [`Wordlist::check`] over a batch, in parallel. Results keep input order.
    pub fn check_all<S>(&self, raws: &[S]) -> Vec<CheckResult>
        where S: AsRef<str> + Sync {
        raws.par_iter()
            .map(|raw| self.check(raw.as_ref()))
            .collect()
    }
}
