use std::path::PathBuf;

use thiserror::Error;

/// Failures of the dictionary loader. The trie itself never fails.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot open dictionary {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read dictionary line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}
