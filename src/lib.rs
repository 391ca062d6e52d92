//! Spell checking against a fixed word list, backed by a 26-way trie.

pub mod alphabet;
pub mod wordlist;

pub use wordlist::error::DictionaryError;
pub use wordlist::trie::Trie;
pub use wordlist::wordlist::{CheckResult, FileFormat, LoadStats, Wordlist};
