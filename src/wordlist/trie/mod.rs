pub mod trie;
pub mod search;

mod node;

pub use trie::Trie;
pub(crate) use trie::InsertOutcome;
