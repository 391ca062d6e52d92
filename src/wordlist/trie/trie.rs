use std::fmt::{Debug, Formatter};

use tracing::debug;

use crate::alphabet::get_idx;
use crate::wordlist::trie::node::TrieNode;

/// Exact-membership word set over the lowercase letters `a`..`z`.
///
/// Built by repeated [`Trie::insert`] and queried with [`Trie::search`]. Nodes
/// are created lazily and never removed. Callers normalize their input; the
/// trie treats anything outside `a`..`z`, uppercase included, as invalid.
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
}

/// What a single insertion did to the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertOutcome {
    Inserted,
    RejectedEmpty,
    /// Nodes for the letters before `position` stay allocated, none of them terminal.
    RejectedInvalidChar { ch: char, position: usize },
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::new(),
        }
    }

    /// Adds `word` to the set. Empty words and words containing a character
    /// outside `a`..`z` are silently dropped.
    pub fn insert(&mut self, word: &str) {
        if let InsertOutcome::RejectedInvalidChar { ch, position } = self.try_insert(word) {
            debug!(word, %ch, position, "ignoring invalid character");
        }
    }

    pub(crate) fn try_insert(&mut self, word: &str) -> InsertOutcome {
        if word.is_empty() {
            return InsertOutcome::RejectedEmpty;
        }
        let mut current = &mut self.root;
        for (position, ch) in word.chars().enumerate() {
            match get_idx(ch) {
                Some(idx) => current = current.get_or_create_child(idx),
                None => return InsertOutcome::RejectedInvalidChar { ch, position },
            }
        }
        current.is_end_of_word = true;
        InsertOutcome::Inserted
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse_prefix(&mut |_| count += 1);
        count
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.root.traverse_prefix(&mut |x| { l.entry(x); });
        l.finish()
    }
}
