use std::fmt::{Debug, Formatter};

use crate::alphabet::ALPHABET;

/// One position in the prefix space. Each present child is owned by exactly this node.
#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) is_end_of_word: bool,
}

impl TrieNode {
    pub(crate) fn new() -> TrieNode {
        Default::default()
    }

    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Letters labelling the edges to this node's present children.
    pub(crate) fn child_letters(&self) -> Vec<char> {
        self.children.iter().zip(ALPHABET)
            .filter(|(child, _)| child.is_some())
            .map(|(_, &letter)| letter as char)
            .collect()
    }

    pub(crate) fn traverse_prefix<'f, F>(&'f self, f: &mut F)
        where F: FnMut(&'f TrieNode) {
        f(self);
        self.children.iter()
            .flatten()
            .for_each(|child| child.traverse_prefix(f));
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_end_of_word", &self.is_end_of_word)
            .field("children", &self.child_letters())
            .finish()
    }
}
