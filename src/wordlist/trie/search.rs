use crate::alphabet::get_idx;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {

    /// True iff `word` was previously inserted in full. Never allocates.
    pub fn search(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|x| x.is_end_of_word)
            .unwrap_or(false)
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in word.chars() {
            current = current.get_child(get_idx(c)?)?;
        }
        Some(current)
    }
}


#[cfg(test)]
mod tests {
    use maplit::hashset;
    use rand::Rng;
    use std::collections::HashSet;

    use crate::wordlist::trie::trie::Trie;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        words.iter().for_each(|word| trie.insert(word));
        trie
    }

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let trie = trie_of(&words);
        words.iter().for_each(|word| assert!(trie.search(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = trie_of(&["hello", "help", "goodbye", "good"]);
        let bad_words = vec!["he", "h", "lol", "banana", "helps", "goo"];
        bad_words.iter().for_each(|word| assert!(!trie.search(word), "{}", word));
    }

    #[test]
    fn prefixes_and_extensions_are_not_members() {
        let trie = trie_of(&["cat"]);
        assert!(trie.search("cat"));
        assert!(!trie.search("ca"));
        assert!(!trie.search("catalog"));
    }

    #[test]
    fn apple_app_apt() {
        let trie = trie_of(&["apple", "app", "apt"]);
        assert!(trie.search("app"));
        assert!(trie.search("apple"));
        assert!(!trie.search("ap"));
        assert!(trie.search("apt"));
        assert!(!trie.search("appl"));
    }

    #[test]
    fn invalid_insert_is_not_findable() {
        let trie = trie_of(&["c4t"]);
        assert!(!trie.search("c4t"));
        assert!(!trie.search("c"));
        assert!(!trie.search("ct"));
    }

    #[test]
    fn empty_string_is_never_a_member() {
        let mut trie = Trie::new();
        assert!(!trie.search(""));
        trie.insert("");
        assert!(!trie.search(""));
        trie.insert("a");
        assert!(!trie.search(""));
    }

    #[test]
    fn no_normalization_in_core() {
        let trie = trie_of(&["Cat", " dog"]);
        assert!(!trie.search("cat"));
        assert!(!trie.search("Cat"));
        assert!(!trie.search("dog"));

        let trie = trie_of(&["cat"]);
        assert!(!trie.search("CAT"));
        assert!(!trie.search("cat "));
    }

    #[test]
    fn search_does_not_allocate_nodes() {
        let trie = trie_of(&["cat"]);
        let count = trie.node_count();
        ["dog", "c4t", "catalog", "", "CAT"].iter().for_each(|word| { trie.search(word); });
        assert_eq!(trie.node_count(), count);
    }

    #[test]
    fn reinsertion_keeps_membership() {
        let mut trie = trie_of(&["apple"]);
        trie.insert("apple");
        assert!(trie.search("apple"));
        assert!(!trie.search("appl"));
    }

    #[test]
    fn matches_a_set_on_random_words() {
        let mut rng = rand::thread_rng();
        let mut random_word = |max_len: usize| -> String {
            let len = rng.gen_range(1..=max_len);
            (0..len).map(|_| rng.gen_range(b'a'..=b'e') as char).collect()
        };

        let inserted: HashSet<String> = (0..500).map(|_| random_word(6)).collect();
        let mut trie = Trie::new();
        inserted.iter().for_each(|word| trie.insert(word));

        inserted.iter().for_each(|word| assert!(trie.search(word)));
        (0..2000).map(|_| random_word(7))
            .for_each(|word| assert_eq!(trie.search(&word), inserted.contains(&word), "{}", word));
    }

    #[test]
    fn only_valid_words_survive_a_mixed_load() {
        let lines = vec!["alpha", "be ta", "gamma", "delta!", "", "Epsilon", "zeta"];
        let trie = trie_of(&lines);
        let found: HashSet<&str> = lines.into_iter().filter(|word| trie.search(word)).collect();
        assert_eq!(found, hashset! {"alpha", "gamma", "zeta"});
    }
}
