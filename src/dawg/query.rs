//! Read-only queries over a finished [`Dawg`].

use std::hash::Hash;

use hashbrown::HashSet;

use super::automaton::Dawg;
use super::node_arena::NodeId;
use super::word::{DawgChar, IntoWord, WordBuf};

impl<C: DawgChar> Dawg<C> {
    /// Returns true if `word` is in the DAWG.
    ///
    /// ```
    /// use minidawg::dawg::builder::build_dawg;
    ///
    /// let dawg = build_dawg(["cat", "cats"]).unwrap();
    /// assert!(dawg.has("cat"));
    /// assert!(!dawg.has("ca"));
    /// assert!(!dawg.has("dog"));
    /// ```
    pub fn has(&self, word: impl IntoWord<C>) -> bool {
        self.walk(&word.collect_word())
            .is_some_and(|node| self.is_final(node))
    }

    /// Returns true if any word in the DAWG starts with `prefix`.
    pub fn contains_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.walk(&prefix.collect_word()).is_some()
    }

    /// Returns every non-empty prefix of `word` that is itself a word in the DAWG.
    ///
    /// The walk stops at the first label without a transition; prefixes found before
    /// that point are kept.
    ///
    /// ```
    /// use minidawg::dawg::builder::build_dawg;
    /// use minidawg::dawg::HashSet;
    ///
    /// let dawg = build_dawg(["cat", "cats", "facet", "facets", "fact", "facts"]).unwrap();
    /// let found: HashSet<String> = dawg.prefixes("facets");
    /// assert_eq!(found, HashSet::from(["facet".to_string(), "facets".to_string()]));
    /// ```
    pub fn prefixes<W>(&self, word: impl IntoWord<C>) -> HashSet<W>
    where
        W: FromIterator<C> + Eq + Hash,
    {
        let word = word.collect_word();
        let mut found = HashSet::new();
        let mut node = self.start();
        for (i, &ch) in word.iter().enumerate() {
            match self.transition(node, ch) {
                Some(next) => node = next,
                None => break,
            }
            if self.is_final(node) {
                found.insert(word[..=i].iter().copied().collect());
            }
        }
        found
    }

    /// Returns every word that can be spelled with the given labels, using each at
    /// most as many times as it occurs. Not every label has to be used.
    ///
    /// ```
    /// use minidawg::dawg::builder::build_dawg;
    /// use minidawg::dawg::HashSet;
    ///
    /// let dawg = build_dawg(["cat", "cats", "facet", "facets", "fact", "facts"]).unwrap();
    /// let found: HashSet<String> = dawg.permutations("facts");
    /// assert_eq!(found.len(), 4);
    /// assert!(found.contains("cats"));
    /// assert!(!found.contains("facet"));
    /// ```
    pub fn permutations<W>(&self, characters: impl IntoWord<C>) -> HashSet<W>
    where
        W: FromIterator<C> + Eq + Hash,
    {
        let mut remaining = characters.collect_word();
        remaining.sort_unstable();
        let mut matched = WordBuf::new();
        let mut found = HashSet::new();
        self.search(self.start(), &mut remaining, &mut matched, &mut found);
        found
    }

    // `remaining` is kept sorted so that equal labels sit next to each other and each
    // distinct label is tried once per level.
    fn search<W>(
        &self,
        node: NodeId,
        remaining: &mut WordBuf<C>,
        matched: &mut WordBuf<C>,
        found: &mut HashSet<W>,
    ) where
        W: FromIterator<C> + Eq + Hash,
    {
        if self.is_final(node) {
            found.insert(matched.iter().copied().collect());
        }
        for i in 0..remaining.len() {
            let ch = remaining[i];
            if i > 0 && remaining[i - 1] == ch {
                continue;
            }
            if let Some(child) = self.transition(node, ch) {
                remaining.remove(i);
                matched.push(ch);
                self.search(child, remaining, matched, found);
                matched.pop();
                remaining.insert(i, ch);
            }
        }
    }

    /// Returns all words in the DAWG in ascending order.
    ///
    /// ```
    /// use minidawg::dawg::builder::build_dawg;
    ///
    /// let dawg = build_dawg(["BAKE", "BAKED", "CAKE"]).unwrap();
    /// let words: Vec<String> = dawg.words();
    /// assert_eq!(words, ["BAKE", "BAKED", "CAKE"]);
    /// ```
    pub fn words<W: FromIterator<C>>(&self) -> Vec<W> {
        let mut words = Vec::with_capacity(self.word_count());
        let mut prefix = WordBuf::new();
        self.collect_words(self.start(), &mut prefix, &mut words);
        words
    }

    fn collect_words<W: FromIterator<C>>(
        &self,
        node: NodeId,
        prefix: &mut WordBuf<C>,
        words: &mut Vec<W>,
    ) {
        if self.is_final(node) {
            words.push(prefix.iter().copied().collect());
        }
        let Some(edges) = self.edges(node) else {
            return;
        };
        for (ch, child) in edges.iter() {
            prefix.push(ch);
            self.collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}
