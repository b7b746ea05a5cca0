/// Finished, immutable automaton and its inspection API.
pub mod automaton;
/// DAWG builder module for constructing the automaton from sorted word lists.
pub mod builder;
/// Insertion-ordered transition lists.
pub mod children;
/// Internal handle-addressed node arena.
pub(crate) mod node_arena;
/// Membership, prefix, permutation and enumeration queries.
pub mod query;
/// Edge label and word conversion traits.
pub mod word;

pub use automaton::Dawg;
pub use builder::{build_dawg, Builder, BuilderError, LoadError};
pub use node_arena::NodeId;
pub use word::{DawgChar, IntoWord};

/// Re-export of the set type returned by the set-valued queries.
pub use hashbrown::HashSet;

#[cfg(test)]
mod test {
    use super::builder::{build_dawg, build_dawg_from_file};
    use super::Dawg;
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    const WORDS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/words.txt");

    #[test]
    fn all_words() {
        let dawg = build_dawg_from_file(WORDS).unwrap();
        let file = File::open(WORDS).unwrap();
        let mut count = 0;
        for line in BufReader::new(file).lines() {
            let word = line.unwrap();
            if let Some(first_char) = word.chars().next() {
                if first_char.is_alphabetic() {
                    assert!(dawg.has(word.as_str()), "{}", word);
                    count += 1;
                }
            }
        }
        assert_eq!(dawg.word_count(), count);
        // test some non-words
        assert!(!dawg.has("CAR"));
        assert!(!dawg.has("STARTS"));
        assert!(!dawg.has("ÅTMINSTON"));
        assert!(!dawg.has("ÅTMINSTONDE"));
    }

    #[test]
    fn file_and_iterator_builds_match() {
        let from_file = build_dawg_from_file(WORDS).unwrap();
        let words: Vec<String> = from_file.words();
        let from_iter: Dawg = build_dawg(&words).unwrap();
        assert_eq!(from_file.node_count(), from_iter.node_count());
        assert_eq!(
            from_file.transitions().collect::<Vec<_>>(),
            from_iter.transitions().collect::<Vec<_>>()
        );
    }

    #[test]
    fn add_word() {
        let words = ["TEST", "TESTER", "WTEST"];
        let dawg = build_dawg(words).unwrap();

        let mut node = dawg.start();
        for (ch, is_word) in [('T', false), ('E', false), ('S', false), ('T', true), ('E', false), ('R', true)] {
            node = dawg.transition(node, ch).unwrap();
            assert_eq!(dawg.is_final(node), is_word, "{ch}");
        }
        assert_eq!(dawg.transition(node, 'T'), None);

        // "WTEST" and "TESTER" end in the same accepting leaf.
        let end = |word: &str| {
            word.chars()
                .try_fold(dawg.start(), |n, ch| dawg.transition(n, ch))
                .unwrap()
        };
        assert_eq!(end("WTEST"), end("TESTER"));
    }
}
