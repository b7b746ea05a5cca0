//! Example: a small word-game helper on top of a DAWG.
//!
//! Builds a DAWG from a word list and answers the three kinds of question a word
//! game asks: is this a word, which prefixes of this string are words, and which
//! words can be spelled from this rack of letters.
//!
//! Run with: cargo run --example anagrams [WORDLIST]

use std::env;

use minidawg::dawg::builder::{build_dawg, build_dawg_from_file};
use minidawg::dawg::{Dawg, HashSet};

fn sorted(set: HashSet<String>) -> Vec<String> {
    let mut words: Vec<String> = set.into_iter().collect();
    words.sort();
    words
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dawg: Dawg = match env::args().nth(1) {
        Some(path) => build_dawg_from_file(path)?,
        None => build_dawg([
            "BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE", "TAKE", "TAKEN",
        ])?,
    };
    println!(
        "{} words, {} nodes, alphabet {:?}",
        dawg.word_count(),
        dawg.node_count(),
        dawg.alphabet().collect::<String>()
    );

    // Word lookup
    println!("\nWord lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if dawg.has(word) { "yes" } else { "no" });
    }

    // Prefixes that are words
    println!("\nPrefixes:");
    for query in ["BAKERY", "TAKENS", "FAKER"] {
        println!("  {query}: {:?}", sorted(dawg.prefixes(query)));
    }

    // Anagram rack
    println!("\nAnagrams:");
    for rack in ["EKABR", "NEKAT", "KEDAC"] {
        println!("  {rack}: {:?}", sorted(dawg.permutations(rack)));
    }

    Ok(())
}
