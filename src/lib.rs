//! # minidawg
//!
//! Incremental construction of minimal [DAWGs](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graphs) from sorted word lists, and queries over them.
//!
//! A DAWG is a minimal acyclic finite-state automaton, essentially a trie with shared
//! suffixes. Words are fed to the [`Builder`](dawg::Builder) in strictly ascending
//! order; the builder keeps everything but the path of the most recent word minimal
//! at all times, following [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1).
//!
//! ## Features
//!
//! - **Generic over character type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`DawgChar`](dawg::DawgChar)
//! - **Stable node ids**: nodes live in an arena and are addressed by [`NodeId`](dawg::NodeId)
//! - **Queries**: membership, word prefixes of a string, and anagram search
//! - **Thread-safe**: a finished [`Dawg`](dawg::Dawg) is immutable and `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use minidawg::dawg::{build_dawg, HashSet};
//!
//! let dawg = build_dawg(["cat", "cats", "facet", "facets", "fact", "facts"]).unwrap();
//! assert!(dawg.has("cat"));
//! assert!(!dawg.has("dog"));
//!
//! let prefixes: HashSet<String> = dawg.prefixes("facets");
//! assert_eq!(prefixes.len(), 2);
//!
//! let anagrams: HashSet<String> = dawg.permutations("facts");
//! assert!(anagrams.contains("cats"));
//! ```
//!
//! ## Generic Usage
//!
//! The DAWG is generic over the edge label type:
//!
//! ```
//! use minidawg::dawg::build_dawg;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
//! let dawg = build_dawg(words).unwrap();
//! assert!(dawg.has([1, 2, 3]));
//! assert!(!dawg.has([1, 2, 5]));
//! ```
//!
//! ## Logging
//!
//! With the default `tracing` feature the builder reports through the
//! [`tracing`](https://docs.rs/tracing) facade. No subscriber is installed.

#![warn(missing_docs)]

/// Core DAWG data structure: builder, automaton, queries and character traits.
pub mod dawg;
