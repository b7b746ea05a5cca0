use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use mark_last::MarkLastIterator;
use smallvec::SmallVec;
use thiserror::Error;

use super::automaton::Dawg;
use super::node_arena::{Node, NodeArena, NodeId};
use super::word::{DawgChar, IntoWord, WordBuf};

/// Structural identity of a node: its finality flag and its ordered outgoing edges.
///
/// Two nodes with equal signatures accept the same suffix language, provided their
/// children are already canonical, which holds for every node the builder registers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature<C: DawgChar> {
    is_final: bool,
    edges: SmallVec<[(C, NodeId); 4]>,
}

impl<C: DawgChar> Signature<C> {
    fn of(node: &Node<C>) -> Self {
        Signature {
            is_final: node.is_final,
            edges: node.children.iter().collect(),
        }
    }

    /// Whether the node accepts the empty suffix.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Outgoing `(label, destination)` pairs in insertion order.
    pub fn edges(&self) -> &[(C, NodeId)] {
        &self.edges
    }
}

/// A builder for constructing a minimal DAWG incrementally.
///
/// Words must be added in strictly ascending order. The automaton is kept minimal
/// everywhere except along the path of the most recently added word; that path is
/// folded into the register as soon as the next word branches off it, and for the
/// last time in [`Builder::build`].
///
/// ```
/// use minidawg::dawg::builder::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_word("cat").unwrap();
/// builder.add_word("cats").unwrap();
/// assert!(builder.add_word("car").is_err());
///
/// let dawg = builder.build();
/// assert!(dawg.has("cats"));
/// ```
#[derive(Debug)]
pub struct Builder<C: DawgChar = char> {
    arena: NodeArena<C>,
    start: NodeId,
    alphabet: BTreeSet<C>,
    register: HashMap<Signature<C>, NodeId>,
    previous: Option<WordBuf<C>>,
    word_count: usize,
}

impl<C: DawgChar> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DawgChar> Builder<C> {
    /// Creates a builder holding a blank automaton: a single non-final start node.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a builder with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = NodeArena::with_capacity(nodes.max(1));
        let start = arena.alloc(Node::new(false));
        Builder {
            arena,
            start,
            alphabet: BTreeSet::new(),
            register: HashMap::with_capacity(nodes),
            previous: None,
            word_count: 0,
        }
    }

    /// Adds a word to the DAWG being constructed.
    ///
    /// The word can be any type that implements [`IntoWord`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`. The empty
    /// word is legal and marks the start node as accepting.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::Order` if the word is not strictly greater than the
    /// previously added word. The automaton is left untouched by the rejected word,
    /// but an ordering violation is fatal for the build: the input has to be
    /// corrected and construction restarted.
    pub fn add_word(&mut self, word: impl IntoWord<C>) -> Result<(), BuilderError<C>> {
        let word = word.collect_word();
        if let Some(previous) = &self.previous {
            if word <= *previous {
                #[cfg(feature = "tracing")]
                tracing::warn!(previous = ?previous.as_slice(), word = ?word.as_slice(), "word out of order");
                return Err(BuilderError::Order(previous.to_vec(), word.to_vec()));
            }
        }

        let (node, prefix_len) = self.common_prefix(&word);
        // The previous word's branch below `node` has to be folded now: once the new
        // suffix is appended it is no longer the last child and would never be visited.
        if !self.node(node).children.is_empty() {
            self.minimize(node);
        }
        self.add_suffix(node, &word[prefix_len..]);

        self.previous = Some(word);
        self.word_count += 1;
        Ok(())
    }

    /// Follows existing transitions from the start node for as long as they match
    /// `word`. Returns the node reached and the number of labels consumed.
    pub(crate) fn common_prefix(&self, word: &[C]) -> (NodeId, usize) {
        let mut node = self.start;
        for (i, &ch) in word.iter().enumerate() {
            match self.node(node).children.find(ch) {
                Some(next) => node = next,
                None => return (node, i),
            }
        }
        (node, word.len())
    }

    /// Folds the most recently added child of `node` into the register, deepest
    /// nodes first.
    ///
    /// A child whose signature is already registered under another node is replaced
    /// by that node and reclaimed; otherwise the child becomes the representative of
    /// its signature. Only the last child is inspected: every earlier child was the
    /// last one at some point and has already been folded.
    pub(crate) fn minimize(&mut self, node: NodeId) {
        let Some((letter, child)) = self.node(node).children.last() else {
            return;
        };
        if !self.node(child).children.is_empty() {
            self.minimize(child);
        }

        let signature = Signature::of(self.node(child));
        match self.register.get(&signature) {
            Some(&existing) if existing == child => {}
            Some(&existing) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(%node, ?letter, %child, %existing, "merging equivalent node");
                #[cfg(not(feature = "tracing"))]
                let _ = letter;
                self.node_mut(node).children.redirect_last(existing);
                self.arena.reclaim(child);
            }
            None => {
                self.register.insert(signature, child);
            }
        }
    }

    /// Appends `suffix` below `node` as a fresh chain of nodes and marks the end of
    /// the chain as accepting.
    pub(crate) fn add_suffix(&mut self, node: NodeId, suffix: &[C]) {
        if suffix.is_empty() {
            self.node_mut(node).is_final = true;
            return;
        }
        let mut current = node;
        for (last, &ch) in suffix.iter().mark_last() {
            let child = self.arena.alloc(Node::new(last));
            self.alphabet.insert(ch);
            self.node_mut(current).children.push(ch, child);
            current = child;
        }
    }

    /// Computes the register key of `node`, or `None` if the node has been reclaimed.
    pub fn signature(&self, node: NodeId) -> Option<Signature<C>> {
        self.arena.get(node).map(Signature::of)
    }

    /// Number of words accepted so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of live nodes, including the not yet minimized path of the last word.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Finalizes the DAWG construction and returns the finished automaton.
    ///
    /// This method consumes the builder and folds the path of the last word, which
    /// is the only part of the graph not yet minimal.
    pub fn build(mut self) -> Dawg<C> {
        self.minimize(self.start);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            words = self.word_count,
            nodes = self.arena.len(),
            registered = self.register.len(),
            "dawg built"
        );
        Dawg::new(self.arena, self.start, self.alphabet, self.word_count)
    }

    fn node(&self, id: NodeId) -> &Node<C> {
        self.arena.get(id).expect("builder only holds ids of live nodes")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<C> {
        self.arena
            .get_mut(id)
            .expect("builder only holds ids of live nodes")
    }
}

/// Errors that can occur when building a DAWG.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum BuilderError<C: DawgChar> {
    /// Words were not provided in strictly ascending order.
    ///
    /// Contains the two words that were out of order (previous word, current word).
    #[error("OrderError - {0:?} came before {1:?}")]
    Order(Vec<C>, Vec<C>),
}

/// Errors from loading a word list out of a file or reader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    /// The word list was read but is not sorted.
    #[error(transparent)]
    Build(#[from] BuilderError<char>),
}

/// Builds a DAWG from an iterator of words.
///
/// Each word must implement [`IntoWord`], allowing this function to accept
/// `&str`, `String`, slices, vectors, arrays, or any other supported word type.
///
/// Words **must** be provided in strictly ascending order, or this function will
/// return an error.
///
/// # Examples
///
/// ```
/// use minidawg::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["cat", "cats", "facet", "facets", "fact", "facts"]).unwrap();
/// assert!(dawg.has("facet"));
/// assert!(!dawg.has("face"));
/// assert_eq!(dawg.node_count(), 8);
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use minidawg::dawg::builder::build_dawg;
///
/// let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
/// let dawg = build_dawg(words).unwrap();
/// assert!(dawg.has([1, 2, 4]));
/// assert!(!dawg.has([1, 2, 5]));
/// ```
pub fn build_dawg<C, W>(words: impl IntoIterator<Item = W>) -> Result<Dawg<C>, BuilderError<C>>
where
    C: DawgChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word)?;
    }
    Ok(builder.build())
}

/// Builds a DAWG from a word list file, one word per line.
///
/// Words must be in sorted order. Lines starting with '#' are treated as comments and
/// ignored. Empty lines are skipped.
///
/// ```no_run
/// use minidawg::dawg::builder::build_dawg_from_file;
///
/// let dawg = build_dawg_from_file("dictionary.txt").unwrap();
/// ```
pub fn build_dawg_from_file(path: impl AsRef<Path>) -> Result<Dawg<char>, LoadError> {
    let file = File::open(path)?;
    build_dawg_from_reader(BufReader::new(file))
}

/// Builds a DAWG from any buffered reader, with the same line rules as
/// [`build_dawg_from_file`].
pub fn build_dawg_from_reader(mut reader: impl BufRead) -> Result<Dawg<char>, LoadError> {
    let mut builder = Builder::new();

    // Instead of using BufRead::lines() we call read_line repeatedly, which lets us
    // reuse the same string instead of allocating a new one for every line.
    let mut buf = String::with_capacity(80);
    while reader.read_line(&mut buf)? != 0 {
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            builder.add_word(word)?;
        }
        buf.clear();
    }
    Ok(builder.build())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
