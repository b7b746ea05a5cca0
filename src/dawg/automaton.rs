use std::collections::BTreeSet;

use super::children::Children;
use super::node_arena::{NodeArena, NodeId};
use super::word::DawgChar;

/// A finished, minimal DAWG.
///
/// Produced by [`Builder::build`](super::builder::Builder::build). The automaton is
/// immutable, so it can be shared between threads and queried concurrently without
/// locking.
///
/// # Examples
///
/// ```
/// use minidawg::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["cat", "cats", "facet", "facets", "fact", "facts"]).unwrap();
/// let start = dawg.start();
/// let c = dawg.transition(start, 'c').unwrap();
/// let f = dawg.transition(start, 'f').unwrap();
/// assert_ne!(c, f);
/// assert_eq!(dawg.alphabet().collect::<String>(), "acefst");
/// assert_eq!(dawg.final_nodes().count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Dawg<C: DawgChar = char> {
    arena: NodeArena<C>,
    start: NodeId,
    alphabet: BTreeSet<C>,
    word_count: usize,
}

impl<C: DawgChar> Dawg<C> {
    pub(crate) fn new(
        arena: NodeArena<C>,
        start: NodeId,
        alphabet: BTreeSet<C>,
        word_count: usize,
    ) -> Self {
        Dawg {
            arena,
            start,
            alphabet,
            word_count,
        }
    }

    /// The start node.
    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// All live node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.arena.iter().map(|(id, _)| id)
    }

    /// Returns the number of nodes in the DAWG.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of words the DAWG was built from.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True if the DAWG accepts no words at all.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// True if `node` ends at least one accepted word.
    #[inline]
    pub fn is_final(&self, node: NodeId) -> bool {
        self.arena.get(node).is_some_and(|n| n.is_final)
    }

    /// Accepting nodes in ascending id order.
    pub fn final_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.arena
            .iter()
            .filter(|(_, node)| node.is_final)
            .map(|(id, _)| id)
    }

    /// Every label used by at least one word, in ascending order.
    pub fn alphabet(&self) -> impl Iterator<Item = C> + '_ {
        self.alphabet.iter().copied()
    }

    /// Returns the node that `letter`'s edge from `node` leads to, if any.
    #[inline]
    pub fn transition(&self, node: NodeId, letter: C) -> Option<NodeId> {
        self.arena.get(node)?.children.find(letter)
    }

    /// Outgoing edges of `node`, in ascending label order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (C, NodeId)> + '_ {
        self.arena
            .get(node)
            .into_iter()
            .flat_map(|n| n.children.iter())
    }

    /// The whole transition table as `(from, label, to)` triples, ordered by source
    /// node and then by label.
    pub fn transitions(&self) -> impl Iterator<Item = (NodeId, C, NodeId)> + '_ {
        self.arena
            .iter()
            .flat_map(|(from, node)| node.children.iter().map(move |(ch, to)| (from, ch, to)))
    }

    /// Follows `word` from the start node and returns the node it ends on.
    pub(crate) fn walk(&self, word: &[C]) -> Option<NodeId> {
        word.iter()
            .try_fold(self.start, |node, &ch| self.transition(node, ch))
    }

    pub(crate) fn edges(&self, node: NodeId) -> Option<&Children<C>> {
        self.arena.get(node).map(|n| &n.children)
    }
}
