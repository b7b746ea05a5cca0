//! Handle-addressed arena for automaton nodes.
//!
//! Nodes are referred to by [`NodeId`] handles rather than references, so the
//! register and the transition lists never own the nodes they point at.
//! Ids are handed out by a monotonically increasing counter and are never
//! reused: reclaiming a node only empties its slot.

use std::fmt;

use super::children::Children;
use super::word::DawgChar;

/// Opaque identifier of a node (state) in the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the handle as a plain index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> usize {
        id.index()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single state: finality flag plus its outgoing transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<C: DawgChar> {
    pub(crate) children: Children<C>,
    pub(crate) is_final: bool,
}

impl<C: DawgChar> Node<C> {
    pub(crate) fn new(is_final: bool) -> Self {
        Node {
            children: Children::None,
            is_final,
        }
    }
}

/// Slot storage for nodes. A `None` slot belongs to a reclaimed node whose id
/// has been abandoned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeArena<C: DawgChar> {
    slots: Vec<Option<Node<C>>>,
    live: usize,
}

impl<C: DawgChar> NodeArena<C> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Allocates a node under the next unused id.
    pub(crate) fn alloc(&mut self, node: Node<C>) -> NodeId {
        let id = u32::try_from(self.slots.len()).expect("node id space exhausted");
        self.slots.push(Some(node));
        self.live += 1;
        NodeId(id)
    }

    /// Removes a node from the live set. Its id is never handed out again.
    pub(crate) fn reclaim(&mut self, id: NodeId) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            if slot.take().is_some() {
                self.live -= 1;
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<C>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<C>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Live nodes in ascending id order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<C>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i as u32), node)))
    }
}
