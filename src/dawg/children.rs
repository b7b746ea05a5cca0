use super::node_arena::NodeId;
use super::word::DawgChar;

/// The outgoing transitions of a node, kept in insertion order.
///
/// Because words arrive sorted, labels are always appended in ascending order and the
/// last entry is the most recently added branch. Doesn't allocate until there are at
/// least three children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Children<C: DawgChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One((C, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2).
    Two((C, NodeId, C, NodeId)),
    /// Three or more children stored in a vector.
    Many(Vec<(C, NodeId)>),
}

impl<C: DawgChar> Children<C> {
    /// Gets the child at the specified position in insertion order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn find(&self, letter: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children
                .binary_search_by(|&(c, _)| c.cmp(&letter))
                .ok()
                .map(|i| children[i].1),
        }
    }

    /// The most recently added edge.
    #[inline]
    pub fn last(&self) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => Some(*child),
            Children::Two((_, _, c2, n2)) => Some((*c2, *n2)),
            Children::Many(children) => children.last().copied(),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no outgoing edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Returns an iterator over all edges in insertion order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_, C> {
        ChildIter {
            children: self,
            index: 0,
        }
    }

    /// Appends an edge. Labels must arrive in ascending order.
    pub(crate) fn push(&mut self, letter: C, node: NodeId) {
        debug_assert!(
            self.last().map_or(true, |(c, _)| c < letter),
            "push: labels must be appended in ascending order"
        );
        let c = (letter, node);
        match self {
            Children::None => *self = Children::One(c),
            Children::One((c1, n1)) => *self = Children::Two((*c1, *n1, c.0, c.1)),
            Children::Two((c1, n1, c2, n2)) => {
                *self = Children::Many(vec![(*c1, *n1), (*c2, *n2), c])
            }
            Children::Many(children) => children.push(c),
        }
    }

    /// Redirects the most recently added edge to `node`.
    ///
    /// Panics if there are no children.
    pub(crate) fn redirect_last(&mut self, node: NodeId) {
        match self {
            Children::None => panic!("redirect_last: no children"),
            Children::One((_, n)) => *n = node,
            Children::Two((_, _, _, n2)) => *n2 = node,
            Children::Many(children) => {
                if let Some((_, n)) = children.last_mut() {
                    *n = node;
                }
            }
        }
    }
}

/// An iterator over the edges of a node.
#[derive(Clone)]
pub struct ChildIter<'a, C: DawgChar> {
    children: &'a Children<C>,
    index: usize,
}

impl<C: DawgChar> Iterator for ChildIter<'_, C> {
    type Item = (C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.children.get(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: DawgChar> ExactSizeIterator for ChildIter<'_, C> {}

#[cfg(test)]
mod test {
    use super::super::node_arena::{Node, NodeArena};
    use super::*;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::<char>::with_capacity(n);
        (0..n).map(|_| arena.alloc(Node::new(false))).collect()
    }

    #[test]
    fn no_children() {
        let c = Children::<char>::None;
        assert_eq!(c.iter().next(), None);
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert_eq!(c.last(), None);
    }

    #[test]
    fn one_child() {
        let n = ids(1);
        let mut c = Children::None;
        c.push('a', n[0]);
        let mut children = c.iter();
        assert_eq!(children.next(), Some(('a', n[0])));
        assert_eq!(children.next(), None);
        assert_eq!(c.len(), 1);
        assert_eq!(c.last(), Some(('a', n[0])));
    }

    #[test]
    fn two_children() {
        let n = ids(2);
        let mut c = Children::None;
        c.push('a', n[0]);
        c.push('b', n[1]);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![('a', n[0]), ('b', n[1])]);
        assert_eq!(c.find('b'), Some(n[1]));
        assert_eq!(c.find('c'), None);
        assert_eq!(c.last(), Some(('b', n[1])));
    }

    #[test]
    fn three_children() {
        let n = ids(3);
        let mut c = Children::None;
        c.push('a', n[0]);
        c.push('b', n[1]);
        c.push('c', n[2]);
        assert!(matches!(c, Children::Many(_)));
        assert_eq!(c.iter().len(), 3);
        assert_eq!(c.find('a'), Some(n[0]));
        assert_eq!(c.find('c'), Some(n[2]));
        assert_eq!(c.last(), Some(('c', n[2])));
    }

    #[test]
    fn a_thousand_children() {
        let n = ids(1000);
        let mut c = Children::None;
        let letters: Vec<char> = (0..).filter_map(std::char::from_u32).take(1000).collect();
        for (&ch, &id) in letters.iter().zip(&n) {
            c.push(ch, id);
        }
        for (&ch, &id) in letters.iter().zip(&n) {
            assert_eq!(c.find(ch), Some(id));
        }
        assert_eq!(c.len(), 1000);
    }

    #[test]
    fn redirect_last_only_touches_last_edge() {
        let n = ids(4);
        for count in 1..=3 {
            let mut c = Children::None;
            for (i, ch) in ['a', 'b', 'c'].into_iter().take(count).enumerate() {
                c.push(ch, n[i]);
            }
            c.redirect_last(n[3]);
            let (last_ch, last) = c.last().unwrap();
            assert_eq!(last, n[3]);
            for (ch, node) in c.iter() {
                if ch != last_ch {
                    assert_ne!(node, n[3]);
                }
            }
        }
    }
}
