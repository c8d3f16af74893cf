// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

use std::iter::FusedIterator;

use super::node::{Idx, Node};

/// Iterator over the elements of a [`SkipList`](super::SkipList), walking
/// the base level.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    /// Last node yielded from the front (starts at the base head).
    front: Idx,
    /// Last node yielded from the back (starts at the base tail).
    back: Idx,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(nodes: &'a [Node<T>], head: Idx, tail: Idx, len: usize) -> Self {
        Iter {
            nodes,
            front: head,
            back: tail,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.front = self.nodes[self.front as usize].right?;
        self.remaining -= 1;
        self.nodes[self.front as usize].item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.nodes[self.back as usize].left?;
        self.remaining -= 1;
        self.nodes[self.back as usize].item.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}
