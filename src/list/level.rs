// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Span maintenance and level promotion.
//!
//! # Span Semantics
//!
//! `node.span` counts the base-level positions covered by the edge from the
//! node's left neighbour to the node. Summing spans from a level's head to a
//! node therefore yields the node's 1-based rank, and the tail's cumulative
//! span is always `len + 1`.
//!
//! ```text
//! Level 3: HEAD --------------(2)---------------> B ------------(3)------------> TAIL
//! Level 2: HEAD ----(1)----> A ----(1)----> B ------------(2)----------> D -(1)-> TAIL
//! Level 1: HEAD -(1)-> A -(1)-> B -(1)-> C -(1)-> D -(1)-> TAIL
//! ```
//!
//! An insertion at rank `r` adds one to every edge that spans `r` on the
//! levels above the new node's tower. A promotion splits the edge above the
//! tower top in two. A removal undoes both.

use smallvec::SmallVec;
use tracing::trace;

use super::SkipList;
use super::node::{Idx, Node};
use crate::coin::Coin;

/// Towers taller than this spill to the heap. Eight levels cover all but
/// 1 in 128 elements.
type Tower = SmallVec<[Idx; 8]>;

impl<T, C> SkipList<T, C> {
    /// From `start`, walk left until a node with an up-link is found and
    /// return that up-link together with the spans walked past (including
    /// `start`'s own span if it has no up-link). Returns `None` on the top
    /// level, where no node has an up-link.
    pub(super) fn ascend(&self, start: Idx) -> Option<(Idx, usize)> {
        let mut idx = start;
        let mut skipped = 0;
        loop {
            let node = self.node(idx);
            if let Some(up) = node.up {
                return Some((up, skipped));
            }
            skipped += node.span;
            idx = node.left?;
        }
    }

    /// Add `delta` to every edge above `start` (on levels `level + 1` up to
    /// the top) that covers `start`'s position.
    fn adjust_spans_above(&mut self, start: Idx, level: usize, delta: isize) {
        let mut idx = start;
        for _ in level..self.height {
            let Some((upper, _)) = self.ascend(idx) else {
                break;
            };
            if let Some(right) = self.node(upper).right {
                let node = self.node_mut(right);
                node.span = node.span.wrapping_add_signed(delta);
            }
            idx = upper;
        }
    }

    /// Account for a freshly linked base node in every higher level.
    pub(super) fn update_index(&mut self, node: Idx) {
        self.adjust_spans_above(node, 1, 1);
    }

    /// Splice `copy` into the level above `from`, splitting the edge that
    /// currently passes over it.
    pub(super) fn splice_node(&mut self, from: Idx, copy: Idx) {
        let Some((upper, skipped)) = self.ascend(from) else {
            unreachable!("splice_node called on the top level");
        };
        self.node_mut(copy).span = skipped;
        if let Some(right) = self.node(upper).right {
            self.node_mut(right).span -= skipped;
        }
        self.link_after(upper, copy);
        self.link_vertical(from, copy);
    }

    /// Grow one empty level on top. `index` is the position of the element
    /// being promoted; the new tail spans the elements to its right.
    pub(super) fn add_layer(&mut self, index: usize) {
        let head = self.alloc(Node::empty());
        let tail = self.alloc(Node::empty());

        self.link_vertical(self.head, head);
        self.link_vertical(self.tail, tail);
        self.link_after(head, tail);
        self.node_mut(tail).span = self.len - index;

        self.head = head;
        self.tail = tail;
        self.height += 1;
        trace!(height = self.height, len = self.len, "added skip list level");
    }

    /// Collect `base` and every copy stacked above it, bottom first.
    pub(super) fn tower(&self, base: Idx) -> Tower {
        let mut tower = Tower::new();
        let mut idx = Some(base);
        while let Some(node) = idx {
            tower.push(node);
            idx = self.node(node).up;
        }
        tower
    }

    /// Unlink a whole tower, folding each of its edges into the next node's
    /// span, and shrink the edges passing over it on the levels above.
    pub(super) fn remove_tower(&mut self, tower: &[Idx]) {
        if let Some(&top) = tower.last() {
            self.adjust_spans_above(top, tower.len(), -1);
        }
        for &idx in tower {
            let span = self.node(idx).span;
            if let Some(right) = self.node(idx).right {
                self.node_mut(right).span += span - 1;
            }
            self.unlink(idx);
        }
    }
}

impl<T, C: Coin> SkipList<T, C> {
    /// Promote the element at `index` (base node `node`) once per heads.
    pub(super) fn coin_flip(&mut self, index: usize, node: Idx) {
        let mut top = node;
        let mut level = 1;

        while self.coin.flip() {
            level += 1;
            let copy = self.alloc(Node::empty());

            if level > self.height {
                self.add_layer(index);
                let head = self.head;
                let tail_span = self.node(self.tail).span;
                self.node_mut(copy).span = self.len + 1 - tail_span;
                self.link_after(head, copy);
                self.link_vertical(top, copy);
            } else {
                self.splice_node(top, copy);
            }

            top = copy;
        }
    }
}
