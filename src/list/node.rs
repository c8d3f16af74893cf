// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Arena-allocated nodes of the layered graph.
//!
//! Every node lives in one `Vec` and refers to its neighbours by index. A
//! node has four optional links: `left`/`right` along its level and
//! `up`/`down` to its copies on the adjacent levels. Vertical links are plain
//! indices, so no node owns another and the whole graph is dropped with the
//! arena.

use super::SkipList;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(super) type Idx = u32;

#[derive(Debug, Clone)]
pub(super) struct Node<T> {
    /// Only base-level element nodes carry a value. Promoted copies and
    /// sentinels are empty.
    pub(super) item: Option<T>,
    /// Base-level positions covered by the edge arriving from `left`.
    pub(super) span: usize,
    pub(super) left: Option<Idx>,
    pub(super) right: Option<Idx>,
    pub(super) up: Option<Idx>,
    pub(super) down: Option<Idx>,
}

impl<T> Node<T> {
    /// Head/tail sentinel, also used for promoted copies.
    pub(super) fn empty() -> Self {
        Node {
            item: None,
            span: 1,
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    pub(super) fn element(item: T) -> Self {
        Node {
            item: Some(item),
            ..Node::empty()
        }
    }
}

impl<T, C> SkipList<T, C> {
    pub(super) fn node(&self, idx: Idx) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    pub(super) fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    pub(super) fn alloc(&mut self, node: Node<T>) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            *self.node_mut(idx) = node;
            idx
        } else {
            let idx = self.nodes.len() as Idx;
            self.nodes.push(node);
            idx
        }
    }

    /// Return a slot to the free list. The node must already be unlinked.
    pub(super) fn release(&mut self, idx: Idx) {
        *self.node_mut(idx) = Node::empty();
        self.free_list.push(idx);
    }

    /// Insert `node` directly to the right of `left` on the same level.
    pub(super) fn link_after(&mut self, left: Idx, node: Idx) {
        let right = self.node(left).right;
        let new = self.node_mut(node);
        new.left = Some(left);
        new.right = right;
        self.node_mut(left).right = Some(node);
        if let Some(right) = right {
            self.node_mut(right).left = Some(node);
        }
    }

    /// Remove `node` from its level, joining its neighbours.
    pub(super) fn unlink(&mut self, node: Idx) {
        let Node { left, right, .. } = *self.node(node);
        if let Some(left) = left {
            self.node_mut(left).right = right;
        }
        if let Some(right) = right {
            self.node_mut(right).left = left;
        }
    }

    /// Stack `upper` directly above `lower`.
    pub(super) fn link_vertical(&mut self, lower: Idx, upper: Idx) {
        self.node_mut(lower).up = Some(upper);
        self.node_mut(upper).down = Some(lower);
    }
}
