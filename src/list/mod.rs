// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Indexable Skip List
//!
//! A skip list addressed by position rather than by key. Elements need no
//! ordering; the list keeps them in insertion order and finds the `i`th one
//! by walking down the levels, using per-edge span counts to know how many
//! base positions each rightward step skips.
//!
//! # Structure
//!
//! ```text
//! Level 3: HEAD ------------------------> B ------------------------> TAIL
//! Level 2: HEAD --------> A ------------> B ------------> D --------> TAIL
//! Level 1: HEAD -> A ---> B -> C -> D -> TAIL
//! ```
//!
//! Every level is a doubly linked chain between two sentinels. A promoted
//! element has a copy on each level it reaches, linked vertically to the copy
//! below. Only the base copy carries the value.
//!
//! # Operations
//!
//! - `get(index)` / `get_mut(index)`: expected O(log n)
//! - `add(index, item)`: expected O(log n), promotes the new element by coin
//!   flips
//! - `remove(index)`: expected O(log n)
//! - `set(index, item)`: expected O(log n)
//! - `len()`: O(1)
//!
//! Bad indices are reported as [`Error::OutOfRange`] before anything is
//! modified.

mod check;
mod iter;
mod level;
mod node;

use std::fmt;
use std::ops::Index;

use tracing::debug;

use crate::coin::{Coin, FairCoin};
use crate::error::{Error, Result};
use crate::options::Options;

pub use iter::Iter;
use node::{Idx, Node};

/// A sequence with expected O(log n) positional access and insertion.
///
/// `C` is the coin deciding promotions; see [`crate::coin`].
#[derive(Clone)]
pub struct SkipList<T, C = FairCoin> {
    /// Arena of nodes, sentinels included.
    nodes: Vec<Node<T>>,
    /// Freed arena slots waiting for reuse.
    free_list: Vec<Idx>,
    /// Top-level sentinels.
    head: Idx,
    tail: Idx,
    /// Base-level sentinels.
    base_head: Idx,
    base_tail: Idx,
    /// Number of elements.
    len: usize,
    /// Number of levels, at least 1.
    height: usize,
    coin: C,
}

impl<T> SkipList<T> {
    /// An empty list promoting with an OS-seeded [`FairCoin`].
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        let mut list = Self::with_coin(options.coin());
        list.nodes.reserve(options.arena_capacity());
        list
    }
}

impl<T, C> SkipList<T, C> {
    /// An empty list promoting with `coin`.
    pub fn with_coin(coin: C) -> Self {
        let mut list = SkipList {
            nodes: Vec::new(),
            free_list: Vec::new(),
            head: 0,
            tail: 0,
            base_head: 0,
            base_tail: 0,
            len: 0,
            height: 1,
            coin,
        };
        list.reset();
        list
    }

    /// Drop all nodes and lay down a single empty level.
    fn reset(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        let head = self.alloc(Node::empty());
        let tail = self.alloc(Node::empty());
        self.link_after(head, tail);
        self.head = head;
        self.tail = tail;
        self.base_head = head;
        self.base_tail = tail;
        self.len = 0;
        self.height = 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, including the base level.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Element nodes across all levels, promoted copies included. Sentinels
    /// are not counted.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len() - 2 * self.height
    }

    pub fn coin(&self) -> &C {
        &self.coin
    }

    /// Descend from the top-level head to the base node of rank `rank`
    /// (the base head for rank 0). Never steps onto a tail as long as
    /// `rank <= len`.
    fn locate(&self, rank: usize) -> Idx {
        let mut idx = self.head;
        let mut distance = 0;
        loop {
            let node = self.node(idx);
            match node.right {
                Some(right) if distance + self.node(right).span <= rank => {
                    distance += self.node(right).span;
                    idx = right;
                }
                _ => match node.down {
                    Some(down) => idx = down,
                    None => return idx,
                },
            }
        }
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, self.len)?;
        let idx = self.locate(index + 1);
        self.node(idx).item.as_ref().ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index, self.len)?;
        let idx = self.locate(index + 1);
        let len = self.len;
        self.node_mut(idx)
            .item
            .as_mut()
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left by one. The list's height is left as is.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index, self.len)?;
        let base = self.locate(index + 1);
        let tower = self.tower(base);

        self.remove_tower(&tower);
        self.len -= 1;

        let item = self.node_mut(base).item.take();
        for &idx in &tower {
            self.release(idx);
        }
        item.ok_or(Error::OutOfRange {
            index,
            len: self.len + 1,
        })
    }

    /// Remove every element and collapse the list to a single level.
    pub fn clear(&mut self) {
        debug!(len = self.len, height = self.height, "clearing skip list");
        self.reset();
    }

    /// Iterate over elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.base_head, self.base_tail, self.len)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Position of the first element equal to `item`. Linear, since the list
    /// has no key order.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|other| other == item)
    }
}

impl<T, C: Coin> SkipList<T, C> {
    /// Insert `item` so that it becomes the element at `index`, shifting the
    /// elements at `index..` right by one. `index` may equal `len()`.
    pub fn add(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(index, self.len + 1)?;
        self.insert_at(index, item);
        Ok(())
    }

    /// Insert at the end.
    pub fn append(&mut self, item: T) {
        self.insert_at(self.len, item);
    }

    /// `index` must be in `0..=len`.
    fn insert_at(&mut self, index: usize, item: T) {
        let prev = self.locate(index);
        let node = self.alloc(Node::element(item));
        self.link_after(prev, node);
        self.len += 1;

        self.update_index(node);
        self.coin_flip(index, node);
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Coin> Extend<T> for SkipList<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, C> IntoIterator for &'a SkipList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Index<usize> for SkipList<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: PartialEq, C, D> PartialEq<SkipList<T, D>> for SkipList<T, C> {
    fn eq(&self, other: &SkipList<T, D>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for SkipList<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for SkipList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as `[a, b, c]`; an empty list renders as `[]`.
impl<T: fmt::Display, C> fmt::Display for SkipList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}
