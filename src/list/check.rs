// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Exhaustive structural checks, used by tests and fuzzing.

use rustc_hash::FxHashMap;

use super::SkipList;
use super::node::Idx;

impl<T, C> SkipList<T, C> {
    /// Walk every level and panic if the graph is inconsistent:
    ///
    /// 1. the base level holds exactly `len` valued nodes, each with span 1;
    /// 2. on every level, cumulative spans equal base-level ranks, with the
    ///    tail at `len + 1`;
    /// 3. the number of levels equals `height`, and the top sentinels are
    ///    the list's `head`/`tail`;
    /// 4. every upper node sits on a node of the level directly below, with
    ///    matching up/down links.
    ///
    /// Also checks left/right back-links and that no arena slot is leaked.
    pub fn check_invariants(&self) {
        let mut head = self.base_head;
        let mut tail = self.base_tail;
        assert!(self.node(head).down.is_none(), "base head has a down-link");

        let mut below = self.check_level(head, tail, None, 1);
        let base_count = below.len() - 1;
        assert_eq!(
            base_count, self.len,
            "INVARIANT VIOLATED: base level holds {} nodes, len()={}",
            base_count, self.len
        );

        let mut level = 1;
        let mut total = base_count;
        while let Some(up_head) = self.node(head).up {
            level += 1;
            let Some(up_tail) = self.node(tail).up else {
                panic!("level {}: head continues upward but tail does not", level);
            };
            assert_eq!(self.node(up_head).down, Some(head), "level {}: head down-link", level);
            assert_eq!(self.node(up_tail).down, Some(tail), "level {}: tail down-link", level);

            let ranks = self.check_level(up_head, up_tail, Some(&below), level);
            total += ranks.len() - 1;
            below = ranks;
            head = up_head;
            tail = up_tail;
        }
        assert!(self.node(tail).up.is_none(), "top tail has an up-link");

        assert_eq!(
            level, self.height,
            "INVARIANT VIOLATED: {} levels materialized, height()={}",
            level, self.height
        );
        assert_eq!(head, self.head, "top head is not the list head");
        assert_eq!(tail, self.tail, "top tail is not the list tail");
        assert_eq!(
            total,
            self.node_count(),
            "INVARIANT VIOLATED: {} reachable element nodes, node_count()={}",
            total,
            self.node_count()
        );
    }

    /// Check one level and return the rank of each of its nodes (tail
    /// included). `below` holds the ranks of the level underneath.
    fn check_level(
        &self,
        head: Idx,
        tail: Idx,
        below: Option<&FxHashMap<Idx, usize>>,
        level: usize,
    ) -> FxHashMap<Idx, usize> {
        assert!(self.node(head).left.is_none(), "level {}: head has a left neighbour", level);
        assert!(self.node(head).item.is_none(), "level {}: head holds a value", level);

        let mut ranks = FxHashMap::default();
        let mut rank = 0;
        let mut prev = head;
        loop {
            let Some(idx) = self.node(prev).right else {
                panic!("level {}: chain ends before reaching the tail", level);
            };
            let node = self.node(idx);
            assert_eq!(node.left, Some(prev), "level {}: broken back-link at {}", level, idx);
            rank += node.span;
            ranks.insert(idx, rank);

            if idx == tail {
                assert!(node.right.is_none(), "level {}: tail has a right neighbour", level);
                assert_eq!(
                    rank,
                    self.len + 1,
                    "INVARIANT VIOLATED: level {} tail rank {} != len()+1={}",
                    level,
                    rank,
                    self.len + 1
                );
                break;
            }

            match below {
                None => {
                    assert_eq!(node.span, 1, "level 1: span {} at node {}", node.span, idx);
                    assert!(node.item.is_some(), "level 1: node {} has no value", idx);
                    assert!(node.down.is_none(), "level 1: node {} has a down-link", idx);
                }
                Some(below) => {
                    assert!(node.item.is_none(), "level {}: copy {} holds a value", level, idx);
                    let Some(down) = node.down else {
                        panic!("level {}: node {} has no down-link", level, idx);
                    };
                    assert_eq!(self.node(down).up, Some(idx), "level {}: up/down mismatch", level);
                    assert_eq!(
                        below.get(&down),
                        Some(&rank),
                        "INVARIANT VIOLATED: level {} node {} has rank {}, its lower copy does not",
                        level,
                        idx,
                        rank
                    );
                }
            }
            prev = idx;
        }
        ranks
    }
}

#[cfg(test)]
mod tests {
    use crate::SkipList;
    use crate::coin::Scripted;

    fn tall_list() -> SkipList<u32, Scripted> {
        let mut list = SkipList::with_coin(Scripted::new([true, false, false, true, true]));
        list.extend([1, 2, 3]);
        list
    }

    #[test]
    fn consistent_list_passes() {
        tall_list().check_invariants();
    }

    #[test]
    #[should_panic(expected = "INVARIANT VIOLATED")]
    fn detects_bad_span() {
        let mut list = tall_list();
        let tail = list.tail;
        list.node_mut(tail).span += 1;
        list.check_invariants();
    }

    #[test]
    #[should_panic(expected = "INVARIANT VIOLATED")]
    fn detects_bad_len() {
        let mut list = tall_list();
        list.len += 1;
        list.check_invariants();
    }

    #[test]
    #[should_panic(expected = "up/down mismatch")]
    fn detects_broken_vertical_link() {
        let mut list = tall_list();
        let head = list.head;
        let first = list.node(head).right.unwrap();
        let down = list.node(first).down.unwrap();
        list.node_mut(down).up = None;
        list.check_invariants();
    }
}
