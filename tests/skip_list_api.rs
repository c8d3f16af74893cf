// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Scenario tests for the public skip list API.

use indexable_skiplist::coin::{FairCoin, RngCoin, Scripted};
use indexable_skiplist::{Error, Options, SkipList};
use rand::SeedableRng;
use rand::rngs::StdRng;

// =============================================================================
// Rendering and basic scenarios
// =============================================================================

#[test]
fn empty_list_renders_brackets() {
    let list: SkipList<String> = SkipList::new();
    assert_eq!(list.to_string(), "[]");
    assert_eq!(list.len(), 0);
    assert_eq!(list.get(0), Err(Error::OutOfRange { index: 0, len: 0 }));
}

#[test]
fn append_in_order() {
    let mut list = SkipList::new();
    list.add(0, "a").unwrap();
    list.add(1, "b").unwrap();
    list.add(2, "c").unwrap();
    assert_eq!(list.to_string(), "[a, b, c]");
    assert_eq!(list.get(1), Ok(&"b"));
}

#[test]
fn insert_at_front_each_time() {
    let mut list = SkipList::new();
    list.add(0, "x").unwrap();
    list.add(0, "y").unwrap();
    assert_eq!(list.to_string(), "[y, x]");
}

#[test]
fn single_element_renders_without_separator() {
    let mut list = SkipList::new();
    list.append(42);
    assert_eq!(list.to_string(), "[42]");
}

#[test]
fn append_matches_add_at_len() {
    let mut appended = SkipList::with_options(Options::new().with_seed(3));
    let mut added = SkipList::with_options(Options::new().with_seed(3));
    for i in 0..100 {
        appended.append(i);
        added.add(added.len(), i).unwrap();
    }
    assert_eq!(appended, added);
    assert_eq!(appended.height(), added.height());
    assert_eq!(appended.node_count(), added.node_count());
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn get_past_end_fails() {
    let list: SkipList<u8> = (0..3).collect();
    assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    assert_eq!(list.get(usize::MAX), Err(Error::OutOfRange { index: usize::MAX, len: 3 }));
}

#[test]
fn add_past_end_fails_without_mutation() {
    let mut list: SkipList<u8> = (0..3).collect();
    let before = list.clone();
    assert_eq!(list.add(4, 9), Err(Error::OutOfRange { index: 4, len: 3 }));
    assert_eq!(list, before);
    assert_eq!(list.height(), before.height());
    assert_eq!(list.node_count(), before.node_count());
    list.check_invariants();
}

#[test]
fn remove_from_empty_fails() {
    let mut list: SkipList<u8> = SkipList::new();
    assert_eq!(list.remove(0), Err(Error::OutOfRange { index: 0, len: 0 }));
}

// =============================================================================
// Positional semantics
// =============================================================================

#[test]
fn middle_inserts_shift_right() {
    let mut list = SkipList::with_options(Options::new().with_seed(11));
    for i in 0..10 {
        list.append(i * 10);
    }
    list.add(5, 45).unwrap();
    list.add(0, -10).unwrap();
    list.add(list.len(), 100).unwrap();

    let expected = vec![-10, 0, 10, 20, 30, 40, 45, 50, 60, 70, 80, 90, 100];
    let items: Vec<_> = list.iter().copied().collect();
    assert_eq!(items, expected);
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(list.get(i), Ok(value), "failed at {}", i);
    }
    list.check_invariants();
}

#[test]
fn insert_at_beginning_reverses() {
    let mut list = SkipList::with_options(Options::new().with_seed(5));
    for i in 0..200 {
        list.add(0, i).unwrap();
    }
    let items: Vec<_> = list.iter().copied().collect();
    assert_eq!(items, (0..200).rev().collect::<Vec<_>>());
    list.check_invariants();
}

#[test]
fn stress_test() {
    let mut list = SkipList::with_options(Options::new().with_seed(99).with_capacity(1000));
    for i in 0..1000 {
        list.add(i, i).unwrap();
    }
    assert_eq!(list.len(), 1000);
    for i in 0..1000 {
        assert_eq!(list.get(i), Ok(&i), "failed at {}", i);
    }

    // Remove every other item from the end
    for i in (0..500).rev() {
        list.remove(i * 2).unwrap();
    }
    assert_eq!(list.len(), 500);

    for i in 0..500 {
        let expected = i * 2 + 1;
        assert_eq!(list.get(i), Ok(&expected), "failed at index {}", i);
    }
    list.check_invariants();
}

#[test]
fn drain_from_the_front() {
    let mut list: SkipList<u32> = (0..300).collect();
    for i in 0..300 {
        assert_eq!(list.remove(0), Ok(i));
    }
    assert!(list.is_empty());
    assert_eq!(list.to_string(), "[]");
    assert_eq!(list.node_count(), 0);
    list.check_invariants();

    list.append(1);
    assert_eq!(list.to_string(), "[1]");
    list.check_invariants();
}

// =============================================================================
// Coins
// =============================================================================

#[test]
fn equal_seeds_build_equal_shapes() {
    let build = || {
        let mut list = SkipList::with_coin(FairCoin::seeded(2026));
        for i in 0..500 {
            list.add(i / 2, i).unwrap();
        }
        list
    };
    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(a.height(), b.height());
    assert_eq!(a.node_count(), b.node_count());
}

#[test]
fn rng_coin_drives_promotion() {
    let mut list = SkipList::with_coin(RngCoin::new(StdRng::seed_from_u64(17)));
    list.extend(0..1000u32);
    assert!(list.height() > 1);
    assert!(list.node_count() > list.len());
    list.check_invariants();
}

#[test]
fn scripted_coin_builds_exact_tower() {
    let mut list = SkipList::with_coin(Scripted::new([true, true, true]));
    list.append('z');
    assert_eq!(list.height(), 4);
    assert_eq!(list.node_count(), 4);
    assert_eq!(list.coin().consumed(), 4);
    list.check_invariants();
}

#[test]
fn boxed_dyn_coin() {
    let coin: Box<dyn indexable_skiplist::coin::Coin> = Box::new(FairCoin::seeded(8));
    let mut list = SkipList::with_coin(coin);
    list.extend("hello".chars());
    assert_eq!(list.to_string(), "[h, e, l, l, o]");
}
