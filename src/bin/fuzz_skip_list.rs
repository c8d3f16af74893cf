//! AFL Fuzz harness for the skip list
//!
//! Decodes the input into a sequence of positional edits and applies each
//! one to both a skip list and a `Vec`. After every edit the two must agree
//! on length, and the skip list's span bookkeeping must pass
//! `check_invariants`. The promotion coin is seeded from the first input
//! bytes so crashes replay exactly.

use afl::fuzz;
use indexable_skiplist::coin::FairCoin;
use indexable_skiplist::{Error, SkipList};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert a value at a position (may be past the end)
    Add { pos: u8, value: u8 },
    /// Remove the element at a position (may be past the end)
    Remove { pos: u8 },
    /// Overwrite the element at a position
    Set { pos: u8, value: u8 },
    /// Read every element and compare
    Scan,
    /// Drop everything
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        match op_type {
            0..=3 if rest.len() >= 2 => Some((FuzzOp::Add { pos: rest[0], value: rest[1] }, &rest[2..])),
            4 | 5 if !rest.is_empty() => Some((FuzzOp::Remove { pos: rest[0] }, &rest[1..])),
            6 if rest.len() >= 2 => Some((FuzzOp::Set { pos: rest[0], value: rest[1] }, &rest[2..])),
            7 if rest.first() == Some(&0) => Some((FuzzOp::Clear, &rest[1..])),
            7 => Some((FuzzOp::Scan, rest)),
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        if data.len() < 8 {
            return;
        }
        let (seed, mut remaining) = data.split_at(8);
        let mut seed_bytes = [0u8; 8];
        seed_bytes.copy_from_slice(seed);

        let mut list = SkipList::with_coin(FairCoin::seeded(u64::from_le_bytes(seed_bytes)));
        let mut model: Vec<u8> = Vec::new();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            let len = model.len();

            match op {
                FuzzOp::Add { pos, value } => {
                    let pos = pos as usize;
                    if pos <= len {
                        list.add(pos, value).unwrap();
                        model.insert(pos, value);
                    } else {
                        assert_eq!(list.add(pos, value), Err(Error::OutOfRange { index: pos, len }));
                    }
                }

                FuzzOp::Remove { pos } => {
                    let pos = pos as usize;
                    if pos < len {
                        assert_eq!(list.remove(pos), Ok(model.remove(pos)));
                    } else {
                        assert_eq!(list.remove(pos), Err(Error::OutOfRange { index: pos, len }));
                    }
                }

                FuzzOp::Set { pos, value } => {
                    let pos = pos as usize;
                    if pos < len {
                        let old = std::mem::replace(&mut model[pos], value);
                        assert_eq!(list.set(pos, value), Ok(old));
                    } else {
                        assert!(list.set(pos, value).is_err());
                    }
                }

                FuzzOp::Scan => {
                    for (i, value) in model.iter().enumerate() {
                        assert_eq!(list.get(i), Ok(value), "Mismatch at {}", i);
                    }
                    assert!(list.iter().eq(model.iter()), "Iteration mismatch");
                }

                FuzzOp::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            assert_eq!(list.len(), model.len(), "Length mismatch");
            list.check_invariants();
        }
    });
}
