// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Indexable skip list - a sequence with expected O(log n) positional access
//! and insertion, no element ordering required.
//!
//! # Quick Start
//!
//! ```
//! use indexable_skiplist::{Options, SkipList};
//!
//! let mut list = SkipList::with_options(Options::new().with_seed(7));
//!
//! list.add(0, "a")?;
//! list.add(1, "c")?;
//! list.add(1, "b")?;
//! assert_eq!(list.to_string(), "[a, b, c]");
//! assert_eq!(list.get(1)?, &"b");
//!
//! assert!(list.get(3).is_err());
//! # Ok::<(), indexable_skiplist::Error>(())
//! ```
//!
//! # Deterministic promotion
//!
//! Level promotion is driven by a [`coin::Coin`]. Seed the default coin
//! through [`Options`], wrap any `rand_core::RngCore` in [`coin::RngCoin`],
//! or replay a fixed sequence with [`coin::Scripted`]:
//!
//! ```
//! use indexable_skiplist::SkipList;
//! use indexable_skiplist::coin::Scripted;
//!
//! let mut list = SkipList::with_coin(Scripted::tails());
//! list.extend(1..=4);
//! assert_eq!(list.height(), 1);
//! ```

pub mod coin;
pub mod error;
pub mod list;
pub mod options;

pub use error::{Error, Result};
pub use list::SkipList;
pub use options::Options;
