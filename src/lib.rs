//! Red-black order-statistic trees with rank-tracking cursors.
//!
//! This crate provides [`RBTree`], a red-black tree whose nodes record their
//! subtree sizes, and two facades over it, [`TreeMap`] and [`TreeSet`]. On top
//! of the usual sorted-map operations the tree offers:
//!
//! - [`floor`](RBTree::floor) / [`ceiling`](RBTree::ceiling) - nearest entries
//!   at or below / at or above a key
//! - [`get_by_rank`](RBTree::get_by_rank) / [`rank_of`](RBTree::rank_of) -
//!   O(log n) order statistics, plus indexing by [`Rank`]
//! - [`OrderedIterator`] - a bidirectional cursor that always knows its
//!   position, can jump to any key in O(log n) with
//!   [`move_to`](OrderedIterator::move_to), and can be compared with other
//!   cursors over the same tree
//!
//! Ordering comes from a [`Comparator`] fixed at construction: [`Natural`]
//! (the default), [`Reversed`], or any `Fn(&K, &K) -> Ordering`.
//!
//! # Example
//!
//! ```
//! use rb_ost::{RBTree, Rank};
//!
//! let mut tree = RBTree::new();
//! for (key, value) in [(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")] {
//!     tree.put(key, value);
//! }
//!
//! // Jump straight to a key; the cursor's position stays exact.
//! let mut it = tree.ordered_begin();
//! assert!(it.move_to(&4));
//! assert_eq!(it.key_value(), Some((&4, &"d")));
//!
//! let mut other = tree.ordered_first();
//! other.next_n(3);
//! assert!(it.is_equal(&other));
//!
//! assert!(it.next());
//! assert!(it.is_last());
//! assert!(!it.next());
//! assert!(it.is_end());
//! assert!(it.is_after(&other));
//!
//! // Order statistics.
//! assert_eq!(tree.rank_of(&3), Some(2));
//! assert_eq!(tree[Rank(4)], "e");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **No unsafe code** - Nodes live in an arena and link through handles
//! - **Logging** - Rebalancing and bulk operations report through the [`log`]
//!   facade; install any logger to see them
//!
//! # Implementation
//!
//! Nodes carry parent links so cursors step to their neighbors in amortized
//! O(1). Subtree sizes let a cursor that jumps with `move_to` recompute its
//! index from the lowest common ancestor of the old and new nodes instead of
//! walking the entries in between.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod order_statistic;
mod raw;

pub mod rbtree;
pub mod tree_map;
pub mod tree_set;

pub use comparator::{Comparator, Natural, Reversed};
pub use order_statistic::Rank;
pub use rbtree::{OrderedIterator, OrderedIteratorMut, RBTree};
pub use tree_map::TreeMap;
pub use tree_set::TreeSet;
