//! Key ordering for the tree collections.
//!
//! Every collection in this crate is parameterized by a [`Comparator`] fixed at
//! construction. Keys are never compared any other way, so a key type does not
//! have to implement [`Ord`] as long as a comparator is supplied.
//!
//! # Examples
//!
//! ```
//! use core::cmp::Ordering;
//! use rb_ost::{RBTree, Reversed};
//!
//! let mut descending = RBTree::with_comparator(Reversed);
//! descending.put(1, "a");
//! descending.put(3, "c");
//! descending.put(2, "b");
//! assert_eq!(descending.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
//!
//! // Any `Fn(&K, &K) -> Ordering` closure is a comparator too.
//! let mut by_len = RBTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! by_len.put("ccc", 3);
//! by_len.put("a", 1);
//! by_len.put("zz", 2);
//! assert_eq!(by_len.values().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

use core::cmp::Ordering;

/// A total order over `K`.
///
/// Implementations must be consistent for the whole lifetime of the collection
/// that owns them: for any `a`, `b`, `c`, `compare(a, b)` must not change between
/// calls, must be antisymmetric and transitive, and `compare(a, a)` must be
/// [`Ordering::Equal`]. Violating this is a logic error; the tree will not cause
/// undefined behavior, but lookups and iteration order are unspecified.
pub trait Comparator<K: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation. The default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<K: ?Sized + Ord> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reversed;

impl<K: ?Sized + Ord> Comparator<K> for Reversed {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}
