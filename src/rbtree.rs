use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::comparator::{Comparator, Natural};
use crate::raw::{Handle, RawRBTree};

mod capacity;
mod order_statistic;
mod ordered_iterator;

pub use crate::Rank;
pub use ordered_iterator::{OrderedIterator, OrderedIteratorMut};

/// An ordered map based on a [red-black tree], with rank-aware cursors.
///
/// Entries are kept sorted by a [`Comparator`] chosen at construction
/// ([`Natural`] order unless stated otherwise). Every node also records the
/// size of its subtree, so besides the usual logarithmic lookups the tree can
/// answer rank queries ([`get_by_rank`](Self::get_by_rank),
/// [`rank_of`](Self::rank_of)) and hand out [`OrderedIterator`]s that always
/// know their exact position, even after jumping to an arbitrary key with
/// [`OrderedIterator::move_to`].
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the tree. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `RBTree` that observed it and will not result in
/// undefined behavior.
///
/// # Examples
///
/// ```
/// use rb_ost::RBTree;
///
/// let mut tree = RBTree::new();
/// tree.put(5, "e");
/// tree.put(3, "c");
/// tree.put(8, "h");
/// tree.put(1, "a");
/// tree.put(4, "d");
///
/// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
/// assert_eq!(tree.floor(&6), Some((&5, &"e")));
/// assert_eq!(tree.ceiling(&6), Some((&8, &"h")));
/// assert_eq!(tree.ordered_first().key(), Some(&1));
///
/// tree.remove(&3);
/// assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 4, 5, 8]);
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RBTree<K, V, C = Natural> {
    raw: RawRBTree<K, V, C>,
}

/// An iterator over the entries of a `RBTree`, in key order.
///
/// Unlike [`OrderedIterator`] it does not track ranks; it only walks from both
/// ends toward the middle.
///
/// This `struct` is created by the [`iter`] method on [`RBTree`].
///
/// # Examples
///
/// ```
/// use rb_ost::RBTree;
///
/// let tree = RBTree::from([(1, "a"), (2, "b")]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: RBTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C = Natural> {
    tree: Option<&'a RawRBTree<K, V, C>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the entries of a `RBTree`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`RBTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `RBTree`.
///
/// This `struct` is created by the [`keys`] method on [`RBTree`].
///
/// [`keys`]: RBTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, C = Natural> {
    inner: Iter<'a, K, V, C>,
}

/// An iterator over the values of a `RBTree`.
///
/// This `struct` is created by the [`values`] method on [`RBTree`].
///
/// [`values`]: RBTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, C = Natural> {
    inner: Iter<'a, K, V, C>,
}

impl<K, V> RBTree<K, V> {
    /// Makes a new, empty `RBTree` ordered by the keys' [`Ord`] implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.put(1, "a");
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> RBTree<K, V, C> {
    /// Makes a new, empty `RBTree` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::{RBTree, Reversed};
    ///
    /// let mut tree = RBTree::with_comparator(Reversed);
    /// tree.put(1, ());
    /// tree.put(2, ());
    /// assert_eq!(tree.left(), Some((&2, &())));
    /// ```
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            raw: RawRBTree::new(comparator),
        }
    }

    /// The comparator ordering this tree.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every entry. The comparator is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let mut tree = RBTree::from([(1, "a")]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.left(), None);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The entry with the smallest key, or `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn left(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|node| self.raw.key_value(node))
    }

    /// The entry with the largest key, or `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn right(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|node| self.raw.key_value(node))
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let tree = RBTree::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let (first_key, first_value) = tree.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: Some(&self.raw),
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    ///
    /// # Complexity
    ///
    /// O(n) to exhaust.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the tree, in order by key.
    ///
    /// # Complexity
    ///
    /// O(n) to exhaust.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }

    /// A cursor at `position`: `-1` is the begin sentinel, [`len`](Self::len)
    /// the end sentinel, anything between the entry of that rank. Positions
    /// outside `-1..=len` are clamped to the nearer sentinel.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let tree = RBTree::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(tree.ordered_at(1).key(), Some(&20));
    /// assert!(tree.ordered_at(3).is_end());
    /// assert!(tree.ordered_at(-7).is_begin());
    /// ```
    pub fn ordered_at(&self, position: isize) -> OrderedIterator<'_, K, V, C> {
        OrderedIterator::new(&self.raw, position)
    }

    /// A cursor on the begin sentinel, one step before the first entry.
    pub fn ordered_begin(&self) -> OrderedIterator<'_, K, V, C> {
        self.ordered_at(-1)
    }

    /// A cursor on the end sentinel, one step past the last entry.
    pub fn ordered_end(&self) -> OrderedIterator<'_, K, V, C> {
        self.ordered_at(self.raw.len_isize())
    }

    /// A cursor on the first entry.
    pub fn ordered_first(&self) -> OrderedIterator<'_, K, V, C> {
        self.ordered_at(0)
    }

    /// A cursor on the last entry.
    pub fn ordered_last(&self) -> OrderedIterator<'_, K, V, C> {
        self.ordered_at(self.raw.len_isize() - 1)
    }

    /// Like [`ordered_at`](Self::ordered_at), but the cursor can overwrite
    /// values.
    pub fn ordered_at_mut(&mut self, position: isize) -> OrderedIteratorMut<'_, K, V, C> {
        OrderedIteratorMut::new(&mut self.raw, position)
    }

    pub fn ordered_begin_mut(&mut self) -> OrderedIteratorMut<'_, K, V, C> {
        self.ordered_at_mut(-1)
    }

    pub fn ordered_end_mut(&mut self) -> OrderedIteratorMut<'_, K, V, C> {
        let end = self.raw.len_isize();
        self.ordered_at_mut(end)
    }

    pub fn ordered_first_mut(&mut self) -> OrderedIteratorMut<'_, K, V, C> {
        self.ordered_at_mut(0)
    }

    pub fn ordered_last_mut(&mut self) -> OrderedIteratorMut<'_, K, V, C> {
        let last = self.raw.len_isize() - 1;
        self.ordered_at_mut(last)
    }

    fn write_subtree(&self, f: &mut fmt::Formatter<'_>, handle: Handle, prefix: &str, is_tail: bool) -> fmt::Result
    where
        K: fmt::Display,
    {
        let node = self.raw.node(handle);
        if let Some(right) = node.right {
            let extended = format!("{prefix}{}", if is_tail { "│   " } else { "    " });
            self.write_subtree(f, right, &extended, false)?;
        }
        writeln!(f, "{prefix}{}{}", if is_tail { "└── " } else { "┌── " }, node.key)?;
        if let Some(left) = node.left {
            let extended = format!("{prefix}{}", if is_tail { "    " } else { "│   " });
            self.write_subtree(f, left, &extended, true)?;
        }
        Ok(())
    }
}

impl<K, V, C: Comparator<K>> RBTree<K, V, C> {
    /// Inserts an entry, or overwrites the entry whose key compares equal.
    ///
    /// Overwriting replaces both the stored key and the value and returns the
    /// old value; the tree's shape and size do not change.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert_eq!(tree.put(37, "a"), None);
    /// assert_eq!(tree.put(37, "b"), Some("a"));
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(&37), Some(&"b"));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.search(key).map(|node| self.raw.key_value(node).1)
    }

    /// Returns the stored key and value for `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.search(key).map(|node| self.raw.key_value(node))
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let mut tree = RBTree::from([(1, 10)]);
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(tree.get(&1), Some(&11));
    /// ```
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.raw.search(key).map(|node| self.raw.value_mut(node))
    }

    /// Returns `true` if the tree holds an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.search(key).is_some()
    }

    /// Removes the entry for `key`, returning its value. Removing an absent key
    /// is a no-op.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let mut tree = RBTree::from([(1, "a")]);
    /// assert_eq!(tree.remove(&1), Some("a"));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.raw.remove(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.raw.remove(key)
    }

    /// The entry with the greatest key less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let tree = RBTree::from([(10, 'a'), (20, 'b')]);
    /// assert_eq!(tree.floor(&15), Some((&10, &'a')));
    /// assert_eq!(tree.floor(&20), Some((&20, &'b')));
    /// assert_eq!(tree.floor(&5), None);
    /// ```
    #[must_use]
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.floor(key).map(|node| self.raw.key_value(node))
    }

    /// The entry with the least key greater than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let tree = RBTree::from([(10, 'a'), (20, 'b')]);
    /// assert_eq!(tree.ceiling(&15), Some((&20, &'b')));
    /// assert_eq!(tree.ceiling(&25), None);
    /// ```
    #[must_use]
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.ceiling(key).map(|node| self.raw.key_value(node))
    }

    /// A cursor on the entry for `key`, with its exact rank as position, or
    /// `None` if the key is absent.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let tree = RBTree::from([(1, ()), (5, ()), (9, ())]);
    /// let it = tree.ordered_at_key(&9).unwrap();
    /// assert!(it.is_last());
    /// assert_eq!(it.position(), 2);
    /// assert!(tree.ordered_at_key(&4).is_none());
    /// ```
    pub fn ordered_at_key(&self, key: &K) -> Option<OrderedIterator<'_, K, V, C>> {
        let rank = isize::try_from(self.raw.rank_of(key)?).ok()?;
        Some(self.ordered_at(rank))
    }

    /// Like [`ordered_at_key`](Self::ordered_at_key), but the cursor can
    /// overwrite values.
    pub fn ordered_at_key_mut(&mut self, key: &K) -> Option<OrderedIteratorMut<'_, K, V, C>> {
        let rank = isize::try_from(self.raw.rank_of(key)?).ok()?;
        Some(self.ordered_at_mut(rank))
    }
}

impl<K: fmt::Display, V, C> fmt::Display for RBTree<K, V, C> {
    /// Draws the tree sideways: right subtrees above their parent, left
    /// subtrees below.
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let tree = RBTree::from([(1, ()), (2, ()), (3, ())]);
    /// assert_eq!(
    ///     tree.to_string(),
    ///     "RedBlackTree\n│   ┌── 3\n└── 2\n    └── 1\n",
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RedBlackTree")?;
        match self.raw.root() {
            Some(root) => self.write_subtree(f, root, "", true),
            None => Ok(()),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for RBTree<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for RBTree<K, V, C> {
    /// Creates an empty `RBTree` with the default comparator.
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RBTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for RBTree<K, V, C> {}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for RBTree<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for RBTree<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RBTree<K, V> {
    /// Later duplicates overwrite earlier ones.
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, K, V, C> IntoIterator for &'a RBTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for RBTree<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the tree, sorted by key.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            inner: self.raw.drain().into_iter(),
        }
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree?;
        let handle = self.front?;

        self.remaining -= 1;
        self.front = tree.successor(handle);
        Some(tree.key_value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree?;
        let handle = self.back?;

        self.remaining -= 1;
        self.back = tree.predecessor(handle);
        Some(tree.key_value(handle))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> fmt::Debug for Iter<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<K, V, C> Default for Iter<'_, K, V, C> {
    /// Creates an empty `rbtree::Iter`.
    ///
    /// ```
    /// # use rb_ost::rbtree;
    /// let iter: rbtree::Iter<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Self {
            tree: None,
            front: None,
            back: None,
            remaining: 0,
        }
    }
}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.inner.len()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    fn default() -> Self {
        Self {
            inner: Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<K, V, C> fmt::Debug for Keys<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.remaining).finish()
    }
}

impl<K, V, C> Default for Keys<'_, K, V, C> {
    fn default() -> Self {
        Self {
            inner: Iter::default(),
        }
    }
}

impl<K, V, C> Clone for Keys<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V, C> fmt::Debug for Values<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.remaining).finish()
    }
}

impl<K, V, C> Default for Values<'_, K, V, C> {
    fn default() -> Self {
        Self {
            inner: Iter::default(),
        }
    }
}

impl<K, V, C> Clone for Values<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
