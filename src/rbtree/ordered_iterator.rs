use core::cmp::Ordering;
use core::fmt;
use core::ptr;

use crate::comparator::{Comparator, Natural};
use crate::raw::{Handle, RawRBTree};

/// Node and in-order index of a cursor, stepped against a borrowed tree.
///
/// `index` runs from `-1` (one before the first entry) to `len` (one past the
/// last). Whenever it lies in `0..len`, `node` is the entry of that rank;
/// otherwise `node` is unset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Cursor {
    node: Option<Handle>,
    index: isize,
}

impl Cursor {
    fn at<K, V, C>(tree: &RawRBTree<K, V, C>, position: isize) -> Self {
        let len = tree.len_isize();
        if position < 0 {
            return Self { node: None, index: -1 };
        }
        if position >= len {
            return Self { node: None, index: len };
        }
        let node = match position {
            0 => tree.first(),
            last if last == len - 1 => tree.last(),
            rank => usize::try_from(rank).ok().and_then(|rank| tree.select(rank)),
        };
        Self { node, index: position }
    }

    const fn is_begin(self) -> bool {
        self.index <= -1
    }

    const fn is_end(self, len: isize) -> bool {
        len == 0 || self.index >= len
    }

    const fn is_valid(self, len: isize) -> bool {
        len > 0 && self.index >= 0 && self.index < len
    }

    fn next<K, V, C>(&mut self, tree: &RawRBTree<K, V, C>) -> bool {
        let len = tree.len_isize();
        if self.is_end(len) {
            return false;
        }
        self.index = (self.index + 1).min(len);
        if !self.is_valid(len) {
            self.node = None;
            return false;
        }
        self.node = if self.index == 0 {
            tree.first()
        } else {
            self.node.and_then(|current| tree.successor(current))
        };
        debug_assert!(self.node.is_some(), "`Cursor::next()` - in-range index without a node!");
        true
    }

    fn previous<K, V, C>(&mut self, tree: &RawRBTree<K, V, C>) -> bool {
        let len = tree.len_isize();
        if self.is_begin() {
            return false;
        }
        self.index = (self.index - 1).max(-1);
        if !self.is_valid(len) {
            self.node = None;
            return false;
        }
        self.node = if self.index == len - 1 {
            tree.last()
        } else {
            self.node.and_then(|current| tree.predecessor(current))
        };
        debug_assert!(self.node.is_some(), "`Cursor::previous()` - in-range index without a node!");
        true
    }

    fn next_n<K, V, C>(&mut self, tree: &RawRBTree<K, V, C>, n: usize) -> bool {
        let mut valid = self.is_valid(tree.len_isize());
        for _ in 0..n {
            valid = self.next(tree);
        }
        valid
    }

    fn previous_n<K, V, C>(&mut self, tree: &RawRBTree<K, V, C>, n: usize) -> bool {
        let mut valid = self.is_valid(tree.len_isize());
        for _ in 0..n {
            valid = self.previous(tree);
        }
        valid
    }

    fn move_by<K, V, C>(&mut self, tree: &RawRBTree<K, V, C>, n: isize) -> bool {
        match n.cmp(&0) {
            Ordering::Greater => self.next_n(tree, n.unsigned_abs()),
            Ordering::Less => self.previous_n(tree, n.unsigned_abs()),
            Ordering::Equal => self.is_valid(tree.len_isize()),
        }
    }

    fn move_to<K, V, C: Comparator<K>>(&mut self, tree: &RawRBTree<K, V, C>, key: &K) -> bool {
        let len = tree.len_isize();
        let valid = self.is_valid(len);
        if let Some(current) = self.node.filter(|_| valid)
            && tree.comparator().compare(key, &tree.node(current).key) == Ordering::Equal
        {
            return true;
        }

        let Some(target) = tree.search(key) else {
            return false;
        };

        // From a sentinel the walk is measured from the nearest end node,
        // which sits one step inside the sentinel.
        let (anchor, offset) = if valid {
            (self.node, 0)
        } else if self.is_begin() {
            (tree.first(), 1)
        } else {
            (tree.last(), -1)
        };
        let Some(anchor) = anchor else {
            return false;
        };

        self.index += tree.rank_distance(anchor, target) + offset;
        self.node = Some(target);
        true
    }
}

/// A read-only cursor over a [`RBTree`](crate::RBTree) in key order.
///
/// Unlike [`Iter`](crate::rbtree::Iter), an `OrderedIterator` knows its
/// position: [`position`](Self::position) is `-1` before the first entry, `len`
/// past the last one, and the entry's rank in between. Positions can be
/// compared and subtracted, and [`move_to`](Self::move_to) jumps to a key in
/// logarithmic time while keeping the position exact.
///
/// The cursor borrows the tree, so the tree cannot change underneath it.
///
/// # Examples
///
/// ```
/// use rb_ost::RBTree;
///
/// let tree = RBTree::from([(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]);
///
/// let mut it = tree.ordered_begin();
/// assert!(it.is_begin());
/// assert!(it.move_to(&4));
/// assert_eq!(it.key(), Some(&4));
/// assert_eq!(it.position(), 3);
///
/// let mut first = tree.ordered_first();
/// first.next_n(3);
/// assert_eq!(it.distance_to(&first), 0);
/// ```
pub struct OrderedIterator<'a, K, V, C = Natural> {
    tree: &'a RawRBTree<K, V, C>,
    cursor: Cursor,
}

impl<'a, K, V, C> OrderedIterator<'a, K, V, C> {
    pub(crate) fn new(tree: &'a RawRBTree<K, V, C>, position: isize) -> Self {
        Self {
            tree,
            cursor: Cursor::at(tree, position),
        }
    }

    /// Returns `true` when positioned before the first entry.
    #[must_use]
    pub const fn is_begin(&self) -> bool {
        self.cursor.is_begin()
    }

    /// Returns `true` when positioned past the last entry, or when the tree is
    /// empty.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.cursor.is_end(self.tree.len_isize())
    }

    /// Returns `true` when positioned on the first entry.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.is_valid() && self.cursor.index == 0
    }

    /// Returns `true` when positioned on the last entry.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.is_valid() && self.cursor.index == self.tree.len_isize() - 1
    }

    /// Returns `true` when positioned on an entry rather than a sentinel.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.cursor.is_valid(self.tree.len_isize())
    }

    /// The cursor's index: `-1`, an entry's rank, or the tree's length.
    #[must_use]
    pub const fn position(&self) -> isize {
        self.cursor.index
    }

    /// Number of entries in the underlying tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the underlying tree is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Steps to the next entry. Returns whether the cursor is now on an entry;
    /// stepping past the last entry lands on the end sentinel, and stepping
    /// from the end sentinel does nothing.
    ///
    /// # Complexity
    ///
    /// O(1) amortized.
    pub fn next(&mut self) -> bool {
        self.cursor.next(self.tree)
    }

    /// Steps to the previous entry; the mirror image of [`next`](Self::next).
    pub fn previous(&mut self) -> bool {
        self.cursor.previous(self.tree)
    }

    /// Calls [`next`](Self::next) `n` times and returns the last result.
    pub fn next_n(&mut self, n: usize) -> bool {
        self.cursor.next_n(self.tree, n)
    }

    /// Calls [`previous`](Self::previous) `n` times and returns the last result.
    pub fn previous_n(&mut self, n: usize) -> bool {
        self.cursor.previous_n(self.tree, n)
    }

    /// Moves `n` entries forward (positive) or backward (negative).
    pub fn move_by(&mut self, n: isize) -> bool {
        self.cursor.move_by(self.tree, n)
    }

    /// The current entry's value, or `None` on a sentinel.
    #[must_use]
    pub fn get(&self) -> Option<&'a V> {
        self.key_value().map(|(_, value)| value)
    }

    /// The current entry's key, or `None` on a sentinel.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.key_value().map(|(key, _)| key)
    }

    /// The current entry, or `None` on a sentinel.
    #[must_use]
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        self.cursor.node.filter(|_| self.is_valid()).map(|node| tree.key_value(node))
    }

    /// Signed number of steps from `other` to `self`.
    ///
    /// # Panics
    ///
    /// Panics if the two cursors walk different trees.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> isize {
        assert!(
            ptr::eq(self.tree, other.tree),
            "`OrderedIterator::distance_to()` - iterators belong to different trees!"
        );
        self.cursor.index - other.cursor.index
    }

    /// Returns `true` if `self` is positioned after `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two cursors walk different trees.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.distance_to(other) > 0
    }

    /// Returns `true` if `self` is positioned before `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two cursors walk different trees.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.distance_to(other) < 0
    }

    /// Returns `true` if both cursors are at the same position.
    ///
    /// # Panics
    ///
    /// Panics if the two cursors walk different trees.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.distance_to(other) == 0
    }
}

impl<'a, K, V, C: Comparator<K>> OrderedIterator<'a, K, V, C> {
    /// Jumps to the entry with `key`, keeping [`position`](Self::position)
    /// exact. Returns `false` and stays put when `key` is absent.
    ///
    /// # Complexity
    ///
    /// O(log n): one lookup plus two walks down from the lowest common
    /// ancestor of the current and target entries.
    pub fn move_to(&mut self, key: &K) -> bool {
        self.cursor.move_to(self.tree, key)
    }

    /// Looks up `key` in the underlying tree without moving.
    #[must_use]
    pub fn get_at(&self, key: &K) -> Option<&'a V> {
        let tree = self.tree;
        tree.search(key).map(|node| tree.key_value(node).1)
    }
}

impl<K, V, C> Clone for OrderedIterator<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            cursor: self.cursor,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedIterator<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedIterator")
            .field("position", &self.cursor.index)
            .field("entry", &self.key_value())
            .finish()
    }
}

/// A cursor like [`OrderedIterator`] that can also overwrite values.
///
/// It holds the tree exclusively, so only one exists at a time; use
/// [`as_ordered`](Self::as_ordered) to compare it with read-only cursors
/// derived from it.
///
/// # Examples
///
/// ```
/// use rb_ost::RBTree;
///
/// let mut tree = RBTree::from([(1, 10), (2, 20), (3, 30)]);
///
/// let mut it = tree.ordered_begin_mut();
/// while it.next() {
///     let doubled = it.get().map(|v| v * 2).unwrap();
///     assert!(it.set(doubled));
/// }
/// assert!(!it.set(0)); // on the end sentinel
///
/// assert_eq!(tree.values().copied().collect::<Vec<_>>(), [20, 40, 60]);
/// ```
pub struct OrderedIteratorMut<'a, K, V, C = Natural> {
    tree: &'a mut RawRBTree<K, V, C>,
    cursor: Cursor,
}

impl<'a, K, V, C> OrderedIteratorMut<'a, K, V, C> {
    pub(crate) fn new(tree: &'a mut RawRBTree<K, V, C>, position: isize) -> Self {
        let cursor = Cursor::at(tree, position);
        Self { tree, cursor }
    }

    /// A read-only cursor at the same position, borrowing from `self`.
    #[must_use]
    pub fn as_ordered(&self) -> OrderedIterator<'_, K, V, C> {
        OrderedIterator {
            tree: &*self.tree,
            cursor: self.cursor,
        }
    }

    /// See [`OrderedIterator::is_begin`].
    #[must_use]
    pub const fn is_begin(&self) -> bool {
        self.cursor.is_begin()
    }

    /// See [`OrderedIterator::is_end`].
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.cursor.is_end(self.tree.len_isize())
    }

    /// See [`OrderedIterator::is_first`].
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.is_valid() && self.cursor.index == 0
    }

    /// See [`OrderedIterator::is_last`].
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.is_valid() && self.cursor.index == self.tree.len_isize() - 1
    }

    /// See [`OrderedIterator::is_valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.cursor.is_valid(self.tree.len_isize())
    }

    /// See [`OrderedIterator::position`].
    #[must_use]
    pub const fn position(&self) -> isize {
        self.cursor.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// See [`OrderedIterator::next`].
    pub fn next(&mut self) -> bool {
        self.cursor.next(self.tree)
    }

    /// See [`OrderedIterator::previous`].
    pub fn previous(&mut self) -> bool {
        self.cursor.previous(self.tree)
    }

    pub fn next_n(&mut self, n: usize) -> bool {
        self.cursor.next_n(self.tree, n)
    }

    pub fn previous_n(&mut self, n: usize) -> bool {
        self.cursor.previous_n(self.tree, n)
    }

    pub fn move_by(&mut self, n: isize) -> bool {
        self.cursor.move_by(self.tree, n)
    }

    fn current(&self) -> Option<Handle> {
        self.cursor.node.filter(|_| self.is_valid())
    }

    #[must_use]
    pub fn get(&self) -> Option<&V> {
        self.current().map(|node| self.tree.key_value(node).1)
    }

    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.current().map(|node| self.tree.key_value(node).0)
    }

    #[must_use]
    pub fn key_value(&self) -> Option<(&K, &V)> {
        self.current().map(|node| self.tree.key_value(node))
    }

    /// The current entry's value, mutably, or `None` on a sentinel.
    pub fn get_mut(&mut self) -> Option<&mut V> {
        self.current().map(|node| self.tree.value_mut(node))
    }

    /// Overwrites the current entry's value in place. Returns `false` and
    /// changes nothing on a sentinel.
    pub fn set(&mut self, value: V) -> bool {
        match self.get_mut() {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl<K, V, C: Comparator<K>> OrderedIteratorMut<'_, K, V, C> {
    /// See [`OrderedIterator::move_to`].
    pub fn move_to(&mut self, key: &K) -> bool {
        self.cursor.move_to(self.tree, key)
    }

    /// See [`OrderedIterator::get_at`].
    #[must_use]
    pub fn get_at(&self, key: &K) -> Option<&V> {
        self.tree.search(key).map(|node| self.tree.key_value(node).1)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedIteratorMut<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedIteratorMut")
            .field("position", &self.cursor.index)
            .field("entry", &self.key_value())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn tree_of(keys: impl IntoIterator<Item = i32>) -> RawRBTree<i32, i32, Natural> {
        let mut tree = RawRBTree::new(Natural);
        for key in keys {
            tree.insert(key, -key);
        }
        tree
    }

    /// The cursor's node must be the entry whose rank is its index.
    fn assert_synchronized(tree: &RawRBTree<i32, i32, Natural>, cursor: Cursor) {
        let len = tree.len_isize();
        if cursor.is_valid(len) {
            let rank = usize::try_from(cursor.index).unwrap();
            assert_eq!(cursor.node, tree.select(rank), "node/index mismatch at {}", cursor.index);
        } else {
            assert!(cursor.index == -1 || cursor.index == len, "index {} out of range", cursor.index);
            assert_eq!(cursor.node, None);
        }
    }

    #[test]
    fn construction_resolves_every_position() {
        let tree = tree_of(0..10);
        for position in -3..14 {
            let cursor = Cursor::at(&tree, position);
            assert_eq!(cursor.index, position.clamp(-1, 10));
            assert_synchronized(&tree, cursor);
        }
    }

    #[test]
    fn empty_tree_cursor_never_becomes_valid() {
        let tree = tree_of(core::iter::empty());
        let mut cursor = Cursor::at(&tree, -1);
        assert!(cursor.is_begin() && cursor.is_end(0));
        assert!(!cursor.next(&tree));
        assert!(!cursor.previous(&tree));
        assert!(!cursor.move_to(&tree, &1));
        assert_synchronized(&tree, cursor);
    }

    #[test]
    fn move_to_from_begin_sentinel() {
        let tree = tree_of(1..=5);
        for key in 1..=5 {
            let mut cursor = Cursor::at(&tree, -1);
            assert!(cursor.move_to(&tree, &key));
            assert_eq!(cursor.index, isize::try_from(key).unwrap() - 1);
            assert_synchronized(&tree, cursor);
        }
    }

    #[test]
    fn move_to_from_end_sentinel() {
        let tree = tree_of(1..=5);
        for key in 1..=5 {
            let mut cursor = Cursor::at(&tree, 5);
            assert!(cursor.move_to(&tree, &key));
            assert_eq!(cursor.index, isize::try_from(key).unwrap() - 1);
            assert_synchronized(&tree, cursor);
        }
    }

    #[test]
    fn move_to_missing_key_stays_put() {
        let tree = tree_of([10, 20, 30]);
        let mut cursor = Cursor::at(&tree, 1);
        assert!(!cursor.move_to(&tree, &25));
        assert_eq!(cursor, Cursor::at(&tree, 1));
    }

    #[test]
    fn stepping_past_both_ends_clamps() {
        let tree = tree_of(0..3);
        let mut cursor = Cursor::at(&tree, 2);
        assert!(!cursor.next(&tree));
        assert!(!cursor.next(&tree));
        assert_eq!(cursor.index, 3);
        assert!(cursor.previous(&tree));
        assert_eq!(cursor.node, tree.last());
        assert!(!cursor.previous_n(&tree, 5));
        assert_eq!(cursor.index, -1);
        assert!(cursor.move_by(&tree, 1));
        assert_eq!(cursor.node, tree.first());
    }

    #[derive(Clone, Debug)]
    enum Step {
        Next,
        Previous,
        MoveBy(i8),
        MoveTo(i32),
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            4 => Just(Step::Next),
            4 => Just(Step::Previous),
            2 => any::<i8>().prop_map(Step::MoveBy),
            3 => (0i32..400).prop_map(Step::MoveTo),
        ]
    }

    proptest! {
        #[test]
        fn index_tracks_rank_under_any_walk(
            keys in prop::collection::btree_set(0i32..400, 0..120),
            start in -2isize..130,
            steps in prop::collection::vec(step_strategy(), 0..200),
        ) {
            let tree = tree_of(keys.iter().copied());
            let sorted: Vec<i32> = keys.iter().copied().collect();
            let mut cursor = Cursor::at(&tree, start);
            assert_synchronized(&tree, cursor);

            for step in steps {
                let before = cursor;
                let valid = match step {
                    Step::Next => cursor.next(&tree),
                    Step::Previous => cursor.previous(&tree),
                    Step::MoveBy(n) => cursor.move_by(&tree, isize::from(n)),
                    Step::MoveTo(key) => {
                        let found = cursor.move_to(&tree, &key);
                        prop_assert_eq!(found, sorted.binary_search(&key).is_ok());
                        if !found {
                            prop_assert_eq!(cursor, before);
                        }
                        cursor.is_valid(tree.len_isize())
                    }
                };
                prop_assert_eq!(valid, cursor.is_valid(tree.len_isize()));
                assert_synchronized(&tree, cursor);
            }
        }
    }
}
