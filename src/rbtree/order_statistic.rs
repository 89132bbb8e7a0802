use core::ops::{Index, IndexMut};

use super::RBTree;
use crate::Rank;
use crate::comparator::Comparator;

impl<K, V, C> RBTree<K, V, C> {
    /// Returns the entry at position `rank` in key order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
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
    /// tree.put("a", 10);
    /// tree.put("c", 30);
    /// tree.put("b", 20);
    ///
    /// assert_eq!(tree.get_by_rank(1), Some((&"b", &20)));
    /// assert!(tree.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.select(rank).map(|node| self.raw.key_value(node))
    }

    /// Returns the key and a mutable reference to the value at position
    /// `rank` in key order.
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
    /// let mut tree = RBTree::from([(10, "a"), (5, "b")]);
    /// if let Some((key, value)) = tree.get_by_rank_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(tree.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let node = self.raw.select(rank)?;
        Some(self.raw.key_value_mut(node))
    }
}

impl<K, V, C: Comparator<K>> RBTree<K, V, C> {
    /// Returns the zero-based rank of `key` in key order, or `None` if the key
    /// is not present.
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
    /// let tree = RBTree::from([(10, "a"), (20, "b")]);
    /// assert_eq!(tree.rank_of(&20), Some(1));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, key: &K) -> Option<usize> {
        self.raw.rank_of(key)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use rb_ost::{RBTree, Rank};
///
/// let tree = RBTree::from([("a", 1), ("b", 2)]);
/// assert_eq!(tree[Rank(1)], 2);
/// ```
impl<K, V, C> Index<Rank> for RBTree<K, V, C> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}

/// Mutably indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K, V, C> IndexMut<Rank> for RBTree<K, V, C> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
