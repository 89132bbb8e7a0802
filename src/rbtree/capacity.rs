use super::RBTree;
use crate::comparator::Natural;
use crate::raw::RawRBTree;

impl<K, V> RBTree<K, V> {
    /// Creates an empty tree with room for at least `capacity` entries before
    /// the node arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::RBTree;
    ///
    /// let tree: RBTree<i32, i32> = RBTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> RBTree<K, V, C> {
    /// Creates an empty tree ordered by `comparator`, with room for at least
    /// `capacity` entries.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            raw: RawRBTree::with_capacity(capacity, comparator),
        }
    }

    /// Returns how many entries the tree can hold before the node arena
    /// reallocates. Slots freed by removals are reused first.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
