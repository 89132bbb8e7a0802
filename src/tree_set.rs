use core::fmt;
use core::iter::FusedIterator;

use log::debug;

use crate::comparator::{Comparator, Natural};
use crate::rbtree::{self, OrderedIterator};
use crate::tree_map::TreeMap;

/// A sorted set backed by a [`TreeMap`] with `()` values.
///
/// Set algebra ([`intersection`](Self::intersection), [`union`](Self::union),
/// [`difference`](Self::difference)) builds new sets ordered by the left-hand
/// set's comparator.
///
/// # Examples
///
/// ```
/// use rb_ost::TreeSet;
///
/// let mut primes = TreeSet::new();
/// primes.insert_all([7, 2, 5, 3]);
///
/// assert_eq!(primes.first(), Some(&2));
/// assert_eq!(primes.floor(&6), Some(&5));
/// assert_eq!(primes.get_by_rank(3), Some(&7));
/// assert_eq!(primes.to_string(), "TreeSet\n2, 3, 5, 7");
///
/// let odd = TreeSet::from([1, 3, 5, 7, 9]);
/// assert_eq!(primes.intersection(&odd).iter().copied().collect::<Vec<_>>(), [3, 5, 7]);
/// assert_eq!(primes.difference(&odd).iter().copied().collect::<Vec<_>>(), [2]);
/// ```
#[derive(Clone)]
pub struct TreeSet<T, C = Natural> {
    map: TreeMap<T, (), C>,
}

/// An iterator over the items of a `TreeSet`, in order.
///
/// This `struct` is created by the [`iter`] method on [`TreeSet`].
///
/// [`iter`]: TreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, C = Natural> {
    iter: rbtree::Keys<'a, T, (), C>,
}

/// An owning iterator over the items of a `TreeSet`, in order.
pub struct IntoIter<T> {
    iter: rbtree::IntoIter<T, ()>,
}

impl<T> TreeSet<T> {
    /// Makes a new, empty set in the items' natural order.
    #[must_use]
    pub const fn new() -> Self {
        Self { map: TreeMap::new() }
    }
}

impl<T, C> TreeSet<T, C> {
    /// Makes a new, empty set ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            map: TreeMap::with_comparator(comparator),
        }
    }

    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.map.comparator()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Gets an iterator that visits the items in ascending order.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter { iter: self.map.keys() }
    }

    /// The smallest item.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(item, ())| item)
    }

    /// The largest item.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(item, ())| item)
    }

    /// Returns the item at position `rank` in sorted order.
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.map.get_by_rank(rank).map(|(item, ())| item)
    }

    /// See [`RBTree::ordered_at`](crate::RBTree::ordered_at).
    pub fn ordered_at(&self, position: isize) -> OrderedIterator<'_, T, (), C> {
        self.map.ordered_at(position)
    }

    pub fn ordered_begin(&self) -> OrderedIterator<'_, T, (), C> {
        self.map.ordered_begin()
    }

    pub fn ordered_end(&self) -> OrderedIterator<'_, T, (), C> {
        self.map.ordered_end()
    }

    pub fn ordered_first(&self) -> OrderedIterator<'_, T, (), C> {
        self.map.ordered_first()
    }

    pub fn ordered_last(&self) -> OrderedIterator<'_, T, (), C> {
        self.map.ordered_last()
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Adds an item. Returns whether it was newly inserted; an equal item
    /// already present is replaced by `value`.
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// Adds every item of `values`.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }

    /// Removes an item. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.map.remove(value).is_some()
    }

    /// Removes every item of `values` that is present.
    pub fn remove_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for value in values {
            self.remove(value);
        }
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Returns `true` if every item of `values` is in the set. An empty
    /// `values` is trivially contained.
    ///
    /// ```
    /// use rb_ost::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2, 3]);
    /// assert!(set.contains_all(&[1, 3]));
    /// assert!(!set.contains_all(&[1, 4]));
    /// assert!(set.contains_all(&[]));
    /// ```
    #[must_use]
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// The greatest item less than or equal to `value`.
    #[must_use]
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.map.floor(value).map(|(item, ())| item)
    }

    /// The least item greater than or equal to `value`.
    #[must_use]
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        self.map.ceiling(value).map(|(item, ())| item)
    }

    /// Returns the zero-based rank of `value`, or `None` if it is absent.
    #[must_use]
    pub fn rank_of(&self, value: &T) -> Option<usize> {
        self.map.rank_of(value)
    }

    /// See [`RBTree::ordered_at_key`](crate::RBTree::ordered_at_key).
    pub fn ordered_at_key(&self, value: &T) -> Option<OrderedIterator<'_, T, (), C>> {
        self.map.ordered_at_key(value)
    }

    /// Items present in both sets. Walks the smaller set and probes the
    /// larger one.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        let mut result = Self::with_comparator(self.comparator().clone());
        result.insert_all(small.iter().filter(|item| large.contains(item)).cloned());
        debug!("intersection of sets sized {} and {}: {} items", self.len(), other.len(), result.len());
        result
    }

    /// Items present in either set.
    ///
    /// ```
    /// use rb_ost::TreeSet;
    ///
    /// let a = TreeSet::from([1, 3]);
    /// let b = TreeSet::from([2, 3]);
    /// assert_eq!(a.union(&b).iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let mut result = Self::with_comparator(self.comparator().clone());
        result.insert_all(self.iter().cloned());
        result.insert_all(other.iter().cloned());
        debug!("union of sets sized {} and {}: {} items", self.len(), other.len(), result.len());
        result
    }

    /// Items of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let mut result = Self::with_comparator(self.comparator().clone());
        result.insert_all(self.iter().filter(|item| !other.contains(item)).cloned());
        debug!("difference of sets sized {} and {}: {} items", self.len(), other.len(), result.len());
        result
    }
}

impl<T: fmt::Display, C> fmt::Display for TreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TreeSet\n")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for TreeSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: PartialEq, C> PartialEq for TreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq, C> Eq for TreeSet<T, C> {}

impl<T, C: Comparator<T> + Default> FromIterator<T> for TreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.insert_all(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for TreeSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for TreeSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, C> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<T, C> Default for Iter<'_, T, C> {
    fn default() -> Self {
        Self {
            iter: rbtree::Keys::default(),
        }
    }
}

impl<T, C> fmt::Debug for Iter<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.iter.len()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(item, ())| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(item, ())| item)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.iter.len()).finish()
    }
}
