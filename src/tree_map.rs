use core::fmt;
use core::ops::{Index, IndexMut};

use log::debug;

use crate::comparator::{Comparator, Natural};
use crate::rbtree::{OrderedIterator, OrderedIteratorMut, RBTree};
use crate::Rank;

pub use crate::rbtree::{IntoIter, Iter, Keys, Values};

/// A sorted map backed by a [`RBTree`].
///
/// `TreeMap` speaks the usual map vocabulary (`insert`, `first_key_value`,
/// indexing by key) on top of the tree, and adds the tree's rank queries and
/// ordered cursors.
///
/// # Examples
///
/// ```
/// use rb_ost::TreeMap;
///
/// let mut planets = TreeMap::new();
/// planets.insert("Mercury", 0.4);
/// planets.insert("Venus", 0.7);
/// planets.insert("Earth", 1.0);
///
/// assert_eq!(planets[&"Earth"], 1.0);
/// assert_eq!(planets.first_key_value(), Some((&"Earth", &1.0)));
/// assert_eq!(planets.rank_of(&"Venus"), Some(2));
/// assert_eq!(planets.to_string(), "TreeMap\nmap[Earth:1 Mercury:0.4 Venus:0.7]");
/// ```
#[derive(Clone)]
pub struct TreeMap<K, V, C = Natural> {
    tree: RBTree<K, V, C>,
}

impl<K, V> TreeMap<K, V> {
    /// Makes a new, empty map in the keys' natural order.
    #[must_use]
    pub const fn new() -> Self {
        Self { tree: RBTree::new() }
    }

    /// Makes a new, empty map with room for at least `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: RBTree::with_capacity(capacity),
        }
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Makes a new, empty map ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RBTree::with_comparator(comparator),
        }
    }

    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// The entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.left()
    }

    /// The entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.right()
    }

    pub fn iter(&self) -> Iter<'_, K, V, C> {
        self.tree.iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V, C> {
        self.tree.keys()
    }

    pub fn values(&self) -> Values<'_, K, V, C> {
        self.tree.values()
    }

    /// See [`RBTree::get_by_rank`].
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.tree.get_by_rank(rank)
    }

    /// See [`RBTree::get_by_rank_mut`].
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.tree.get_by_rank_mut(rank)
    }

    /// See [`RBTree::ordered_at`].
    pub fn ordered_at(&self, position: isize) -> OrderedIterator<'_, K, V, C> {
        self.tree.ordered_at(position)
    }

    pub fn ordered_begin(&self) -> OrderedIterator<'_, K, V, C> {
        self.tree.ordered_begin()
    }

    pub fn ordered_end(&self) -> OrderedIterator<'_, K, V, C> {
        self.tree.ordered_end()
    }

    pub fn ordered_first(&self) -> OrderedIterator<'_, K, V, C> {
        self.tree.ordered_first()
    }

    pub fn ordered_last(&self) -> OrderedIterator<'_, K, V, C> {
        self.tree.ordered_last()
    }

    pub fn ordered_begin_mut(&mut self) -> OrderedIteratorMut<'_, K, V, C> {
        self.tree.ordered_begin_mut()
    }

    pub fn ordered_end_mut(&mut self) -> OrderedIteratorMut<'_, K, V, C> {
        self.tree.ordered_end_mut()
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Inserts an entry, returning the value it replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.tree.put(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.get_key_value(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.tree.remove_entry(key)
    }

    /// See [`RBTree::floor`].
    #[must_use]
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.floor(key)
    }

    /// See [`RBTree::ceiling`].
    #[must_use]
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.ceiling(key)
    }

    /// See [`RBTree::rank_of`].
    #[must_use]
    pub fn rank_of(&self, key: &K) -> Option<usize> {
        self.tree.rank_of(key)
    }

    /// See [`RBTree::ordered_at_key`].
    pub fn ordered_at_key(&self, key: &K) -> Option<OrderedIterator<'_, K, V, C>> {
        self.tree.ordered_at_key(key)
    }

    /// See [`RBTree::ordered_at_key_mut`].
    pub fn ordered_at_key_mut(&mut self, key: &K) -> Option<OrderedIteratorMut<'_, K, V, C>> {
        self.tree.ordered_at_key_mut(key)
    }

    /// Copies every entry of `other` into this map. Keys present in both keep
    /// this map's value unless `overwrite` is set.
    ///
    /// `other` may use a different comparator; entries are re-sorted by this
    /// map's.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, "a"), (2, "b")]);
    /// let other = TreeMap::from([(2, "x"), (3, "y")]);
    ///
    /// map.merge_with(&other, false);
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), ["a", "b", "y"]);
    ///
    /// map.merge_with(&other, true);
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), ["a", "x", "y"]);
    /// ```
    pub fn merge_with<C2>(&mut self, other: &TreeMap<K, V, C2>, overwrite: bool)
    where
        K: Clone,
        V: Clone,
    {
        let before = self.len();
        let mut replaced = 0usize;
        for (key, value) in other {
            if !overwrite && self.contains_key(key) {
                continue;
            }
            if self.insert(key.clone(), value.clone()).is_some() {
                replaced += 1;
            }
        }
        debug!(
            "merged {} entries into tree map: {} added, {} overwritten",
            other.len(),
            self.len() - before,
            replaced
        );
    }

    /// Builds a map from the entries strictly after `begin`, up to and
    /// including `end`'s entry, ordered by `comparator`.
    ///
    /// Passing a begin sentinel and an end sentinel copies the whole source.
    ///
    /// # Panics
    ///
    /// Panics if `begin` and `end` walk different trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_ost::{Reversed, TreeMap};
    ///
    /// let source = TreeMap::from([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);
    ///
    /// let all = TreeMap::from_ordered_range(Reversed, source.ordered_begin(), &source.ordered_end());
    /// assert_eq!(all.keys().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
    ///
    /// let middle = TreeMap::from_ordered_range(Reversed, source.ordered_first(), &source.ordered_at(2));
    /// assert_eq!(middle.keys().copied().collect::<Vec<_>>(), [3, 2]);
    /// ```
    pub fn from_ordered_range<'a, C2>(
        comparator: C,
        mut begin: OrderedIterator<'a, K, V, C2>,
        end: &OrderedIterator<'a, K, V, C2>,
    ) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut map = Self::with_comparator(comparator);
        while !begin.is_equal(end) && begin.next() {
            if let Some((key, value)) = begin.key_value() {
                map.insert(key.clone(), value.clone());
            }
        }
        map
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeMap\nmap[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("]")
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.tree.extend(iter);
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self {
            tree: RBTree::from(entries),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

/// Indexes into the map by key.
///
/// # Panics
///
/// Panics if the key is not present.
impl<K, V, C: Comparator<K>> Index<&K> for TreeMap<K, V, C> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K, V, C> Index<Rank> for TreeMap<K, V, C> {
    type Output = V;

    fn index(&self, rank: Rank) -> &V {
        &self.tree[rank]
    }
}

impl<K, V, C> IndexMut<Rank> for TreeMap<K, V, C> {
    fn index_mut(&mut self, rank: Rank) -> &mut V {
        &mut self.tree[rank]
    }
}
