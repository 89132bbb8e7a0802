/// A zero-based rank into the sorted order of a tree or map.
///
/// Indexing with a `Rank` selects the entry in that position rather than the
/// entry with that key.
///
/// # Examples
///
/// ```
/// use rb_ost::{Rank, TreeMap};
///
/// let mut map = TreeMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[&"b"], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
