use core::cmp::Ordering;
use core::mem;

use alloc::vec::Vec;
use log::{debug, trace};
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use crate::comparator::Comparator;

/// Node-to-root handle chain. Red-black height stays under 2·log2(n + 1), so
/// the inline buffer covers any tree an arena can hold.
type Ancestry = SmallVec<[Handle; 64]>;

/// The red-black tree backing every collection in the crate.
///
/// Nodes live in an arena and link to each other through handles. Each node
/// also records the size of its subtree, which makes rank queries and the
/// cursor's rank-distance computation logarithmic.
#[derive(Clone)]
pub(crate) struct RawRBTree<K, V, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of reachable nodes.
    len: usize,
    comparator: C,
}

impl<K, V, C> RawRBTree<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Creates a new tree with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// `len` as a signed cursor index.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn len_isize(&self) -> isize {
        // An arena of non-zero-sized nodes cannot hold isize::MAX of them.
        self.len as isize
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.comparator
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn clear(&mut self) {
        debug!("clearing red-black tree of {} nodes", self.len);
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn key_value(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (&node.key, &node.value)
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut V {
        &mut self.nodes.get_mut(handle).value
    }

    #[inline]
    pub(crate) fn key_value_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get_mut(handle);
        (&node.key, &mut node.value)
    }

    /// Null links are black.
    #[inline]
    fn is_red(&self, link: Option<Handle>) -> bool {
        link.is_some_and(|handle| self.nodes.get(handle).is_red())
    }

    #[inline]
    fn size_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.nodes.get(handle).size)
    }

    fn refresh_size(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let size = 1 + self.size_of(node.left) + self.size_of(node.right);
        self.nodes.get_mut(handle).size = size;
    }

    /// Follows `side` links from `handle` to the end.
    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(next) = self.nodes.get(handle).child(side) {
            handle = next;
        }
        handle
    }

    /// The minimum node.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// The maximum node.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// The in-order neighbor of `handle` toward `side`: the subtree on that
    /// side if there is one, otherwise the first ancestor reached from the
    /// opposite side.
    fn neighbor(&self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.nodes.get(handle).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }
        let mut current = handle;
        while let Some(parent) = self.nodes.get(current).parent {
            if self.nodes.get(parent).child(side.opposite()) == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        self.neighbor(handle, Side::Right)
    }

    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.neighbor(handle, Side::Left)
    }

    /// The node of in-order rank `rank`.
    pub(crate) fn select(&self, mut rank: usize) -> Option<Handle> {
        if rank >= self.len {
            return None;
        }
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            let left = self.size_of(node.left);
            match rank.cmp(&left) {
                Ordering::Less => cursor = node.left,
                Ordering::Equal => return Some(handle),
                Ordering::Greater => {
                    rank -= left + 1;
                    cursor = node.right;
                }
            }
        }
        None
    }

    /// Handles of every node in key order.
    pub(crate) fn in_order(&self) -> Vec<Handle> {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.first();
        while let Some(handle) = cursor {
            order.push(handle);
            cursor = self.successor(handle);
        }
        order
    }

    /// Removes every entry, handing them back in key order.
    pub(crate) fn drain(&mut self) -> Vec<(K, V)> {
        let entries = self
            .in_order()
            .into_iter()
            .map(|handle| {
                let node = self.nodes.remove(handle);
                (node.key, node.value)
            })
            .collect();
        self.root = None;
        self.len = 0;
        self.nodes.clear();
        entries
    }

    /// Puts `new` where `old` hangs from its parent (or at the root).
    fn replace(&mut self, old: Handle, new: Option<Handle>) {
        let parent = self.nodes.get(old).parent;
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.nodes.get(parent).side_of(old);
                self.nodes.get_mut(parent).set_child(side, new);
            }
        }
        if let Some(new) = new {
            self.nodes.get_mut(new).parent = parent;
        }
    }

    /// Rotates around `pivot` toward `direction`: the child on the opposite
    /// side takes `pivot`'s place and `pivot` becomes its `direction` child.
    fn rotate(&mut self, pivot: Handle, direction: Side) {
        let rising = direction.opposite();
        let riser = self
            .nodes
            .get(pivot)
            .child(rising)
            .expect("`RawRBTree::rotate()` - pivot has no child to rotate up!");
        trace!("rotating {direction:?} around slot {}", pivot.slot());

        let inner = self.nodes.get(riser).child(direction);
        self.replace(pivot, Some(riser));
        self.nodes.get_mut(pivot).set_child(rising, inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(pivot);
        }
        self.nodes.get_mut(riser).set_child(direction, Some(pivot));
        self.nodes.get_mut(pivot).parent = Some(riser);

        // The riser now spans exactly what the pivot spanned.
        let spanned = self.nodes.get(pivot).size;
        self.nodes.get_mut(riser).size = spanned;
        self.refresh_size(pivot);
    }

    fn rebalance_after_insert(&mut self, mut node: Handle) {
        loop {
            let Some(parent) = self.nodes.get(node).parent else {
                self.nodes.get_mut(node).color = Color::Black;
                return;
            };
            if !self.nodes.get(parent).is_red() {
                return;
            }

            // A red parent is never the root.
            let grandparent = self
                .nodes
                .get(parent)
                .parent
                .expect("`RawRBTree::rebalance_after_insert()` - red root!");
            let parent_side = self.nodes.get(grandparent).side_of(parent);
            let uncle = self.nodes.get(grandparent).child(parent_side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.nodes.get(uncle).is_red()) {
                trace!("insert fixup: red uncle, recoloring upward");
                self.nodes.get_mut(parent).color = Color::Black;
                self.nodes.get_mut(uncle).color = Color::Black;
                self.nodes.get_mut(grandparent).color = Color::Red;
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.nodes.get(parent).side_of(node) != parent_side {
                trace!("insert fixup: inner grandchild, rotating parent");
                self.rotate(parent, parent_side);
                mem::swap(&mut node, &mut parent);
            }
            trace!("insert fixup: outer grandchild, rotating grandparent");
            self.nodes.get_mut(parent).color = Color::Black;
            self.nodes.get_mut(grandparent).color = Color::Red;
            self.rotate(grandparent, parent_side.opposite());
            return;
        }
    }

    /// Restores black-height around a black leaf that is about to be unlinked.
    /// The leaf stays linked throughout and marks the short side.
    fn rebalance_before_remove(&mut self, mut node: Handle) {
        trace!("remove fixup: black leaf at slot {}", node.slot());
        loop {
            let Some(parent) = self.nodes.get(node).parent else {
                return;
            };
            let side = self.nodes.get(parent).side_of(node);
            let far = side.opposite();
            let sibling_of = |tree: &Self| {
                tree.nodes
                    .get(parent)
                    .child(far)
                    .expect("`RawRBTree::rebalance_before_remove()` - black node without sibling!")
            };

            let mut sibling = sibling_of(self);
            if self.nodes.get(sibling).is_red() {
                self.nodes.get_mut(parent).color = Color::Red;
                self.nodes.get_mut(sibling).color = Color::Black;
                self.rotate(parent, side);
                sibling = sibling_of(self);
            }

            let near_nephew = self.nodes.get(sibling).child(side);
            let far_nephew = self.nodes.get(sibling).child(far);
            if !self.is_red(near_nephew) && !self.is_red(far_nephew) {
                self.nodes.get_mut(sibling).color = Color::Red;
                if self.nodes.get(parent).is_red() {
                    self.nodes.get_mut(parent).color = Color::Black;
                    return;
                }
                node = parent;
                continue;
            }

            if let (false, Some(near_nephew)) = (self.is_red(far_nephew), near_nephew) {
                self.nodes.get_mut(sibling).color = Color::Red;
                self.nodes.get_mut(near_nephew).color = Color::Black;
                self.rotate(sibling, far);
                sibling = near_nephew;
            }

            let parent_color = self.nodes.get(parent).color;
            self.nodes.get_mut(sibling).color = parent_color;
            self.nodes.get_mut(parent).color = Color::Black;
            if let Some(far_nephew) = self.nodes.get(sibling).child(far) {
                self.nodes.get_mut(far_nephew).color = Color::Black;
            }
            self.rotate(parent, side);
            return;
        }
    }

    /// The deepest node that has both `a` and `b` in its subtree.
    fn lowest_common_ancestor(&self, a: Handle, b: Handle) -> Handle {
        let ancestry = |mut handle: Handle| {
            let mut chain = Ancestry::new();
            chain.push(handle);
            while let Some(parent) = self.nodes.get(handle).parent {
                chain.push(parent);
                handle = parent;
            }
            chain
        };
        let (from_a, from_b) = (ancestry(a), ancestry(b));
        from_a
            .iter()
            .rev()
            .zip(from_b.iter().rev())
            .take_while(|(x, y)| x == y)
            .last()
            .map(|(&common, _)| common)
            .expect("`RawRBTree::lowest_common_ancestor()` - nodes share no root!")
    }
}

impl<K, V, C: Comparator<K>> RawRBTree<K, V, C> {
    /// Finds the node holding `key`.
    pub(crate) fn search(&self, key: &K) -> Option<Handle> {
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            cursor = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// The greatest node whose key is `<= key`.
    pub(crate) fn floor(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => cursor = node.left,
                Ordering::Greater => {
                    best = Some(handle);
                    cursor = node.right;
                }
            }
        }
        best
    }

    /// The least node whose key is `>= key`.
    pub(crate) fn ceiling(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return Some(handle),
                Ordering::Greater => cursor = node.right,
                Ordering::Less => {
                    best = Some(handle);
                    cursor = node.left;
                }
            }
        }
        best
    }

    /// Zero-based in-order rank of `key`.
    pub(crate) fn rank_of(&self, key: &K) -> Option<usize> {
        let mut rank = 0;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            match self.comparator.compare(key, &node.key) {
                Ordering::Less => cursor = node.left,
                Ordering::Equal => return Some(rank + self.size_of(node.left)),
                Ordering::Greater => {
                    rank += self.size_of(node.left) + 1;
                    cursor = node.right;
                }
            }
        }
        None
    }

    /// Inserts or overwrites `key`. An existing entry keeps its place in the
    /// tree and takes the new key and value; the old value is returned.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get_mut(handle);
            side = match self.comparator.compare(&key, &node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    node.key = key;
                    return Some(mem::replace(&mut node.value, value));
                }
            };
            parent = Some(handle);
            cursor = node.child(side);
        }

        let inserted = self.nodes.insert(Node::leaf(key, value, parent));
        match parent {
            None => self.root = Some(inserted),
            Some(parent) => self.nodes.get_mut(parent).set_child(side, Some(inserted)),
        }
        self.len += 1;
        debug_assert_eq!(self.nodes.len(), self.len, "`RawRBTree::insert()` - arena out of step with len!");

        let mut ancestor = parent;
        while let Some(handle) = ancestor {
            let node = self.nodes.get_mut(handle);
            node.size += 1;
            ancestor = node.parent;
        }

        self.rebalance_after_insert(inserted);
        None
    }

    /// Removes `key`, returning the stored entry.
    pub(crate) fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let target = self.search(key)?;

        // With two children the in-order predecessor is unlinked instead and
        // its entry is moved into `target` afterwards.
        let unlinked = match (self.nodes.get(target).left, self.nodes.get(target).right) {
            (Some(left), Some(_)) => self.extreme(left, Side::Right),
            _ => target,
        };
        let child = {
            let node = self.nodes.get(unlinked);
            node.left.or(node.right)
        };

        if !self.nodes.get(unlinked).is_red() {
            match child {
                // A black node with a single child always has a red one.
                Some(child) => self.nodes.get_mut(child).color = Color::Black,
                None => self.rebalance_before_remove(unlinked),
            }
        }

        self.replace(unlinked, child);
        let mut ancestor = self.nodes.get(unlinked).parent;
        while let Some(handle) = ancestor {
            let node = self.nodes.get_mut(handle);
            node.size -= 1;
            ancestor = node.parent;
        }
        self.len -= 1;

        let mut removed = self.nodes.remove(unlinked);
        debug_assert_eq!(self.nodes.len(), self.len, "`RawRBTree::remove()` - arena out of step with len!");
        if unlinked != target {
            let kept = self.nodes.get_mut(target);
            mem::swap(&mut kept.key, &mut removed.key);
            mem::swap(&mut kept.value, &mut removed.value);
        }
        Some((removed.key, removed.value))
    }

    /// Rank of `target` counted from the leftmost node of `ancestor`'s subtree.
    fn offset_within(&self, ancestor: Handle, target: Handle) -> usize {
        let key = &self.nodes.get(target).key;
        let mut offset = 0;
        let mut cursor = ancestor;
        loop {
            let node = self.nodes.get(cursor);
            let next = match self.comparator.compare(key, &node.key) {
                Ordering::Equal => return offset + self.size_of(node.left),
                Ordering::Less => node.left,
                Ordering::Greater => {
                    offset += self.size_of(node.left) + 1;
                    node.right
                }
            };
            cursor = next.expect("`RawRBTree::offset_within()` - target is not below ancestor!");
        }
    }

    /// Signed in-order distance from `from` to `to`: positive when `to` comes
    /// later. Only the two paths below their common ancestor are walked.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn rank_distance(&self, from: Handle, to: Handle) -> isize {
        if from == to {
            return 0;
        }
        let ancestor = self.lowest_common_ancestor(from, to);
        self.offset_within(ancestor, to) as isize - self.offset_within(ancestor, from) as isize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::comparator::{Natural, Reversed};
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use proptest::prelude::*;

    impl<K: Ord + core::fmt::Debug, V, C: Comparator<K>> RawRBTree<K, V, C> {
        /// Checks every structural invariant from scratch, without reusing any
        /// of the tree's own bookkeeping. Panics listing all violations.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();

            if self.is_red(self.root) {
                errors.push(String::from("root is red"));
            }
            if let Some(root) = self.root
                && self.nodes.get(root).parent.is_some()
            {
                errors.push(String::from("root has a parent"));
            }

            let (count, _) = self.validate_subtree(self.root, None, &mut errors);
            if count != self.len {
                errors.push(format!("len is {} but {} nodes are reachable", self.len, count));
            }
            if self.nodes.len() != self.len {
                errors.push(format!("arena holds {} nodes for len {}", self.nodes.len(), self.len));
            }
            if (self.len == 0) != self.root.is_none() {
                errors.push(String::from("emptiness of len and root disagree"));
            }

            // In-order walk must be strictly ascending under the comparator.
            let order = self.in_order();
            for pair in order.windows(2) {
                let (a, b) = (&self.nodes.get(pair[0]).key, &self.nodes.get(pair[1]).key);
                if self.comparator.compare(a, b) != Ordering::Less {
                    errors.push(format!("keys out of order: {a:?} then {b:?}"));
                }
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        /// Returns (node count, black height) of the subtree.
        fn validate_subtree(
            &self,
            link: Option<Handle>,
            parent: Option<Handle>,
            errors: &mut Vec<String>,
        ) -> (usize, usize) {
            let Some(handle) = link else {
                return (0, 1);
            };
            let node = self.nodes.get(handle);
            if node.parent != parent {
                errors.push(format!("{:?} has a stale parent link", node.key));
            }
            if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
                errors.push(format!("red {:?} has a red child", node.key));
            }

            let (left_count, left_black) = self.validate_subtree(node.left, Some(handle), errors);
            let (right_count, right_black) = self.validate_subtree(node.right, Some(handle), errors);
            if left_black != right_black {
                errors.push(format!("black height differs below {:?}: {left_black} vs {right_black}", node.key));
            }
            let count = 1 + left_count + right_count;
            if node.size != count {
                errors.push(format!("{:?} records size {} but spans {count}", node.key, node.size));
            }
            (count, left_black + usize::from(!node.is_red()))
        }

        fn keys(&self) -> Vec<&K> {
            self.in_order().into_iter().map(|h| &self.nodes.get(h).key).collect()
        }
    }

    fn tree_of(keys: &[i32]) -> RawRBTree<i32, i32, Natural> {
        let mut tree = RawRBTree::new(Natural);
        for &key in keys {
            tree.insert(key, key * 10);
            tree.validate_invariants();
        }
        tree
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let tree = tree_of(&(0..512).collect::<Vec<_>>());
        assert_eq!(tree.len(), 512);
        // Height bound: 2 * log2(513) < 19.
        let depth = |h: Handle| {
            let mut depth = 0;
            let mut cursor = Some(h);
            while let Some(handle) = cursor {
                depth += 1;
                cursor = tree.node(handle).parent;
            }
            depth
        };
        assert!(tree.in_order().into_iter().all(|h| depth(h) <= 19));
    }

    #[test]
    fn duplicate_insert_overwrites_in_place() {
        let mut tree = tree_of(&[5, 3, 8]);
        assert_eq!(tree.insert(3, 99), Some(30));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.node(tree.search(&3).unwrap()).value, 99);
        tree.validate_invariants();
    }

    #[test]
    fn remove_with_two_children_keeps_order() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(tree.remove(&5), Some((5, 50)));
        tree.validate_invariants();
        assert_eq!(tree.keys(), vec![&1, &3, &4, &7, &8, &9]);
        assert_eq!(tree.remove(&5), None);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn remove_everything_in_every_direction() {
        for order in [(0..200).collect::<Vec<_>>(), (0..200).rev().collect()] {
            let mut tree = tree_of(&(0..200).collect::<Vec<_>>());
            for key in order {
                assert_eq!(tree.remove(&key), Some((key, key * 10)));
                tree.validate_invariants();
            }
            assert!(tree.is_empty());
            assert_eq!(tree.root(), None);
        }
    }

    #[test]
    fn floor_and_ceiling() {
        let tree = tree_of(&[10, 20, 30]);
        let key = |h: Option<Handle>| h.map(|h| tree.node(h).key);
        assert_eq!(key(tree.floor(&25)), Some(20));
        assert_eq!(key(tree.floor(&20)), Some(20));
        assert_eq!(key(tree.floor(&5)), None);
        assert_eq!(key(tree.ceiling(&25)), Some(30));
        assert_eq!(key(tree.ceiling(&30)), Some(30));
        assert_eq!(key(tree.ceiling(&35)), None);

        let empty: RawRBTree<i32, (), Natural> = RawRBTree::new(Natural);
        assert_eq!(empty.floor(&1), None);
        assert_eq!(empty.ceiling(&1), None);
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn custom_comparator_drives_layout() {
        let mut tree = RawRBTree::new(Reversed);
        for key in 0..32 {
            tree.insert(key, ());
        }
        tree.validate_invariants();
        assert_eq!(tree.node(tree.first().unwrap()).key, 31);
        assert_eq!(tree.rank_of(&31), Some(0));
        assert_eq!(tree.rank_of(&0), Some(31));
    }

    #[test]
    fn drain_yields_entries_in_order() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let drained = tree.drain();
        assert_eq!(drained.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i16, i32),
        Remove(i16),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (any::<i16>().prop_map(|k| k % 300), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
            2 => any::<i16>().prop_map(|k| Op::Remove(k % 300)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn random_edits_preserve_invariants(ops in prop::collection::vec(op_strategy(), 0..600)) {
            let mut tree = RawRBTree::new(Natural);
            let mut model = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(k, v) => prop_assert_eq!(tree.insert(k, v), model.insert(k, v)),
                    Op::Remove(k) => prop_assert_eq!(tree.remove(&k), model.remove_entry(&k)),
                }
                tree.validate_invariants();
            }
            prop_assert_eq!(tree.keys(), model.keys().collect::<Vec<_>>());
        }

        #[test]
        fn select_and_rank_agree_with_sorted_order(keys in prop::collection::btree_set(any::<i32>(), 0..300)) {
            let mut tree = RawRBTree::new(Natural);
            for &key in &keys {
                tree.insert(key, ());
            }
            for (rank, key) in keys.iter().enumerate() {
                prop_assert_eq!(tree.rank_of(key), Some(rank));
                prop_assert_eq!(tree.select(rank).map(|h| tree.node(h).key), Some(*key));
            }
            prop_assert_eq!(tree.select(keys.len()), None);
        }

        #[test]
        fn rank_distance_matches_rank_difference(
            keys in prop::collection::btree_set(0i32..10_000, 1..300),
            picks in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..50),
        ) {
            let mut tree = RawRBTree::new(Natural);
            for &key in &keys {
                tree.insert(key, ());
            }
            let order = tree.in_order();
            for (a, b) in picks {
                let (i, j) = (a.index(order.len()), b.index(order.len()));
                let expected = j as isize - i as isize;
                prop_assert_eq!(tree.rank_distance(order[i], order[j]), expected);
                prop_assert_eq!(tree.rank_distance(order[j], order[i]), -expected);
            }
        }
    }
}
