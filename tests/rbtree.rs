use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rb_ost::rbtree;
use rb_ost::{RBTree, Rank, Reversed};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Keys drawn from a range narrow enough to collide often.
fn key_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

fn keys_of<C>(tree: &RBTree<i64, i64, C>) -> Vec<i64> {
    tree.keys().copied().collect()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Put(i64, i64),
    Remove(i64),
    Get(i64),
    Floor(i64),
    Ceiling(i64),
    Left,
    Right,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| TreeOp::Put(k, v)),
        4 => key_strategy().prop_map(TreeOp::Remove),
        2 => key_strategy().prop_map(TreeOp::Get),
        1 => key_strategy().prop_map(TreeOp::Floor),
        1 => key_strategy().prop_map(TreeOp::Ceiling),
        1 => Just(TreeOp::Left),
        1 => Just(TreeOp::Right),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both RBTree and BTreeMap
    /// and asserts identical results at every step.
    #[test]
    fn tree_ops_match_btreemap(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree = RBTree::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                TreeOp::Put(k, v) => prop_assert_eq!(tree.put(k, v), model.insert(k, v)),
                TreeOp::Remove(k) => prop_assert_eq!(tree.remove(&k), model.remove(&k)),
                TreeOp::Get(k) => prop_assert_eq!(tree.get(&k), model.get(&k)),
                TreeOp::Floor(k) => prop_assert_eq!(tree.floor(&k), model.range(..=k).next_back()),
                TreeOp::Ceiling(k) => prop_assert_eq!(tree.ceiling(&k), model.range(k..).next()),
                TreeOp::Left => prop_assert_eq!(tree.left(), model.first_key_value()),
                TreeOp::Right => prop_assert_eq!(tree.right(), model.last_key_value()),
            }
            prop_assert_eq!(tree.len(), model.len());
            prop_assert_eq!(tree.is_empty(), model.is_empty());
        }

        prop_assert!(tree.iter().eq(model.iter()));
    }

    /// Final key order does not depend on insertion order.
    #[test]
    fn keys_sorted_for_any_insertion_order(mut keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let tree: RBTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys_of(&tree), keys);
    }

    /// Removing then re-putting an entry restores the value sequence.
    #[test]
    fn remove_then_put_restores_values(
        entries in proptest::collection::btree_map(key_strategy(), value_strategy(), 1..TEST_SIZE),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: RBTree<i64, i64> = entries.iter().map(|(&k, &v)| (k, v)).collect();
        let before: Vec<i64> = tree.values().copied().collect();

        let (&key, &value) = entries.iter().nth(pick.index(entries.len())).unwrap();
        prop_assert_eq!(tree.remove(&key), Some(value));
        prop_assert_eq!(tree.put(key, value), None);

        prop_assert_eq!(tree.values().copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn iter_is_double_ended_and_exact(entries in proptest::collection::btree_map(key_strategy(), value_strategy(), 0..TEST_SIZE)) {
        let tree: RBTree<i64, i64> = entries.iter().map(|(&k, &v)| (k, v)).collect();

        let mut iter = tree.iter();
        let mut model = entries.iter();
        loop {
            prop_assert_eq!(iter.len(), model.len());
            let (front, expected) = (iter.next(), model.next());
            prop_assert_eq!(front, expected);
            let (back, expected) = (iter.next_back(), model.next_back());
            prop_assert_eq!(back, expected);
            if front.is_none() {
                break;
            }
        }
        prop_assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_drains_in_order(entries in proptest::collection::btree_map(key_strategy(), value_strategy(), 0..TEST_SIZE)) {
        let tree: RBTree<i64, i64> = entries.iter().map(|(&k, &v)| (k, v)).collect();
        let drained: Vec<(i64, i64)> = tree.into_iter().collect();
        prop_assert_eq!(drained, entries.into_iter().collect::<Vec<_>>());
    }
}

// ─── Order-statistic operations (compared against Vec) ───────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn get_by_rank_and_rank_of_match_vec(entries in proptest::collection::btree_map(key_strategy(), value_strategy(), 0..TEST_SIZE)) {
        let tree: RBTree<i64, i64> = entries.iter().map(|(&k, &v)| (k, v)).collect();
        let sorted: Vec<(i64, i64)> = entries.into_iter().collect();

        for (rank, (k, v)) in sorted.iter().enumerate() {
            prop_assert_eq!(tree.get_by_rank(rank), Some((k, v)));
            prop_assert_eq!(tree.rank_of(k), Some(rank));
            prop_assert_eq!(&tree[Rank(rank)], v);
        }
        prop_assert_eq!(tree.get_by_rank(sorted.len()), None);
    }

    #[test]
    fn order_stats_after_mutations(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree = RBTree::new();
        let mut model = BTreeMap::new();
        for op in ops {
            match op {
                TreeOp::Put(k, v) => {
                    tree.put(k, v);
                    model.insert(k, v);
                }
                TreeOp::Remove(k) => {
                    tree.remove(&k);
                    model.remove(&k);
                }
                _ => {}
            }
        }

        for (rank, (k, v)) in model.iter().enumerate() {
            prop_assert_eq!(tree.get_by_rank(rank), Some((k, v)));
            prop_assert_eq!(tree.rank_of(k), Some(rank));
        }
    }
}

// ─── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn five_key_scenario() {
    let mut tree = RBTree::new();
    tree.put(5, "e");
    tree.put(3, "c");
    tree.put(8, "h");
    tree.put(1, "a");
    tree.put(4, "d");

    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    assert_eq!(tree.floor(&6), Some((&5, &"e")));
    assert_eq!(tree.ceiling(&6), Some((&8, &"h")));
    assert_eq!(tree.ordered_first().key_value(), Some((&1, &"a")));

    assert_eq!(tree.remove(&3), Some("c"));
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [1, 4, 5, 8]);
}

#[test]
fn empty_tree_queries_return_none() {
    let mut tree: RBTree<i32, i32> = RBTree::new();
    assert_eq!(tree.left(), None);
    assert_eq!(tree.right(), None);
    assert_eq!(tree.floor(&0), None);
    assert_eq!(tree.ceiling(&0), None);
    assert_eq!(tree.remove(&0), None);
    assert_eq!(tree.get_by_rank(0), None);
    assert!(tree.is_empty());
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn duplicate_put_overwrites_without_growing() {
    let mut tree = RBTree::new();
    for round in 0..3 {
        for key in 0..50 {
            tree.put(key, round);
        }
    }
    assert_eq!(tree.len(), 50);
    assert!(tree.values().all(|&v| v == 2));
}

#[test]
fn reversed_comparator_orders_descending() {
    let mut tree = RBTree::with_comparator(Reversed);
    for key in [3, 9, 1, 7, 5] {
        tree.put(key, ());
    }
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [9, 7, 5, 3, 1]);
    assert_eq!(tree.left(), Some((&9, &())));
    // Floor is "at or before" in comparator order.
    assert_eq!(tree.floor(&6), Some((&7, &())));
    assert_eq!(tree.ceiling(&6), Some((&5, &())));
}

#[test]
fn closure_comparator_compares_by_projection() {
    let mut tree = RBTree::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    tree.put((2, 'b'), "two");
    tree.put((1, 'a'), "one");
    tree.put((2, 'z'), "TWO");

    assert_eq!(tree.len(), 2);
    // The overwriting put also replaces the stored key.
    assert_eq!(tree.get_key_value(&(2, '?')), Some((&(2, 'z'), &"TWO")));
}

#[test]
fn display_draws_tree_sideways() {
    let tree = RBTree::from([(1, ()), (2, ()), (3, ()), (4, ())]);
    let expected = "\
RedBlackTree
│       ┌── 4
│   ┌── 3
└── 2
    └── 1
";
    assert_eq!(tree.to_string(), expected);
    assert_eq!(RBTree::<i32, ()>::new().to_string(), "RedBlackTree\n");
}

#[test]
fn debug_prints_as_map() {
    let tree = RBTree::from([(2, 'b'), (1, 'a')]);
    assert_eq!(format!("{tree:?}"), "{1: 'a', 2: 'b'}");
}

#[test]
fn clone_and_equality() {
    let tree = RBTree::from([(1, 10), (2, 20), (3, 30)]);
    let mut copy = tree.clone();
    assert_eq!(copy, tree);
    copy.put(2, 21);
    assert_ne!(copy, tree);
}

#[test]
fn clear_keeps_tree_usable() {
    let mut tree: RBTree<i32, i32> = (0..100).map(|k| (k, k)).collect();
    tree.clear();
    assert!(tree.is_empty());
    tree.put(7, 7);
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [7]);
}

#[test]
fn capacity_is_reused_after_removal() {
    let mut tree = RBTree::with_capacity(16);
    assert!(tree.capacity() >= 16);
    for key in 0..16 {
        tree.put(key, key);
    }
    let capacity = tree.capacity();
    for key in 0..8 {
        tree.remove(&key);
    }
    for key in 100..108 {
        tree.put(key, key);
    }
    assert_eq!(tree.capacity(), capacity);
    assert_eq!(tree.len(), 16);
}

#[test]
fn index_mut_by_rank() {
    let mut tree = RBTree::from([("a", 1), ("b", 2)]);
    tree[Rank(1)] = 5;
    assert_eq!(tree.get(&"b"), Some(&5));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_by_rank_out_of_bounds_panics() {
    let tree = RBTree::from([("a", 1)]);
    let _ = tree[Rank(1)];
}

#[test]
fn default_iterators_are_empty() {
    let iter: rbtree::Iter<'_, u8, u8> = Default::default();
    assert_eq!(iter.len(), 0);
    let keys: rbtree::Keys<'_, u8, u8> = Default::default();
    assert_eq!(keys.count(), 0);
    let values: rbtree::Values<'_, u8, u8> = Default::default();
    assert_eq!(values.count(), 0);
    let into_iter: rbtree::IntoIter<u8, u8> = Default::default();
    assert_eq!(into_iter.len(), 0);
}
