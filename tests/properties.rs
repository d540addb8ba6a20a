use std::collections::BTreeMap;

use avl_map::AvlTreeMap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16, u32),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<i16>(), any::<u32>()).prop_map(|(key, value)| Op::Insert(key, value)),
        2 => any::<i16>().prop_map(Op::Remove),
    ]
}

fn max_avl_height(len: usize) -> f64 {
    1.4405 * (len as f64 + 2.0).log2() - 0.3277
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 0..400)) {
        let mut map = AvlTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    map.insert(key, value);
                }
                Op::Remove(key) => {
                    map.remove(&key);
                }
            }
            prop_assert!(map.is_balanced());
            prop_assert!(map.is_valid_bst());
            prop_assert_eq!(map.validate(), Ok(()));
            prop_assert!(map.height() as f64 <= max_avl_height(map.len()));
        }
    }

    #[test]
    fn matches_btree_map(ops in prop::collection::vec(op(), 0..400)) {
        let mut map = AvlTreeMap::new();
        let mut reference = BTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key, value), reference.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), reference.remove(&key));
                }
            }
        }
        prop_assert_eq!(map.len(), reference.len());
        prop_assert!(map.keys().into_iter().eq(reference.keys()));
        prop_assert!(map.values().into_iter().eq(reference.values()));
        prop_assert_eq!(map.first_key(), reference.keys().next());
        prop_assert_eq!(map.last_key(), reference.keys().next_back());
    }

    #[test]
    fn insert_then_get_round_trips(
        entries in prop::collection::vec((any::<i32>(), any::<i64>()), 1..200),
        key in any::<i32>(),
        value in any::<i64>(),
    ) {
        let mut map: AvlTreeMap<i32, i64> = entries.into_iter().collect();
        map.insert(key, value);
        prop_assert_eq!(map.get(&key), Some(&value));
        prop_assert!(map.contains_key(&key));
    }

    #[test]
    fn reinsert_updates_in_place(keys in prop::collection::btree_set(any::<i32>(), 1..200)) {
        let mut map: AvlTreeMap<i32, bool> = keys.iter().map(|&key| (key, false)).collect();
        let len = map.len();
        let height = map.height();
        let mut shape = Vec::new();
        map.traverse_level_order(|&key, _| shape.push(key));

        for &key in &keys {
            prop_assert_eq!(map.insert(key, true), Some(false));
        }

        let mut updated_shape = Vec::new();
        map.traverse_level_order(|&key, _| updated_shape.push(key));
        prop_assert_eq!(shape, updated_shape);
        prop_assert_eq!(map.len(), len);
        prop_assert_eq!(map.height(), height);
        prop_assert!(map.values().into_iter().all(|&value| value));
    }

    #[test]
    fn remove_shrinks_by_one_iff_present(
        keys in prop::collection::vec(any::<i16>(), 0..200),
        key in any::<i16>(),
    ) {
        let mut map: AvlTreeMap<i16, ()> = keys.into_iter().map(|key| (key, ())).collect();
        let was_present = map.contains_key(&key);
        let len = map.len();

        let removed = map.remove(&key);
        prop_assert_eq!(removed.is_some(), was_present);
        prop_assert!(!map.contains_key(&key));
        prop_assert_eq!(map.len(), if was_present { len - 1 } else { len });
        prop_assert_eq!(map.validate(), Ok(()));
    }
}
