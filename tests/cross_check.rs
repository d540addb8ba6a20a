use std::collections::BTreeMap;

use avl_map::AvlTreeMap;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const N: usize = 100_000;
const KEY_RANGE: std::ops::RangeInclusive<i32> = -1_000_000..=1_000_000;
const BATCH: usize = 10_000;

fn random_entries(rng: &mut StdRng, count: usize) -> Vec<(i32, usize)> {
    (0..count).map(|i| (rng.gen_range(KEY_RANGE), i)).collect()
}

#[test]
fn test_cross_check_against_btree_map() {
    let mut rng = StdRng::seed_from_u64(0);
    let entries = random_entries(&mut rng, N);

    let mut map = AvlTreeMap::new();
    let mut reference = BTreeMap::new();
    for (i, &(key, value)) in entries.iter().enumerate() {
        assert_eq!(map.insert(key, value), reference.insert(key, value));
        if (i + 1) % BATCH == 0 {
            assert_eq!(map.validate(), Ok(()));
        }
    }
    assert_eq!(map.len(), reference.len());
    assert_eq!(map.first_key(), reference.keys().next());
    assert_eq!(map.last_key(), reference.keys().next_back());

    for (key, value) in &reference {
        assert_eq!(map.get(key), Some(value));
    }
    assert!(map.keys().into_iter().eq(reference.keys()));
    assert!(map.values().into_iter().eq(reference.values()));

    // Remove the lower half of the keys
    let keys: Vec<i32> = reference.keys().copied().collect();
    let (removed, kept) = keys.split_at(keys.len() / 2);
    for (i, key) in removed.iter().enumerate() {
        assert_eq!(map.remove(key), reference.remove(key));
        if (i + 1) % BATCH == 0 {
            assert_eq!(map.validate(), Ok(()));
        }
    }
    assert_eq!(map.validate(), Ok(()));
    for key in removed {
        assert!(!map.contains_key(key));
        assert!(map.get(key).is_none());
    }
    for key in kept {
        assert_eq!(map.get(key), reference.get(key));
    }
    assert_eq!(map.len(), kept.len());

    // Remove everything else
    for key in kept {
        assert!(map.remove(key).is_some());
    }
    assert!(map.is_empty());
    assert_eq!(map.validate(), Ok(()));
}

#[test]
fn test_mixed_operations_against_btree_map() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut map = AvlTreeMap::new();
    let mut reference = BTreeMap::new();

    for step in 0..N {
        let key = rng.gen_range(-1_000..=1_000);
        if rng.gen_bool(0.6) {
            assert_eq!(map.insert(key, step), reference.insert(key, step));
        } else {
            assert_eq!(map.remove(&key), reference.remove(&key));
        }
        assert_eq!(map.len(), reference.len());
        if step % BATCH == 0 {
            assert_eq!(map.validate(), Ok(()));
        }
    }
    assert_eq!(map.validate(), Ok(()));
    assert!(map.keys().into_iter().eq(reference.keys()));
}

#[test]
fn test_remove_in_random_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut map: AvlTreeMap<i32, i32> = (0..10_000).map(|key| (key, -key)).collect();

    let mut keys: Vec<i32> = map.keys().into_iter().copied().collect();
    keys.shuffle(&mut rng);
    for key in &keys {
        assert_eq!(map.remove(key), Some(-key));
        assert!(map.is_balanced());
    }
    assert!(map.is_empty());
    assert_eq!(map.first_key(), None);
    assert_eq!(map.last_key(), None);
}
