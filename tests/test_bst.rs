use basic_collections::bst::{BstMap, BstSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

const NUM_OF_OPERATIONS: usize = 20_000;
const KEY_RANGE: u32 = 2_000;

#[test]
fn int_test_bst_map() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut map = BstMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..KEY_RANGE);
        let val = rng.gen::<u32>();

        if expected.contains_key(&key) {
            assert_eq!(map.insert(key, val), Some((key, val)));
        } else {
            assert_eq!(map.insert(key, val), None);
            expected.insert(key, val);
        }
    }

    assert_eq!(map.len(), expected.len());
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..KEY_RANGE);
        assert_eq!(map.remove(&key), expected.remove_entry(&key));
        assert_eq!(map.get(&key), None);
    }

    assert_eq!(map.len(), expected.len());
    assert_eq!(map.inorder(), expected.keys().collect::<Vec<&u32>>());

    map.rebalance();
    assert!(map.is_balanced());
    assert_eq!(
        map.into_iter().collect::<Vec<(u32, u32)>>(),
        expected.into_iter().collect::<Vec<(u32, u32)>>(),
    );
}

#[test]
fn int_test_bst_set() {
    let mut rng = StdRng::seed_from_u64(2);
    let keys = (0..NUM_OF_OPERATIONS)
        .map(|_| rng.gen_range(0..KEY_RANGE))
        .collect::<Vec<u32>>();
    let mut set = BstSet::build(keys.clone());
    let mut expected = keys.into_iter().collect::<BTreeSet<u32>>();

    assert!(set.is_balanced());
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.inorder(), expected.iter().collect::<Vec<&u32>>());

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0..KEY_RANGE);
        if rng.gen::<bool>() {
            assert_eq!(set.insert(key).is_none(), expected.insert(key));
        } else {
            assert_eq!(set.remove(&key).is_some(), expected.remove(&key));
        }
        assert_eq!(set.contains(&key), expected.contains(&key));
    }

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.min(), expected.iter().next());
    assert_eq!(set.max(), expected.iter().next_back());
    for key in &expected {
        assert_eq!(set.find(key), Some(key));
        assert!(set.depth(key).unwrap() as isize <= set.height());
    }
}

#[test]
fn int_test_sample_tree() {
    let mut set = BstSet::build(vec![1, 7, 4, 23, 8, 9, 67, 6345, 324]);
    assert_eq!(set.find(&70), None);
    assert_eq!(
        set.level_order(),
        vec![&9, &4, &67, &1, &7, &23, &324, &8, &6345],
    );
    assert_eq!(set.height_of(&8), Some(0));

    set.insert(100);
    set.insert(101);
    set.insert(102);
    assert!(!set.is_balanced());
    assert_eq!(set.depth(&102), Some(5));

    set.rebalance();
    assert!(set.is_balanced());
    assert_eq!(set.height(), 3);
    assert_eq!(
        set.inorder(),
        vec![&1, &4, &7, &8, &9, &23, &67, &100, &101, &102, &324, &6345],
    );
}

#[test]
fn int_test_sorted_inserts() {
    let mut set = BstSet::new();
    for key in 0..2_000 {
        set.insert(key);
    }
    assert_eq!(set.height(), 1_999);
    assert!(!set.is_balanced());

    set.rebalance();
    assert!(set.is_balanced());
    assert_eq!(set.height(), 10);
    assert_eq!(set.len(), 2_000);
    let expected: Vec<u32> = (0..2_000).collect();
    assert_eq!(set.inorder(), expected.iter().collect::<Vec<&u32>>());
}

