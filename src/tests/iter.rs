use crate::{BranchStore, OrderedBranch, Path, PlaneMap};

use super::{sample, sample_hashed};

fn paths(keys: &[&[&'static str]]) -> Vec<Path<&'static str>> {
    keys.iter().map(|k| Path::try_from(k.to_vec()).unwrap()).collect()
}

#[test]
fn ordered_keys_follow_insertion_order() {
    let map = sample();
    let keys: Vec<_> = map.keys().collect();
    assert_eq!(
        keys,
        paths(&[&["key1", "key2"], &["key1", "key3"], &["key4", "key5", "key6"]])
    );
}

#[test]
fn values_and_items_agree_with_keys() {
    let map = sample();
    let values: Vec<_> = map.values().collect();
    assert_eq!(values, ["val2", "val3", "val6"]);

    let items: Vec<_> = map.items().collect();
    let zipped: Vec<_> = map.keys().zip(map.values()).collect();
    assert_eq!(items, zipped);
}

#[test]
fn len_matches_iteration() {
    let map = sample_hashed();
    assert_eq!(map.len(), map.iter().count());
    assert_eq!(map.iter().len(), 3);
}

#[test]
fn hashed_iteration_yields_same_set() {
    let map = sample_hashed();
    let mut keys: Vec<_> = map.keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        paths(&[&["key1", "key2"], &["key1", "key3"], &["key4", "key5", "key6"]])
    );
}

#[test]
fn reiteration_starts_fresh() {
    let mut map = sample();
    let before: Vec<_> = map.iter().collect();
    map.set("extra", "x").unwrap();
    let after: Vec<_> = map.iter().collect();
    assert_eq!(before.len(), 3);
    assert_eq!(after.len(), 4);
}

#[test]
fn iterator_is_a_snapshot() {
    let mut map = sample();
    let snapshot = map.iter();
    map.clear();
    assert_eq!(snapshot.count(), 3);
    assert!(map.is_empty());
}

#[test]
fn into_iterator_for_reference() {
    let map = sample();
    let mut n = 0;
    for (path, _) in &map {
        assert!(path.len() >= 2);
        n += 1;
    }
    assert_eq!(n, 3);
}

#[test]
fn map_valued_leaf_is_opaque() {
    use std::collections::HashMap;

    let mut inner = HashMap::new();
    inner.insert("a", 1);
    inner.insert("b", 2);

    let mut map: PlaneMap<&str, HashMap<&str, i32>, OrderedBranch<_, _>> = PlaneMap::new();
    map.set(["outer", "value"], inner.clone()).unwrap();

    assert_eq!(map.len(), 1, "a map stored as a value is one leaf");
    assert_eq!(map.get(["outer", "value"]).unwrap().into_leaf(), Some(inner));
    assert!(map.get(["outer", "value", "a"]).is_err());
}

#[test]
fn paths_are_tuple_like_in_debug() {
    let (path, _) = sample().popitem().unwrap();
    assert_eq!(format!("{path:?}"), r#"("key1", "key2")"#);
}

#[test]
fn branch_store_iter_lists_direct_children() {
    let map = sample();
    let root = map.branch();
    let store = root.borrow();
    let children: Vec<(&str, bool)> = store
        .iter()
        .map(|(key, node)| (*key, node.is_branch()))
        .collect();
    assert_eq!(children, [("key1", true), ("key4", true)]);
}
