use crate::{HashBranch, Nested, Path, PlaneMap};

use super::{Ordered, sample};

#[test]
fn default_is_empty() {
    let map: PlaneMap<i32, i32> = PlaneMap::default();
    assert!(map.is_empty());
}

#[test]
fn debug_renders_nested_map() {
    let map = sample();
    assert_eq!(
        format!("{map:?}"),
        r#"{"key1": {"key2": "val2", "key3": "val3"}, "key4": {"key5": {"key6": "val6"}}}"#
    );
}

#[test]
fn debug_empty() {
    let map = Ordered::new();
    assert_eq!(format!("{map:?}"), "{}");
}

#[test]
fn from_iterator_of_leaves() {
    let map: Ordered = sample().iter().collect();
    assert_eq!(map, sample());
    assert_eq!(format!("{map:?}"), format!("{:?}", sample()));
}

#[test]
fn extend_trait() {
    let mut map = Ordered::new();
    map.set("a", "1").unwrap();
    map.extend(vec![
        (Path::try_from(vec!["b", "c"]).unwrap(), "2"),
        (Path::key("d"), "3"),
    ]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(["b", "c"]).unwrap().into_leaf(), Some("2"));
}

#[test]
fn explicit_hash_store_is_default() {
    let explicit: PlaneMap<&str, i32, HashBranch<&str, i32>> =
        PlaneMap::from_nested([("a", Nested::leaf(1))]);
    let implicit: PlaneMap<&str, i32> = PlaneMap::from_nested([("a", Nested::leaf(1))]);
    assert_eq!(explicit, implicit);
}

#[test]
fn error_display() {
    let err = sample().get(["key1", "nope"]).unwrap_err();
    assert_eq!(err.to_string(), r#"key not found: "nope""#);
    assert_eq!(
        crate::Error::<&str>::InvalidPath.to_string(),
        "invalid path: a path must contain at least one key"
    );
}
