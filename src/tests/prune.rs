//! Deleting the last leaf of a branch removes the branch and every ancestor
//! it leaves empty.

use crate::{BranchStore, Nested, Node, PlaneMap, Shared};

use super::{Ordered, sample};

/// Returns `true` if some branch reachable from `branch` has no children.
fn has_empty_branch<S: BranchStore<&'static str, &'static str>>(branch: &Shared<S>) -> bool {
    let store = branch.borrow();
    store.iter().any(|(_, node)| match node {
        Node::Leaf(_) => false,
        Node::Branch(child) => child.borrow().is_empty() || has_empty_branch(child),
    })
}

#[test]
fn delete_prunes_whole_chain() {
    let mut map = sample();
    map.delete(["key4", "key5", "key6"]).unwrap();

    let expected: Ordered = PlaneMap::from_nested([(
        "key1",
        Nested::map([("key2", Nested::leaf("val2")), ("key3", Nested::leaf("val3"))]),
    )]);
    assert_eq!(map, expected);
    assert!(!map.contains("key4"));
    assert!(!has_empty_branch(&map.branch()));
}

#[test]
fn delete_stops_at_non_empty_ancestor() {
    let mut map = Ordered::new();
    map.set(["a", "b", "c"], "1").unwrap();
    map.set(["a", "x"], "2").unwrap();
    map.delete(["a", "b", "c"]).unwrap();

    assert!(!map.contains(["a", "b"]), "emptied branch b should be pruned");
    assert!(map.contains("a"), "a still holds x");
    assert_eq!(map.get(["a", "x"]).unwrap().into_leaf(), Some("2"));
}

#[test]
fn delete_sibling_keeps_branch() {
    let mut map = sample();
    map.delete(["key1", "key2"]).unwrap();
    assert!(map.contains("key1"));
    map.delete(["key1", "key3"]).unwrap();
    assert!(!map.contains("key1"));
    assert!(!has_empty_branch(&map.branch()));
}

#[test]
fn root_may_become_empty_in_place() {
    let mut map = sample();
    let root = map.branch();
    map.delete("key1").unwrap();
    map.delete("key4").unwrap();
    assert!(map.is_empty());
    assert!(root.borrow().is_empty());
    assert!(std::rc::Rc::ptr_eq(&root, &map.branch()));
}

#[test]
fn failed_delete_changes_nothing() {
    let mut map = sample();
    assert!(map.delete(["key4", "key5", "missing"]).is_err());
    assert_eq!(map, sample());
    assert!(map.contains(["key4", "key5"]));
}

#[test]
fn delete_every_leaf_leaves_no_empty_branch() {
    let mut map = Ordered::new();
    for a in ["p", "q"] {
        for b in ["r", "s"] {
            for c in ["t", "u"] {
                map.set([a, b, c], "v").unwrap();
            }
        }
    }
    assert_eq!(map.len(), 8);

    for b in ["r", "s"] {
        for c in ["t", "u"] {
            map.delete(["p", b, c]).unwrap();
            assert!(!has_empty_branch(&map.branch()));
        }
    }
    assert!(!map.contains("p"));
    assert_eq!(map.len(), 4);
}
