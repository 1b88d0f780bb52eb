//! Property tests over randomly built trees.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{BranchStore, Node, OrderedBranch, Path, PlaneMap, Shared};

type Map = PlaneMap<u8, u32, OrderedBranch<u8, u32>>;

/// Short paths over a tiny key alphabet so that paths collide often.
fn arb_path() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..4, 1..5)
}

fn arb_writes() -> impl Strategy<Value = Vec<(Vec<u8>, u32)>> {
    prop::collection::vec((arb_path(), any::<u32>()), 0..40)
}

fn build(writes: &[(Vec<u8>, u32)]) -> Map {
    let mut map = Map::new();
    for (path, value) in writes {
        map.set(path.clone(), *value).unwrap();
    }
    map
}

fn has_empty_branch<S: BranchStore<u8, u32>>(branch: &Shared<S>) -> bool {
    let store = branch.borrow();
    store.iter().any(|(_, node)| match node {
        Node::Leaf(_) => false,
        Node::Branch(child) => child.borrow().is_empty() || has_empty_branch(child),
    })
}

proptest! {
    #[test]
    fn set_then_get(writes in arb_writes(), path in arb_path(), value in any::<u32>()) {
        let mut map = build(&writes);
        map.set(path.clone(), value).unwrap();
        prop_assert_eq!(map.get(path).unwrap().into_leaf(), Some(value));
    }

    #[test]
    fn len_is_leaf_count(writes in arb_writes()) {
        let map = build(&writes);
        prop_assert_eq!(map.len(), map.iter().count());
    }

    #[test]
    fn delete_never_leaves_empty_branches(writes in arb_writes()) {
        let mut map = build(&writes);
        let paths: Vec<Path<u8>> = map.keys().collect();
        for path in paths {
            map.delete(&path).unwrap();
            prop_assert!(!has_empty_branch(&map.branch()));
            prop_assert!(!map.contains(&path));
        }
        prop_assert!(map.branch().borrow().is_empty());
    }

    #[test]
    fn popitem_drains_every_leaf_once(writes in arb_writes()) {
        let mut map = build(&writes);
        let expected: BTreeSet<(Path<u8>, u32)> = map.iter().collect();
        let mut seen = BTreeSet::new();
        while let Ok(item) = map.popitem() {
            prop_assert!(seen.insert(item), "leaf popped twice");
        }
        prop_assert_eq!(seen, expected);
        prop_assert!(map.is_empty());
    }

    #[test]
    fn soft_update_preserves_target_leaves(a in arb_writes(), b in arb_writes()) {
        let mut target = build(&a);
        let source = build(&b);
        let before: Vec<(Path<u8>, u32)> = target.iter().collect();
        target.update(&source);

        for (path, value) in source.iter() {
            prop_assert_eq!(target.get(&path).unwrap().into_leaf(), Some(value));
        }
        // A target leaf survives unless some source leaf path runs through it
        // or sits at it.
        for (path, value) in before {
            let touched = source
                .keys()
                .any(|p| p.starts_with(&path) || path.starts_with(&p));
            if !touched {
                prop_assert_eq!(target.get(&path).unwrap().into_leaf(), Some(value));
            }
        }
    }

    #[test]
    fn equality_ignores_insertion_order(writes in arb_writes()) {
        let forward = build(&writes);
        let leaves: Vec<(Path<u8>, u32)> = forward.iter().collect();
        let backward: Map = leaves.into_iter().rev().collect();
        prop_assert_eq!(forward, backward);
    }
}
