//! Merge and bulk-load operations.
//!
//! Two update flavours with deliberately different depth:
//! - [`merge_leaves`] overlays leaf by leaf (soft merge). Leaves not named
//!   by the source survive.
//! - [`replace_entries`] swaps whole top-level subtrees (shallow update).

use std::cell::RefCell;
use std::rc::Rc;

use crate::nested::Nested;
use crate::node::{Node, Shared};
use crate::ops::set::set_recursive;
use crate::path::Path;
use crate::store::BranchStore;

/// Assigns every `(path, value)` into `target`, creating branches as needed.
///
/// Returns the number of leaves written.
pub fn merge_leaves<K, V, S, I>(target: &Shared<S>, leaves: I) -> usize
where
    K: Clone,
    S: BranchStore<K, V>,
    I: IntoIterator<Item = (Path<K>, V)>,
{
    let mut written = 0;
    for (path, value) in leaves {
        set_recursive(target, &path, value, 0);
        written += 1;
    }
    written
}

/// Inserts each top-level entry into `target`, replacing whatever subtree
/// was stored under the same key.
///
/// Returns the number of entries that replaced an existing key.
pub fn replace_entries<K, V, S, I>(target: &Shared<S>, entries: I) -> usize
where
    S: BranchStore<K, V>,
    I: IntoIterator<Item = (K, Nested<K, V>)>,
{
    let mut replaced = 0;
    for (key, nested) in entries {
        let node = build_node(nested);
        if target.borrow_mut().insert(key, node).is_some() {
            replaced += 1;
        }
    }
    replaced
}

/// Converts raw nested content into a tree node, building fresh branches.
pub fn build_node<K, V, S>(nested: Nested<K, V>) -> Node<V, S>
where
    S: BranchStore<K, V>,
{
    match nested {
        Nested::Leaf(value) => Node::Leaf(value),
        Nested::Map(entries) => {
            let branch: Shared<S> = Rc::new(RefCell::new(S::default()));
            replace_entries(&branch, entries);
            Node::Branch(branch)
        }
    }
}

/// Copies the subtree below `branch` into plain nested content.
pub fn export<K, V, S>(branch: &Shared<S>) -> Vec<(K, Nested<K, V>)>
where
    K: Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    let store = branch.borrow();
    store
        .iter()
        .map(|(key, node)| {
            let nested = match node {
                Node::Leaf(value) => Nested::Leaf(value.clone()),
                Node::Branch(child) => Nested::Map(export(child)),
            };
            (key.clone(), nested)
        })
        .collect()
}
