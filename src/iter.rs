//! Leaf traversal.
//!
//! Every leaf-level view of a tree (length, iteration, keys, values, items,
//! equality) comes from the depth-first walk in this module. A walk visits
//! the children of each branch in store order, descending into branches and
//! emitting `(Path, value)` for each leaf.

use std::iter::FusedIterator;

use crate::node::{Node, Shared};
use crate::path::Path;
use crate::store::BranchStore;

/// Iterator over `(Path, value)` pairs of a tree.
///
/// The walk runs once, when the iterator is created; values are clones taken
/// at that moment. Iterating the map again starts a fresh walk.
pub struct Leaves<K, V> {
    entries: std::vec::IntoIter<(Path<K>, V)>,
}

impl<K: Clone, V: Clone> Leaves<K, V> {
    /// Creates an iterator by collecting all leaves via DFS.
    pub fn new<S: BranchStore<K, V>>(root: &Shared<S>) -> Self {
        let mut entries = Vec::new();
        let mut prefix = Vec::new();
        collect(root, &mut prefix, &mut entries);
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for Leaves<K, V> {
    type Item = (Path<K>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Leaves<K, V> {}

impl<K, V> FusedIterator for Leaves<K, V> {}

/// DFS collect all leaves below `branch`, prefixing paths with `prefix`.
fn collect<K, V, S>(branch: &Shared<S>, prefix: &mut Vec<K>, out: &mut Vec<(Path<K>, V)>)
where
    K: Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    let store = branch.borrow();
    for (key, node) in store.iter() {
        prefix.push(key.clone());
        match node {
            Node::Leaf(value) => out.push((Path::from_nonempty(prefix.clone()), value.clone())),
            Node::Branch(child) => collect(child, prefix, out),
        }
        prefix.pop();
    }
}

/// Counts leaves below `branch` without cloning anything.
pub fn count<K, V, S: BranchStore<K, V>>(branch: &Shared<S>) -> usize {
    let store = branch.borrow();
    store
        .iter()
        .map(|(_, node)| match node {
            Node::Leaf(_) => 1,
            Node::Branch(child) => count(child),
        })
        .sum()
}

/// Returns `true` if at least one leaf is reachable from `branch`.
pub fn has_leaf<K, V, S: BranchStore<K, V>>(branch: &Shared<S>) -> bool {
    let store = branch.borrow();
    store.iter().any(|(_, node)| match node {
        Node::Leaf(_) => true,
        Node::Branch(child) => has_leaf(child),
    })
}

/// The first leaf in traversal order, or `None` if the tree has no leaves.
///
/// Stops at the first hit instead of walking the whole tree.
pub fn first<K, V, S>(branch: &Shared<S>) -> Option<(Path<K>, V)>
where
    K: Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    let mut prefix = Vec::new();
    first_below(branch, &mut prefix)
}

fn first_below<K, V, S>(branch: &Shared<S>, prefix: &mut Vec<K>) -> Option<(Path<K>, V)>
where
    K: Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    let store = branch.borrow();
    for (key, node) in store.iter() {
        prefix.push(key.clone());
        let found = match node {
            Node::Leaf(value) => Some((Path::from_nonempty(prefix.clone()), value.clone())),
            Node::Branch(child) => first_below(child, prefix),
        };
        if found.is_some() {
            return found;
        }
        prefix.pop();
    }
    None
}
