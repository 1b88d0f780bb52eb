//! `IndexMap`-backed branch store (insertion order).

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::node::Node;
use crate::store::BranchStore;

/// Branch that remembers insertion order, backed by [`IndexMap`].
///
/// Leaves are visited in the order their keys were first inserted at each
/// level. Removal shifts later entries down, so order survives deletes.
pub struct OrderedBranch<K, V> {
    children: IndexMap<K, Node<V, Self>>,
}

impl<K, V> OrderedBranch<K, V> {
    /// Creates an empty branch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }
}

impl<K, V> Default for OrderedBranch<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> BranchStore<K, V> for OrderedBranch<K, V> {
    fn len(&self) -> usize {
        self.children.len()
    }

    fn get(&self, key: &K) -> Option<&Node<V, Self>> {
        self.children.get(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut Node<V, Self>> {
        self.children.get_mut(key)
    }

    fn insert(&mut self, key: K, node: Node<V, Self>) -> Option<Node<V, Self>> {
        self.children.insert(key, node)
    }

    fn remove(&mut self, key: &K) -> Option<Node<V, Self>> {
        self.children.shift_remove(key)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a Node<V, Self>)>
    where
        K: 'a,
        V: 'a,
    {
        self.children.iter()
    }

    fn clear(&mut self) {
        self.children.clear();
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedBranch<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.children.iter()).finish()
    }
}
