//! `HashMap`-backed branch store (default).

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::node::Node;
use crate::store::BranchStore;

/// Unordered branch backed by [`HashMap`].
///
/// Leaf iteration order is unspecified.
pub struct HashBranch<K, V> {
    children: HashMap<K, Node<V, Self>>,
}

impl<K, V> HashBranch<K, V> {
    /// Creates an empty branch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }
}

impl<K, V> Default for HashBranch<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> BranchStore<K, V> for HashBranch<K, V> {
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
        self.children.remove(key)
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

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashBranch<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.children.iter()).finish()
    }
}
