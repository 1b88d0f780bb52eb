//! Branch storage abstraction.

use crate::node::Node;

/// Map type used for every branch of a tree.
///
/// Abstracts over [`HashBranch`](crate::HashBranch) (unordered) and
/// [`OrderedBranch`](crate::OrderedBranch) (insertion order). The
/// [`Default`] impl is the factory: each branch created during `set` comes
/// from `S::default()`. The choice of store changes only the iteration
/// order, never the result of a lookup.
pub trait BranchStore<K, V>: Default + Sized {
    /// Returns the number of direct children.
    fn len(&self) -> usize;

    /// Returns `true` if the branch has no children.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the child stored under `key`.
    fn get(&self, key: &K) -> Option<&Node<V, Self>>;

    /// Returns the child stored under `key`, mutably.
    fn get_mut(&mut self, key: &K) -> Option<&mut Node<V, Self>>;

    /// Stores `node` under `key`, returning the previous child.
    fn insert(&mut self, key: K, node: Node<V, Self>) -> Option<Node<V, Self>>;

    /// Removes and returns the child under `key`.
    fn remove(&mut self, key: &K) -> Option<Node<V, Self>>;

    /// Iterates over direct children in store order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a Node<V, Self>)>
    where
        K: 'a,
        V: 'a;

    /// Drops every child.
    fn clear(&mut self);
}
