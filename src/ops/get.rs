//! Lookup operation: walks the tree along a key path.

use crate::error::{Error, Result};
use crate::node::{Node, Shared};
use crate::store::BranchStore;

/// Resolves `keys` starting at `branch`.
///
/// Returns a copy of the node found: a cloned leaf value, or a new handle to
/// the same child branch.
pub fn get_recursive<K, V, S>(branch: &Shared<S>, keys: &[K]) -> Result<Node<V, S>, K>
where
    K: Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    let Some((key, rest)) = keys.split_first() else {
        return Err(Error::InvalidPath);
    };
    let store = branch.borrow();
    match store.get(key) {
        None => Err(Error::KeyNotFound { key: key.clone() }),
        Some(node) if rest.is_empty() => Ok(node.clone()),
        Some(Node::Branch(child)) => get_recursive(child, rest),
        // Keys remain but the descent hit a leaf: the next key is unreachable.
        Some(Node::Leaf(_)) => Err(Error::KeyNotFound {
            key: rest[0].clone(),
        }),
    }
}

/// Returns `true` if `keys` resolves to a node, cloning nothing.
pub fn contains_recursive<K, V, S>(branch: &Shared<S>, keys: &[K]) -> bool
where
    S: BranchStore<K, V>,
{
    let Some((key, rest)) = keys.split_first() else {
        return false;
    };
    let store = branch.borrow();
    match store.get(key) {
        None => false,
        Some(_) if rest.is_empty() => true,
        Some(Node::Branch(child)) => contains_recursive(child, rest),
        Some(Node::Leaf(_)) => false,
    }
}
