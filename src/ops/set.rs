//! Assignment operation: creates missing branches on the way down.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::node::{Node, Shared};
use crate::store::BranchStore;

/// Stores `value` as a leaf at `keys` below `branch`.
///
/// Missing intermediate branches are created with `S::default()`. An
/// intermediate leaf is replaced by a fresh empty branch and its value is
/// dropped. Returns the node previously stored at the final key, if any.
///
/// An empty `keys` is a no-op returning `None`; callers normalize first.
pub fn set_recursive<K, V, S>(
    branch: &Shared<S>,
    keys: &[K],
    value: V,
    depth: usize,
) -> Option<Node<V, S>>
where
    K: Clone,
    S: BranchStore<K, V>,
{
    let (key, rest) = keys.split_first()?;
    let mut store = branch.borrow_mut();

    if rest.is_empty() {
        return store.insert(key.clone(), Node::Leaf(value));
    }

    let child = if let Some(Node::Branch(existing)) = store.get(key) {
        Rc::clone(existing)
    } else {
        let fresh: Shared<S> = Rc::new(RefCell::new(S::default()));
        let replaced = store.insert(key.clone(), Node::Branch(Rc::clone(&fresh)));
        if replaced.is_some() {
            trace!(depth, "replaced leaf with branch");
        } else {
            trace!(depth, "created branch");
        }
        fresh
    };
    drop(store);

    set_recursive(&child, rest, value, depth + 1)
}
