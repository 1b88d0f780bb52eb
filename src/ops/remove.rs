//! Removal operation: delete with upward pruning of emptied branches.

use std::rc::Rc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::node::{Node, Shared};
use crate::store::BranchStore;

/// Outcome of a recursive remove.
pub struct RemoveOutcome<V, S> {
    /// The node that was stored at the final key.
    pub removed: Node<V, S>,
    /// `true` if the branch the call was made on is empty afterwards.
    pub emptied: bool,
    /// Number of ancestor branches pruned on the way back up.
    pub pruned: usize,
}

/// Removes the node at `keys` below `branch`.
///
/// On the way back up, each branch left empty is removed from its parent.
/// Pruning stops at the first branch that still has children. `branch`
/// itself is never detached from anything; it may end up empty in place.
pub fn remove_recursive<K, V, S>(branch: &Shared<S>, keys: &[K]) -> Result<RemoveOutcome<V, S>, K>
where
    K: Clone,
    S: BranchStore<K, V>,
{
    let Some((key, rest)) = keys.split_first() else {
        return Err(Error::InvalidPath);
    };

    if rest.is_empty() {
        let mut store = branch.borrow_mut();
        let removed = store
            .remove(key)
            .ok_or_else(|| Error::KeyNotFound { key: key.clone() })?;
        return Ok(RemoveOutcome {
            removed,
            emptied: store.is_empty(),
            pruned: 0,
        });
    }

    let child = {
        let store = branch.borrow();
        match store.get(key) {
            Some(Node::Branch(child)) => Rc::clone(child),
            Some(Node::Leaf(_)) => {
                return Err(Error::KeyNotFound {
                    key: rest[0].clone(),
                });
            }
            None => return Err(Error::KeyNotFound { key: key.clone() }),
        }
    };

    let mut outcome = remove_recursive(&child, rest)?;
    if outcome.emptied {
        let mut store = branch.borrow_mut();
        store.remove(key);
        outcome.pruned += 1;
        outcome.emptied = store.is_empty();
        trace!(depth = keys.len(), "pruned empty branch");
    }
    Ok(outcome)
}
