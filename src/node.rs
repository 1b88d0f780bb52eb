//! Tree node types.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared, interior-mutable handle to a branch map.
///
/// Every facade view over a sub-branch holds one of these, so mutation
/// through any view is visible to all of them.
pub type Shared<S> = Rc<RefCell<S>>;

/// A slot in a branch map: either a terminal value or a child branch.
///
/// The Leaf/Branch split is decided by this tag alone. A leaf value whose
/// type happens to be a map is still a leaf and is never descended into.
pub enum Node<V, S> {
    /// Terminal value.
    Leaf(V),
    /// Child branch, created by the branch store's [`Default`] impl.
    Branch(Shared<S>),
}

impl<V, S> Node<V, S> {
    /// Wraps a freshly built branch.
    pub fn branch(store: S) -> Self {
        Self::Branch(Rc::new(RefCell::new(store)))
    }

    /// Returns `true` for [`Node::Branch`].
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// The shared branch handle, if this node is a branch.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&Shared<S>> {
        match self {
            Self::Branch(b) => Some(b),
            Self::Leaf(_) => None,
        }
    }

    /// The leaf value, if this node is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&V> {
        match self {
            Self::Leaf(v) => Some(v),
            Self::Branch(_) => None,
        }
    }
}

// Cloning a branch node clones the handle, not the subtree.
impl<V: Clone, S> Clone for Node<V, S> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(v) => Self::Leaf(v.clone()),
            Self::Branch(b) => Self::Branch(Rc::clone(b)),
        }
    }
}

impl<V: fmt::Debug, S: fmt::Debug> fmt::Debug for Node<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(v) => fmt::Debug::fmt(v, f),
            Self::Branch(b) => match b.try_borrow() {
                Ok(store) => fmt::Debug::fmt(&*store, f),
                Err(_) => f.write_str("<borrowed>"),
            },
        }
    }
}
