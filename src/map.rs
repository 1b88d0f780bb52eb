//! Path-addressed nested map.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::branch::HashBranch;
use crate::error::Result;
use crate::iter::{self, Leaves};
use crate::mapping::PathMapping;
use crate::nested::Nested;
use crate::node::{Node, Shared};
use crate::ops::get::{contains_recursive, get_recursive};
use crate::ops::merge::{export, merge_leaves, replace_entries};
use crate::ops::remove::remove_recursive;
use crate::ops::set::set_recursive;
use crate::path::{IntoPath, Path};
use crate::store::BranchStore;

/// Nested map whose leaves are addressed by flat key paths.
///
/// `S` picks the map type used for every branch; see [`BranchStore`].
/// A `PlaneMap` returned from a lookup is a live view: it shares the branch
/// with the map it came from, and writes through either are visible to both.
///
/// ```
/// use plane_map::{Nested, OrderedBranch, PlaneMap};
///
/// let mut map: PlaneMap<&str, &str, OrderedBranch<_, _>> = PlaneMap::from_nested([
///     ("key1", Nested::map([("key2", Nested::leaf("val2"))])),
/// ]);
/// map.set(["key1", "key3"], "val3")?;
/// assert_eq!(map.len(), 2);
///
/// let mut view = map.get("key1")?.into_map().unwrap();
/// view.delete("key2")?;
/// assert!(!map.contains(["key1", "key2"]));
/// # Ok::<(), plane_map::Error<&str>>(())
/// ```
pub struct PlaneMap<K, V, S = HashBranch<K, V>> {
    root: Shared<S>,
    _marker: PhantomData<fn() -> (K, V)>,
}

/// Result of a lookup: a leaf value, a view over a branch, or, when asked
/// for, the raw branch itself.
#[derive(Debug)]
pub enum Lookup<K, V, S> {
    /// A cloned leaf value.
    Leaf(V),
    /// A map view sharing the branch that was found.
    Map(PlaneMap<K, V, S>),
    /// The raw shared branch, returned by [`PlaneMap::get_or`] with `stddict`.
    Raw(Shared<S>),
}

// ---------------------------------------------------------------------------
// Construction & accessors (no trait bounds)
// ---------------------------------------------------------------------------

impl<K, V, S> PlaneMap<K, V, S> {
    /// Wraps an existing shared branch without copying it.
    #[must_use]
    pub const fn from_shared(root: Shared<S>) -> Self {
        Self {
            root,
            _marker: PhantomData,
        }
    }

    /// Returns a second map over the same root.
    #[must_use]
    pub fn share(&self) -> Self {
        Self::from_shared(Rc::clone(&self.root))
    }

    /// Returns the raw shared root branch.
    #[must_use]
    pub fn branch(&self) -> Shared<S> {
        Rc::clone(&self.root)
    }

    /// Returns `true` if both maps wrap the very same branch.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.root, &other.root)
    }
}

impl<K, V, S: Default> PlaneMap<K, V, S> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::from_shared(Rc::default())
    }
}

// ---------------------------------------------------------------------------
// Path operations
// ---------------------------------------------------------------------------

impl<K, V, S> PlaneMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    /// Creates a map seeded with raw content.
    ///
    /// Each entry becomes a top-level key; [`Nested::Map`] values become
    /// branches and everything else a leaf.
    #[must_use]
    pub fn from_nested<I: IntoIterator<Item = (K, Nested<K, V>)>>(entries: I) -> Self {
        let map = Self::new();
        replace_entries(&map.root, entries);
        map
    }

    /// Creates a map holding copies of every leaf of `other`.
    ///
    /// `other` may use a different branch store.
    #[must_use]
    pub fn from_map<S2: BranchStore<K, V>>(other: &PlaneMap<K, V, S2>) -> Self {
        let map = Self::new();
        merge_leaves(&map.root, other.iter());
        map
    }

    /// Number of leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaf_count()
    }

    /// Returns `true` if the map has no leaves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !iter::has_leaf(&self.root)
    }

    /// Resolves `path` to a leaf value or a view over a branch.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`](crate::Error::InvalidPath) for an empty path,
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if a key is missing
    /// or a leaf is reached before the path ends.
    pub fn get<P: IntoPath<K>>(&self, path: P) -> Result<Lookup<K, V, S>, K> {
        self.get_path(&path.into_path()?)
    }

    /// Like [`get`](Self::get), but returns `default` (as a leaf) when the
    /// path does not resolve. With `stddict`, a branch comes back as
    /// [`Lookup::Raw`] instead of a map view.
    #[must_use]
    pub fn get_or<P: IntoPath<K>>(
        &self,
        path: P,
        default: Option<V>,
        stddict: bool,
    ) -> Option<Lookup<K, V, S>> {
        match self.get(path) {
            Ok(Lookup::Map(view)) if stddict => Some(Lookup::Raw(view.root)),
            Ok(found) => Some(found),
            Err(_) => default.map(Lookup::Leaf),
        }
    }

    /// Stores `value` as a leaf at `path`.
    ///
    /// Missing branches along the way are created. A leaf sitting where a
    /// branch is needed is discarded and replaced by a new branch.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`](crate::Error::InvalidPath) for an empty path,
    /// before anything is modified.
    pub fn set<P: IntoPath<K>>(&mut self, path: P, value: V) -> Result<(), K> {
        self.set_path(&path.into_path()?, value);
        Ok(())
    }

    /// Removes whatever is stored at `path`.
    ///
    /// Any branch left empty by the removal is removed from its parent, up
    /// the chain, until a non-empty branch is reached. The root stays.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if `path` does not
    /// resolve; the map is left unchanged.
    pub fn delete<P: IntoPath<K>>(&mut self, path: P) -> Result<(), K> {
        self.delete_path(&path.into_path()?).map(drop)
    }

    /// Returns `true` if `path` resolves to a leaf or a branch.
    #[must_use]
    pub fn contains<P: IntoPath<K>>(&self, path: P) -> bool {
        path.into_path().is_ok_and(|p| self.contains_path(&p))
    }

    /// Removes and returns what is stored at `path`, or `default` if given
    /// and the path does not resolve.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if `path` does not
    /// resolve and `default` is `None`.
    pub fn pop<P: IntoPath<K>>(&mut self, path: P, default: Option<V>) -> Result<Lookup<K, V, S>, K> {
        self.pop_path(&path.into_path()?, default)
    }

    /// Removes and returns the first leaf in traversal order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`](crate::Error::EmptyCollection) if the map
    /// has no leaves.
    pub fn popitem(&mut self) -> Result<(Path<K>, V), K> {
        PathMapping::popitem(self)
    }

    /// Returns what is stored at `path`, first storing `default` if nothing is.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`](crate::Error::InvalidPath) for an empty path.
    pub fn setdefault<P: IntoPath<K>>(&mut self, path: P, default: V) -> Result<Lookup<K, V, S>, K> {
        self.setdefault_path(&path.into_path()?, default)
    }

    /// Removes every leaf.
    ///
    /// Leaves are popped one by one, so views over sub-branches see them go.
    /// Branches that never held a leaf are dropped at the end.
    pub fn clear(&mut self) {
        PathMapping::clear(self);
        self.root.borrow_mut().clear();
    }

    /// Iterates over `(path, value)` pairs.
    #[must_use]
    pub fn iter(&self) -> Leaves<K, V> {
        Leaves::new(&self.root)
    }

    /// Same as [`iter`](Self::iter).
    #[must_use]
    pub fn items(&self) -> Leaves<K, V> {
        self.iter()
    }

    /// Iterates over leaf paths.
    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = Path<K>> {
        self.iter().map(|(path, _)| path)
    }

    /// Iterates over leaf values.
    #[must_use]
    pub fn values(&self) -> impl Iterator<Item = V> {
        self.iter().map(|(_, value)| value)
    }

    /// Soft merge: writes every leaf of `other` into this map.
    ///
    /// Leaves of `self` whose paths `other` does not name are kept; leaves at
    /// shared paths take `other`'s value.
    pub fn update<S2: BranchStore<K, V>>(&mut self, other: &PlaneMap<K, V, S2>) {
        let written = merge_leaves(&self.root, other.iter());
        debug!(written, "soft merge");
    }

    /// Shallow update: each top-level entry replaces the whole subtree stored
    /// under its key.
    pub fn update_shallow<I: IntoIterator<Item = (K, Nested<K, V>)>>(&mut self, entries: I) {
        let replaced = replace_entries(&self.root, entries);
        debug!(replaced, "shallow update");
    }

    /// Copies the tree into plain nested content.
    #[must_use]
    pub fn to_nested(&self) -> Nested<K, V> {
        Nested::Map(export(&self.root))
    }
}

impl<K, V, S> PathMapping<K, V> for PlaneMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    type Item = Lookup<K, V, S>;

    fn leaf_count(&self) -> usize {
        iter::count(&self.root)
    }

    fn leaves(&self) -> Leaves<K, V> {
        Leaves::new(&self.root)
    }

    fn first_leaf(&self) -> Option<(Path<K>, V)> {
        iter::first(&self.root)
    }

    fn get_path(&self, path: &Path<K>) -> Result<Lookup<K, V, S>, K> {
        get_recursive(&self.root, path).map(Lookup::from_node)
    }

    fn set_path(&mut self, path: &Path<K>, value: V) {
        set_recursive(&self.root, path, value, 0);
    }

    fn delete_path(&mut self, path: &Path<K>) -> Result<Lookup<K, V, S>, K> {
        let outcome = remove_recursive(&self.root, path)?;
        trace!(pruned = outcome.pruned, "deleted");
        Ok(Lookup::from_node(outcome.removed))
    }

    fn contains_path(&self, path: &Path<K>) -> bool {
        contains_recursive(&self.root, path)
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

impl<K, V, S> Lookup<K, V, S> {
    fn from_node(node: Node<V, S>) -> Self {
        match node {
            Node::Leaf(value) => Self::Leaf(value),
            Node::Branch(branch) => Self::Map(PlaneMap::from_shared(branch)),
        }
    }

    /// Returns `true` for [`Lookup::Leaf`].
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` for [`Lookup::Map`].
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// The leaf value, by reference.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&V> {
        match self {
            Self::Leaf(v) => Some(v),
            _ => None,
        }
    }

    /// The leaf value.
    #[must_use]
    pub fn into_leaf(self) -> Option<V> {
        match self {
            Self::Leaf(v) => Some(v),
            _ => None,
        }
    }

    /// The map view.
    #[must_use]
    pub fn into_map(self) -> Option<PlaneMap<K, V, S>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// The raw branch; a map view is unwrapped to the branch it shares.
    #[must_use]
    pub fn into_raw(self) -> Option<Shared<S>> {
        match self {
            Self::Raw(b) | Self::Map(PlaneMap { root: b, .. }) => Some(b),
            Self::Leaf(_) => None,
        }
    }
}

impl<K, V, S> From<V> for Lookup<K, V, S> {
    fn from(value: V) -> Self {
        Self::Leaf(value)
    }
}

impl<K, V, S> PartialEq for Lookup<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone + PartialEq,
    S: BranchStore<K, V>,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(a), Self::Leaf(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Raw(a), Self::Raw(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V, S: Default> Default for PlaneMap<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S: fmt::Debug> fmt::Debug for PlaneMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.try_borrow() {
            Ok(store) => fmt::Debug::fmt(&*store, f),
            Err(_) => f.write_str("<borrowed>"),
        }
    }
}

impl<K, V, S, S2> PartialEq<PlaneMap<K, V, S2>> for PlaneMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone + PartialEq,
    S: BranchStore<K, V>,
    S2: BranchStore<K, V>,
{
    fn eq(&self, other: &PlaneMap<K, V, S2>) -> bool {
        self.leaf_eq(other)
    }
}

impl<K, V, S> Eq for PlaneMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone + Eq,
    S: BranchStore<K, V>,
{
}

// A plane map never equals a raw map, whatever the contents.

impl<K, V, S, R, H> PartialEq<HashMap<K, R, H>> for PlaneMap<K, V, S> {
    fn eq(&self, _other: &HashMap<K, R, H>) -> bool {
        false
    }
}

impl<K, V, S, R, H> PartialEq<IndexMap<K, R, H>> for PlaneMap<K, V, S> {
    fn eq(&self, _other: &IndexMap<K, R, H>) -> bool {
        false
    }
}

impl<K, V, S> PartialEq<Nested<K, V>> for PlaneMap<K, V, S> {
    fn eq(&self, _other: &Nested<K, V>) -> bool {
        false
    }
}

impl<K, V, S> Extend<(Path<K>, V)> for PlaneMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    fn extend<I: IntoIterator<Item = (Path<K>, V)>>(&mut self, iter: I) {
        merge_leaves(&self.root, iter);
    }
}

impl<K, V, S> FromIterator<(Path<K>, V)> for PlaneMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    fn from_iter<I: IntoIterator<Item = (Path<K>, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, S> IntoIterator for &PlaneMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BranchStore<K, V>,
{
    type Item = (Path<K>, V);
    type IntoIter = Leaves<K, V>;

    fn into_iter(self) -> Leaves<K, V> {
        self.iter()
    }
}
