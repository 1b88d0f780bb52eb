//! Mapping interface over path-addressed trees.
//!
//! [`PathMapping`] names the handful of capabilities a nested map must
//! provide (count, traverse, get, set, delete). Everything else a mapping
//! is expected to offer (membership, `pop`, `popitem`, `setdefault`,
//! `clear`, equality) is written once here as provided methods on top of
//! those capabilities.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::iter::Leaves;
use crate::path::Path;

/// A map addressed by normalized key paths.
pub trait PathMapping<K, V> {
    /// What a successful lookup yields. A bare leaf value must convert into
    /// it, so defaults can be returned through the same type.
    type Item: From<V>;

    /// Number of leaves.
    fn leaf_count(&self) -> usize;

    /// Depth-first walk over all `(path, value)` pairs.
    fn leaves(&self) -> Leaves<K, V>;

    /// The first leaf in traversal order.
    fn first_leaf(&self) -> Option<(Path<K>, V)> {
        self.leaves().next()
    }

    /// Resolves `path`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if a key is missing or the descent hits a leaf
    /// early.
    fn get_path(&self, path: &Path<K>) -> Result<Self::Item, K>;

    /// Stores `value` at `path`, creating or overwriting intermediates.
    fn set_path(&mut self, path: &Path<K>, value: V);

    /// Removes whatever is stored at `path`, prunes emptied ancestors, and
    /// returns the removed item.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `path` does not resolve.
    fn delete_path(&mut self, path: &Path<K>) -> Result<Self::Item, K>;

    /// Returns `true` if `path` resolves.
    fn contains_path(&self, path: &Path<K>) -> bool {
        self.get_path(path).is_ok()
    }

    /// Removes and returns what is stored at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `path` does not resolve and no `default`
    /// was supplied.
    fn pop_path(&mut self, path: &Path<K>, default: Option<V>) -> Result<Self::Item, K> {
        match (self.delete_path(path), default) {
            (Err(Error::KeyNotFound { .. }), Some(default)) => Ok(default.into()),
            (result, _) => result,
        }
    }

    /// Removes and returns the first leaf in traversal order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there are no leaves.
    fn popitem(&mut self) -> Result<(Path<K>, V), K> {
        let (path, value) = self.first_leaf().ok_or(Error::EmptyCollection)?;
        self.delete_path(&path)?;
        Ok((path, value))
    }

    /// Returns what is stored at `path`, first storing `default` there if the
    /// path does not resolve.
    ///
    /// # Errors
    ///
    /// Only errors other than [`Error::KeyNotFound`] are returned.
    fn setdefault_path(&mut self, path: &Path<K>, default: V) -> Result<Self::Item, K>
    where
        V: Clone,
    {
        match self.get_path(path) {
            Err(Error::KeyNotFound { .. }) => {
                self.set_path(path, default.clone());
                Ok(default.into())
            }
            found => found,
        }
    }

    /// Removes every leaf, one `popitem` at a time.
    fn clear(&mut self) {
        let mut removed = 0_usize;
        while self.popitem().is_ok() {
            removed += 1;
        }
        debug!(removed, "cleared leaves");
    }

    /// Leaf-set equality: same paths holding equal values, in any order.
    fn leaf_eq<M>(&self, other: &M) -> bool
    where
        M: PathMapping<K, V> + ?Sized,
        K: Hash + Eq,
        V: PartialEq,
    {
        let theirs: HashMap<Path<K>, V> = other.leaves().collect();
        let mut seen = 0_usize;
        for (path, value) in self.leaves() {
            match theirs.get(&path) {
                Some(v) if *v == value => seen += 1,
                _ => return false,
            }
        }
        seen == theirs.len()
    }
}
