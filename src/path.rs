//! Key paths and their normalization.
//!
//! A [`Path`] is the flat address of a location in the nested tree: an
//! ordered, non-empty sequence of keys. Callers rarely build one by hand;
//! every path-taking method accepts anything implementing [`IntoPath`], and
//! arbitrarily nested path specs are expressed with [`Segment`].
//!
//! # Normalization
//!
//! Nested segments are flattened depth-first, left to right:
//!
//! ```
//! use plane_map::{Path, Segment};
//!
//! let spec = vec![
//!     Segment::Key(1),
//!     Segment::Nested(vec![Segment::Key(2), Segment::Nested(vec![Segment::Key(3)])]),
//!     Segment::Key(4),
//! ];
//! let path = plane_map::path::normalize(spec).unwrap();
//! assert_eq!(path, Path::try_from(vec![1, 2, 3, 4]).unwrap());
//! ```
//!
//! A key whose type is itself a tuple is atomic: `(5, 6)` as a key of type
//! `(i32, i32)` is never unfolded.

use std::fmt;
use std::ops::Deref;

use crate::error::{Error, Result};

/// An owned, non-empty sequence of keys.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<K> {
    keys: Box<[K]>,
}

impl<K> Path<K> {
    /// Builds a single-key path.
    #[must_use]
    pub fn key(key: K) -> Self {
        Self {
            keys: Box::new([key]),
        }
    }

    /// Collects keys from a one-shot iterator.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] if the iterator yields nothing.
    pub fn try_from_iter<I: IntoIterator<Item = K>>(iter: I) -> Result<Self, K> {
        let keys: Box<[K]> = iter.into_iter().collect();
        if keys.is_empty() {
            return Err(Error::InvalidPath);
        }
        Ok(Self { keys })
    }

    /// Caller guarantees `keys` is non-empty.
    pub(crate) fn from_nonempty(keys: Vec<K>) -> Self {
        debug_assert!(!keys.is_empty());
        Self {
            keys: keys.into_boxed_slice(),
        }
    }

    /// Number of keys; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The first key.
    #[must_use]
    pub fn first(&self) -> &K {
        &self.keys[0]
    }

    /// The final key.
    #[must_use]
    pub fn last(&self) -> &K {
        &self.keys[self.keys.len() - 1]
    }

    /// Every key but the last, as a slice (possibly empty).
    #[must_use]
    pub fn parent(&self) -> &[K] {
        &self.keys[..self.keys.len() - 1]
    }

    /// Returns the keys as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Consumes the path, returning its keys.
    #[must_use]
    pub fn into_vec(self) -> Vec<K> {
        self.keys.into_vec()
    }
}

impl<K: Clone> Path<K> {
    /// Returns a new path with `key` appended.
    #[must_use]
    pub fn child(&self, key: K) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(key);
        Self {
            keys: keys.into_boxed_slice(),
        }
    }
}

impl<K> Deref for Path<K> {
    type Target = [K];

    fn deref(&self) -> &[K] {
        &self.keys
    }
}

impl<K> AsRef<[K]> for Path<K> {
    fn as_ref(&self) -> &[K] {
        &self.keys
    }
}

impl<K: fmt::Debug> fmt::Debug for Path<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("");
        for key in &*self.keys {
            t.field(key);
        }
        t.finish()
    }
}

impl<K> TryFrom<Vec<K>> for Path<K> {
    type Error = Error<K>;

    fn try_from(keys: Vec<K>) -> Result<Self, K> {
        if keys.is_empty() {
            return Err(Error::InvalidPath);
        }
        Ok(Self {
            keys: keys.into_boxed_slice(),
        })
    }
}

impl<'a, K> IntoIterator for &'a Path<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

// ---------------------------------------------------------------------------
// Segments & normalization
// ---------------------------------------------------------------------------

/// One element of a possibly nested path spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<K> {
    /// An atomic key, appended as-is.
    Key(K),
    /// A group of segments, spliced in place.
    Nested(Vec<Segment<K>>),
}

impl<K> Segment<K> {
    /// Groups segments drawn from a (possibly one-shot) iterator.
    pub fn nested<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Nested(iter.into_iter().collect())
    }

    /// Groups plain keys.
    pub fn keys<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::Nested(iter.into_iter().map(Self::Key).collect())
    }
}

/// Depth-first flatten into `out`.
fn flatten_into<K>(segment: Segment<K>, out: &mut Vec<K>) {
    match segment {
        Segment::Key(key) => out.push(key),
        Segment::Nested(inner) => {
            for s in inner {
                flatten_into(s, out);
            }
        }
    }
}

/// Flattens a path spec into a [`Path`].
///
/// The iterator is drained exactly once; the result is fully materialized.
///
/// # Errors
///
/// [`Error::InvalidPath`] if flattening yields no keys.
pub fn normalize<K, I>(segments: I) -> Result<Path<K>, K>
where
    I: IntoIterator<Item = Segment<K>>,
{
    let mut keys = Vec::new();
    for segment in segments {
        flatten_into(segment, &mut keys);
    }
    Path::try_from(keys)
}

// ---------------------------------------------------------------------------
// IntoPath
// ---------------------------------------------------------------------------

/// Conversion of a path spec into a normalized [`Path`].
pub trait IntoPath<K> {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] if the spec holds no keys.
    fn into_path(self) -> Result<Path<K>, K>;
}

impl<K> IntoPath<K> for Path<K> {
    fn into_path(self) -> Result<Self, K> {
        Ok(self)
    }
}

impl<K: Clone> IntoPath<K> for &Path<K> {
    fn into_path(self) -> Result<Path<K>, K> {
        Ok(self.clone())
    }
}

impl<K> IntoPath<K> for Vec<K> {
    fn into_path(self) -> Result<Path<K>, K> {
        Path::try_from(self)
    }
}

impl<K: Clone> IntoPath<K> for &[K] {
    fn into_path(self) -> Result<Path<K>, K> {
        Path::try_from(self.to_vec())
    }
}

impl<K: Clone> IntoPath<K> for &Vec<K> {
    fn into_path(self) -> Result<Path<K>, K> {
        Path::try_from(self.clone())
    }
}

impl<K, const N: usize> IntoPath<K> for [K; N] {
    fn into_path(self) -> Result<Path<K>, K> {
        Path::try_from(Vec::from(self))
    }
}

impl<K> IntoPath<K> for Segment<K> {
    fn into_path(self) -> Result<Path<K>, K> {
        normalize(std::iter::once(self))
    }
}

impl<K> IntoPath<K> for Vec<Segment<K>> {
    fn into_path(self) -> Result<Path<K>, K> {
        normalize(self)
    }
}

impl IntoPath<String> for &str {
    fn into_path(self) -> Result<Path<String>, String> {
        Ok(Path::key(self.to_owned()))
    }
}

impl IntoPath<String> for String {
    fn into_path(self) -> Result<Path<Self>, Self> {
        Ok(Path::key(self))
    }
}

impl IntoPath<String> for Vec<&str> {
    fn into_path(self) -> Result<Path<String>, String> {
        Path::try_from_iter(self.into_iter().map(str::to_owned))
    }
}

impl IntoPath<String> for &[&str] {
    fn into_path(self) -> Result<Path<String>, String> {
        Path::try_from_iter(self.iter().map(|s| (*s).to_owned()))
    }
}

impl<const N: usize> IntoPath<String> for [&str; N] {
    fn into_path(self) -> Result<Path<String>, String> {
        Path::try_from_iter(self.into_iter().map(str::to_owned))
    }
}

impl<'a> IntoPath<&'a str> for &'a str {
    fn into_path(self) -> Result<Path<&'a str>, &'a str> {
        Ok(Path::key(self))
    }
}

macro_rules! scalar_paths {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoPath<$t> for $t {
                fn into_path(self) -> Result<Path<$t>, $t> {
                    Ok(Path::key(self))
                }
            }
        )*
    };
}

scalar_paths!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char
);
