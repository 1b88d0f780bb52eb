//! Error type shared by every path operation.

use thiserror::Error;

/// Failure of a path-addressed operation.
///
/// Generic over the key type so that [`KeyNotFound`](Self::KeyNotFound) can
/// hand back the exact key that stopped the descent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<K> {
    /// The path normalized to zero keys.
    #[error("invalid path: a path must contain at least one key")]
    InvalidPath,

    /// A key along the path is missing, or the descent hit a leaf while keys
    /// remained.
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// The key at which the descent stopped.
        key: K,
    },

    /// `popitem` on a map without leaves.
    #[error("popitem(): map is empty")]
    EmptyCollection,
}

impl<K> Error<K> {
    /// Returns `true` for [`Error::InvalidPath`].
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath)
    }

    /// Returns `true` for [`Error::KeyNotFound`].
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }

    /// Returns `true` for [`Error::EmptyCollection`].
    #[must_use]
    pub const fn is_empty_collection(&self) -> bool {
        matches!(self, Self::EmptyCollection)
    }

    /// The offending key, if this is a [`Error::KeyNotFound`].
    #[must_use]
    pub const fn key(&self) -> Option<&K> {
        match self {
            Self::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, K> = std::result::Result<T, Error<K>>;
