//! Plain owned nested values.
//!
//! [`Nested`] is how raw content enters and leaves a [`PlaneMap`](crate::PlaneMap)
//! without going through paths: seeding at construction, the shallow
//! [`update_shallow`](crate::PlaneMap::update_shallow), and export via
//! [`to_nested`](crate::PlaneMap::to_nested).

/// A value or a map of further nested values.
///
/// Map entries are kept as an ordered list of `(key, value)` pairs, which
/// doubles as the "flat sequence of pairs" form. A repeated key behaves like
/// repeated insertion: the later entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<K, V> {
    /// Terminal value.
    Leaf(V),
    /// Nested map.
    Map(Vec<(K, Nested<K, V>)>),
}

impl<K, V> Nested<K, V> {
    /// Shorthand for [`Nested::Leaf`].
    pub const fn leaf(value: V) -> Self {
        Self::Leaf(value)
    }

    /// Builds a [`Nested::Map`] from pairs.
    pub fn map<I: IntoIterator<Item = (K, Self)>>(entries: I) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Returns `true` for [`Nested::Map`].
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// The leaf value, if this is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&V> {
        match self {
            Self::Leaf(v) => Some(v),
            Self::Map(_) => None,
        }
    }

    /// The map entries, if this is a map.
    #[must_use]
    pub fn as_map(&self) -> Option<&[(K, Self)]> {
        match self {
            Self::Map(entries) => Some(entries),
            Self::Leaf(_) => None,
        }
    }

    /// Looks up a direct child of a map by key.
    #[must_use]
    pub fn child(&self, key: &K) -> Option<&Self>
    where
        K: PartialEq,
    {
        self.as_map()?
            .iter()
            .rev()
            .find_map(|(k, v)| (k == key).then_some(v))
    }
}
