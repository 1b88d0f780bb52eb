//! `Serialize` impls (feature `serde`).
//!
//! A map serializes as the nested map it wraps; a path as a sequence of keys.

use serde::{Serialize, Serializer};

use crate::branch::HashBranch;
use crate::branch_ordered::OrderedBranch;
use crate::map::PlaneMap;
use crate::nested::Nested;
use crate::node::Node;
use crate::path::Path;
use crate::store::BranchStore;

impl<V: Serialize, S: Serialize> Serialize for Node<V, S> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        match self {
            Self::Leaf(value) => value.serialize(serializer),
            Self::Branch(branch) => branch.borrow().serialize(serializer),
        }
    }
}

impl<K, V> Serialize for HashBranch<K, V>
where
    K: Serialize + std::hash::Hash + Eq,
    V: Serialize,
{
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<K, V> Serialize for OrderedBranch<K, V>
where
    K: Serialize + std::hash::Hash + Eq,
    V: Serialize,
{
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<K, V, S: Serialize> Serialize for PlaneMap<K, V, S> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        self.branch().borrow().serialize(serializer)
    }
}

impl<K: Serialize, V: Serialize> Serialize for Nested<K, V> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        match self {
            Self::Leaf(value) => value.serialize(serializer),
            Self::Map(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
        }
    }
}

impl<K: Serialize> Serialize for Path<K> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_seq(self.iter())
    }
}
