//! Nested maps addressed by flat key paths.
//!
//! A [`PlaneMap`] stores ordinary nested maps but lets callers read and
//! write deep values with a single path such as `["server", "tls", "cert"]`
//! instead of chaining lookups level by level. Seen from outside, the tree
//! is a flat map from full leaf paths to values.
//!
//! # Key properties
//!
//! - **Flat addressing**: every operation takes a path; nested path specs are
//!   flattened (see [`path`])
//! - **Auto-pruning**: deleting the last leaf of a branch removes the branch,
//!   and so on up the chain
//! - **Live views**: a branch returned from a lookup shares storage with the
//!   map it came from
//! - **Two merge depths**: [`PlaneMap::update`] merges leaf by leaf,
//!   [`PlaneMap::update_shallow`] replaces top-level subtrees
//! - **Pluggable branch maps**: [`HashBranch`] (default) or [`OrderedBranch`]
//!   for insertion-ordered traversal
//!
//! # Example
//!
//! ```
//! use plane_map::{Nested, OrderedBranch, PlaneMap};
//!
//! let mut map: PlaneMap<&str, &str, OrderedBranch<_, _>> = PlaneMap::from_nested([
//!     ("key1", Nested::map([("key2", Nested::leaf("val2")), ("key3", Nested::leaf("val3"))])),
//!     ("key4", Nested::map([("key5", Nested::map([("key6", Nested::leaf("val6"))]))])),
//! ]);
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get(["key4", "key5", "key6"])?.into_leaf(), Some("val6"));
//!
//! map.delete(["key4", "key5", "key6"])?;
//! assert!(!map.contains("key4"));
//!
//! let paths: Vec<Vec<&str>> = map.keys().map(|p| p.into_vec()).collect();
//! assert_eq!(paths, [["key1", "key2"], ["key1", "key3"]]);
//! # Ok::<(), plane_map::Error<&str>>(())
//! ```
//!
//! Maps are single-threaded (`Rc`/`RefCell` inside); share them across
//! threads only behind your own synchronization.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod iter;
pub mod mapping;
pub mod nested;
pub mod node;
pub mod path;
pub mod store;

mod branch;
mod branch_ordered;
mod map;
mod ops;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use branch::HashBranch;
pub use branch_ordered::OrderedBranch;
pub use error::{Error, Result};
pub use map::{Lookup, PlaneMap};
pub use mapping::PathMapping;
pub use nested::Nested;
pub use node::{Node, Shared};
pub use path::{IntoPath, Path, Segment};
pub use store::BranchStore;
