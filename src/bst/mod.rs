//! Plain binary search tree where every key in a node's left subtree is smaller than the node's
//! key and every key in its right subtree is larger.
//!
//! The tree is built balanced from a batch of keys, but single insertions and removals do not
//! restructure it. `rebalance` restores a minimal-height shape on demand.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{BstMap, BstMapIntoIter, BstMapIter, BstMapIterMut};
pub use self::set::{BstSet, BstSetIntoIter, BstSetIter};
