//! # rbset - ordered set on a red-black tree
//!
//! Keys are kept sorted by a comparator (`Ord` by default) in a red-black
//! tree, so `insert`, `delete` and `contains` cost `O(log n)` in the worst
//! case, whatever order keys arrive in.
//!
//! Modules:
//! - `node` for the arena node, colors and parent-link walks
//! - `rotate`, `insert`, `delete` for rotations and the two fixup passes
//! - `search`, `iter` for lookups and in-order traversal
//! - `validate` for the invariant checker and structure dumps
//!
//! Tree behavior (duplicate handling, preallocation, self-checking) comes
//! from [`TreeSettings`], re-exported from `rbset_config`.

mod delete;
mod error;
mod insert;
mod iter;
mod node;
mod rotate;
mod search;
mod tree;
mod validate;

pub use error::InvariantViolation;
pub use iter::{Iter, IterColored};
pub use node::Color;
pub use tree::RBTree;

pub use rbset_config::{ConfigError, ConfigResult, DuplicatePolicy, TreeSettings};
