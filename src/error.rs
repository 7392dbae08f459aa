use thiserror::Error;

/// First broken red-black or structural invariant found by
/// [`RBTree::check`](crate::RBTree::check).
///
/// Node numbers are arena slots and only meaningful for the tree they came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node {node} is red")]
    RedRoot { node: u32 },

    #[error("root node {node} has parent {parent}")]
    RootHasParent { node: u32, parent: u32 },

    #[error("red node {node} has red child {child}")]
    RedRedEdge { node: u32, child: u32 },

    #[error("path below node {node} has black height {found}, expected {expected}")]
    BlackHeightMismatch {
        node: u32,
        expected: usize,
        found: usize,
    },

    #[error("node {node} records parent {recorded}, but hangs under {actual}")]
    BrokenParentLink { node: u32, recorded: u32, actual: u32 },

    #[error("keys out of order at in-order position {position}")]
    OutOfOrder { position: usize },

    #[error("{reachable} nodes reachable from the root, {stored} stored")]
    LengthMismatch { reachable: usize, stored: usize },
}
