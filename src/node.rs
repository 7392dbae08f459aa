use std::fmt;

pub(crate) type NodeId = u32;
pub(crate) const NIL: NodeId = u32::MAX;

/// Node color. Absent children count as [`Color::Black`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
    pub(crate) color: Color,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: NIL,
            right: NIL,
            parent: NIL,
            color: Color::Red,
        }
    }
}

/// Leftmost node of the subtree rooted at `n`.
pub(crate) fn min_node<K>(nodes: &[Node<K>], mut n: NodeId) -> NodeId {
    if n == NIL {
        return NIL;
    }
    while nodes[n as usize].left != NIL {
        n = nodes[n as usize].left;
    }
    n
}

/// Rightmost node of the subtree rooted at `n`.
pub(crate) fn max_node<K>(nodes: &[Node<K>], mut n: NodeId) -> NodeId {
    if n == NIL {
        return NIL;
    }
    while nodes[n as usize].right != NIL {
        n = nodes[n as usize].right;
    }
    n
}

/// In-order successor, walking parent links when there is no right subtree.
pub(crate) fn successor<K>(nodes: &[Node<K>], mut n: NodeId) -> NodeId {
    if n == NIL {
        return NIL;
    }
    let r = nodes[n as usize].right;
    if r != NIL {
        return min_node(nodes, r);
    }
    let mut p = nodes[n as usize].parent;
    while p != NIL && n == nodes[p as usize].right {
        n = p;
        p = nodes[p as usize].parent;
    }
    p
}

/// In-order predecessor.
pub(crate) fn predecessor<K>(nodes: &[Node<K>], mut n: NodeId) -> NodeId {
    if n == NIL {
        return NIL;
    }
    let l = nodes[n as usize].left;
    if l != NIL {
        return max_node(nodes, l);
    }
    let mut p = nodes[n as usize].parent;
    while p != NIL && n == nodes[p as usize].left {
        n = p;
        p = nodes[p as usize].parent;
    }
    p
}
