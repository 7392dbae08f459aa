use std::iter::FusedIterator;

use crate::node::{self, Color, NIL, Node, NodeId};
use crate::tree::RBTree;

/// Two-ended in-order walk over arena ids, driven by parent links.
struct Cursor<'a, K> {
    nodes: &'a [Node<K>],
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, K> Cursor<'a, K> {
    fn new(nodes: &'a [Node<K>], root: NodeId) -> Self {
        Self {
            nodes,
            front: node::min_node(nodes, root),
            back: node::max_node(nodes, root),
            remaining: if root == NIL { 0 } else { nodes.len() },
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<K>> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front;
        self.front = node::successor(self.nodes, id);
        self.remaining -= 1;
        Some(&self.nodes[id as usize])
    }

    fn next_back_node(&mut self) -> Option<&'a Node<K>> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back;
        self.back = node::predecessor(self.nodes, id);
        self.remaining -= 1;
        Some(&self.nodes[id as usize])
    }
}

/// Ascending iterator over the keys of an [`RBTree`].
pub struct Iter<'a, K> {
    cursor: Cursor<'a, K>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.cursor.next_node().map(|n| &n.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back_node().map(|n| &n.key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// Ascending iterator over keys paired with their node colors.
pub struct IterColored<'a, K> {
    cursor: Cursor<'a, K>,
}

impl<'a, K> Iterator for IterColored<'a, K> {
    type Item = (&'a K, Color);

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_node().map(|n| (&n.key, n.color))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<K> DoubleEndedIterator for IterColored<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back_node().map(|n| (&n.key, n.color))
    }
}

impl<K> ExactSizeIterator for IterColored<'_, K> {}
impl<K> FusedIterator for IterColored<'_, K> {}

impl<K, C> RBTree<K, C> {
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            cursor: Cursor::new(&self.nodes, self.root),
        }
    }

    pub fn iter_colored(&self) -> IterColored<'_, K> {
        IterColored {
            cursor: Cursor::new(&self.nodes, self.root),
        }
    }

    /// Stored keys in ascending order.
    pub fn traverse(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Consume the tree, returning its keys in ascending order.
    pub fn into_sorted_vec(self) -> Vec<K> {
        let order: Vec<NodeId> = {
            let mut ids = Vec::with_capacity(self.nodes.len());
            let mut id = node::min_node(&self.nodes, self.root);
            while id != NIL {
                ids.push(id);
                id = node::successor(&self.nodes, id);
            }
            ids
        };

        let mut keys: Vec<Option<K>> = self.nodes.into_iter().map(|n| Some(n.key)).collect();
        order
            .into_iter()
            .filter_map(|id| keys[id as usize].take())
            .collect()
    }
}

impl<'a, K, C> IntoIterator for &'a RBTree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, C> IntoIterator for RBTree<K, C> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_sorted_vec().into_iter()
    }
}
