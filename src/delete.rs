use std::cmp::Ordering;

use log::{debug, trace};

use crate::node::{self, Color, NIL, NodeId};
use crate::tree::RBTree;

impl<K, C> RBTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Remove `key` from the set. Returns `false` if it was not stored.
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Remove `key` from the set and hand back the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let Some(z) = self.find(key) else {
            debug!("delete: key not stored");
            return None;
        };
        Some(self.remove_node(z))
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        let id = node::min_node(&self.nodes, self.root);
        if id == NIL {
            return None;
        }
        Some(self.remove_node(id))
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        let id = node::max_node(&self.nodes, self.root);
        if id == NIL {
            return None;
        }
        Some(self.remove_node(id))
    }

    fn remove_node(&mut self, z: NodeId) -> K {
        // With two children, the in-order successor (no left child) takes
        // z's key and is the node physically unlinked instead.
        let mut target = z;
        if self.left_of(z) != NIL && self.right_of(z) != NIL {
            let successor = node::min_node(&self.nodes, self.right_of(z));
            self.swap_keys(z, successor);
            target = successor;
        }

        let child = if self.left_of(target) != NIL {
            self.left_of(target)
        } else {
            self.right_of(target)
        };
        let parent = self.parent_of(target);

        if child != NIL {
            self.nodes[child as usize].parent = parent;
        }
        if parent == NIL {
            self.root = child;
        } else if target == self.left_of(parent) {
            self.nodes[parent as usize].left = child;
        } else {
            self.nodes[parent as usize].right = child;
        }

        if self.color_of(target) == Color::Black {
            self.delete_fixup(child, parent);
        }

        let key = self.release(target);
        debug!("delete: unlinked node {target}, {} keys", self.nodes.len());
        self.after_mutation();
        key
    }
}

impl<K, C> RBTree<K, C> {
    /// Resolve the double-black deficiency left at `x`, a child of `parent`.
    ///
    /// `x` may be the absent child, which is why its parent travels with it.
    fn delete_fixup(&mut self, mut x: NodeId, mut parent: NodeId) {
        while x != self.root && self.color_of(x) == Color::Black {
            (x, parent) = if x == self.left_of(parent) {
                self.delete_fix_left(parent)
            } else {
                self.delete_fix_right(parent)
            };
        }
        self.paint(x, Color::Black);
    }

    /// One fixup step with the deficient child on the left of `parent`.
    /// Returns the next `(x, parent)`; `x` is the root once the deficiency is gone.
    fn delete_fix_left(&mut self, parent: NodeId) -> (NodeId, NodeId) {
        // The deficient side is one black short, so the sibling always exists
        let mut sibling = self.right_of(parent);

        if self.color_of(sibling) == Color::Red {
            trace!("delete fixup at {parent}: red sibling {sibling}, rotate");
            self.paint(sibling, Color::Black);
            self.paint(parent, Color::Red);
            self.rotate_left(parent);
            sibling = self.right_of(parent);
        }

        let near = self.left_of(sibling);
        let far = self.right_of(sibling);
        if self.color_of(near) == Color::Black && self.color_of(far) == Color::Black {
            trace!("delete fixup at {parent}: black nephews, push deficiency up");
            self.paint(sibling, Color::Red);
            return (parent, self.parent_of(parent));
        }

        if self.color_of(far) == Color::Black {
            trace!("delete fixup at {parent}: red near nephew {near}, rotate sibling");
            self.paint(near, Color::Black);
            self.paint(sibling, Color::Red);
            self.rotate_right(sibling);
            sibling = self.right_of(parent);
        }

        trace!("delete fixup at {parent}: red far nephew, rotate parent");
        let parent_color = self.color_of(parent);
        let far = self.right_of(sibling);
        self.paint(sibling, parent_color);
        self.paint(parent, Color::Black);
        self.paint(far, Color::Black);
        self.rotate_left(parent);
        (self.root, NIL)
    }

    // Mirror case: deficient child on the right of parent
    fn delete_fix_right(&mut self, parent: NodeId) -> (NodeId, NodeId) {
        let mut sibling = self.left_of(parent);

        if self.color_of(sibling) == Color::Red {
            trace!("delete fixup at {parent}: red sibling {sibling}, rotate");
            self.paint(sibling, Color::Black);
            self.paint(parent, Color::Red);
            self.rotate_right(parent);
            sibling = self.left_of(parent);
        }

        let near = self.right_of(sibling);
        let far = self.left_of(sibling);
        if self.color_of(near) == Color::Black && self.color_of(far) == Color::Black {
            trace!("delete fixup at {parent}: black nephews, push deficiency up");
            self.paint(sibling, Color::Red);
            return (parent, self.parent_of(parent));
        }

        if self.color_of(far) == Color::Black {
            trace!("delete fixup at {parent}: red near nephew {near}, rotate sibling");
            self.paint(near, Color::Black);
            self.paint(sibling, Color::Red);
            self.rotate_left(sibling);
            sibling = self.left_of(parent);
        }

        trace!("delete fixup at {parent}: red far nephew, rotate parent");
        let parent_color = self.color_of(parent);
        let far = self.left_of(sibling);
        self.paint(sibling, parent_color);
        self.paint(parent, Color::Black);
        self.paint(far, Color::Black);
        self.rotate_right(parent);
        (self.root, NIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbset_config::TreeSettings;

    #[test]
    fn delete_missing_key_is_a_no_op() {
        let mut tree: RBTree<u32> = [5, 3, 8].into_iter().collect();
        let before: Vec<_> = tree.iter_colored().map(|(k, c)| (*k, c)).collect();

        assert!(!tree.delete(&4));
        assert_eq!(tree.len(), 3);
        let after: Vec<_> = tree.iter_colored().map(|(k, c)| (*k, c)).collect();
        assert_eq!(before, after);

        let mut empty: RBTree<u32> = RBTree::new();
        assert!(!empty.delete(&1));
        assert_eq!(empty.pop_first(), None);
        assert_eq!(empty.pop_last(), None);
    }

    #[test]
    fn delete_only_key_empties_tree() {
        let mut tree: RBTree<u32> = [1].into_iter().collect();
        assert!(tree.delete(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.root, NIL);
        assert!(tree.validate());
    }

    #[test]
    fn delete_red_leaf_needs_no_fixup() {
        let mut tree: RBTree<u32> = [10, 20, 30, 15].into_iter().collect();
        assert!(tree.delete(&15));
        assert!(tree.validate());
        assert_eq!(tree.traverse(), vec![&10, &20, &30]);
    }

    #[test]
    fn delete_node_with_two_children_uses_successor() {
        let mut tree: RBTree<u32> = (1..=15).collect();
        let root_key = tree.nodes[tree.root as usize].key;

        assert_eq!(tree.take(&root_key), Some(root_key));
        assert!(tree.validate());
        assert!(!tree.contains(&root_key));
        assert_eq!(tree.len(), 14);
        let expected: Vec<u32> = (1..=15).filter(|&k| k != root_key).collect();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn delete_from_left_edge() {
        let mut tree: RBTree<u32> = (1..=10).collect();
        for k in [1, 3, 2] {
            assert!(tree.delete(&k));
            assert!(tree.validate(), "invalid after deleting {k}");
        }
        assert_eq!(tree.traverse(), vec![&4, &5, &6, &7, &8, &9, &10]);
    }

    #[test]
    fn delete_every_key_both_directions() {
        for order in [
            (0..64u32).collect::<Vec<_>>(),
            (0..64u32).rev().collect::<Vec<_>>(),
        ] {
            let mut tree: RBTree<u32> = (0..64).collect();
            for k in order {
                assert!(tree.delete(&k));
                assert!(tree.validate(), "invalid after deleting {k}");
            }
            assert!(tree.is_empty());
        }
    }

    #[test]
    fn pops_come_out_in_order() {
        let mut tree: RBTree<u32> = [9, 2, 7, 4, 5, 1, 8, 3, 6].into_iter().collect();
        assert_eq!(tree.pop_first(), Some(1));
        assert_eq!(tree.pop_last(), Some(9));
        assert_eq!(tree.pop_first(), Some(2));
        assert!(tree.validate());

        let mut rest = Vec::new();
        while let Some(k) = tree.pop_last() {
            assert!(tree.validate());
            rest.push(k);
        }
        assert_eq!(rest, vec![8, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn checked_tree_accepts_valid_deletes() {
        let settings = TreeSettings {
            check_invariants: true,
            ..TreeSettings::default()
        };
        let mut tree = RBTree::with_settings(&settings).expect("valid settings");
        tree.extend(0..128u32);
        for k in (0..128u32).step_by(3) {
            assert!(tree.delete(&k));
        }
        assert_eq!(tree.len(), 128 - 43);
    }
}
