use std::cmp::Ordering;

use log::{debug, trace};
use rbset_config::DuplicatePolicy;

use crate::node::{Color, NIL, NodeId};
use crate::search::Slot;
use crate::tree::RBTree;

impl<K, C> RBTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Add `key` to the set.
    ///
    /// Returns `false` when an equal key is already stored. The tree's
    /// [`DuplicatePolicy`] decides whether the stored key is then kept or
    /// overwritten; the structure is untouched either way.
    pub fn insert(&mut self, key: K) -> bool {
        match self.locate(&key) {
            Slot::Occupied(id) => {
                if self.duplicates == DuplicatePolicy::Replace {
                    self.nodes[id as usize].key = key;
                }
                debug!("insert: equal key already at node {id} ({})", self.duplicates);
                false
            }
            Slot::Vacant { parent, is_left } => {
                self.attach(key, parent, is_left);
                true
            }
        }
    }

    /// Store `key`, handing back the equal key it displaced, if any.
    pub fn replace(&mut self, key: K) -> Option<K> {
        match self.locate(&key) {
            Slot::Occupied(id) => Some(std::mem::replace(&mut self.nodes[id as usize].key, key)),
            Slot::Vacant { parent, is_left } => {
                self.attach(key, parent, is_left);
                None
            }
        }
    }

    fn attach(&mut self, key: K, parent: NodeId, is_left: bool) -> NodeId {
        let new_id = self.alloc(key);

        if parent == NIL {
            self.root = new_id;
            self.nodes[new_id as usize].color = Color::Black;
        } else {
            self.nodes[new_id as usize].parent = parent;
            if is_left {
                self.nodes[parent as usize].left = new_id;
            } else {
                self.nodes[parent as usize].right = new_id;
            }
            self.insert_fixup(new_id);
        }

        debug!("insert: linked node {new_id}, {} keys", self.nodes.len());
        self.after_mutation();
        new_id
    }
}

impl<K, C> RBTree<K, C> {
    /// Restore "no red node has a red child" after linking the red node `z`.
    fn insert_fixup(&mut self, mut z: NodeId) {
        loop {
            let parent = self.parent_of(z);
            if parent == NIL || self.color_of(parent) == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.parent_of(parent);
            z = if parent == self.left_of(grandparent) {
                self.insert_fix_left(z, parent, grandparent)
            } else {
                self.insert_fix_right(z, parent, grandparent)
            };
        }

        let root = self.root;
        self.paint(root, Color::Black);
    }

    /// One fixup step with `parent` as the grandparent's left child.
    /// Returns the node the loop continues from.
    fn insert_fix_left(&mut self, z: NodeId, parent: NodeId, grandparent: NodeId) -> NodeId {
        let uncle = self.right_of(grandparent);

        if self.color_of(uncle) == Color::Red {
            trace!("insert fixup at {z}: red uncle {uncle}, recolor");
            self.paint(parent, Color::Black);
            self.paint(uncle, Color::Black);
            self.paint(grandparent, Color::Red);
            return grandparent;
        }

        let mut z = z;
        if z == self.right_of(parent) {
            trace!("insert fixup at {z}: triangle, rotate at parent {parent}");
            z = parent;
            self.rotate_left(z);
        }

        trace!("insert fixup at {z}: line, rotate at grandparent");
        let parent = self.parent_of(z);
        let grandparent = self.parent_of(parent);
        self.paint(parent, Color::Black);
        self.paint(grandparent, Color::Red);
        self.rotate_right(grandparent);
        z
    }

    // Mirror case: parent is the grandparent's right child
    fn insert_fix_right(&mut self, z: NodeId, parent: NodeId, grandparent: NodeId) -> NodeId {
        let uncle = self.left_of(grandparent);

        if self.color_of(uncle) == Color::Red {
            trace!("insert fixup at {z}: red uncle {uncle}, recolor");
            self.paint(parent, Color::Black);
            self.paint(uncle, Color::Black);
            self.paint(grandparent, Color::Red);
            return grandparent;
        }

        let mut z = z;
        if z == self.left_of(parent) {
            trace!("insert fixup at {z}: triangle, rotate at parent {parent}");
            z = parent;
            self.rotate_right(z);
        }

        trace!("insert fixup at {z}: line, rotate at grandparent");
        let parent = self.parent_of(z);
        let grandparent = self.parent_of(parent);
        self.paint(parent, Color::Black);
        self.paint(grandparent, Color::Red);
        self.rotate_left(grandparent);
        z
    }
}
