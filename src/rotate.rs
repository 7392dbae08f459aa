use log::trace;

use crate::node::{NIL, NodeId};
use crate::tree::RBTree;

impl<K, C> RBTree<K, C> {
    /// Promote `x.right` into `x`'s position.
    ///
    /// Panics if `x` has no right child; the fixups never ask for that.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let y = self.right_of(x);
        assert!(y != NIL, "rotate_left: node {x} has no right child");
        trace!("rotate left at {x}, promoting {y}");

        let y_left = self.left_of(y);
        let x_parent = self.parent_of(x);

        self.nodes[x as usize].right = y_left;
        if y_left != NIL {
            self.nodes[y_left as usize].parent = x;
        }

        self.nodes[y as usize].parent = x_parent;
        if x == self.root {
            self.root = y;
        } else if x == self.left_of(x_parent) {
            self.nodes[x_parent as usize].left = y;
        } else {
            self.nodes[x_parent as usize].right = y;
        }

        self.nodes[y as usize].left = x;
        self.nodes[x as usize].parent = y;
    }

    /// Promote `y.left` into `y`'s position.
    ///
    /// Panics if `y` has no left child.
    pub(crate) fn rotate_right(&mut self, y: NodeId) {
        let x = self.left_of(y);
        assert!(x != NIL, "rotate_right: node {y} has no left child");
        trace!("rotate right at {y}, promoting {x}");

        let x_right = self.right_of(x);
        let y_parent = self.parent_of(y);

        self.nodes[y as usize].left = x_right;
        if x_right != NIL {
            self.nodes[x_right as usize].parent = y;
        }

        self.nodes[x as usize].parent = y_parent;
        if y == self.root {
            self.root = x;
        } else if y == self.right_of(y_parent) {
            self.nodes[y_parent as usize].right = x;
        } else {
            self.nodes[y_parent as usize].left = x;
        }

        self.nodes[x as usize].right = y;
        self.nodes[y as usize].parent = x;
    }
}
