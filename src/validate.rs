use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::error::InvariantViolation;
use crate::node::{Color, NIL, NodeId};
use crate::tree::RBTree;

impl<K, C> RBTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Recompute every invariant over the whole tree.
    ///
    /// Returns the tree's black height on success. Costs `O(n)`; meant for
    /// tests and debugging, not hot paths.
    pub fn check(&self) -> Result<usize, InvariantViolation> {
        let black_height = self.check_structure()?;
        self.check_order()?;
        Ok(black_height)
    }

    /// `true` when [`check`](Self::check) finds nothing wrong.
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(_) => true,
            Err(violation) => {
                debug!("validate: {violation}");
                false
            }
        }
    }

    fn check_order(&self) -> Result<(), InvariantViolation> {
        let mut prev: Option<&K> = None;
        for (position, key) in self.iter().enumerate() {
            if let Some(prev) = prev {
                if self.compare(prev, key) != Ordering::Less {
                    return Err(InvariantViolation::OutOfOrder { position });
                }
            }
            prev = Some(key);
        }
        Ok(())
    }
}

impl<K, C> RBTree<K, C> {
    /// Colors, parent links, black heights and node count.
    fn check_structure(&self) -> Result<usize, InvariantViolation> {
        let stored = self.nodes.len();
        if self.root == NIL {
            if stored != 0 {
                return Err(InvariantViolation::LengthMismatch { reachable: 0, stored });
            }
            return Ok(0);
        }

        let root = &self.nodes[self.root as usize];
        if root.parent != NIL {
            return Err(InvariantViolation::RootHasParent {
                node: self.root,
                parent: root.parent,
            });
        }
        if root.color == Color::Red {
            return Err(InvariantViolation::RedRoot { node: self.root });
        }

        let mut expected: Option<usize> = None;
        let mut reachable = 0usize;
        // (node, black nodes strictly above it)
        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 0)];

        while let Some((id, above)) = stack.pop() {
            reachable += 1;
            if reachable > stored {
                return Err(InvariantViolation::LengthMismatch { reachable, stored });
            }

            let node = &self.nodes[id as usize];
            let blacks = above + usize::from(node.color == Color::Black);

            for child in [node.left, node.right] {
                if child == NIL {
                    match expected {
                        None => expected = Some(blacks),
                        Some(e) if e != blacks => {
                            return Err(InvariantViolation::BlackHeightMismatch {
                                node: id,
                                expected: e,
                                found: blacks,
                            });
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                let c = &self.nodes[child as usize];
                if c.parent != id {
                    return Err(InvariantViolation::BrokenParentLink {
                        node: child,
                        recorded: c.parent,
                        actual: id,
                    });
                }
                if node.color == Color::Red && c.color == Color::Red {
                    return Err(InvariantViolation::RedRedEdge { node: id, child });
                }
                stack.push((child, blacks));
            }
        }

        if reachable != stored {
            return Err(InvariantViolation::LengthMismatch { reachable, stored });
        }
        Ok(expected.unwrap_or(0))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        if self.root == NIL {
            return 0;
        }

        let mut height = 0;
        let mut stack = vec![(self.root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id as usize];
            for child in [node.left, node.right] {
                if child != NIL {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Black nodes on any path from the root down to an absent child, root included.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;

        while current != NIL {
            if self.nodes[current as usize].color == Color::Black {
                height += 1;
            }
            current = self.left_of(current);
        }

        height
    }
}

impl<K: fmt::Display, C> RBTree<K, C> {
    /// Indented structure dump, one `[R]`/`[B]` node per line, root first.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl<K: fmt::Display, C> fmt::Display for RBTree<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root == NIL {
            return writeln!(f, "Empty tree");
        }

        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id as usize];
            let color = match node.color {
                Color::Red => 'R',
                Color::Black => 'B',
            };
            writeln!(f, "{}[{}] {}", "  ".repeat(depth), color, node.key)?;

            // right first so the left subtree prints first
            if node.right != NIL {
                stack.push((node.right, depth + 1));
            }
            if node.left != NIL {
                stack.push((node.left, depth + 1));
            }
        }
        Ok(())
    }
}
