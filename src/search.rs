use std::cmp::Ordering;

use crate::node::{self, NIL, NodeId};
use crate::tree::RBTree;

/// Where a descent for some key ended.
pub(crate) enum Slot {
    /// An equal key is stored at this node.
    Occupied(NodeId),
    /// The key belongs under `parent` (`NIL` for an empty tree) on the given side.
    Vacant { parent: NodeId, is_left: bool },
}

impl<K, C> RBTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Locate the node holding `key`, if any.
    pub(crate) fn find(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;

        while current != NIL {
            match self.compare(key, &self.nodes[current as usize].key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = self.left_of(current),
                Ordering::Greater => current = self.right_of(current),
            }
        }

        None
    }

    /// Descend to `key`'s node or to the absent child it would occupy.
    pub(crate) fn locate(&self, key: &K) -> Slot {
        let mut current = self.root;
        let mut parent = NIL;
        let mut is_left = false;

        while current != NIL {
            parent = current;
            match self.compare(key, &self.nodes[current as usize].key) {
                Ordering::Equal => return Slot::Occupied(current),
                Ordering::Less => {
                    current = self.left_of(current);
                    is_left = true;
                }
                Ordering::Greater => {
                    current = self.right_of(current);
                    is_left = false;
                }
            }
        }

        Slot::Vacant { parent, is_left }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(|id| &self.nodes[id as usize].key)
    }
}

impl<K, C> RBTree<K, C> {
    /// Smallest stored key.
    pub fn first(&self) -> Option<&K> {
        self.key_at(node::min_node(&self.nodes, self.root))
    }

    /// Largest stored key.
    pub fn last(&self) -> Option<&K> {
        self.key_at(node::max_node(&self.nodes, self.root))
    }

    fn key_at(&self, id: NodeId) -> Option<&K> {
        if id == NIL {
            None
        } else {
            Some(&self.nodes[id as usize].key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;

    #[test]
    fn test_insert_and_search() {
        let mut tree = RBTree::new();

        assert!(tree.insert(10));
        assert!(tree.insert(20));
        assert!(tree.insert(5));
        assert!(tree.insert(15));

        assert!(tree.contains(&10));
        assert!(tree.contains(&20));
        assert!(tree.contains(&5));
        assert!(tree.contains(&15));

        assert!(!tree.contains(&25));
        assert!(!tree.contains(&0));
    }

    #[test]
    fn search_empty_tree() {
        let tree: RBTree<i64> = RBTree::new();
        assert!(!tree.contains(&1));
        assert_eq!(tree.get(&1), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert!(matches!(
            tree.locate(&1),
            Slot::Vacant { parent: NIL, .. }
        ));
    }

    #[test]
    fn locate_reports_side() {
        let tree: RBTree<u32> = [20, 10, 30].into_iter().collect();
        let ten = tree.find(&10).expect("10 is stored");
        match tree.locate(&5) {
            Slot::Vacant { parent, is_left } => {
                assert_eq!(parent, ten);
                assert!(is_left);
            }
            Slot::Occupied(_) => panic!("5 is not stored"),
        }
        assert!(matches!(tree.locate(&30), Slot::Occupied(_)));
    }

    #[test]
    fn first_and_last() {
        let tree: RBTree<u32> = [8, 3, 12, 1, 9].into_iter().collect();
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&12));
    }

    #[test]
    fn custom_comparator_reverses_order() {
        let mut tree = RBTree::<u32, _>::with_comparator(|a, b| b.cmp(a));
        for k in [3, 1, 4, 1, 5, 9, 2, 6] {
            tree.insert(k);
        }
        assert_eq!(tree.first(), Some(&9));
        assert_eq!(tree.last(), Some(&1));
        assert!(tree.contains(&4));
        assert!(tree.validate());

        let wrapped: RBTree<Reverse<u32>> = [1, 2, 3].into_iter().map(Reverse).collect();
        assert_eq!(wrapped.first(), Some(&Reverse(3)));
    }

    #[test]
    fn get_returns_stored_key() {
        // Ordered by the first field only, so probes can differ in the second.
        let mut tree = RBTree::<(u32, &str), _>::with_comparator(|a, b| a.0.cmp(&b.0));
        tree.insert((1, "one"));
        tree.insert((2, "two"));
        assert_eq!(tree.get(&(2, "")), Some(&(2, "two")));
        assert_eq!(tree.get(&(3, "")), None);
    }
}
