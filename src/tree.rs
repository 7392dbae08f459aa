use std::cmp::Ordering;
use std::fmt;

use log::debug;
use rbset_config::{ConfigResult, DuplicatePolicy, MAX_NODES, TreeSettings};

use crate::node::{Color, NIL, Node, NodeId};

fn default_compare<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Ordered set of keys kept in a red-black tree.
///
/// Nodes live in a dense arena and refer to each other by index; a node's
/// `parent` is a plain index and never owns anything. Search, insertion and
/// deletion are `O(log n)` in the worst case.
#[derive(Clone)]
pub struct RBTree<K, C = fn(&K, &K) -> Ordering> {
    pub(crate) root: NodeId,
    pub(crate) nodes: Vec<Node<K>>,
    pub(crate) cmp: C,
    pub(crate) duplicates: DuplicatePolicy,
    pub(crate) check_invariants: bool,
}

impl<K: Ord> RBTree<K> {
    pub fn new() -> Self {
        Self::with_comparator(default_compare::<K>)
    }

    /// Build an empty tree from validated settings.
    pub fn with_settings(settings: &TreeSettings) -> ConfigResult<Self> {
        Self::with_settings_and_comparator(settings, default_compare::<K>)
    }
}

impl<K: Ord> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RBTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Build an empty tree ordered by `cmp`, which must be a total order.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: NIL,
            nodes: Vec::new(),
            cmp,
            duplicates: DuplicatePolicy::default(),
            check_invariants: false,
        }
    }

    pub fn with_settings_and_comparator(settings: &TreeSettings, cmp: C) -> ConfigResult<Self> {
        settings.validate()?;
        let mut tree = Self::with_comparator(cmp);
        tree.nodes.reserve(settings.initial_capacity);
        tree.duplicates = settings.duplicates;
        tree.check_invariants = settings.check_invariants;
        debug!(
            "tree created: duplicates={}, capacity={}, check_invariants={}",
            settings.duplicates, settings.initial_capacity, settings.check_invariants
        );
        Ok(tree)
    }

    #[inline]
    pub(crate) fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Run the full invariant check if the tree was configured to.
    pub(crate) fn after_mutation(&self) {
        if !self.check_invariants {
            return;
        }
        if let Err(violation) = self.check() {
            panic!("red-black invariant broken after mutation: {violation}");
        }
    }
}

impl<K, C> RBTree<K, C> {
    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    pub fn clear(&mut self) {
        self.root = NIL;
        self.nodes.clear();
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    #[inline]
    pub(crate) fn left_of(&self, n: NodeId) -> NodeId {
        self.nodes[n as usize].left
    }

    #[inline]
    pub(crate) fn right_of(&self, n: NodeId) -> NodeId {
        self.nodes[n as usize].right
    }

    #[inline]
    pub(crate) fn parent_of(&self, n: NodeId) -> NodeId {
        self.nodes[n as usize].parent
    }

    /// Color of `n`, with the absent child counted as black.
    #[inline]
    pub(crate) fn color_of(&self, n: NodeId) -> Color {
        if n == NIL {
            Color::Black
        } else {
            self.nodes[n as usize].color
        }
    }

    /// Recolor `n`; painting the absent child is a no-op.
    #[inline]
    pub(crate) fn paint(&mut self, n: NodeId, color: Color) {
        if n != NIL {
            self.nodes[n as usize].color = color;
        }
    }

    /// Push a fresh red node into the arena. It is not linked yet.
    pub(crate) fn alloc(&mut self, key: K) -> NodeId {
        let id = self.nodes.len();
        assert!(id < MAX_NODES, "node arena exhausted at {id} nodes");
        self.nodes.push(Node::new(key));
        id as NodeId
    }

    /// Swap the keys stored at two distinct nodes, leaving links and colors alone.
    pub(crate) fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi as usize);
        std::mem::swap(&mut head[lo as usize].key, &mut tail[0].key);
    }

    /// Drop an unlinked node from the arena and hand back its key.
    ///
    /// The last arena node moves into the freed slot, so its parent and
    /// children are repointed first. `id` must already be spliced out of the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> K {
        let last = (self.nodes.len() - 1) as NodeId;
        if id != last {
            let moved = &self.nodes[last as usize];
            let (parent, left, right) = (moved.parent, moved.left, moved.right);

            if parent == NIL {
                self.root = id;
            } else if self.nodes[parent as usize].left == last {
                self.nodes[parent as usize].left = id;
            } else {
                self.nodes[parent as usize].right = id;
            }
            if left != NIL {
                self.nodes[left as usize].parent = id;
            }
            if right != NIL {
                self.nodes[right as usize].parent = id;
            }
        }
        self.nodes.swap_remove(id as usize).key
    }
}

impl<K: fmt::Debug, C> fmt::Debug for RBTree<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RBTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> Extend<K> for RBTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
