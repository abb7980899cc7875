/// A handle identifying a node within one [`Tree`](crate::tree::Tree).
///
/// `NodeId` is an arena index, not a pointer: it is only ever minted when a
/// [`Node`] is pushed into the tree's node vector, so every `NodeId` a caller
/// holds indexes a live node for the lifetime of the tree that produced it.
/// A `NodeId` from one tree is meaningless against another.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// The id of the root node of any tree.
    ///
    /// ```
    /// use suffix_tree::tree::{NodeId, Tree};
    ///
    /// let tree = Tree::build(b"word", b'\0').unwrap();
    /// assert_eq!(tree.root(), NodeId::root());
    /// ```
    #[inline]
    pub const fn root() -> Self {
        NodeId(0)
    }

    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A node in the suffix tree.
///
/// Every node except the root carries an incoming edge label `S[start..=end]`.
/// Children are kept as an insertion-ordered doubly linked list (`first_child`,
/// `last_child`, and each child's `prev`/`next`) so that [`insert_before`] can
/// splice an internal node onto an edge in O(1) without reordering siblings.
///
/// [`insert_before`]: crate::tree::builder::insert_before
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    /// Start index of the incoming edge label into the tree's string. `-1` for the root.
    pub(crate) start: isize,
    /// End index (inclusive) of the incoming edge label. `-1` for the root.
    pub(crate) end: isize,
    pub(crate) depth: usize,
    /// For a leaf, the start index of the suffix it represents. For an
    /// internal node, the `term_number` of some descendant leaf, used as a
    /// witness for path-label reconstruction.
    pub(crate) term_number: usize,
    pub(crate) suffix_link: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            parent: None,
            start: -1,
            end: -1,
            depth: 0,
            term_number: 0,
            suffix_link: None,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
        }
    }

    pub(crate) fn child(
        parent: NodeId,
        start: usize,
        end: usize,
        depth: usize,
        term_number: usize,
    ) -> Self {
        Self {
            parent: Some(parent),
            start: start as isize,
            end: end as isize,
            depth,
            term_number,
            suffix_link: None,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    /// Length of the incoming edge label. Zero for the root.
    #[inline]
    pub(crate) fn edge_len(&self) -> usize {
        if self.start < 0 {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }
}
