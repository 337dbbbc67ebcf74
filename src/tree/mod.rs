//! Midpoint-built binary search tree
//!
//! Same recursion as the search itself: split [start, end] at
//! m = ⌊(start + end) / 2⌋, place element m at the node, recurse on both
//! remainders. The node probed at search iteration i therefore sits at
//! depth i, and height equals the worst-case number of probes.

pub mod layout;
mod node;
mod traversal;

pub use layout::{Edge, LayoutConfig, NodePosition, TreeLayout};
pub use node::{BstNode, Span};
pub use traversal::{Direction, InOrder, NodePath};

use crate::array::SortedArray;

/// Balanced BST over a sorted array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    /// Number of elements (and nodes)
    len: usize,

    /// Index range the tree was built over
    span: Span,

    /// Absent for an empty array
    root: Option<Box<BstNode>>,
}

impl SearchTree {
    /// Build the tree over every element of `array`
    pub fn build(array: &SortedArray) -> Self {
        Self::build_range(array, 0, array.len() as isize - 1)
    }

    /// Build over the inclusive index range `[start, end]`
    ///
    /// `start > end` yields an empty tree.
    pub fn build_range(array: &SortedArray, start: isize, end: isize) -> Self {
        let span = Span { start, end };
        let root = BstNode::build(array.as_slice(), span);
        let len = root.as_ref().map_or(0, |n| n.count());
        Self { len, span, root }
    }

    /// Root node
    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }

    /// Index range covered by the tree
    pub fn span(&self) -> Span {
        self.span
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// No nodes
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels (0 when empty)
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Nodes in ascending order
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    /// Path from the root to the node holding array index `index`
    pub fn path_to(&self, index: usize) -> Option<NodePath> {
        NodePath::locate(self.span, index)
    }

    /// Node holding array index `index`
    pub fn node_at(&self, index: usize) -> Option<&BstNode> {
        let root = self.root()?;
        self.path_to(index)?.resolve(root)
    }

    /// Optional coordinate pass for renderers
    pub fn layout(&self, config: &LayoutConfig) -> TreeLayout {
        TreeLayout::compute(self, config)
    }
}
