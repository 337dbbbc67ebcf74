//! Root-to-node paths and in-order walking
//!
//! A node is located by its array index alone: starting from the root
//! span, midpoint arithmetic decides at every level whether the index is
//! the probe itself or lies to its left or right. No node lookup table is
//! stored.

use super::{BstNode, Span};

/// Which child to descend into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Direction {
    /// Smaller values
    Left,

    /// Larger values
    Right,
}

/// Directions from the root to a node
///
/// The root itself has the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodePath {
    steps: Vec<Direction>,
}

impl NodePath {
    /// Path of the node whose index is `index` in the tree built over
    /// `root`, or `None` if the index is outside it
    pub fn locate(root: Span, index: usize) -> Option<Self> {
        let mut span = root;
        if !span.contains(index) {
            return None;
        }

        let mut steps = Vec::new();
        loop {
            let mid = span.midpoint()?;
            if index == mid {
                return Some(Self { steps });
            }

            let (left, right) = span.children();
            if index < mid {
                steps.push(Direction::Left);
                span = left;
            } else {
                steps.push(Direction::Right);
                span = right;
            }
        }
    }

    /// Depth of the node (root = 0)
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Directions in root-to-node order
    pub fn directions(&self) -> &[Direction] {
        &self.steps
    }

    /// Follow the path from `root`
    pub fn resolve<'a>(&self, root: &'a BstNode) -> Option<&'a BstNode> {
        let mut node = root;
        for direction in &self.steps {
            let next = match direction {
                Direction::Left => node.left.as_deref(),
                Direction::Right => node.right.as_deref(),
            };
            node = next?;
        }
        Some(node)
    }

    /// Span of the subtree rooted at the end of the path, for a tree
    /// built over `root`
    pub fn span(&self, root: Span) -> Span {
        let mut span = root;
        for direction in &self.steps {
            if span.is_empty() {
                break;
            }
            let (left, right) = span.children();
            span = match direction {
                Direction::Left => left,
                Direction::Right => right,
            };
        }
        span
    }
}

/// In-order iterator (ascending values)
///
/// Stack depth is bounded by the tree height.
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a BstNode>,
}

impl<'a> InOrder<'a> {
    /// Start walking from `root`
    pub fn new(root: Option<&'a BstNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a BstNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a BstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_root() {
        let path = NodePath::locate(Span::root(7), 3).unwrap();
        assert_eq!(path.depth(), 0);
        assert!(path.directions().is_empty());
    }

    #[test]
    fn test_locate_descends() {
        // [0..6]: root 3, right child 5, its left child 4
        let path = NodePath::locate(Span::root(7), 4).unwrap();
        assert_eq!(path.directions(), &[Direction::Right, Direction::Left]);
        assert_eq!(path.span(Span::root(7)), Span { start: 4, end: 4 });
    }

    #[test]
    fn test_locate_out_of_range() {
        assert!(NodePath::locate(Span::root(7), 7).is_none());
        assert!(NodePath::locate(Span::root(0), 0).is_none());
    }

    #[test]
    fn test_resolve_matches_index() {
        let values: Vec<i64> = (1..=10).map(|i| i * 2).collect();
        let root = BstNode::build(&values, Span::root(values.len())).unwrap();
        for index in 0..values.len() {
            let path = NodePath::locate(Span::root(values.len()), index).unwrap();
            let node = path.resolve(&root).unwrap();
            assert_eq!(node.index, index);
            assert_eq!(node.value, values[index]);
        }
    }

    #[test]
    fn test_locate_offset_root() {
        // Tree over [2, 5]: root 3, right child 4, its right child 5
        let root = Span { start: 2, end: 5 };
        let path = NodePath::locate(root, 5).unwrap();
        assert_eq!(path.directions(), &[Direction::Right, Direction::Right]);
        assert_eq!(path.span(root), Span { start: 5, end: 5 });
        assert!(NodePath::locate(root, 1).is_none());
    }

    #[test]
    fn test_in_order_ascending() {
        let values = [2, 4, 6, 8, 10];
        let root = BstNode::build(&values, Span::root(values.len()));
        let walked: Vec<i64> = InOrder::new(root.as_deref()).map(|n| n.value).collect();
        assert_eq!(walked, values);
    }
}
