//! BST node and index span
//!
//! Span = inclusive index range [start, end] of the sorted array
//! Node value comes from the midpoint: m = ⌊(start + end) / 2⌋
//!   Left child: [start, m-1]
//!   Right child: [m+1, end]

use std::fmt;

use crate::array::Value;

/// Inclusive index range (implicit subtree)
///
/// Signed so that the empty span `[0, -1]` of a one-sided split is
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index (inclusive)
    pub start: isize,

    /// Last index (inclusive)
    pub end: isize,
}

impl Span {
    /// Span covering an array of `len` elements
    pub fn root(len: usize) -> Self {
        Self {
            start: 0,
            end: len as isize - 1,
        }
    }

    /// No indices covered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of indices covered
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    /// Midpoint index, rounding down
    ///
    /// This must match the probe formula of the search exactly, since the
    /// node at a given midpoint is the one lit up for that probe.
    #[inline]
    pub fn midpoint(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some((self.start + self.end).div_euclid(2) as usize)
        }
    }

    /// Spans on either side of the midpoint, excluding it
    pub fn children(&self) -> (Span, Span) {
        debug_assert!(!self.is_empty(), "Empty span has no children");

        let mid = (self.start + self.end).div_euclid(2);
        let left = Span {
            start: self.start,
            end: mid - 1,
        };
        let right = Span {
            start: mid + 1,
            end: self.end,
        };

        (left, right)
    }

    /// Whether `index` falls inside the span
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let index = index as isize;
        self.start <= index && index <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// One array element in tree form
///
/// Each node exclusively owns its children. No parent links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstNode {
    /// Element value
    pub value: Value,

    /// Position of the element in the sorted array
    pub index: usize,

    /// Subtree of smaller values
    pub left: Option<Box<BstNode>>,

    /// Subtree of larger values
    pub right: Option<Box<BstNode>>,
}

impl BstNode {
    /// Build the subtree for `span` of `values`
    ///
    /// An empty span is the base case and yields `None`.
    pub fn build(values: &[Value], span: Span) -> Option<Box<BstNode>> {
        let index = span.midpoint()?;
        let (left_span, right_span) = span.children();

        Some(Box::new(BstNode {
            value: values[index],
            index,
            left: Self::build(values, left_span),
            right: Self::build(values, right_span),
        }))
    }

    /// No children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels in this subtree (a leaf has height 1)
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        1 + left.max(right)
    }

    /// Number of nodes in this subtree
    pub fn count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.count())
            + self.right.as_ref().map_or(0, |n| n.count())
    }
}
