//! Optional spatial annotation of the tree
//!
//! Topology is fixed by the midpoint rule; coordinates are a separate pass
//! for renderers. Each node owns a horizontal band [x_min, x_max] and sits
//! at its centre. Its children split the band at the parent's x, and every
//! level sits `level_step` below the previous one.

use super::{BstNode, SearchTree};
use crate::array::Value;

/// Layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct LayoutConfig {
    /// Horizontal distance per array element
    pub spacing: f64,

    /// Vertical offset per tree level (negative = downwards)
    pub level_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 1.5,
            level_step: -3.0,
        }
    }
}

/// Placement of one node
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct NodePosition {
    /// Array index of the node
    pub index: usize,
    /// Node value
    pub value: Value,
    /// Depth (root = 0)
    pub depth: usize,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// Parent-to-child link, by array index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Edge {
    /// Parent index
    pub parent: usize,
    /// Child index
    pub child: usize,
}

/// Coordinates for every node plus the edge list
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeLayout {
    /// Sorted by array index
    positions: Vec<NodePosition>,
    edges: Vec<Edge>,
}

impl TreeLayout {
    /// Lay out `tree` inside the band `[-n*spacing, n*spacing]`
    pub fn compute(tree: &SearchTree, config: &LayoutConfig) -> Self {
        let half_width = tree.len() as f64 * config.spacing;
        let mut layout = Self {
            positions: Vec::with_capacity(tree.len()),
            edges: Vec::with_capacity(tree.len().saturating_sub(1)),
        };

        if let Some(root) = tree.root() {
            layout.place(root, -half_width, half_width, 0, config);
        }
        layout.positions.sort_by_key(|p| p.index);
        layout
    }

    fn place(
        &mut self,
        node: &BstNode,
        x_min: f64,
        x_max: f64,
        depth: usize,
        config: &LayoutConfig,
    ) {
        let x = (x_min + x_max) / 2.0;
        self.positions.push(NodePosition {
            index: node.index,
            value: node.value,
            depth,
            x,
            y: depth as f64 * config.level_step,
        });

        if let Some(left) = node.left.as_deref() {
            self.edges.push(Edge {
                parent: node.index,
                child: left.index,
            });
            self.place(left, x_min, x, depth + 1, config);
        }
        if let Some(right) = node.right.as_deref() {
            self.edges.push(Edge {
                parent: node.index,
                child: right.index,
            });
            self.place(right, x, x_max, depth + 1, config);
        }
    }

    /// Position of the node at array index `index`
    pub fn position(&self, index: usize) -> Option<&NodePosition> {
        self.positions
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|i| &self.positions[i])
    }

    /// All positions, ordered by array index
    pub fn positions(&self) -> &[NodePosition] {
        &self.positions
    }

    /// Parent-to-child edges in pre-order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
