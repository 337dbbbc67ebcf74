//! # Step-through binary search with a BST view
//!
//! This library computes everything a visualizer needs to walk through a
//! binary search one iteration at a time, alongside the balanced binary
//! search tree the search implicitly descends.
//!
//! ## Core Pieces
//!
//! 1. **Array**: `[2, 4, ..., 2n]`, strictly increasing and deterministic
//! 2. **Tree**: midpoint recursion m = ⌊(start + end) / 2⌋ over the array
//! 3. **Plan**: one recorded step per search iteration
//! 4. **Navigation**: a bounded cursor over the plan, projected into a
//!    highlight (probed index, tree node, excluded indices, info line)
//!
//! The tree and the search split at the same midpoint, so the node probed
//! at iteration i always sits at depth i of the tree.
//!
//! ## Usage Example
//!
//! ```
//! use binsearch_viz::{build_session, Outcome};
//!
//! let mut session = build_session(7, 10)?;
//! while session.advance() {}
//! assert_eq!(
//!     session.current_highlight().outcome,
//!     Outcome::Found { value: 10, index: 4 }
//! );
//! # Ok::<(), binsearch_viz::SessionError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod array; // Sorted input sequence
pub mod navigation; // Cursor and highlight projection
pub mod planner; // Binary search step recording
pub mod session; // Wiring and entry point
pub mod tree; // Midpoint-built BST and layout

// Re-exports for convenience
pub use array::{SortedArray, Value};
pub use navigation::{Highlight, Navigator, Outcome};
pub use planner::{PlanMode, SearchStep, StepPlan};
pub use session::{build_session, Session, SessionConfig};
pub use tree::{BstNode, LayoutConfig, NodePath, SearchTree, TreeLayout};

use thiserror::Error;

/// Input validation failures
///
/// Raised before any session state is built. Navigation and planning never
/// fail once a session exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Length is not a positive integer
    #[error("Invalid array length: {0} (expected a positive integer)")]
    InvalidLength(String),

    /// Target is not an integer
    #[error("Invalid target: {0} (expected an integer)")]
    InvalidTarget(String),

    /// Length exceeds the configured presentation cap
    #[error("Array length {length} exceeds maximum {max}")]
    LengthOutOfRange {
        /// Requested length
        length: usize,
        /// Configured cap
        max: usize,
    },

    /// Supplied values are not strictly increasing
    #[error("Values are not strictly increasing at index {index}")]
    NotSorted {
        /// First offending position
        index: usize,
    },
}
