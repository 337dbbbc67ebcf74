//! Renderer-agnostic projection of one step

use std::fmt;

use bitvec::prelude::*;

use crate::array::{SortedArray, Value};
use crate::planner::{SearchStep, StepPlan};
use crate::tree::{NodePath, SearchTree};

/// Info-line state at one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Outcome {
    /// The probe matched
    Found {
        /// Matched value
        value: Value,
        /// Its array index
        index: usize,
    },

    /// The window emptied without a match
    NotFound {
        /// Value searched for
        target: Value,
    },

    /// Still narrowing the window
    Searching {
        /// Step position (0-based)
        step: usize,
        /// Probed index
        index: usize,
        /// Probed value
        value: Value,
    },
}

impl Outcome {
    /// Search has finished at this step
    pub fn is_final(&self) -> bool {
        !matches!(self, Outcome::Searching { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found { value, index } => {
                write!(f, "Target {} found at index {}.", value, index)
            }
            Outcome::NotFound { target } => {
                write!(f, "Target {} not found in the array.", target)
            }
            Outcome::Searching { step, index, value } => {
                write!(f, "Step {}: Searching index {}, Value {}", step + 1, index, value)
            }
        }
    }
}

/// What a renderer should light up at one step
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Highlight {
    /// Step position (0-based)
    pub step: usize,

    /// Total steps in the plan
    pub total_steps: usize,

    /// Probed array index, absent on the terminal step of a miss
    pub probed_index: Option<usize>,

    /// Path from the tree root to the probed node
    pub active_node: Option<NodePath>,

    /// One bit per array index, set outside the window
    pub excluded: BitVec,

    /// Info-line state
    pub outcome: Outcome,
}

impl Highlight {
    /// Project step `step` of `plan`
    ///
    /// Returns `None` only when `step` is out of range.
    pub fn project(
        step: usize,
        plan: &StepPlan,
        array: &SortedArray,
        tree: &SearchTree,
    ) -> Option<Self> {
        let current = plan.get(step)?;
        Some(Self::from_step(step, current, plan, array, tree))
    }

    /// Project `current`, known to sit at position `step` of `plan`
    pub fn from_step(
        step: usize,
        current: &SearchStep,
        plan: &StepPlan,
        array: &SortedArray,
        tree: &SearchTree,
    ) -> Self {
        let is_last = step + 1 == plan.len();

        let mut excluded = bitvec![0; array.len()];
        for index in 0..array.len() {
            if current.excludes(index) {
                excluded.set(index, true);
            }
        }

        let probe = current.mid.and_then(|m| array.get(m).map(|v| (m, v)));
        let outcome = match probe {
            Some((index, value)) if current.is_hit() => Outcome::Found { value, index },
            Some((index, value)) if !is_last => Outcome::Searching { step, index, value },
            _ => Outcome::NotFound {
                target: plan.target(),
            },
        };

        Self {
            step,
            total_steps: plan.len(),
            probed_index: current.mid,
            active_node: current.mid.and_then(|m| tree.path_to(m)),
            excluded,
            outcome,
        }
    }

    /// Indices outside the window, ascending
    pub fn excluded_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.excluded.iter_ones()
    }

    /// Whether `index` is outside the window
    pub fn is_excluded(&self, index: usize) -> bool {
        self.excluded.get(index).is_some_and(|bit| *bit)
    }
}
