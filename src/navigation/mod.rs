//! Step-indexed navigation
//!
//! States are the step positions 0..len-1. Both ends are reachable and
//! re-visitable; moving past either end is a no-op, never an error and
//! never a wrap-around.

mod highlight;

pub use highlight::{Highlight, Outcome};

use tracing::{debug, trace};

/// Cursor over a plan of `len` steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    len: usize,
    current: usize,
}

impl Navigator {
    /// Cursor at step 0
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Current step, `None` when there are no steps
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.len
    }

    /// No steps to navigate
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// At step 0
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// At the final step
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    /// Move one step forward; returns whether the cursor moved
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.len {
            self.current += 1;
            trace!(step = self.current, "advanced");
            true
        } else {
            debug!(step = self.current, "already at the last step");
            false
        }
    }

    /// Move one step back; returns whether the cursor moved
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            trace!(step = self.current, "retreated");
            true
        } else {
            debug!("already at the first step");
            false
        }
    }

    /// Jump to step 0
    pub fn rewind(&mut self) {
        self.current = 0;
        trace!(step = self.current, "rewound");
    }

    /// Jump to the final step
    pub fn fast_forward(&mut self) {
        self.current = self.len.saturating_sub(1);
        trace!(step = self.current, "fast-forwarded");
    }

    /// Jump to `step`, clamped into range; returns the step landed on
    pub fn jump_to(&mut self, step: usize) -> usize {
        self.current = step.min(self.len.saturating_sub(1));
        trace!(requested = step, step = self.current, "jumped");
        self.current
    }
}
