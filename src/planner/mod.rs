//! Binary search step planner
//!
//! Runs the classic iterative search once and records every iteration:
//!
//! ```text
//! left = 0, right = n - 1
//! while left <= right:
//!     mid = ⌊(left + right) / 2⌋
//!     record {left, right, mid}
//!     array[mid] == target  → record hit, stop
//!     array[mid] <  target  → left  = mid + 1
//!     array[mid] >  target  → right = mid - 1
//! miss → record {left, right, -1, not found}
//! ```
//!
//! The plan is built once per (array, target) pair and never mutated.

mod step;

pub use step::SearchStep;

use std::cmp::Ordering;

use tracing::debug;

use crate::array::Value;
use crate::tree::Span;

/// How the matching iteration is recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum PlanMode {
    /// The matching probe is recorded once, as the hit step
    #[default]
    Collapsed,

    /// The matching probe is recorded as a plain probe and then repeated
    /// as the hit step
    Verbatim,
}

/// Ordered steps of one search
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct StepPlan {
    target: Value,
    mode: PlanMode,
    steps: Vec<SearchStep>,
}

impl StepPlan {
    /// Plan the search for `target` over `values` (must be sorted)
    ///
    /// Always yields at least one step: an empty slice produces the single
    /// terminal step `{0, -1, -1, not found}`.
    pub fn compute(values: &[Value], target: Value, mode: PlanMode) -> Self {
        let mut steps = Vec::new();
        let mut window = Span::root(values.len());

        while let Some(mid) = window.midpoint() {
            let (left, right) = (window.start, window.end);
            match values[mid].cmp(&target) {
                Ordering::Equal => {
                    if mode == PlanMode::Verbatim {
                        steps.push(SearchStep::probe(left, right, mid));
                    }
                    steps.push(SearchStep::hit(left, right, mid));
                    break;
                }
                Ordering::Less => {
                    steps.push(SearchStep::probe(left, right, mid));
                    window.start = mid as isize + 1;
                }
                Ordering::Greater => {
                    steps.push(SearchStep::probe(left, right, mid));
                    window.end = mid as isize - 1;
                }
            }
        }

        if window.is_empty() {
            steps.push(SearchStep::exhausted(window.start, window.end));
        }

        debug!(
            target_value = target,
            len = values.len(),
            steps = steps.len(),
            found = steps.last().is_some_and(SearchStep::is_hit),
            "planned binary search"
        );

        Self {
            target,
            mode,
            steps,
        }
    }

    /// Value searched for
    pub fn target(&self) -> Value {
        self.target
    }

    /// Recording mode used
    pub fn mode(&self) -> PlanMode {
        self.mode
    }

    /// All steps in order
    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    /// Step at position `i`
    pub fn get(&self, i: usize) -> Option<&SearchStep> {
        self.steps.get(i)
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a computed plan
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Terminal step
    pub fn last(&self) -> Option<&SearchStep> {
        self.steps.last()
    }

    /// Index of the target, if the search hit
    pub fn found_index(&self) -> Option<usize> {
        self.last().filter(|s| s.is_hit()).and_then(|s| s.mid)
    }

    /// Distinct indices probed, in order
    pub fn probes(&self) -> impl Iterator<Item = usize> + '_ {
        let mut previous = None;
        self.steps.iter().filter_map(move |s| {
            let mid = s.mid?;
            if previous == Some(mid) {
                return None;
            }
            previous = Some(mid);
            Some(mid)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evens(n: i64) -> Vec<Value> {
        (1..=n).map(|i| i * 2).collect()
    }

    #[test]
    fn test_hit_collapsed() {
        let plan = StepPlan::compute(&evens(7), 10, PlanMode::Collapsed);
        assert_eq!(
            plan.steps(),
            &[
                SearchStep::probe(0, 6, 3),
                SearchStep::probe(4, 6, 5),
                SearchStep::hit(4, 4, 4),
            ]
        );
        assert_eq!(plan.found_index(), Some(4));
    }

    #[test]
    fn test_hit_verbatim_repeats_probe() {
        let plan = StepPlan::compute(&evens(7), 10, PlanMode::Verbatim);
        assert_eq!(plan.len(), 4);
        assert_eq!(plan.get(2), Some(&SearchStep::probe(4, 4, 4)));
        assert_eq!(plan.get(3), Some(&SearchStep::hit(4, 4, 4)));
        assert_eq!(plan.probes().collect::<Vec<_>>(), vec![3, 5, 4]);
    }

    #[test]
    fn test_miss() {
        let plan = StepPlan::compute(&evens(4), 5, PlanMode::Collapsed);
        assert_eq!(
            plan.steps(),
            &[
                SearchStep::probe(0, 3, 1),
                SearchStep::probe(2, 3, 2),
                SearchStep::exhausted(2, 1),
            ]
        );
        assert_eq!(plan.found_index(), None);
    }

    #[test]
    fn test_miss_below_range() {
        let plan = StepPlan::compute(&evens(3), 1, PlanMode::Collapsed);
        assert_eq!(plan.last(), Some(&SearchStep::exhausted(0, -1)));
    }

    #[test]
    fn test_miss_above_range() {
        let plan = StepPlan::compute(&evens(3), 100, PlanMode::Collapsed);
        assert_eq!(plan.last(), Some(&SearchStep::exhausted(3, 2)));
    }

    #[test]
    fn test_empty_array() {
        for mode in [PlanMode::Collapsed, PlanMode::Verbatim] {
            let plan = StepPlan::compute(&[], 7, mode);
            assert_eq!(plan.steps(), &[SearchStep::exhausted(0, -1)]);
        }
    }

    #[test]
    fn test_single_element_hit() {
        let plan = StepPlan::compute(&[2], 2, PlanMode::Collapsed);
        assert_eq!(plan.steps(), &[SearchStep::hit(0, 0, 0)]);
    }
}
