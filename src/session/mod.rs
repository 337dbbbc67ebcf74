//! One walk-through: array, tree, plan, and cursor
//!
//! A session is an owned value. Submitting new inputs means building a new
//! session; nothing is reset in place.

mod config;

pub use config::{SessionConfig, REFERENCE_MAX_LENGTH};

use tracing::debug;

use crate::array::{SortedArray, Value};
use crate::navigation::{Highlight, Navigator};
use crate::planner::{PlanMode, SearchStep, StepPlan};
use crate::tree::{SearchTree, TreeLayout};
use crate::SessionError;

/// Build a session over `[2, 4, ..., 2 * array_length]`
///
/// Fails with `InvalidLength` unless `array_length >= 1`; nothing is built
/// on failure.
pub fn build_session(array_length: i64, target: Value) -> Result<Session, SessionError> {
    Session::from_config(SessionConfig::new(array_length, target)?)
}

/// Array, tree, plan, and navigation cursor for one (length, target) pair
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    array: SortedArray,
    tree: SearchTree,
    plan: StepPlan,
    layout: Option<TreeLayout>,
    navigator: Navigator,
}

impl Session {
    /// Build from validated parameters
    pub fn from_config(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let array = SortedArray::evens(config.array_length);
        Ok(Self::assemble(config, array))
    }

    /// Build over caller-supplied sorted values
    pub fn over(array: SortedArray, target: Value, mode: PlanMode) -> Result<Self, SessionError> {
        if array.is_empty() {
            return Err(SessionError::InvalidLength("0".to_string()));
        }
        let config = SessionConfig {
            array_length: array.len(),
            target,
            plan_mode: mode,
            max_length: None,
            layout: None,
        };
        Ok(Self::assemble(config, array))
    }

    fn assemble(config: SessionConfig, array: SortedArray) -> Self {
        let tree = SearchTree::build(&array);
        let plan = StepPlan::compute(&array, config.target, config.plan_mode);
        let layout = config.layout.as_ref().map(|c| tree.layout(c));
        let navigator = Navigator::new(plan.len());

        debug!(
            len = array.len(),
            target_value = config.target,
            height = tree.height(),
            steps = plan.len(),
            "session built"
        );

        Self {
            config,
            array,
            tree,
            plan,
            layout,
            navigator,
        }
    }

    /// Move one step forward; no-op at the last step
    pub fn advance(&mut self) -> bool {
        self.navigator.advance()
    }

    /// Move one step back; no-op at the first step
    pub fn retreat(&mut self) -> bool {
        self.navigator.retreat()
    }

    /// Jump to the first step
    pub fn rewind(&mut self) {
        self.navigator.rewind();
    }

    /// Jump to the last step
    pub fn fast_forward(&mut self) {
        self.navigator.fast_forward();
    }

    /// Jump to `step`, clamped
    pub fn jump_to(&mut self, step: usize) -> usize {
        self.navigator.jump_to(step)
    }

    /// Current step position
    pub fn current_step(&self) -> usize {
        // A computed plan always has a terminal step
        self.navigator.current().unwrap_or(0)
    }

    /// Highlight for the current step
    pub fn current_highlight(&self) -> Highlight {
        let step = self.current_step();
        Highlight::from_step(step, &self.plan.steps()[step], &self.plan, &self.array, &self.tree)
    }

    /// Highlight for any step
    pub fn highlight_at(&self, step: usize) -> Option<Highlight> {
        Highlight::project(step, &self.plan, &self.array, &self.tree)
    }

    /// Highlights for every step, in order
    pub fn highlights(&self) -> impl Iterator<Item = Highlight> + '_ {
        self.plan
            .steps()
            .iter()
            .enumerate()
            .map(move |(i, s)| Highlight::from_step(i, s, &self.plan, &self.array, &self.tree))
    }

    /// At the first step
    pub fn is_first(&self) -> bool {
        self.navigator.is_first()
    }

    /// At the last step
    pub fn is_last(&self) -> bool {
        self.navigator.is_last()
    }

    /// Parameters the session was built from
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Searched array
    pub fn array(&self) -> &SortedArray {
        &self.array
    }

    /// Tree over the array
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Full plan
    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    /// Plan steps
    pub fn steps(&self) -> &[SearchStep] {
        self.plan.steps()
    }

    /// Value searched for
    pub fn target(&self) -> Value {
        self.config.target
    }

    /// Tree coordinates, if requested
    pub fn layout(&self) -> Option<&TreeLayout> {
        self.layout.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Outcome;

    #[test]
    fn test_build_session() {
        let session = build_session(7, 10).unwrap();
        assert_eq!(session.array().as_slice(), &[2, 4, 6, 8, 10, 12, 14]);
        assert_eq!(session.steps().len(), 3);
        assert_eq!(session.current_step(), 0);
        assert!(session.layout().is_none());
    }

    #[test]
    fn test_invalid_length_builds_nothing() {
        assert!(matches!(
            build_session(0, 10),
            Err(SessionError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut session = build_session(7, 10).unwrap();
        while session.advance() {}
        assert_eq!(
            session.current_highlight().outcome,
            Outcome::Found { value: 10, index: 4 }
        );
        session.rewind();
        assert_eq!(session.current_highlight().probed_index, Some(3));
    }

    #[test]
    fn test_layout_requested() {
        let config = SessionConfig::reference(7, 3).unwrap();
        let session = Session::from_config(config).unwrap();
        assert_eq!(session.layout().map(|l| l.positions().len()), Some(7));
    }

    #[test]
    fn test_over_custom_values() {
        let array = SortedArray::from_values(vec![-5, 0, 3, 9, 40]).unwrap();
        let session = Session::over(array, 9, PlanMode::Collapsed).unwrap();
        assert_eq!(session.plan().found_index(), Some(3));

        let empty = SortedArray::from_values(Vec::new()).unwrap();
        assert!(Session::over(empty, 1, PlanMode::Collapsed).is_err());
    }
}
