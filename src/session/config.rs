//! Session parameters and input validation

use crate::array::Value;
use crate::planner::PlanMode;
use crate::tree::LayoutConfig;
use crate::SessionError;

/// Longest array the reference front end accepts
pub const REFERENCE_MAX_LENGTH: usize = 31;

/// Parameters for one session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SessionConfig {
    /// Number of elements n; the array is [2, 4, ..., 2n]
    pub array_length: usize,

    /// Value searched for
    pub target: Value,

    /// How the matching probe is recorded
    pub plan_mode: PlanMode,

    /// Presentation cap on `array_length` (none by default)
    pub max_length: Option<usize>,

    /// Compute tree coordinates alongside the topology
    pub layout: Option<LayoutConfig>,
}

impl SessionConfig {
    /// Validate raw integer inputs
    ///
    /// Fails with `InvalidLength` unless `array_length >= 1`.
    pub fn new(array_length: i64, target: Value) -> Result<Self, SessionError> {
        let array_length = usize::try_from(array_length)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| SessionError::InvalidLength(array_length.to_string()))?;

        Ok(Self {
            array_length,
            target,
            plan_mode: PlanMode::default(),
            max_length: None,
            layout: None,
        })
    }

    /// Settings of the reference front end: 31-element cap, default layout
    pub fn reference(array_length: i64, target: Value) -> Result<Self, SessionError> {
        let config = Self::new(array_length, target)?
            .with_max_length(REFERENCE_MAX_LENGTH)
            .with_layout(LayoutConfig::default());
        config.validate()?;
        Ok(config)
    }

    /// Parse textual inputs as typed by a user
    pub fn parse(array_length: &str, target: &str) -> Result<Self, SessionError> {
        let length: i64 = array_length
            .trim()
            .parse()
            .map_err(|_| SessionError::InvalidLength(array_length.to_string()))?;
        let target: Value = target
            .trim()
            .parse()
            .map_err(|_| SessionError::InvalidTarget(target.to_string()))?;
        Self::new(length, target)
    }

    /// Set the plan recording mode
    pub fn with_plan_mode(mut self, mode: PlanMode) -> Self {
        self.plan_mode = mode;
        self
    }

    /// Cap the array length
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Request tree coordinates
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Check invariants that the constructors cannot enforce alone
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.array_length == 0 {
            return Err(SessionError::InvalidLength(self.array_length.to_string()));
        }
        if let Some(max) = self.max_length {
            if self.array_length > max {
                return Err(SessionError::LengthOutOfRange {
                    length: self.array_length,
                    max,
                });
            }
        }
        Ok(())
    }
}
