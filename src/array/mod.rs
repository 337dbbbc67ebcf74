//! Sorted input sequence
//!
//! The walk-through always runs over `[2, 4, 6, ..., 2n]`: distinct,
//! strictly increasing, and trivially reproducible from `n` alone.

use std::fmt;
use std::ops::Deref;

use crate::SessionError;

/// Element type of the searched sequence
pub type Value = i64;

/// Immutable, strictly increasing sequence of values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SortedArray {
    values: Vec<Value>,
}

impl SortedArray {
    /// Build `[2, 4, ..., 2n]`
    ///
    /// `n = 0` yields an empty sequence; sessions reject that earlier.
    pub fn evens(n: usize) -> Self {
        let values = (1..=n as Value).map(|i| i * 2).collect();
        Self { values }
    }

    /// Wrap caller-supplied values, checking strict increase
    pub fn from_values(values: Vec<Value>) -> Result<Self, SessionError> {
        if let Some(pos) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SessionError::NotSorted { index: pos + 1 });
        }
        Ok(Self { values })
    }

    /// Underlying values
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Value at `index`, if in range
    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }

    /// Position of `target`, if present
    pub fn position_of(&self, target: Value) -> Option<usize> {
        self.values.binary_search(&target).ok()
    }
}

impl Deref for SortedArray {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.values
    }
}

impl fmt::Display for SortedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
