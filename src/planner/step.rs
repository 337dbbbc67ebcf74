//! One recorded iteration: window [left, right] and probe index

use std::fmt;

use crate::tree::Span;

/// Search window and probe at one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SearchStep {
    /// Lower bound of the window (inclusive)
    pub left: isize,

    /// Upper bound of the window (inclusive); -1 once the window empties
    /// below index 0
    pub right: isize,

    /// Probed index; absent on the terminal step of a miss
    pub mid: Option<usize>,

    /// `Some(true)` on the matching step, `Some(false)` on the terminal
    /// step of a miss, otherwise absent
    pub found: Option<bool>,
}

impl SearchStep {
    /// Ordinary probe of `mid` inside `[left, right]`
    pub fn probe(left: isize, right: isize, mid: usize) -> Self {
        Self {
            left,
            right,
            mid: Some(mid),
            found: None,
        }
    }

    /// Probe of `mid` that matched the target
    pub fn hit(left: isize, right: isize, mid: usize) -> Self {
        Self {
            left,
            right,
            mid: Some(mid),
            found: Some(true),
        }
    }

    /// Terminal step once the window is empty
    pub fn exhausted(left: isize, right: isize) -> Self {
        Self {
            left,
            right,
            mid: None,
            found: Some(false),
        }
    }

    /// Matched the target
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.found == Some(true)
    }

    /// Ends the search, either way
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.found.is_some()
    }

    /// Probe as a signed index, -1 when absent
    pub fn mid_or_sentinel(&self) -> isize {
        self.mid.map_or(-1, |m| m as isize)
    }

    /// Window as a span
    pub fn window(&self) -> Span {
        Span {
            start: self.left,
            end: self.right,
        }
    }

    /// Whether `index` is outside the window
    #[inline]
    pub fn excludes(&self, index: usize) -> bool {
        !self.window().contains(index)
    }
}

impl fmt::Display for SearchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}", self.left, self.right, self.mid_or_sentinel())?;
        match self.found {
            Some(true) => write!(f, ", found}}"),
            Some(false) => write!(f, ", not found}}"),
            None => write!(f, "}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SearchStep::probe(0, 6, 3).to_string(), "{0, 6, 3}");
        assert_eq!(SearchStep::hit(4, 4, 4).to_string(), "{4, 4, 4, found}");
        assert_eq!(SearchStep::exhausted(2, 1).to_string(), "{2, 1, -1, not found}");
    }

    #[test]
    fn test_excludes() {
        let step = SearchStep::probe(2, 4, 3);
        let excluded: Vec<usize> = (0..7).filter(|&i| step.excludes(i)).collect();
        assert_eq!(excluded, vec![0, 1, 5, 6]);

        // Empty window excludes everything
        let step = SearchStep::exhausted(2, 1);
        assert!((0..4).all(|i| step.excludes(i)));
    }
}
