//! Running score

use std::fmt;

/// Non-negative score: +1 per correct answer, -1 per wrong one, floored at 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u32);

impl Score {
    /// Starting score
    pub const ZERO: Self = Self(0);

    /// Returns the current value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Applies a correct answer
    pub fn record_correct(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Applies a wrong answer
    pub fn record_incorrect(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Applies a verdict
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.record_correct();
        } else {
            self.record_incorrect();
        }
    }

    /// Resets to zero
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
