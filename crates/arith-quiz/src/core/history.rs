//! Round history
//!
//! Bounded record of answered problems, newest last.

use std::collections::VecDeque;

use crate::core::problem::Problem;

/// One answered problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// The problem that was shown
    pub problem: Problem,
    /// The answer the player gave
    pub given: i32,
}

impl RoundRecord {
    /// Creates a record
    #[must_use]
    pub const fn new(problem: Problem, given: i32) -> Self {
        Self { problem, given }
    }

    /// Returns true if the given answer was right
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.problem.is_correct(self.given)
    }

    /// Formats the record, e.g. "7 + 12 = 19 ✓" or "6 × 7 = 40 ✗ (42)"
    #[must_use]
    pub fn display(&self) -> String {
        if self.is_correct() {
            format!("{} = {} ✓", self.problem, self.given)
        } else {
            format!("{} = {} ✗ ({})", self.problem, self.given, self.problem.answer)
        }
    }
}

/// Bounded queue of answered rounds
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<RoundRecord>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size
    ///
    /// Only the default size is allocated up front; `max_entries` bounds
    /// eviction.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Adds a record, evicting the oldest when full
    pub fn push(&mut self, record: RoundRecord) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// Records an answered problem
    pub fn record(&mut self, problem: Problem, given: i32) {
        self.push(RoundRecord::new(problem, given));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &RoundRecord> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&RoundRecord> {
        self.entries.back()
    }

    /// Number of correctly answered rounds
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.entries.iter().filter(|r| r.is_correct()).count()
    }

    /// Longest run of consecutive correct answers
    #[must_use]
    pub fn best_streak(&self) -> usize {
        let mut best = 0;
        let mut current = 0;
        for record in &self.entries {
            if record.is_correct() {
                current += 1;
                best = best.max(current);
            } else {
                current = 0;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operation::Operation;

    fn add(a: i32, b: i32) -> Problem {
        Problem::new(Operation::Add, a, b)
    }

    #[test]
    fn test_record_display_correct() {
        let r = RoundRecord::new(add(7, 12), 19);
        assert!(r.is_correct());
        assert_eq!(r.display(), "7 + 12 = 19 ✓");
    }

    #[test]
    fn test_record_display_incorrect_reveals_answer() {
        let r = RoundRecord::new(Problem::new(Operation::Multiply, 6, 7), 40);
        assert!(!r.is_correct());
        assert_eq!(r.display(), "6 × 7 = 40 ✗ (42)");
    }

    #[test]
    fn test_history_bounded() {
        let mut h = History::with_capacity(3);
        for i in 0..5 {
            h.record(add(i, 0), i);
        }
        assert_eq!(h.len(), 3);
        let newest: Vec<i32> = h.iter_rev().map(|r| r.given).collect();
        assert_eq!(newest, vec![4, 3, 2]);
    }

    #[test]
    fn test_history_huge_bound_allocates_lazily() {
        let mut h = History::with_capacity(usize::MAX);
        for i in 0..150 {
            h.record(add(i, 0), i);
        }
        assert_eq!(h.len(), 150);
        assert_eq!(h.last().map(|r| r.given), Some(149));
    }

    #[test]
    fn test_history_zero_capacity_keeps_nothing() {
        let mut h = History::with_capacity(0);
        h.record(add(1, 1), 2);
        assert!(h.is_empty());
    }

    #[test]
    fn test_history_clear() {
        let mut h = History::new();
        h.record(add(1, 1), 2);
        h.clear();
        assert!(h.is_empty());
        assert!(h.last().is_none());
    }

    #[test]
    fn test_correct_count_and_streak() {
        let mut h = History::new();
        h.record(add(1, 1), 2);
        h.record(add(1, 2), 3);
        h.record(add(1, 3), 0);
        h.record(add(2, 2), 4);
        assert_eq!(h.correct_count(), 3);
        assert_eq!(h.best_streak(), 2);
    }
}
