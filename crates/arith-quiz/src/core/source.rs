//! Randomness sources for problem generation
//!
//! The generator only ever asks for "a uniform integer in `[min, max]`".
//! Any `rand::Rng` answers that; `ScriptedSource` replays fixed draws so
//! exact problems can be asserted in tests.

use std::collections::VecDeque;

use rand::Rng;

use crate::core::level::Span;

/// Source of uniformly distributed integers in an inclusive range
pub trait NumberSource {
    /// Returns an integer in `[min, max]`, or `min` when `min > max`
    fn int_in(&mut self, min: i32, max: i32) -> i32;

    /// Draws a value from `span`
    fn draw(&mut self, span: Span) -> i32 {
        self.int_in(span.min, span.max)
    }
}

impl<R: Rng + ?Sized> NumberSource for R {
    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        if min > max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of draws
///
/// Each scripted value is clamped into the requested range so a script can
/// never push the generator outside its profile. An exhausted script
/// yields `min`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<i32>,
}

impl ScriptedSource {
    /// Creates a source that returns `values` in order
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted draws not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl NumberSource for ScriptedSource {
    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        if min > max {
            return min;
        }
        self.values.pop_front().map_or(min, |v| v.clamp(min, max))
    }
}
