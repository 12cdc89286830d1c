//! Problem generation
//!
//! Every operation is built so the answer is a non-negative integer:
//! subtraction draws the answer and subtrahend and adds them to get the
//! minuend, division draws quotient and divisor and multiplies them to get
//! the dividend. A consequence is that the minuend can exceed the level's
//! nominal maximum, which is kept as is.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core::level::{DifficultyProfile, Level};
use crate::core::operation::{Operation, OperationChoice};
use crate::core::problem::Problem;
use crate::core::source::NumberSource;

/// Generates one problem for `choice` at `level`, consuming draws from `rng`
///
/// Draw order: for `Random` the operation index (`0..=3`) comes first, then
/// the two draws listed for the operation.
pub fn generate<S: NumberSource + ?Sized>(
    choice: OperationChoice,
    level: Level,
    rng: &mut S,
) -> Problem {
    let operation = match choice.fixed() {
        Some(op) => op,
        None => {
            let max = Operation::ALL.len() as i32 - 1;
            Operation::ALL[rng.int_in(0, max) as usize]
        }
    };
    let problem = build(operation, level.profile(), rng);
    debug!(
        level = level.number(),
        %choice,
        problem = %problem,
        answer = problem.answer,
        "generated problem"
    );
    problem
}

fn build<S: NumberSource + ?Sized>(
    operation: Operation,
    profile: &DifficultyProfile,
    rng: &mut S,
) -> Problem {
    match operation {
        Operation::Add => {
            let a = rng.draw(profile.addition.first);
            let b = rng.draw(profile.addition.second);
            Problem::new(Operation::Add, a, b)
        }
        Operation::Subtract => {
            let result = rng.draw(profile.subtraction.result);
            let subtrahend = rng.draw(profile.subtrahend());
            Problem::new(Operation::Subtract, result + subtrahend, subtrahend)
        }
        Operation::Multiply => {
            let a = rng.draw(profile.multiplication.first);
            let b = rng.draw(profile.multiplication.second);
            Problem::new(Operation::Multiply, a, b)
        }
        Operation::Divide => {
            let result = rng.draw(profile.quotient());
            let divisor = rng.draw(profile.divisor());
            Problem::new(Operation::Divide, result * divisor, divisor)
        }
    }
}

/// Problem generator owning its randomness source
///
/// Defaults to `ChaCha8Rng` so a seed reproduces the same problem sequence
/// on every platform.
#[derive(Debug, Clone)]
pub struct ProblemGenerator<S = ChaCha8Rng> {
    source: S,
}

impl ProblemGenerator<ChaCha8Rng> {
    /// Creates a generator seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for ProblemGenerator<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NumberSource> ProblemGenerator<S> {
    /// Creates a generator drawing from `source`
    #[must_use]
    pub const fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Generates the next problem
    pub fn generate(&mut self, choice: OperationChoice, level: Level) -> Problem {
        generate(choice, level, &mut self.source)
    }

    /// Returns the underlying source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::ScriptedSource;

    #[test]
    fn test_level1_addition_example() {
        let mut src = ScriptedSource::new([7, 12]);
        let p = generate(OperationChoice::Add, Level::Easy, &mut src);
        assert_eq!(p.to_string(), "7 + 12");
        assert_eq!(p.answer, 19);
    }

    #[test]
    fn test_level2_division_example() {
        let mut src = ScriptedSource::new([9, 12]);
        let p = generate(OperationChoice::Divide, Level::Medium, &mut src);
        assert_eq!(p.to_string(), "108 ÷ 12");
        assert_eq!(p.answer, 9);
    }

    #[test]
    fn test_subtraction_builds_minuend_from_answer() {
        let mut src = ScriptedSource::new([10, 7]);
        let p = generate(OperationChoice::Subtract, Level::Easy, &mut src);
        assert_eq!(p.operand1, 17);
        assert_eq!(p.operand2, 7);
        assert_eq!(p.answer, 10);
    }

    #[test]
    fn test_subtrahend_floor_is_five() {
        // A draw of 1 is clamped to the subtrahend floor
        let mut src = ScriptedSource::new([5, 1]);
        let p = generate(OperationChoice::Subtract, Level::Easy, &mut src);
        assert_eq!(p.operand2, 5);
        assert_eq!(p.operand1, 10);
    }

    #[test]
    fn test_subtraction_minuend_can_exceed_nominal_max() {
        let mut src = ScriptedSource::new([200, 500]);
        let p = generate(OperationChoice::Subtract, Level::Difficult, &mut src);
        assert_eq!(p.operand1, 700);
        assert_eq!(p.answer, 200);
    }

    #[test]
    fn test_multiplication() {
        let mut src = ScriptedSource::new([9, 5]);
        let p = generate(OperationChoice::Multiply, Level::Easy, &mut src);
        assert_eq!(p.to_string(), "9 × 5");
        assert_eq!(p.answer, 45);
    }

    #[test]
    fn test_division_factors_start_at_two() {
        let mut src = ScriptedSource::new([0, 1]);
        let p = generate(OperationChoice::Divide, Level::Easy, &mut src);
        assert_eq!(p.operand2, 2);
        assert_eq!(p.answer, 2);
        assert_eq!(p.operand1, 4);
    }

    #[test]
    fn test_random_draws_operation_first() {
        // index 2 -> multiply, then operands 3 and 4
        let mut src = ScriptedSource::new([2, 3, 4]);
        let p = generate(OperationChoice::Random, Level::Easy, &mut src);
        assert_eq!(p.operation, Operation::Multiply);
        assert_eq!(p.answer, 12);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_random_covers_all_operations() {
        let mut generator = ProblemGenerator::seeded(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generator.generate(OperationChoice::Random, Level::Medium).operation);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = ProblemGenerator::seeded(42);
        let mut b = ProblemGenerator::seeded(42);
        for level in Level::ALL {
            for _ in 0..20 {
                assert_eq!(
                    a.generate(OperationChoice::Random, level),
                    b.generate(OperationChoice::Random, level)
                );
            }
        }
    }

    #[test]
    fn test_with_scripted_source() {
        let mut generator = ProblemGenerator::with_source(ScriptedSource::new([1, 1]));
        let p = generator.generate(OperationChoice::Add, Level::Easy);
        assert_eq!(p.answer, 2);
        assert_eq!(generator.source_mut().remaining(), 0);
    }
}
