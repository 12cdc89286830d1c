//! A generated arithmetic problem

use std::fmt;

use crate::core::operation::Operation;

/// Two operands, an operation and the answer the player must supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    /// Left-hand operand
    pub operand1: i32,
    /// Right-hand operand
    pub operand2: i32,
    /// Operation joining the operands
    pub operation: Operation,
    /// Correct integer answer
    pub answer: i32,
}

impl Problem {
    /// Creates a problem whose answer is computed from the operands
    #[must_use]
    pub const fn new(operation: Operation, operand1: i32, operand2: i32) -> Self {
        Self {
            operand1,
            operand2,
            operation,
            answer: operation.apply(operand1, operand2),
        }
    }

    /// Display symbol for the operation
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.operation.symbol()
    }

    /// Returns true if `answer` is correct
    #[must_use]
    pub const fn is_correct(&self, answer: i32) -> bool {
        self.answer == answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand1, self.symbol(), self.operand2)
    }
}
