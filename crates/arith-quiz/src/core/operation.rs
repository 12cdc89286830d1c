//! Arithmetic operations a problem can be built from
//!
//! Type-safe selection: the four concrete operations plus `random` are the
//! only values a caller can hand to the generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{QuizError, QuizResult};

/// A concrete arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All concrete operations, in the order `random` draws them
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol shown in a problem
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the ASCII key used to select this operation
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }

    /// Applies the operation to two operands
    ///
    /// Division truncates and a zero divisor yields 0; generated problems
    /// are always exact.
    #[must_use]
    pub const fn apply(&self, a: i32, b: i32) -> i32 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Subtract => a.wrapping_sub(b),
            Self::Multiply => a.wrapping_mul(b),
            Self::Divide => match a.checked_div(b) {
                Some(q) => q,
                None => 0,
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What the player selected: one operation, or a fresh random pick per problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationChoice {
    /// Pick one of the four operations uniformly for every problem
    #[default]
    Random,
    /// Always use `Operation::Add`
    Add,
    /// Always use `Operation::Subtract`
    Subtract,
    /// Always use `Operation::Multiply`
    Multiply,
    /// Always use `Operation::Divide`
    Divide,
}

impl OperationChoice {
    /// Selector order, as presented to the player
    pub const ALL: [Self; 5] = [
        Self::Random,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
    ];

    /// Returns the fixed operation, or `None` for `Random`
    #[must_use]
    pub const fn fixed(&self) -> Option<Operation> {
        match self {
            Self::Random => None,
            Self::Add => Some(Operation::Add),
            Self::Subtract => Some(Operation::Subtract),
            Self::Multiply => Some(Operation::Multiply),
            Self::Divide => Some(Operation::Divide),
        }
    }

    /// Selector label, e.g. "× Multiplication"
    #[must_use]
    pub fn label(&self) -> String {
        match self.fixed() {
            None => "Random Operation".to_string(),
            Some(op) => format!("{} {}", op.symbol(), op.name()),
        }
    }

    /// Next entry in selector order, wrapping around
    #[must_use]
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous entry in selector order, wrapping around
    #[must_use]
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<Operation> for OperationChoice {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add => Self::Add,
            Operation::Subtract => Self::Subtract,
            Operation::Multiply => Self::Multiply,
            Operation::Divide => Self::Divide,
        }
    }
}

impl FromStr for OperationChoice {
    type Err = QuizError;

    fn from_str(s: &str) -> QuizResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "+" | "add" => Ok(Self::Add),
            "-" | "subtract" => Ok(Self::Subtract),
            "*" | "×" | "x" | "multiply" => Ok(Self::Multiply),
            "/" | "÷" | "divide" => Ok(Self::Divide),
            _ => Err(QuizError::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for OperationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed() {
            None => f.write_str("random"),
            Some(op) => f.write_str(op.key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_zero_divisor() {
        assert_eq!(Operation::Divide.apply(7, 0), 0);
        assert_eq!(Operation::Divide.apply(9, 3), 3);
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(7, 12), 19);
        assert_eq!(Operation::Subtract.apply(20, 8), 12);
        assert_eq!(Operation::Multiply.apply(6, 7), 42);
        assert_eq!(Operation::Divide.apply(108, 12), 9);
    }

    #[test]
    fn test_choice_from_selector_strings() {
        assert_eq!("random".parse(), Ok(OperationChoice::Random));
        assert_eq!("+".parse(), Ok(OperationChoice::Add));
        assert_eq!("-".parse(), Ok(OperationChoice::Subtract));
        assert_eq!("*".parse(), Ok(OperationChoice::Multiply));
        assert_eq!("/".parse(), Ok(OperationChoice::Divide));
    }

    #[test]
    fn test_choice_from_names() {
        assert_eq!("Add".parse(), Ok(OperationChoice::Add));
        assert_eq!(" divide ".parse(), Ok(OperationChoice::Divide));
        assert_eq!("×".parse(), Ok(OperationChoice::Multiply));
    }

    #[test]
    fn test_choice_unknown() {
        assert_eq!(
            "%".parse::<OperationChoice>(),
            Err(QuizError::UnknownOperation("%".into()))
        );
    }

    #[test]
    fn test_choice_display_round_trips_through_parse() {
        for choice in OperationChoice::ALL {
            assert_eq!(choice.to_string().parse(), Ok(choice));
        }
    }

    #[test]
    fn test_choice_fixed() {
        assert_eq!(OperationChoice::Random.fixed(), None);
        assert_eq!(OperationChoice::Multiply.fixed(), Some(Operation::Multiply));
    }

    #[test]
    fn test_choice_cycle_wraps() {
        assert_eq!(OperationChoice::Random.next(), OperationChoice::Add);
        assert_eq!(OperationChoice::Divide.next(), OperationChoice::Random);
        assert_eq!(OperationChoice::Random.prev(), OperationChoice::Divide);
        assert_eq!(OperationChoice::Add.prev(), OperationChoice::Random);
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(OperationChoice::Random.label(), "Random Operation");
        assert_eq!(OperationChoice::Multiply.label(), "× Multiplication");
        assert_eq!(OperationChoice::Divide.label(), "÷ Division");
    }

    #[test]
    fn test_from_operation() {
        for op in Operation::ALL {
            assert_eq!(OperationChoice::from(op).fixed(), Some(op));
        }
    }
}
