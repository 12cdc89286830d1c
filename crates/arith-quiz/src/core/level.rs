//! Difficulty levels and their numeric ranges

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{QuizError, QuizResult};

/// Inclusive integer range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Lower bound (inclusive)
    pub min: i32,
    /// Upper bound (inclusive)
    pub max: i32,
}

impl Span {
    /// Creates a span; `min <= max` is checked at compile time for the
    /// built-in profiles
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies inside the span
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Operand ranges for addition and multiplication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRanges {
    /// Range of the first operand
    pub first: Span,
    /// Range of the second operand
    pub second: Span,
}

/// Ranges for subtraction: the answer is drawn first, then the subtrahend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtractionRanges {
    /// Range of the answer
    pub result: Span,
    /// Largest subtrahend; the smallest is always 5
    pub max_subtrahend: i32,
}

/// Ranges for division: both quotient and divisor start at 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionRanges {
    /// Largest quotient
    pub max_result: i32,
    /// Largest divisor
    pub max_divisor: i32,
}

/// Numeric tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Addition operand ranges
    pub addition: OperandRanges,
    /// Subtraction ranges
    pub subtraction: SubtractionRanges,
    /// Multiplication operand ranges
    pub multiplication: OperandRanges,
    /// Division ranges
    pub division: DivisionRanges,
}

impl DifficultyProfile {
    /// Smallest subtrahend drawn at every level
    pub const MIN_SUBTRAHEND: i32 = 5;
    /// Smallest quotient and divisor drawn at every level
    pub const MIN_FACTOR: i32 = 2;

    /// Level 1: Easy
    pub const EASY: Self = Self {
        addition: OperandRanges {
            first: Span::new(1, 20),
            second: Span::new(1, 20),
        },
        subtraction: SubtractionRanges {
            result: Span::new(5, 15),
            max_subtrahend: 20,
        },
        multiplication: OperandRanges {
            first: Span::new(1, 9),
            second: Span::new(1, 5),
        },
        division: DivisionRanges {
            max_result: 10,
            max_divisor: 10,
        },
    };

    /// Level 2: Medium
    pub const MEDIUM: Self = Self {
        addition: OperandRanges {
            first: Span::new(20, 99),
            second: Span::new(10, 99),
        },
        subtraction: SubtractionRanges {
            result: Span::new(10, 50),
            max_subtrahend: 99,
        },
        multiplication: OperandRanges {
            first: Span::new(5, 15),
            second: Span::new(5, 15),
        },
        division: DivisionRanges {
            max_result: 15,
            max_divisor: 15,
        },
    };

    /// Level 3: Difficult
    pub const DIFFICULT: Self = Self {
        addition: OperandRanges {
            first: Span::new(100, 500),
            second: Span::new(100, 500),
        },
        subtraction: SubtractionRanges {
            result: Span::new(50, 200),
            max_subtrahend: 500,
        },
        multiplication: OperandRanges {
            first: Span::new(10, 25),
            second: Span::new(10, 25),
        },
        division: DivisionRanges {
            max_result: 20,
            max_divisor: 20,
        },
    };

    /// Subtrahend range for this profile
    #[must_use]
    pub const fn subtrahend(&self) -> Span {
        Span::new(Self::MIN_SUBTRAHEND, self.subtraction.max_subtrahend)
    }

    /// Quotient range for this profile
    #[must_use]
    pub const fn quotient(&self) -> Span {
        Span::new(Self::MIN_FACTOR, self.division.max_result)
    }

    /// Divisor range for this profile
    #[must_use]
    pub const fn divisor(&self) -> Span {
        Span::new(Self::MIN_FACTOR, self.division.max_divisor)
    }
}

/// Difficulty level, 1 to 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    /// Level 1
    #[default]
    Easy,
    /// Level 2
    Medium,
    /// Level 3
    Difficult,
}

impl Level {
    /// All levels in selector order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Difficult];

    /// Returns the level number (1-3)
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Difficult => 3,
        }
    }

    /// Looks up a level by number
    pub fn from_number(n: u8) -> QuizResult<Self> {
        match n {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Difficult),
            other => Err(QuizError::UnknownLevel(other)),
        }
    }

    /// Returns this level's numeric ranges
    #[must_use]
    pub const fn profile(&self) -> &'static DifficultyProfile {
        match self {
            Self::Easy => &DifficultyProfile::EASY,
            Self::Medium => &DifficultyProfile::MEDIUM,
            Self::Difficult => &DifficultyProfile::DIFFICULT,
        }
    }

    /// Selector label, e.g. "Level 2: Medium"
    #[must_use]
    pub fn label(&self) -> String {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Difficult => "Difficult",
        };
        format!("Level {}: {name}", self.number())
    }
}

impl TryFrom<u8> for Level {
    type Error = QuizError;

    fn try_from(n: u8) -> QuizResult<Self> {
        Self::from_number(n)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl FromStr for Level {
    type Err = QuizError;

    fn from_str(s: &str) -> QuizResult<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<u8>() {
            Ok(n) => Self::from_number(n),
            Err(_) => match trimmed.to_ascii_lowercase().as_str() {
                "easy" => Ok(Self::Easy),
                "medium" => Ok(Self::Medium),
                "difficult" | "hard" => Ok(Self::Difficult),
                _ => Err(QuizError::UnknownLevelName(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

const _: () = {
    const fn check(p: &DifficultyProfile) {
        assert!(p.addition.first.min <= p.addition.first.max);
        assert!(p.addition.second.min <= p.addition.second.max);
        assert!(p.subtraction.result.min <= p.subtraction.result.max);
        assert!(DifficultyProfile::MIN_SUBTRAHEND <= p.subtraction.max_subtrahend);
        assert!(p.multiplication.first.min <= p.multiplication.first.max);
        assert!(p.multiplication.second.min <= p.multiplication.second.max);
        assert!(DifficultyProfile::MIN_FACTOR <= p.division.max_result);
        assert!(DifficultyProfile::MIN_FACTOR <= p.division.max_divisor);
    }
    check(&DifficultyProfile::EASY);
    check(&DifficultyProfile::MEDIUM);
    check(&DifficultyProfile::DIFFICULT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_numbers() {
        assert_eq!(Level::Easy.number(), 1);
        assert_eq!(Level::Medium.number(), 2);
        assert_eq!(Level::Difficult.number(), 3);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("1".parse(), Ok(Level::Easy));
        assert_eq!("2".parse(), Ok(Level::Medium));
        assert_eq!(" 3 ".parse(), Ok(Level::Difficult));
        assert_eq!("hard".parse(), Ok(Level::Difficult));
    }

    #[test]
    fn test_level_out_of_range() {
        assert_eq!("4".parse::<Level>(), Err(QuizError::UnknownLevel(4)));
        assert_eq!("0".parse::<Level>(), Err(QuizError::UnknownLevel(0)));
        assert!(matches!(
            "expert".parse::<Level>(),
            Err(QuizError::UnknownLevelName(_))
        ));
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(Level::Easy.label(), "Level 1: Easy");
        assert_eq!(Level::Difficult.label(), "Level 3: Difficult");
    }

    #[test]
    fn test_profiles_match_levels() {
        assert_eq!(Level::Easy.profile().addition.first, Span::new(1, 20));
        assert_eq!(Level::Medium.profile().addition.second, Span::new(10, 99));
        assert_eq!(Level::Difficult.profile().subtraction.max_subtrahend, 500);
        assert_eq!(Level::Medium.profile().division.max_result, 15);
        assert_eq!(Level::Easy.profile().multiplication.second, Span::new(1, 5));
    }

    #[test]
    fn test_derived_spans() {
        let p = Level::Medium.profile();
        assert_eq!(p.subtrahend(), Span::new(5, 99));
        assert_eq!(p.quotient(), Span::new(2, 15));
        assert_eq!(p.divisor(), Span::new(2, 15));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10);
        assert!(span.contains(5));
        assert!(span.contains(10));
        assert!(!span.contains(4));
        assert!(!span.contains(11));
    }
}
