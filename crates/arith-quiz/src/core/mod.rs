//! Core quiz model: operations, levels, problems, generation and scoring

pub mod generator;
pub mod history;
pub mod level;
pub mod operation;
pub mod problem;
pub mod score;
pub mod source;

pub use generator::{generate, ProblemGenerator};
pub use level::{DifficultyProfile, Level, Span};
pub use operation::{Operation, OperationChoice};
pub use problem::Problem;
pub use score::Score;
pub use source::{NumberSource, ScriptedSource};

use thiserror::Error;

/// Result type for quiz operations
pub type QuizResult<T> = Result<T, QuizError>;

/// Quiz error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Answer text is not an integer
    #[error("Please enter a valid number!")]
    InvalidAnswer(String),
    /// Operation name not recognised
    #[error("Unknown operation '{0}' (expected random, +, -, * or /)")]
    UnknownOperation(String),
    /// Level number outside 1-3
    #[error("Unknown level {0} (expected 1, 2 or 3)")]
    UnknownLevel(u8),
    /// Level text is neither a number nor a level name
    #[error("Unknown level '{0}' (expected 1, 2 or 3)")]
    UnknownLevelName(String),
}

/// Parses an answer the way a player types it: surrounding whitespace is
/// ignored, an optional sign is accepted
pub fn parse_answer(text: &str) -> QuizResult<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| QuizError::InvalidAnswer(text.to_string()))
}
