//! Arithmetic quiz engine
//!
//! Generates integer arithmetic problems at three difficulty levels, checks
//! typed answers and keeps score. A terminal frontend ships behind the `tui`
//! feature.
//!
//! # Guarantees
//!
//! - Every answer is an integer: subtraction never goes negative and
//!   division is always exact
//! - The score never drops below zero
//! - A seeded generator reproduces the same problems on every platform
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use arith_quiz::prelude::*;
//!
//! let mut generator = ProblemGenerator::seeded(7);
//! let problem = generator.generate(OperationChoice::Divide, Level::Medium);
//! assert_eq!(problem.operand1 % problem.operand2, 0);
//!
//! let mut session = QuizSession::seeded(7, SessionConfig::default());
//! session.start();
//! let answer = session.current().unwrap().answer.to_string();
//! assert_eq!(session.submit(&answer, Instant::now()), Ok(Verdict::Correct));
//! assert_eq!(session.score().value(), 1);
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{History, RoundRecord};
    pub use crate::core::{
        generate, parse_answer, DifficultyProfile, Level, NumberSource, Operation,
        OperationChoice, Problem, ProblemGenerator, QuizError, QuizResult, Score, ScriptedSource,
        Span,
    };
    pub use crate::driver::{QuizDriver, SessionDriver};
    pub use crate::session::{FeedbackState, Notice, QuizSession, SessionConfig, Verdict};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
