//! Command handlers, kept out of main.rs for testability
//!
//! Handlers write to any `io::Write` so tests can capture their output.

pub mod generate;
pub mod play;
pub mod quiz;
pub mod sort;

use arith_quiz::session::QuizSession;

use crate::commands::SelectionArgs;
use crate::config::QuizConfig;

pub use generate::execute_generate;
pub use play::execute_play;
pub use quiz::{execute_quiz, run_console, ConsoleSummary};
pub use sort::execute_sort;

/// Builds a session from the config file and command-line overrides
#[must_use]
pub fn build_session(selection: &SelectionArgs, quiz: &QuizConfig) -> QuizSession {
    let config = quiz.session_config();
    let (choice, level) = quiz.selection(selection.operation, selection.level);
    let session = match selection.seed {
        Some(seed) => QuizSession::seeded(seed, config),
        None => QuizSession::new(config),
    };
    session.with_selection(choice, level)
}
