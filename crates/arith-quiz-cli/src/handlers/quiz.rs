//! `quiz`: line-oriented console mode
//!
//! One problem per prompt. Feedback is printed at once and the next problem
//! follows without waiting out the feedback timer. `q` or end of input ends
//! the game.

use std::io::{BufRead, Write};
use std::time::Instant;

use arith_quiz::core::Score;
use arith_quiz::driver::{QuizDriver, SessionDriver};
use arith_quiz::session::Verdict;
use console::style;
use tracing::info;

use crate::commands::QuizArgs;
use crate::config::QuizConfig;
use crate::error::CliResult;
use crate::handlers::build_session;

/// Outcome of a console game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSummary {
    /// Rounds that were scored
    pub rounds: u32,
    /// Rounds answered correctly
    pub correct: u32,
    /// Score at the end
    pub score: Score,
}

fn is_quit(text: &str) -> bool {
    text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit")
}

/// Plays `driver` against `input` until quit, end of input or `rounds`
pub fn run_console<D, R, W>(
    driver: &mut D,
    input: R,
    out: &mut W,
    rounds: Option<u32>,
) -> CliResult<ConsoleSummary>
where
    D: QuizDriver,
    R: BufRead,
    W: Write,
{
    let mut summary = ConsoleSummary {
        rounds: 0,
        correct: 0,
        score: driver.score(),
    };
    let mut lines = input.lines();

    loop {
        if rounds.is_some_and(|limit| summary.rounds >= limit) {
            break;
        }

        write!(out, "{} = ", style(driver.problem_text()).bold())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let text = line.trim();
        if is_quit(text) {
            break;
        }

        let verdict = match driver.answer(text, Instant::now()) {
            Ok(verdict) => verdict,
            Err(_) => {
                for message in driver.feedback() {
                    writeln!(out, "{}", style(message).yellow())?;
                }
                continue;
            }
        };

        match verdict {
            Verdict::Correct => {
                summary.correct += 1;
                for message in driver.feedback() {
                    writeln!(out, "{}", style(message).green())?;
                }
            }
            Verdict::Incorrect { .. } => {
                for message in driver.feedback() {
                    writeln!(out, "{}", style(message).red())?;
                }
            }
            Verdict::Ignored => continue,
        }

        summary.rounds += 1;
        summary.score = driver.score();
        writeln!(out, "Score: {}", summary.score)?;
        driver.skip_feedback();
    }

    writeln!(
        out,
        "{} {} ({} of {} correct)",
        style("Final score:").bold(),
        summary.score,
        summary.correct,
        summary.rounds
    )?;
    info!(
        rounds = summary.rounds,
        correct = summary.correct,
        score = summary.score.value(),
        "console quiz finished"
    );
    Ok(summary)
}

/// Runs the console quiz on stdin/stdout
pub fn execute_quiz(args: &QuizArgs, quiz: &QuizConfig) -> CliResult<ConsoleSummary> {
    let session = build_session(&args.selection, quiz);
    let mut driver = SessionDriver::new(session);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{} {} · {}  (q to quit)",
        style("Arithmetic Master").cyan().bold(),
        driver.session().operation().label(),
        driver.session().level().label()
    )?;

    let stdin = std::io::stdin();
    run_console(&mut driver, stdin.lock(), &mut out, args.rounds)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use arith_quiz::core::{Level, OperationChoice, ProblemGenerator, ScriptedSource};
    use arith_quiz::session::{QuizSession, SessionConfig};
    use std::io::Cursor;

    fn driver(values: &[i32]) -> SessionDriver<ScriptedSource> {
        SessionDriver::new(
            QuizSession::with_generator(
                ProblemGenerator::with_source(ScriptedSource::new(values.iter().copied())),
                SessionConfig::default(),
            )
            .with_selection(OperationChoice::Add, Level::Easy),
        )
    }

    fn play(values: &[i32], input: &str, rounds: Option<u32>) -> (ConsoleSummary, String) {
        let mut driver = driver(values);
        let mut out = Vec::new();
        let summary = run_console(&mut driver, Cursor::new(input), &mut out, rounds).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_correct_then_wrong() {
        let (summary, text) = play(&[7, 12, 3, 4, 1, 1], "19\n8\n", None);
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.score.value(), 0);
        assert!(text.contains("7 + 12"));
        assert!(text.contains("Correct! Keep going!"));
        assert!(text.contains("Wrong Answer! Answer was: 7"));
        assert!(text.contains("Keep trying!"));
        assert!(text.contains("(1 of 2 correct)"));
    }

    #[test]
    fn test_invalid_input_reprompts_same_problem() {
        let (summary, text) = play(&[7, 12, 3, 4], "abc\n19\n", None);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.score.value(), 1);
        assert!(text.contains("Please enter a valid number!"));
        assert_eq!(text.matches("7 + 12").count(), 2);
    }

    #[test]
    fn test_quit_command() {
        let (summary, text) = play(&[7, 12, 3, 4], "19\nq\n5\n", None);
        assert_eq!(summary.rounds, 1);
        assert!(text.contains("Final score:"));
        assert!(!text.contains("5 + "));
    }

    #[test]
    fn test_end_of_input() {
        let (summary, _) = play(&[7, 12], "", None);
        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.score, Score::ZERO);
    }

    #[test]
    fn test_round_limit() {
        let (summary, _) = play(&[1, 1, 2, 2, 3, 3], "2\n4\n6\n", Some(2));
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.score.value(), 2);
    }

    #[test]
    fn test_score_shown_after_each_round() {
        let (_, text) = play(&[1, 1, 2, 2], "2\n4\n", None);
        assert!(text.contains("Score: 1"));
        assert!(text.contains("Score: 2"));
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit("q"));
        assert!(is_quit("QUIT"));
        assert!(!is_quit("19"));
    }
}
