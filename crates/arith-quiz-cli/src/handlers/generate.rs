//! `generate`: print problems without playing

use std::io::Write;

use arith_quiz::core::ProblemGenerator;
use tracing::info;

use crate::commands::GenerateArgs;
use crate::config::QuizConfig;
use crate::error::{CliError, CliResult};

/// Prints `args.count` problems, one per line
pub fn execute_generate<W: Write>(
    args: &GenerateArgs,
    quiz: &QuizConfig,
    out: &mut W,
) -> CliResult<()> {
    if args.count == 0 {
        return Err(CliError::invalid_argument("--count must be at least 1"));
    }

    let (choice, level) = quiz.selection(args.selection.operation, args.selection.level);
    let mut generator = args
        .selection
        .seed
        .map_or_else(ProblemGenerator::new, ProblemGenerator::seeded);
    info!(count = args.count, %choice, level = level.number(), "generating problems");

    for _ in 0..args.count {
        let problem = generator.generate(choice, level);
        if args.answers {
            writeln!(out, "{problem} = {}", problem.answer)?;
        } else {
            writeln!(out, "{problem}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::SelectionArgs;
    use arith_quiz::core::{Level, OperationChoice};

    fn args(count: usize, answers: bool, operation: OperationChoice) -> GenerateArgs {
        GenerateArgs {
            selection: SelectionArgs {
                operation: Some(operation),
                level: Some(Level::Medium),
                seed: Some(5),
            },
            count,
            answers,
        }
    }

    fn run(args: &GenerateArgs) -> String {
        let mut out = Vec::new();
        execute_generate(args, &QuizConfig::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_count_lines() {
        let text = run(&args(4, false, OperationChoice::Add));
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|l| l.contains(" + ")));
    }

    #[test]
    fn test_answers_are_correct() {
        let text = run(&args(20, true, OperationChoice::Divide));
        for line in text.lines() {
            let (problem, answer) = line.split_once(" = ").unwrap();
            let (a, b) = problem.split_once(" ÷ ").unwrap();
            let (a, b, answer): (i32, i32, i32) =
                (a.parse().unwrap(), b.parse().unwrap(), answer.parse().unwrap());
            assert_eq!(a, b * answer);
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let a = run(&args(5, true, OperationChoice::Random));
        let b = run(&args(5, true, OperationChoice::Random));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut out = Vec::new();
        let err = execute_generate(
            &args(0, false, OperationChoice::Add),
            &QuizConfig::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_config_selection_used_without_flags() {
        let quiz = QuizConfig {
            operation: OperationChoice::Multiply,
            ..QuizConfig::default()
        };
        let args = GenerateArgs {
            selection: SelectionArgs::default(),
            count: 3,
            answers: false,
        };
        let mut out = Vec::new();
        execute_generate(&args, &quiz, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().all(|l| l.contains(" × ")));
    }
}
