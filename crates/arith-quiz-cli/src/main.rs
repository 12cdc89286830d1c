//! arith-quiz: arithmetic practice in the terminal
//!
//! ## Usage
//!
//! ```bash
//! arith-quiz play                       # Terminal UI
//! arith-quiz quiz -o '*' -l 2           # Line mode, multiplication, level 2
//! arith-quiz generate -n 5 --answers    # Print problems
//! arith-quiz sort                       # Recovery facility demo
//! ```

use std::io::Write;
use std::process::ExitCode;

use arith_quiz_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, LogTarget, QuizConfig,
    Verbosity,
};
use clap::Parser;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    config.color.apply();

    let quiz = QuizConfig::load_or_default(cli.config.as_deref())?;
    let owns_terminal = matches!(cli.command, Commands::Play(_));
    logging::init(
        &logging::filter_directive(config.verbosity, &quiz.log_level),
        cli.log_format,
        &LogTarget::select(cli.log_file.as_deref(), owns_terminal),
    )?;
    debug!(?config, ?quiz, "configuration loaded");

    match cli.command {
        Commands::Play(args) => {
            let score = handlers::execute_play(&args, &quiz)?;
            if !config.verbosity.is_quiet() {
                println!("Final score: {score}");
            }
            Ok(())
        }
        Commands::Quiz(args) => handlers::execute_quiz(&args, &quiz).map(|_| ()),
        Commands::Generate(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            handlers::execute_generate(&args, &quiz, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Commands::Sort(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            handlers::execute_sort(&args, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
