//! CLI command definitions using clap

use std::path::PathBuf;

use arith_quiz::core::{Level, OperationChoice};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Arithmetic quiz: timed problems at three difficulty levels
#[derive(Parser, Debug)]
#[command(name = "arith-quiz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML file with quiz defaults
    #[arg(long, env = "ARITH_QUIZ_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Play line by line on stdin/stdout
    Quiz(QuizArgs),

    /// Print problems without playing
    Generate(GenerateArgs),

    /// Run the recovery facility sorting demonstration
    Sort(SortArgs),
}

/// Operation and level, overriding the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Operation: random, +, -, *, / (or add, subtract, multiply, divide)
    #[arg(short, long)]
    pub operation: Option<OperationChoice>,

    /// Difficulty level: 1, 2 or 3
    #[arg(short, long)]
    pub level: Option<Level>,

    /// Seed for a reproducible problem sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the play command
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Operation, level and seed
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Event poll interval in milliseconds
    #[arg(long, default_value = "50")]
    pub tick_ms: u64,
}

/// Arguments for the quiz command
#[derive(Args, Debug, Clone)]
pub struct QuizArgs {
    /// Operation, level and seed
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Stop after this many scored rounds
    #[arg(short, long)]
    pub rounds: Option<u32>,
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Operation, level and seed
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Number of problems
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Print the answer after each problem
    #[arg(short, long)]
    pub answers: bool,
}

/// Arguments for the sort command
#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// Name of the sorter
    #[arg(long, default_value = "Ate Mila")]
    pub name: String,

    /// Material the sorter focuses on
    #[arg(long, default_value = "clear glass bottles")]
    pub material: String,

    /// Weight of the finished bale in kilograms
    #[arg(long, default_value = "45.5")]
    pub baled_kg: f64,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log line format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
