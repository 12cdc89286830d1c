//! Arithmetic quiz CLI library
//!
//! Command definitions, configuration, logging and one handler per
//! subcommand. The binary in `main.rs` only wires them together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{
    Cli, ColorArg, Commands, GenerateArgs, LogFormat, PlayArgs, QuizArgs, SelectionArgs, SortArgs,
};
pub use config::{CliConfig, ColorChoice, QuizConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::LogTarget;
