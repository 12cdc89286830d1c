//! Log subscriber set-up
//!
//! Filter precedence: `RUST_LOG`, then `-q`/`-v`, then `log_level` from the
//! config file.
//!
//! ```bash
//! RUST_LOG=arith_quiz=debug arith-quiz quiz
//! arith-quiz -v --log-format json generate -n 3
//! arith-quiz play --log-file quiz.log
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::commands::LogFormat;
use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Nowhere; no subscriber is installed
    Silent,
}

impl LogTarget {
    /// Picks the target for a command
    ///
    /// A file always wins. Without one, a command that owns the terminal
    /// stays silent and every other command logs to stderr.
    #[must_use]
    pub fn select(log_file: Option<&Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if owns_terminal => Self::Silent,
            None => Self::Stderr,
        }
    }
}

/// Filter directive from the flags, falling back to the configured level
#[must_use]
pub fn filter_directive(verbosity: Verbosity, configured: &str) -> String {
    verbosity
        .log_level()
        .map_or_else(|| configured.to_string(), str::to_string)
}

fn build_filter(directive: &str) -> CliResult<EnvFilter> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(EnvFilter::from_default_env());
    }
    EnvFilter::try_new(directive)
        .map_err(|e| CliError::config(format!("invalid log level '{directive}': {e}")))
}

/// Installs the global subscriber
pub fn init(directive: &str, format: LogFormat, target: &LogTarget) -> CliResult<()> {
    let (writer, ansi) = match target {
        LogTarget::Silent => return Ok(()),
        LogTarget::Stderr => (
            BoxMakeWriter::new(std::io::stderr),
            console::colors_enabled_stderr(),
        ),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive)?)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| CliError::config(format!("cannot install logger: {e}")))
}
