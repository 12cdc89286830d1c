//! CLI configuration
//!
//! [`CliConfig`] holds the output settings derived from global flags.
//! [`QuizConfig`] is the optional YAML file with quiz defaults:
//!
//! ```yaml
//! operation: multiply
//! level: 2
//! correct_feedback_ms: 400
//! incorrect_feedback_ms: 1500
//! history_size: 50
//! log_level: info
//! ```

use std::path::Path;
use std::time::Duration;

use arith_quiz::core::{Level, OperationChoice};
use arith_quiz::session::SessionConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Log filter implied by the flags, if they imply one
    #[must_use]
    pub const fn log_level(self) -> Option<&'static str> {
        match self {
            Self::Quiet => Some("error"),
            Self::Normal => None,
            Self::Verbose => Some("debug"),
            Self::Debug => Some("trace"),
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }

    /// Applies the choice to `console` styling process-wide
    pub fn apply(self) {
        let enabled = self.should_color();
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled);
    }
}

/// CLI configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

/// Quiz defaults loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Operation selected at start
    pub operation: OperationChoice,
    /// Level selected at start
    pub level: Level,
    /// Correct-answer feedback time in milliseconds
    pub correct_feedback_ms: u64,
    /// Wrong-answer feedback time in milliseconds
    pub incorrect_feedback_ms: u64,
    /// Rounds kept in history
    pub history_size: usize,
    /// Log filter used when neither `RUST_LOG` nor `-v`/`-q` is given
    pub log_level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            operation: OperationChoice::default(),
            level: Level::default(),
            correct_feedback_ms: duration_ms(session.correct_feedback),
            incorrect_feedback_ms: duration_ms(session.incorrect_feedback),
            history_size: session.history_size,
            log_level: "warn".to_string(),
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl QuizConfig {
    /// Largest accepted `history_size`
    pub const MAX_HISTORY_SIZE: usize = 10_000;

    /// Parses a YAML document
    pub fn from_yaml_str(text: &str) -> CliResult<Self> {
        serde_yaml_ng::from_str::<Self>(text)
            .map_err(|e| CliError::config(e.to_string()))?
            .validate()
    }

    /// Loads a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_yaml_ng::from_str::<Self>(&text)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?
            .validate()
            .map_err(|e| match e {
                CliError::Config { message } => {
                    CliError::config(format!("{}: {message}", path.display()))
                }
                other => other,
            })
    }

    fn validate(self) -> CliResult<Self> {
        if self.history_size > Self::MAX_HISTORY_SIZE {
            return Err(CliError::config(format!(
                "history_size {} exceeds the maximum of {}",
                self.history_size,
                Self::MAX_HISTORY_SIZE
            )));
        }
        Ok(self)
    }

    /// Loads `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Session timing and history settings
    #[must_use]
    pub const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            correct_feedback: Duration::from_millis(self.correct_feedback_ms),
            incorrect_feedback: Duration::from_millis(self.incorrect_feedback_ms),
            history_size: self.history_size,
        }
    }

    /// Operation and level after command-line overrides
    #[must_use]
    pub fn selection(
        &self,
        operation: Option<OperationChoice>,
        level: Option<Level>,
    ) -> (OperationChoice, Level) {
        (
            operation.unwrap_or(self.operation),
            level.unwrap_or(self.level),
        )
    }
}
