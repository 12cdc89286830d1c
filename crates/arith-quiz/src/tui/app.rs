//! TUI application state
//!
//! Wraps a `QuizSession` with the answer being typed and the quit flag.

use std::time::Instant;

use rand_chacha::ChaCha8Rng;

use tracing::debug;

use super::input::KeyAction;
use crate::core::{Level, NumberSource, OperationChoice, QuizResult};
use crate::session::{FeedbackState, Notice, QuizSession, SessionConfig, Verdict};

/// Colour family of the feedback line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Nothing special to report
    Neutral,
    /// Correct answer
    Success,
    /// Wrong answer
    Failure,
    /// Input could not be read
    Warning,
}

/// Quiz application state
#[derive(Debug)]
pub struct QuizApp<S = ChaCha8Rng> {
    session: QuizSession<S>,
    input: String,
    should_quit: bool,
}

impl Default for QuizApp<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(QuizSession::new(SessionConfig::default()))
    }
}

impl<S: NumberSource> QuizApp<S> {
    /// Longest answer the input box accepts
    pub const MAX_INPUT_LEN: usize = 12;

    /// Creates an app around `session` and starts it
    #[must_use]
    pub fn new(mut session: QuizSession<S>) -> Self {
        session.start();
        Self {
            session,
            input: String::new(),
            should_quit: false,
        }
    }

    /// Returns the session
    #[must_use]
    pub const fn session(&self) -> &QuizSession<S> {
        &self.session
    }

    /// Returns the answer being typed
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sets the input string directly
    pub fn set_input(&mut self, input: &str) {
        self.input = input.chars().take(Self::MAX_INPUT_LEN).collect();
    }

    /// Appends a character to the answer
    pub fn insert_char(&mut self, c: char) {
        if self.input.chars().count() < Self::MAX_INPUT_LEN {
            self.input.push(c);
        }
    }

    /// Deletes the last character (backspace)
    pub fn delete_char(&mut self) {
        self.input.pop();
    }

    /// Clears the answer
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submits the typed answer
    ///
    /// A scored answer clears the input box; a rejected one is kept so the
    /// player can fix it.
    pub fn submit(&mut self, now: Instant) -> QuizResult<Verdict> {
        let verdict = self.session.submit(&self.input, now)?;
        if verdict != Verdict::Ignored {
            self.input.clear();
        }
        Ok(verdict)
    }

    /// Advances feedback timers
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    /// Skips the remaining feedback time
    pub fn advance(&mut self) -> bool {
        self.session.advance()
    }

    /// Cycles the operation selector
    pub fn cycle_operation(&mut self, forward: bool) {
        let current = self.session.operation();
        let next = if forward { current.next() } else { current.prev() };
        self.session.set_operation(next);
        self.input.clear();
    }

    /// Selects a level
    pub fn select_level(&mut self, level: Level) {
        self.session.set_level(level);
        self.input.clear();
    }

    /// Sets both selectors at once
    pub fn select(&mut self, choice: OperationChoice, level: Level) {
        self.session.select(choice, level);
        self.input.clear();
    }

    /// Resets the game
    pub fn reset(&mut self) {
        self.session.reset();
        self.input.clear();
    }

    /// Applies a key action
    pub fn handle_action(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::InsertChar(c) => self.insert_char(c),
            KeyAction::Backspace => self.delete_char(),
            KeyAction::ClearInput => self.clear_input(),
            KeyAction::Submit => {
                // Rejected input is already reflected in the session notice
                if let Err(e) = self.submit(now) {
                    debug!(error = %e, "answer not accepted");
                }
            }
            KeyAction::NextOperation => self.cycle_operation(true),
            KeyAction::PrevOperation => self.cycle_operation(false),
            KeyAction::SelectLevel(level) => self.select_level(level),
            KeyAction::Reset => self.reset(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Colour family for the current feedback
    #[must_use]
    pub fn tone(&self) -> Tone {
        match self.session.state() {
            FeedbackState::ShowingCorrectFeedback { .. } => Tone::Success,
            FeedbackState::ShowingIncorrectFeedback { .. } => Tone::Failure,
            FeedbackState::Idle | FeedbackState::AwaitingInput => match self.session.notice() {
                Some(Notice::InvalidInput) => Tone::Warning,
                _ => Tone::Neutral,
            },
        }
    }

    /// Problem text, or a placeholder before the first problem
    #[must_use]
    pub fn problem_display(&self) -> String {
        self.session
            .current()
            .map_or_else(|| "? + ?".to_string(), ToString::to_string)
    }

    /// Feedback-line text
    #[must_use]
    pub fn feedback_display(&self) -> &'static str {
        self.session.notice().map_or("", |n| n.message())
    }
}
