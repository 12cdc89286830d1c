//! Frontend-neutral quiz driver
//!
//! [`QuizDriver`] is the surface a frontend plays a session through. The
//! line-mode console uses [`SessionDriver`]; the terminal UI goes through
//! [`TuiDriver`], which types answers into the app's input box. Test logic
//! written against the trait runs against both.

use std::time::Instant;

use rand_chacha::ChaCha8Rng;

use crate::core::history::RoundRecord;
use crate::core::{Level, NumberSource, OperationChoice, QuizResult, Score};
use crate::session::{QuizSession, SessionConfig, Verdict};

/// Abstract driver for playing a quiz
pub trait QuizDriver {
    /// The problem currently asked, e.g. `"7 + 12"`
    fn problem_text(&self) -> String;

    /// Submits an answer as typed
    fn answer(&mut self, text: &str, now: Instant) -> QuizResult<Verdict>;

    /// Advances feedback timers; true when a new problem appeared
    fn tick(&mut self, now: Instant) -> bool;

    /// Moves on without waiting for the feedback timer
    fn skip_feedback(&mut self) -> bool;

    /// Current score
    fn score(&self) -> Score;

    /// Feedback lines currently shown, reveal banner first
    fn feedback(&self) -> Vec<String>;

    /// Changes operation and level, resetting the game
    fn select(&mut self, choice: OperationChoice, level: Level);

    /// Resets the game
    fn reset(&mut self);

    /// Answered rounds, newest first
    fn rounds(&self) -> Vec<RoundRecord>;
}

fn session_feedback<S: NumberSource>(session: &QuizSession<S>) -> Vec<String> {
    session
        .reveal_text()
        .into_iter()
        .chain(session.notice().map(|n| n.message().to_string()))
        .collect()
}

/// Driver playing a bare session
#[derive(Debug)]
pub struct SessionDriver<S = ChaCha8Rng> {
    session: QuizSession<S>,
}

impl Default for SessionDriver<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(QuizSession::new(SessionConfig::default()))
    }
}

impl<S: NumberSource> SessionDriver<S> {
    /// Wraps `session` and starts it
    #[must_use]
    pub fn new(mut session: QuizSession<S>) -> Self {
        session.start();
        Self { session }
    }

    /// Returns the underlying session
    #[must_use]
    pub const fn session(&self) -> &QuizSession<S> {
        &self.session
    }
}

impl<S: NumberSource> QuizDriver for SessionDriver<S> {
    fn problem_text(&self) -> String {
        self.session
            .current()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn answer(&mut self, text: &str, now: Instant) -> QuizResult<Verdict> {
        self.session.submit(text, now)
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    fn skip_feedback(&mut self) -> bool {
        self.session.advance()
    }

    fn score(&self) -> Score {
        self.session.score()
    }

    fn feedback(&self) -> Vec<String> {
        session_feedback(&self.session)
    }

    fn select(&mut self, choice: OperationChoice, level: Level) {
        self.session.select(choice, level);
    }

    fn reset(&mut self) {
        self.session.reset();
    }

    fn rounds(&self) -> Vec<RoundRecord> {
        self.session.history().iter_rev().copied().collect()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use std::time::Instant;

    use rand_chacha::ChaCha8Rng;

    use super::{session_feedback, QuizDriver};
    use crate::core::history::RoundRecord;
    use crate::core::{Level, NumberSource, OperationChoice, QuizResult, Score};
    use crate::session::Verdict;
    use crate::tui::{KeyAction, QuizApp};

    /// Driver that plays through the TUI app state
    #[derive(Debug)]
    pub struct TuiDriver<S = ChaCha8Rng> {
        app: QuizApp<S>,
    }

    impl Default for TuiDriver<ChaCha8Rng> {
        fn default() -> Self {
            Self::with_app(QuizApp::default())
        }
    }

    impl<S: NumberSource> TuiDriver<S> {
        /// Creates a TUI driver with an existing app
        #[must_use]
        pub const fn with_app(app: QuizApp<S>) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &QuizApp<S> {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut QuizApp<S> {
            &mut self.app
        }
    }

    impl<S: NumberSource> QuizDriver for TuiDriver<S> {
        fn problem_text(&self) -> String {
            self.app.problem_display()
        }

        fn answer(&mut self, text: &str, now: Instant) -> QuizResult<Verdict> {
            self.app.handle_action(KeyAction::ClearInput, now);
            self.app.set_input(text);
            self.app.submit(now)
        }

        fn tick(&mut self, now: Instant) -> bool {
            self.app.tick(now)
        }

        fn skip_feedback(&mut self) -> bool {
            self.app.advance()
        }

        fn score(&self) -> Score {
            self.app.session().score()
        }

        fn feedback(&self) -> Vec<String> {
            session_feedback(self.app.session())
        }

        fn select(&mut self, choice: OperationChoice, level: Level) {
            self.app.select(choice, level);
        }

        fn reset(&mut self) {
            self.app.handle_action(KeyAction::Reset, Instant::now());
        }

        fn rounds(&self) -> Vec<RoundRecord> {
            self.app.session().history().iter_rev().copied().collect()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
