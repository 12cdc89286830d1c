//! Quiz session state machine
//!
//! ```text
//!            start / reset
//!   Idle ───────────────────► AwaitingInput ◄──────────────┐
//!                               │        │                 │ tick past deadline
//!                submit correct │        │ submit wrong    │ or advance()
//!                               ▼        ▼                 │
//!          ShowingCorrectFeedback    ShowingIncorrectFeedback
//! ```
//!
//! Time never comes from a clock inside the session. Callers pass `now`,
//! so transitions are deterministic under test.

use std::time::{Duration, Instant};

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::core::history::History;
use crate::core::{
    parse_answer, Level, NumberSource, OperationChoice, Problem, ProblemGenerator, QuizResult,
    Score,
};

/// Timing and bookkeeping knobs for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long "correct" feedback stays up before the next problem
    pub correct_feedback: Duration,
    /// How long "incorrect" feedback stays up before the next problem
    pub incorrect_feedback: Duration,
    /// Maximum rounds kept in history
    pub history_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            correct_feedback: Duration::from_millis(500),
            incorrect_feedback: Duration::from_millis(1000),
            history_size: History::DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Where the session is in its question/feedback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    /// No problem generated yet
    Idle,
    /// A problem is shown and an answer is expected
    AwaitingInput,
    /// The last answer was correct; the next problem follows at `until`
    ShowingCorrectFeedback {
        /// Deadline for the transition back to `AwaitingInput`
        until: Instant,
    },
    /// The last answer was wrong; `answer` is revealed until `until`
    ShowingIncorrectFeedback {
        /// Deadline for the transition back to `AwaitingInput`
        until: Instant,
        /// The correct answer to the problem just missed
        answer: i32,
    },
}

impl FeedbackState {
    /// Returns true while a feedback timer is pending
    #[must_use]
    pub const fn is_showing_feedback(&self) -> bool {
        matches!(
            self,
            Self::ShowingCorrectFeedback { .. } | Self::ShowingIncorrectFeedback { .. }
        )
    }

    const fn deadline(&self) -> Option<Instant> {
        match self {
            Self::ShowingCorrectFeedback { until } | Self::ShowingIncorrectFeedback { until, .. } => {
                Some(*until)
            }
            Self::Idle | Self::AwaitingInput => None,
        }
    }
}

/// Outcome of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Answer matched; score went up
    Correct,
    /// Answer was wrong; score went down (not below zero)
    Incorrect {
        /// The correct answer
        answer: i32,
    },
    /// Not awaiting input (idle or feedback showing); nothing changed
    Ignored,
}

/// Message shown in the feedback line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Shown after a correct answer
    Correct,
    /// Shown after a wrong answer
    KeepTrying,
    /// Shown when the answer text is not a number
    InvalidInput,
    /// Shown after a reset or selector change
    Reset,
}

impl Notice {
    /// Text for the feedback line
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Correct => "✅ Correct! Keep going!",
            Self::KeepTrying => "Keep trying!",
            Self::InvalidInput => "Please enter a valid number!",
            Self::Reset => "Game Reset! New challenge awaits.",
        }
    }
}

/// One player's quiz: selection, current problem, score and feedback state
#[derive(Debug)]
pub struct QuizSession<S = ChaCha8Rng> {
    generator: ProblemGenerator<S>,
    choice: OperationChoice,
    level: Level,
    state: FeedbackState,
    current: Option<Problem>,
    score: Score,
    history: History,
    notice: Option<Notice>,
    config: SessionConfig,
}

impl QuizSession<ChaCha8Rng> {
    /// Creates a session drawing from OS entropy
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_generator(ProblemGenerator::new(), config)
    }

    /// Creates a session with a reproducible problem sequence
    #[must_use]
    pub fn seeded(seed: u64, config: SessionConfig) -> Self {
        Self::with_generator(ProblemGenerator::seeded(seed), config)
    }
}

impl<S: NumberSource> QuizSession<S> {
    /// Creates a session around an existing generator
    #[must_use]
    pub fn with_generator(generator: ProblemGenerator<S>, config: SessionConfig) -> Self {
        Self {
            generator,
            choice: OperationChoice::default(),
            level: Level::default(),
            state: FeedbackState::Idle,
            current: None,
            score: Score::ZERO,
            history: History::with_capacity(config.history_size),
            notice: None,
            config,
        }
    }

    /// Sets the initial selection before `start`
    #[must_use]
    pub fn with_selection(mut self, choice: OperationChoice, level: Level) -> Self {
        self.choice = choice;
        self.level = level;
        self
    }

    /// Generates the first problem; no-op once started
    pub fn start(&mut self) {
        if self.state == FeedbackState::Idle {
            info!(operation = %self.choice, level = self.level.number(), "quiz started");
            self.next_problem();
        }
    }

    /// Checks an answer typed by the player
    ///
    /// Unparsable text is reported as `QuizError::InvalidAnswer`; the problem,
    /// score and state are left untouched.
    pub fn submit(&mut self, text: &str, now: Instant) -> QuizResult<Verdict> {
        let problem = match (self.state, self.current) {
            (FeedbackState::AwaitingInput, Some(problem)) => problem,
            _ => return Ok(Verdict::Ignored),
        };

        let given = match parse_answer(text) {
            Ok(given) => given,
            Err(e) => {
                debug!(input = text, "rejected answer");
                self.notice = Some(Notice::InvalidInput);
                return Err(e);
            }
        };

        self.history.record(problem, given);
        if problem.is_correct(given) {
            self.score.record_correct();
            self.state = FeedbackState::ShowingCorrectFeedback {
                until: now + self.config.correct_feedback,
            };
            self.notice = Some(Notice::Correct);
            info!(problem = %problem, given, score = self.score.value(), "correct answer");
            Ok(Verdict::Correct)
        } else {
            self.score.record_incorrect();
            self.state = FeedbackState::ShowingIncorrectFeedback {
                until: now + self.config.incorrect_feedback,
                answer: problem.answer,
            };
            self.notice = Some(Notice::KeepTrying);
            info!(
                problem = %problem,
                given,
                answer = problem.answer,
                score = self.score.value(),
                "incorrect answer"
            );
            Ok(Verdict::Incorrect {
                answer: problem.answer,
            })
        }
    }

    /// Moves to the next problem once the feedback deadline has passed
    ///
    /// Returns true if a new problem was generated.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state.deadline() {
            Some(until) if now >= until => {
                self.next_problem();
                true
            }
            _ => false,
        }
    }

    /// Skips the remaining feedback time
    ///
    /// Returns true if a new problem was generated.
    pub fn advance(&mut self) -> bool {
        if self.state.is_showing_feedback() {
            self.next_problem();
            true
        } else {
            false
        }
    }

    /// Zeroes the score, clears history and starts over with a new problem
    pub fn reset(&mut self) {
        self.score.reset();
        self.history.clear();
        self.next_problem();
        self.notice = Some(Notice::Reset);
        info!(operation = %self.choice, level = self.level.number(), "quiz reset");
    }

    /// Changes the operation selection and resets
    pub fn set_operation(&mut self, choice: OperationChoice) {
        self.select(choice, self.level);
    }

    /// Changes the level and resets
    pub fn set_level(&mut self, level: Level) {
        self.select(self.choice, level);
    }

    /// Changes both selectors with a single reset
    pub fn select(&mut self, choice: OperationChoice, level: Level) {
        self.choice = choice;
        self.level = level;
        self.reset();
    }

    fn next_problem(&mut self) {
        self.current = Some(self.generator.generate(self.choice, self.level));
        self.state = FeedbackState::AwaitingInput;
        self.notice = None;
    }

    /// The problem on screen, if started
    #[must_use]
    pub const fn current(&self) -> Option<&Problem> {
        self.current.as_ref()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> FeedbackState {
        self.state
    }

    /// Current score
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Answered rounds since the last reset
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Selected operation
    #[must_use]
    pub const fn operation(&self) -> OperationChoice {
        self.choice
    }

    /// Selected level
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Feedback-line message, if any
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The revealed answer while incorrect feedback is showing
    #[must_use]
    pub const fn revealed_answer(&self) -> Option<i32> {
        match self.state {
            FeedbackState::ShowingIncorrectFeedback { answer, .. } => Some(answer),
            _ => None,
        }
    }

    /// Text of the wrong-answer banner, if shown
    #[must_use]
    pub fn reveal_text(&self) -> Option<String> {
        self.revealed_answer()
            .map(|answer| format!("❌ Wrong Answer! Answer was: {answer}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{QuizError, ScriptedSource};

    fn scripted(values: impl IntoIterator<Item = i32>) -> QuizSession<ScriptedSource> {
        QuizSession::with_generator(
            ProblemGenerator::with_source(ScriptedSource::new(values)),
            SessionConfig::default(),
        )
        .with_selection(OperationChoice::Add, Level::Easy)
    }

    #[test]
    fn test_starts_idle() {
        let session = scripted([]);
        assert_eq!(session.state(), FeedbackState::Idle);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_start_generates_problem() {
        let mut session = scripted([7, 12]);
        session.start();
        assert_eq!(session.state(), FeedbackState::AwaitingInput);
        assert_eq!(session.current().unwrap().to_string(), "7 + 12");
    }

    #[test]
    fn test_start_twice_keeps_problem() {
        let mut session = scripted([7, 12, 1, 1]);
        session.start();
        session.start();
        assert_eq!(session.current().unwrap().to_string(), "7 + 12");
    }

    #[test]
    fn test_submit_before_start_is_ignored() {
        let mut session = scripted([]);
        assert_eq!(session.submit("3", Instant::now()), Ok(Verdict::Ignored));
    }

    #[test]
    fn test_correct_answer() {
        let mut session = scripted([7, 12]);
        session.start();
        let now = Instant::now();
        assert_eq!(session.submit("19", now), Ok(Verdict::Correct));
        assert_eq!(session.score().value(), 1);
        assert_eq!(session.notice(), Some(Notice::Correct));
        assert_eq!(
            session.state(),
            FeedbackState::ShowingCorrectFeedback {
                until: now + Duration::from_millis(500)
            }
        );
        assert!(session.reveal_text().is_none());
    }

    #[test]
    fn test_incorrect_answer_reveals() {
        let mut session = scripted([7, 12]);
        session.start();
        let now = Instant::now();
        assert_eq!(
            session.submit("20", now),
            Ok(Verdict::Incorrect { answer: 19 })
        );
        assert_eq!(session.score().value(), 0);
        assert_eq!(session.notice(), Some(Notice::KeepTrying));
        assert_eq!(session.revealed_answer(), Some(19));
        assert_eq!(
            session.reveal_text().as_deref(),
            Some("❌ Wrong Answer! Answer was: 19")
        );
    }

    #[test]
    fn test_invalid_answer_changes_nothing() {
        let mut session = scripted([7, 12]);
        session.start();
        let before = *session.current().unwrap();
        let result = session.submit("nineteen", Instant::now());
        assert!(matches!(result, Err(QuizError::InvalidAnswer(_))));
        assert_eq!(session.state(), FeedbackState::AwaitingInput);
        assert_eq!(*session.current().unwrap(), before);
        assert_eq!(session.score(), Score::ZERO);
        assert_eq!(session.notice(), Some(Notice::InvalidInput));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_input_during_feedback_is_ignored() {
        let mut session = scripted([7, 12]);
        session.start();
        let now = Instant::now();
        session.submit("19", now).unwrap();
        assert_eq!(session.submit("19", now), Ok(Verdict::Ignored));
        assert_eq!(session.score().value(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_correct_feedback_expires_after_500ms() {
        let mut session = scripted([7, 12, 3, 4]);
        session.start();
        let now = Instant::now();
        session.submit("19", now).unwrap();
        assert!(!session.tick(now + Duration::from_millis(499)));
        assert!(session.state().is_showing_feedback());
        assert!(session.tick(now + Duration::from_millis(500)));
        assert_eq!(session.state(), FeedbackState::AwaitingInput);
        assert_eq!(session.current().unwrap().to_string(), "3 + 4");
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_incorrect_feedback_expires_after_1000ms() {
        let mut session = scripted([7, 12, 3, 4]);
        session.start();
        let now = Instant::now();
        session.submit("1", now).unwrap();
        assert!(!session.tick(now + Duration::from_millis(999)));
        assert!(session.tick(now + Duration::from_millis(1000)));
        assert!(session.revealed_answer().is_none());
    }

    #[test]
    fn test_tick_while_awaiting_does_nothing() {
        let mut session = scripted([7, 12]);
        session.start();
        assert!(!session.tick(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_advance_skips_feedback() {
        let mut session = scripted([7, 12, 3, 4]);
        session.start();
        assert!(!session.advance());
        session.submit("19", Instant::now()).unwrap();
        assert!(session.advance());
        assert_eq!(session.current().unwrap().answer, 7);
    }

    #[test]
    fn test_score_never_negative() {
        let mut session = scripted([1, 1, 1, 1, 1, 1]);
        session.start();
        for _ in 0..3 {
            session.submit("0", Instant::now()).unwrap();
            session.advance();
        }
        assert_eq!(session.score().value(), 0);
    }

    #[test]
    fn test_reset() {
        let mut session = scripted([7, 12, 3, 4]);
        session.start();
        session.submit("19", Instant::now()).unwrap();
        session.reset();
        assert_eq!(session.score(), Score::ZERO);
        assert!(session.history().is_empty());
        assert_eq!(session.state(), FeedbackState::AwaitingInput);
        assert_eq!(session.notice(), Some(Notice::Reset));
        assert_eq!(session.current().unwrap().to_string(), "3 + 4");
    }

    #[test]
    fn test_set_operation_resets() {
        let mut session = scripted([7, 12, 3, 4]);
        session.start();
        session.submit("19", Instant::now()).unwrap();
        session.set_operation(OperationChoice::Multiply);
        assert_eq!(session.operation(), OperationChoice::Multiply);
        assert_eq!(session.score(), Score::ZERO);
        assert_eq!(session.current().unwrap().to_string(), "3 × 4");
    }

    #[test]
    fn test_set_level_resets() {
        let mut session = scripted([7, 12, 30, 40]);
        session.start();
        session.set_level(Level::Medium);
        assert_eq!(session.level(), Level::Medium);
        assert_eq!(session.current().unwrap().to_string(), "30 + 40");
    }

    #[test]
    fn test_select_draws_one_problem() {
        let mut session = scripted([7, 12, 15, 5, 9, 9]);
        session.start();
        session.select(OperationChoice::Divide, Level::Difficult);
        assert_eq!(session.level(), Level::Difficult);
        assert_eq!(session.current().unwrap().to_string(), "75 ÷ 5");
    }

    #[test]
    fn test_custom_feedback_durations() {
        let config = SessionConfig {
            correct_feedback: Duration::from_millis(10),
            ..SessionConfig::default()
        };
        let mut session = QuizSession::with_generator(
            ProblemGenerator::with_source(ScriptedSource::new([1, 1, 2, 2])),
            config,
        )
        .with_selection(OperationChoice::Add, Level::Easy);
        session.start();
        let now = Instant::now();
        session.submit("2", now).unwrap();
        assert!(session.tick(now + Duration::from_millis(10)));
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = QuizSession::seeded(5, SessionConfig::default());
        let mut b = QuizSession::seeded(5, SessionConfig::default());
        a.start();
        b.start();
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::Correct.message(), "✅ Correct! Keep going!");
        assert_eq!(Notice::InvalidInput.message(), "Please enter a valid number!");
    }
}
