//! Terminal frontend for the quiz
//!
//! State lives in [`QuizApp`]; [`InputHandler`] turns key events into
//! [`KeyAction`]s and [`render`] draws a frame.

mod app;
mod input;
mod ui;

pub use app::{QuizApp, Tone};
pub use input::{InputHandler, KeyAction};
pub use ui::{render, QuizUI, HELP_LINE, TITLE};
