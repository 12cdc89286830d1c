//! `play`: ratatui terminal UI

use std::io;
use std::time::{Duration, Instant};

use arith_quiz::core::{NumberSource, Score};
use arith_quiz::tui::{render, InputHandler, QuizApp};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

use crate::commands::PlayArgs;
use crate::config::QuizConfig;
use crate::error::CliResult;
use crate::handlers::build_session;

/// Runs the TUI until the player quits and returns the final score
pub fn execute_play(args: &PlayArgs, quiz: &QuizConfig) -> CliResult<Score> {
    let mut app = QuizApp::new(build_session(&args.selection, quiz));
    let tick = Duration::from_millis(args.tick_ms.max(1));

    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut app, tick);
    drop(guard);
    result?;

    let score = app.session().score();
    info!(score = score.value(), "tui session ended");
    Ok(score)
}

/// Runs `restore` once when dropped, including on early `?` returns
struct TerminalGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "failed to leave alternate screen");
    }
}

fn run_app<B: Backend, S: NumberSource>(
    terminal: &mut Terminal<B>,
    app: &mut QuizApp<S>,
    tick: Duration,
) -> io::Result<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(app, f))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                app.handle_action(input_handler.handle_key(key), Instant::now());
            }
        }
        app.tick(Instant::now());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn set_up(fail_after_raw_mode: bool, restored: &Cell<u32>) -> io::Result<()> {
        let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        if fail_after_raw_mode {
            return Err(io::Error::other("no alternate screen"));
        }
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_early_error() {
        let restored = Cell::new(0);
        assert!(set_up(true, &restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_once_on_success() {
        let restored = Cell::new(0);
        assert!(set_up(false, &restored).is_ok());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_explicit_drop_restores_immediately() {
        let restored = Cell::new(0);
        let guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        drop(guard);
        assert_eq!(restored.get(), 1);
    }
}
