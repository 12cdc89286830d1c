//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::{QuizApp, Tone};
use crate::core::NumberSource;

/// Renders the quiz UI to the frame
pub fn render<S: NumberSource>(app: &QuizApp<S>, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(QuizUI::new(app), area);
}

/// Quiz UI widget
#[derive(Debug)]
pub struct QuizUI<'a, S> {
    app: &'a QuizApp<S>,
}

impl<'a, S: NumberSource> QuizUI<'a, S> {
    /// Creates a new quiz UI widget
    #[must_use]
    pub const fn new(app: &'a QuizApp<S>) -> Self {
        Self { app }
    }

    /// Creates the main layout chunks
    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Score + reveal
                Constraint::Length(3), // Selectors
                Constraint::Length(5), // Problem
                Constraint::Length(3), // Answer
                Constraint::Length(3), // Feedback
                Constraint::Min(3),    // History
                Constraint::Length(1), // Help
            ])
            .split(area)
            .to_vec()
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let session = self.app.session();
        let mut lines = vec![Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::Indexed(63))
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        if let Some(reveal) = session.reveal_text() {
            lines.push(Line::from(Span::styled(
                reveal,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_selectors(&self, area: Rect, buf: &mut Buffer) {
        let session = self.app.session();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let selector = |title: &'static str, label: String| {
            Paragraph::new(Span::styled(
                format!("{BULLET}{label}"),
                Style::default().fg(Color::Cyan),
            ))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
        };

        selector(" Operation [Tab] ", session.operation().label()).render(chunks[0], buf);
        selector(" Level [F1-F3] ", session.level().label()).render(chunks[1], buf);
    }

    fn render_problem(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                self.app.problem_display(),
                Style::default()
                    .fg(Color::Indexed(57))
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" What is the answer? ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Indexed(189))),
        )
        .render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let spans = vec![
            Span::raw(self.app.input()),
            Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
        ];

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" Answer [Enter] ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(area, buf);
    }

    fn render_feedback(&self, area: Rect, buf: &mut Buffer) {
        let style = match self.app.tone() {
            Tone::Neutral => Style::default().fg(Color::Gray),
            Tone::Success => Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            Tone::Failure => Style::default()
                .fg(Color::White)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            Tone::Warning => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        };

        Paragraph::new(Span::styled(self.app.feedback_display(), style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let history = self.app.session().history();
        let visible = area.height.saturating_sub(2) as usize;

        let items: Vec<ListItem> = history
            .iter_rev()
            .take(visible)
            .map(|record| {
                let color = if record.is_correct() {
                    Color::Green
                } else {
                    Color::Red
                };
                ListItem::new(Span::styled(record.display(), Style::default().fg(color)))
            })
            .collect();

        let title = format!(
            " Rounds: {} correct of {} (best streak {}) ",
            history.correct_count(),
            history.len(),
            history.best_streak()
        );

        List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }
}

impl<S: NumberSource> Widget for QuizUI<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = Self::create_layout(area);
        if chunks.len() >= 7 {
            self.render_header(chunks[0], buf);
            self.render_selectors(chunks[1], buf);
            self.render_problem(chunks[2], buf);
            self.render_input(chunks[3], buf);
            self.render_feedback(chunks[4], buf);
            self.render_history(chunks[5], buf);
            Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center)
                .render(chunks[6], buf);
        }
    }
}

/// Window title
pub const TITLE: &str = " ⚡ Arithmetic Master ";

/// Selector bullet
const BULLET: &str = "● ";

/// Key hints
pub const HELP_LINE: &str = "Enter submit · Esc clear · Tab op · F1-F3 level · ^R reset · ^C quit";
