//! # StatusBar Component
//!
//! Bottom bar: active view with its item count on the left, profile and a help
//! hint on the right. While the active view is loading the count is replaced
//! by the spinner and its label.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Subscribers  ⠹ Loading Subscribers..."`
//! 2. **Loaded**: `"Subscribers (42)"`
//!
//! The root model recomputes the props after every view switch and every
//! Loaded message, so the bar is never more than one frame stale.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;

/// Top border plus one line of text.
pub const STATUS_BAR_HEIGHT: u16 = 2;

#[derive(Default)]
pub struct StatusBar {
    profile: String,
    left: String,
    loading: bool,
    loading_text: String,
    spinner_frame: &'static str,
    width: u16,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile(&mut self, profile: impl Into<String>) {
        self.profile = profile.into();
    }

    pub fn set_left(&mut self, left: impl Into<String>) {
        self.left = left.into();
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn set_loading(&mut self, loading: bool, text: impl Into<String>) {
        self.loading = loading;
        self.loading_text = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_text(&self) -> &str {
        &self.loading_text
    }

    pub fn set_spinner_frame(&mut self, frame: &'static str) {
        self.spinner_frame = frame;
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn width(&self) -> u16 {
        self.width
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut left = vec![Span::styled(
            format!(" {}", self.left),
            Style::default().fg(Color::Cyan),
        )];
        if self.loading {
            left.push(Span::styled(
                format!("  {} {}", self.spinner_frame, self.loading_text),
                Style::default().fg(Color::Yellow),
            ));
        }

        let right = Line::from(vec![
            Span::styled(
                format!("profile: {}", self.profile),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  ? help "),
        ])
        .right_aligned();

        let right_width = right.width() as u16;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(inner);

        frame.render_widget(Paragraph::new(Line::from(left)), left_area);
        frame.render_widget(Paragraph::new(right), right_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(bar: &mut StatusBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, STATUS_BAR_HEIGHT)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loaded_shows_count_and_profile() {
        let mut bar = StatusBar::new();
        bar.set_profile("work");
        bar.set_left("Campaigns (12)");
        let text = render_text(&mut bar);
        assert!(text.contains("Campaigns (12)"));
        assert!(text.contains("profile: work"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn test_loading_shows_spinner_text() {
        let mut bar = StatusBar::new();
        bar.set_profile("default");
        bar.set_left("Groups");
        bar.set_loading(true, "Loading Groups...");
        bar.set_spinner_frame("⠋");
        let text = render_text(&mut bar);
        assert!(text.contains("Groups"));
        assert!(text.contains("Loading Groups..."));
    }
}
