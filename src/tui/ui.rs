//! Frame layout.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ MailerLite Dashboard           profile: work │  header
//! ├──────────┬───────────────────────────────────┤
//! │ sidebar  │ [error line]                      │
//! │          │ active view                       │
//! ├──────────┴───────────────────────────────────┤
//! │ Subscribers (42)               profile  ? help│  status bar
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::app::{App, HEADER_HEIGHT};
use crate::tui::component::Component;
use crate::tui::components::{SIDEBAR_WIDTH, STATUS_BAR_HEIGHT};

pub fn draw_ui(frame: &mut Frame, app: &mut App) {
    if !app.initialized() {
        frame.render_widget(Paragraph::new("Initializing..."), frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let [header_area, main_area, status_area] =
        Layout::vertical([Length(HEADER_HEIGHT), Min(0), Length(STATUS_BAR_HEIGHT)])
            .areas(frame.area());

    draw_header(frame, header_area, app.profile());
    draw_main(frame, main_area, app);
    app.status_bar_mut().render(frame, status_area);

    if app.show_help() {
        let area = frame.area();
        app.help_mut().render(frame, area);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, profile: &str) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::styled(
        "MailerLite Dashboard",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    );
    let profile = Line::styled(format!("profile: {profile}"), Style::default().fg(Color::DarkGray))
        .right_aligned();
    frame.render_widget(Paragraph::new(title), inner);
    frame.render_widget(Paragraph::new(profile), inner);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &mut App) {
    let [sidebar_area, content_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);

    app.sidebar_mut().render(frame, sidebar_area);

    let padded = Block::default().padding(Padding::horizontal(1));
    let mut content_area = padded.inner(content_area);

    if let Some(err) = app.error() {
        let [error_area, rest] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(content_area);
        let line = Line::styled(format!("Error: {err}"), Style::default().fg(Color::Red));
        frame.render_widget(Paragraph::new(line), error_area);
        content_area = rest;
    }

    app.view_mut().render(frame, content_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Subscriber;
    use crate::core::loaded::{Batch, Loaded};
    use crate::test_support::subscriber;
    use crate::tui::app::Message;
    use crate::tui::keys::char_key;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn ready_app() -> App {
        let mut app = App::new(None, "work", 100);
        app.update(Message::Resize(100, 30));
        app.update(Message::Loaded(Loaded::Subscribers(Batch {
            generation: 0,
            result: Ok((0..3).map(subscriber).collect::<Vec<Subscriber>>()),
        })));
        app
    }

    #[test]
    fn test_initializing_before_first_resize() {
        let mut app = App::default();
        assert!(draw(&mut app, 60, 10).contains("Initializing..."));
    }

    #[test]
    fn test_full_frame() {
        let mut app = ready_app();
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("MailerLite Dashboard"));
        assert!(text.contains("profile: work"));
        assert!(text.contains("Campaigns"));
        assert!(text.contains("user2@example.com"));
        assert!(text.contains("Subscribers (3)"));
    }

    #[test]
    fn test_app_error_above_view() {
        let mut app = ready_app();
        app.update(Message::Error("fetch task panicked".to_string()));
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("Error: fetch task panicked"));
        assert!(text.contains("user0@example.com"));
    }

    #[test]
    fn test_help_overlay_on_top() {
        let mut app = ready_app();
        app.update(Message::Key(char_key('?')));
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("Keybindings"));
        assert!(text.contains("switch focus"));
    }
}
