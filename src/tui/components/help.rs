//! # Help Overlay
//!
//! Full-screen overlay listing every keybinding. Opened with `?`, closed with
//! `?` or Esc; the root model swallows every other key while it is open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::keys::KeyBinding;

pub struct HelpOverlay {
    sections: Vec<(&'static str, Vec<KeyBinding>)>,
    width: u16,
    height: u16,
}

impl HelpOverlay {
    pub fn new(sections: Vec<(&'static str, Vec<KeyBinding>)>) -> Self {
        Self {
            sections,
            width: 0,
            height: 0,
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let key_width = self
            .sections
            .iter()
            .flat_map(|(_, bindings)| bindings.iter().map(|b| b.help_key.chars().count()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for (title, bindings) in &self.sections {
            if !lines.is_empty() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::styled(
                *title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            for binding in bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<key_width$}  ", binding.help_key),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(binding.help_desc),
                ]));
            }
        }
        lines
    }
}

impl Component for HelpOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 80, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Keybindings ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ? / esc close ").centered())
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(self.lines()).block(block), overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
