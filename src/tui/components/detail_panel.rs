//! # DetailPanel Component
//!
//! Read-only label/value listing for one item. Views snapshot the selected
//! item into rows when the panel opens; the panel never looks back at the item.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::table::truncate_str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Default)]
pub struct DetailPanel {
    title: String,
    rows: Vec<DetailRow>,
    width: u16,
    height: u16,
}

impl DetailPanel {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_rows(&mut self, rows: Vec<DetailRow>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[DetailRow] {
        &self.rows
    }

    /// Value shown for `label`, if the panel has such a row.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Component for DetailPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label_width = self.rows.iter().map(|r| r.label.width()).max().unwrap_or(0);
        // borders + padding + gap between label and value
        let value_width = (area.width as usize).saturating_sub(label_width + 6);

        let label_style = Style::default().fg(Color::DarkGray);
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{:<label_width$}  ", row.label), label_style),
                    Span::raw(truncate_str(&row.value, value_width)),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" esc back ").centered())
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
