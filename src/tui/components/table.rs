//! # Table Component
//!
//! Scrollable, cursor-driven table shared by every resource view.
//!
//! ## State
//!
//! - `rows`: one `Vec<TableCell>` per item, already projected to display text
//! - `cursor`: selected row, always `< rows.len()` when rows exist
//! - `offset`: first visible row; kept so the cursor stays on screen
//! - `loading`: shown in place of the empty message while nothing is loaded
//!
//! The table knows nothing about what the rows mean. Views own the items and
//! map each one to cells; the table only tracks position.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Paragraph, Row, Table as TableWidget, TableState};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Header line plus the gap below it.
const HEADER_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

impl Column {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

/// Display text for one cell plus its colour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub text: String,
    pub style: Style,
}

impl TableCell {
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl From<String> for TableCell {
    fn from(text: String) -> Self {
        Self {
            text,
            style: Style::default(),
        }
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        text.to_string().into()
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<TableCell>>,
    cursor: usize,
    offset: usize,
    width: u16,
    height: u16,
    focused: bool,
    loading: bool,
    empty_message: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            cursor: 0,
            offset: 0,
            width: 0,
            height: 0,
            focused: false,
            loading: false,
            empty_message: "No items.".to_string(),
        }
    }

    pub fn set_empty_message(&mut self, message: impl Into<String>) {
        self.empty_message = message.into();
    }

    /// Replace all rows, clamping the cursor into the new range.
    pub fn set_rows(&mut self, rows: Vec<Vec<TableCell>>) {
        self.rows = rows;
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.ensure_visible();
    }

    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The cursor, or `None` when there is nothing to select.
    pub fn selected(&self) -> Option<usize> {
        (self.cursor < self.rows.len()).then_some(self.cursor)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.ensure_visible();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.ensure_visible();
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
        self.ensure_visible();
    }

    pub fn goto_top(&mut self) {
        self.cursor = 0;
        self.ensure_visible();
    }

    pub fn goto_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.ensure_visible();
    }

    /// Rows that fit below the header.
    pub fn visible_rows(&self) -> usize {
        self.height.saturating_sub(HEADER_ROWS).max(1) as usize
    }

    fn ensure_visible(&mut self) {
        let visible = self.visible_rows();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible {
            self.offset = self.cursor + 1 - visible;
        }
        let max_offset = self.rows.len().saturating_sub(visible);
        self.offset = self.offset.min(max_offset);
    }
}

impl Component for Table {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.rows.is_empty() {
            let text = if self.loading {
                "Loading..."
            } else {
                self.empty_message.as_str()
            };
            let placeholder = Paragraph::new(Line::styled(text, Style::default().fg(Color::DarkGray)));
            frame.render_widget(placeholder, area);
            return;
        }

        // Settle the viewport against the real area before drawing
        self.width = area.width;
        self.height = area.height;
        self.ensure_visible();

        let header = Row::new(
            self.columns
                .iter()
                .map(|c| Cell::from(c.title).style(Style::default().add_modifier(Modifier::BOLD))),
        )
        .style(Style::default().fg(Color::Cyan))
        .bottom_margin(1);

        let rows = self.rows.iter().map(|row| {
            Row::new(row.iter().zip(&self.columns).map(|(cell, column)| {
                Cell::from(truncate_str(&cell.text, column.width as usize)).style(cell.style)
            }))
        });

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray)
        };

        let widths = self.columns.iter().map(|c| Constraint::Length(c.width));
        let table = TableWidget::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(highlight);

        let mut state = TableState::default()
            .with_offset(self.offset)
            .with_selected(Some(self.cursor));
        frame.render_stateful_widget(table, area, &mut state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "…" if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
