//! # Sidebar Component
//!
//! Vertical list of the five views. Selection moves with up/down and the root
//! model switches the active view to whatever the sidebar points at.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::core::view::ViewType;
use crate::tui::component::Component;

/// Fixed column count reserved for the sidebar.
pub const SIDEBAR_WIDTH: u16 = 22;

pub struct Sidebar {
    active: ViewType,
    focused: bool,
    height: u16,
    list_state: ListState,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self {
            active: ViewType::default(),
            focused: false,
            height: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn active(&self) -> ViewType {
        self.active
    }

    pub fn set_active(&mut self, view: ViewType) {
        self.active = view;
        self.list_state.select(Some(view.index()));
    }

    pub fn next(&mut self) {
        if let Some(view) = ViewType::from_index(self.active.index() + 1) {
            self.set_active(view);
        }
    }

    pub fn prev(&mut self) {
        if let Some(view) = self.active.index().checked_sub(1).and_then(ViewType::from_index) {
            self.set_active(view);
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        SIDEBAR_WIDTH
    }
}

impl Component for Sidebar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(border_color));

        let items: Vec<ListItem> = ViewType::ALL
            .iter()
            .map(|view| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {} ", view.icon())),
                    Span::raw(view.label()),
                    Span::styled(
                        format!("  {}", view.index() + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_stop_at_ends() {
        let mut sidebar = Sidebar::new();
        sidebar.prev();
        assert_eq!(sidebar.active(), ViewType::Subscribers);
        for _ in 0..10 {
            sidebar.next();
        }
        assert_eq!(sidebar.active(), ViewType::Forms);
        sidebar.prev();
        assert_eq!(sidebar.active(), ViewType::Groups);
    }

    #[test]
    fn test_set_active_moves_selection() {
        let mut sidebar = Sidebar::new();
        sidebar.set_active(ViewType::Automations);
        assert_eq!(sidebar.list_state.selected(), Some(2));
    }
}
