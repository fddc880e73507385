//! # Forms View
//!
//! The API lists forms per type, so this screen wraps a plain
//! `ListView<Form>` with a Popup / Embedded / Promotion tab strip. Switching
//! tabs replaces the filter and dispatches a fresh fetch; the previous tab's
//! items stay on screen until it lands.

use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::list::{ListView, Resource};
use super::{FetchTask, View, format_timestamp, yes_no_cell, yes_no_label};
use crate::api::paginate::fetch_all;
use crate::api::{ApiError, Form, FormType, MailerLiteApi};
use crate::core::loaded::{Batch, Loaded};
use crate::core::view::ViewType;
use crate::tui::component::Component;
use crate::tui::components::{Column, DetailRow, TableCell};
use crate::tui::keys;

/// Tab strip with its bottom border.
const TAB_BAR_ROWS: u16 = 2;
/// Hint line plus a blank spacer.
const HINT_ROWS: u16 = 2;

#[async_trait]
impl Resource for Form {
    type Filter = FormType;

    const VIEW: ViewType = ViewType::Forms;
    const EMPTY_MESSAGE: &'static str = "No forms found.";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("NAME", 28),
            Column::new("TYPE", 12),
            Column::new("ACTIVE", 8),
            Column::new("CONVERSIONS", 12),
            Column::new("OPENS", 8),
        ]
    }

    fn row(&self) -> Vec<TableCell> {
        vec![
            self.name.as_str().into(),
            self.form_type.as_str().into(),
            yes_no_cell(self.active),
            self.conversions_count.to_string().into(),
            self.opens_count.to_string().into(),
        ]
    }

    fn detail_title(&self) -> String {
        format!("Form: {}", self.name)
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        vec![
            DetailRow::new("ID", &self.id),
            DetailRow::new("Name", &self.name),
            DetailRow::new("Type", &self.form_type),
            DetailRow::new("Active", yes_no_label(self.active)),
            DetailRow::new("Conversions", self.conversions_count.to_string()),
            DetailRow::new("Conversion Rate", &self.conversions_rate.string),
            DetailRow::new("Opens", self.opens_count.to_string()),
            DetailRow::new("Created", format_timestamp(self.created_at.as_deref())),
        ]
    }

    async fn fetch_all(
        api: &dyn MailerLiteApi,
        form_type: FormType,
        limit: usize,
    ) -> Result<Vec<Self>, ApiError> {
        fetch_all(
            move |page, per_page| api.list_forms(form_type, page, per_page),
            limit,
        )
        .await
    }

    fn into_loaded(batch: Batch<Self>) -> Loaded {
        Loaded::Forms(batch)
    }

    fn from_loaded(loaded: Loaded) -> Option<Batch<Self>> {
        match loaded {
            Loaded::Forms(batch) => Some(batch),
            _ => None,
        }
    }
}

pub struct FormsView {
    list: ListView<Form>,
}

impl FormsView {
    pub fn new(client: Option<Arc<dyn MailerLiteApi>>, limit: usize) -> Self {
        Self {
            list: ListView::new(client, limit).with_reserved_rows(TAB_BAR_ROWS + HINT_ROWS),
        }
    }

    pub fn active_tab(&self) -> FormType {
        self.list.filter()
    }

    pub fn list(&self) -> &ListView<Form> {
        &self.list
    }

    fn switch_tab(&mut self, tab: FormType) -> FetchTask {
        self.list.set_filter(tab);
        self.list.fetch()
    }

    fn tab_line(&self) -> Line<'static> {
        let active = self.active_tab();
        let spans = FormType::ALL
            .iter()
            .map(|&ft| {
                let style = if ft == active {
                    Style::default()
                        .fg(Color::Cyan)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Span::styled(format!("  {}  ", ft.label()), style)
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }
}

impl Component for FormsView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.list.showing_detail() {
            self.list.render(frame, area);
            return;
        }

        let [tabs_area, hint_area, body_area] = Layout::vertical([
            Constraint::Length(TAB_BAR_ROWS),
            Constraint::Length(HINT_ROWS),
            Constraint::Min(0),
        ])
        .areas(area);

        let tabs = Paragraph::new(self.tab_line()).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(tabs, tabs_area);

        let hint = Line::styled(
            format!("← → to switch types | {} forms", self.list.item_count()),
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(Paragraph::new(hint), hint_area);

        self.list.render(frame, body_area);
    }
}

impl View for FormsView {
    fn view_type(&self) -> ViewType {
        ViewType::Forms
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.list.set_size(width, height);
    }

    fn set_focused(&mut self, focused: bool) {
        self.list.set_focused(focused);
    }

    fn fetch(&mut self) -> FetchTask {
        self.list.fetch()
    }

    fn update(&mut self, loaded: Loaded) {
        self.list.update(loaded);
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<FetchTask> {
        if !self.list.showing_detail() {
            if keys::LEFT.matches(key) {
                return Some(self.switch_tab(self.active_tab().prev()));
            }
            if keys::RIGHT.matches(key) {
                return Some(self.switch_tab(self.active_tab().next()));
            }
        }
        self.list.handle_key(key)
    }

    fn item_count(&self) -> usize {
        self.list.item_count()
    }

    fn loading(&self) -> bool {
        self.list.loading()
    }

    fn error(&self) -> Option<&ApiError> {
        self.list.error()
    }

    fn showing_detail(&self) -> bool {
        self.list.showing_detail()
    }
}
