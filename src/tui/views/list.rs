//! # ListView
//!
//! The state machine behind every resource screen. A [`Resource`] describes
//! what is listed (columns, detail rows, how to fetch); `ListView<R>` handles
//! everything that is the same for all of them:
//!
//! ```text
//!            fetch()                    Loaded (current generation)
//!   idle ───────────────▶ loading ───────────────────────────────▶ idle
//!     ▲                                                         │
//!     │ esc/backspace/q                                  enter  │
//!     └──────────────────────── detail ◀────────────────────────┘
//! ```
//!
//! ## Stale fetches
//!
//! Every dispatch bumps `generation` and stamps it into the resulting
//! `Loaded`. Only a message carrying the current generation is applied, so a
//! slow, superseded fetch can never overwrite newer data or clear `loading`
//! while the newest fetch is still in flight.

use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::KeyEvent;
use log::{debug, info, warn};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::{FETCH_TIMEOUT, FetchTask, View};
use crate::api::{ApiError, MailerLiteApi};
use crate::core::loaded::{Batch, Loaded};
use crate::core::view::ViewType;
use crate::tui::component::Component;
use crate::tui::components::{Column, DetailPanel, DetailRow, Table, TableCell};
use crate::tui::keys;

/// Error line plus the blank line under it.
const ERROR_ROWS: u16 = 2;

/// A listable MailerLite resource.
#[async_trait]
pub trait Resource: Sized + Send + Sync + 'static {
    /// Server-side filter carried into every fetch (`()` when there is none).
    type Filter: Copy + Default + Send + Sync + 'static;

    const VIEW: ViewType;
    const EMPTY_MESSAGE: &'static str;

    fn columns() -> Vec<Column>;

    /// Project one item onto the table columns.
    fn row(&self) -> Vec<TableCell>;

    fn detail_title(&self) -> String;

    fn detail_rows(&self) -> Vec<DetailRow>;

    /// Pull every page (up to `limit`) with the resource's pagination style.
    async fn fetch_all(
        api: &dyn MailerLiteApi,
        filter: Self::Filter,
        limit: usize,
    ) -> Result<Vec<Self>, ApiError>;

    fn into_loaded(batch: Batch<Self>) -> Loaded;

    fn from_loaded(loaded: Loaded) -> Option<Batch<Self>>;
}

pub struct ListView<R: Resource> {
    client: Option<Arc<dyn MailerLiteApi>>,
    limit: usize,
    filter: R::Filter,
    table: Table,
    detail: DetailPanel,
    items: Vec<R>,
    loading: bool,
    err: Option<ApiError>,
    width: u16,
    height: u16,
    reserved_rows: u16,
    focused: bool,
    showing_detail: bool,
    generation: u64,
}

impl<R: Resource> ListView<R> {
    /// A view with no items that considers itself loading until the first
    /// fetch completes. `client == None` makes every fetch an empty success.
    pub fn new(client: Option<Arc<dyn MailerLiteApi>>, limit: usize) -> Self {
        let mut table = Table::new(R::columns());
        table.set_empty_message(R::EMPTY_MESSAGE);
        table.set_loading(true);
        Self {
            client,
            limit,
            filter: R::Filter::default(),
            table,
            detail: DetailPanel::default(),
            items: Vec::new(),
            loading: true,
            err: None,
            width: 0,
            height: 0,
            reserved_rows: 0,
            focused: false,
            showing_detail: false,
            generation: 0,
        }
    }

    /// Rows kept back from the table and detail panel for chrome drawn by a
    /// wrapping view.
    pub fn with_reserved_rows(mut self, rows: u16) -> Self {
        self.reserved_rows = rows;
        self
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub fn filter(&self) -> R::Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: R::Filter) {
        self.filter = filter;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn selected(&self) -> Option<&R> {
        self.table.selected().and_then(|i| self.items.get(i))
    }

    /// Apply one batch if it belongs to the newest dispatch.
    pub fn apply(&mut self, batch: Batch<R>) {
        if batch.generation != self.generation {
            debug!(
                "Discarding stale {} result (generation {}, current {})",
                R::VIEW,
                batch.generation,
                self.generation
            );
            return;
        }

        self.loading = false;
        self.table.set_loading(false);
        match batch.result {
            Ok(items) => {
                info!("Loaded {} {}", items.len(), R::VIEW);
                self.err = None;
                self.items = items;
                self.rebuild_rows();
            }
            Err(e) => {
                warn!("Fetching {} failed: {}", R::VIEW, e);
                self.err = Some(e);
            }
        }
    }

    fn rebuild_rows(&mut self) {
        let rows = self.items.iter().map(R::row).collect();
        self.table.set_rows(rows);
    }

    fn body_height(&self) -> u16 {
        self.height.saturating_sub(self.reserved_rows)
    }

    fn show_detail(&mut self) {
        let Some(item) = self.selected() else {
            return;
        };
        let title = item.detail_title();
        let rows = item.detail_rows();
        self.detail.set_title(title);
        self.detail.set_rows(rows);
        self.detail.set_size(self.width, self.body_height());
        self.showing_detail = true;
    }
}

impl<R: Resource> Component for ListView<R> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.showing_detail {
            self.detail.render(frame, area);
            return;
        }

        let Some(err) = &self.err else {
            self.table.render(frame, area);
            return;
        };

        let [error_area, table_area] =
            Layout::vertical([Constraint::Length(ERROR_ROWS), Constraint::Min(0)]).areas(area);
        let line = Line::styled(format!("Error: {err}"), Style::default().fg(Color::Red));
        frame.render_widget(Paragraph::new(line), error_area);
        self.table.render(frame, table_area);
    }
}

impl<R: Resource> View for ListView<R> {
    fn view_type(&self) -> ViewType {
        R::VIEW
    }

    fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let body = self.body_height();
        self.table.set_size(width, body);
        self.detail.set_size(width, body);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.table.set_focused(focused);
    }

    fn fetch(&mut self) -> FetchTask {
        self.generation += 1;
        self.loading = true;
        self.table.set_loading(true);

        let generation = self.generation;
        let client = self.client.clone();
        let filter = self.filter;
        let limit = self.limit;
        debug!("Dispatching {} fetch (generation {})", R::VIEW, generation);

        Box::pin(async move {
            let result = match client {
                None => Ok(Vec::new()),
                Some(client) => {
                    match tokio::time::timeout(
                        FETCH_TIMEOUT,
                        R::fetch_all(client.as_ref(), filter, limit),
                    )
                    .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(ApiError::Timeout(FETCH_TIMEOUT)),
                    }
                }
            };
            R::into_loaded(Batch { generation, result })
        })
    }

    fn update(&mut self, loaded: Loaded) {
        if let Some(batch) = R::from_loaded(loaded) {
            self.apply(batch);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<FetchTask> {
        if self.showing_detail {
            if keys::CLOSE_DETAIL.matches(key) {
                self.showing_detail = false;
            }
            return None;
        }

        if keys::DOWN.matches(key) {
            self.table.move_down();
        } else if keys::UP.matches(key) {
            self.table.move_up();
        } else if keys::TOP.matches(key) {
            self.table.goto_top();
        } else if keys::BOTTOM.matches(key) {
            self.table.goto_bottom();
        } else if keys::ENTER.matches(key) {
            self.show_detail();
        } else if keys::REFRESH.matches(key) {
            return Some(self.fetch());
        }
        None
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn loading(&self) -> bool {
        self.loading
    }

    fn error(&self) -> Option<&ApiError> {
        self.err.as_ref()
    }

    fn showing_detail(&self) -> bool {
        self.showing_detail
    }
}
