//! # Resource Views
//!
//! One screen per [`ViewType`], all behind the [`View`] trait so the root
//! model can dispatch on the active tag instead of matching at every call site.
//!
//! ```text
//!   View (trait)
//!   ├── ListView<Subscriber>   string-cursor pagination
//!   ├── ListView<Campaign>     page pagination
//!   ├── ListView<Automation>   page pagination
//!   ├── ListView<Group>        page pagination
//!   └── FormsView              ListView<Form> + type tabs
//! ```
//!
//! Each view owns its items and only ever replaces them wholesale when a
//! fetch succeeds. Fetches are handed back to the caller as a [`FetchTask`];
//! the view never spawns anything itself.

pub mod automations;
pub mod campaigns;
pub mod forms;
pub mod groups;
pub mod list;
pub mod subscribers;

use std::time::Duration;

use chrono::NaiveDateTime;
use crossterm::event::KeyEvent;
use futures::future::BoxFuture;
use ratatui::style::{Color, Style};

use crate::api::ApiError;
use crate::core::loaded::Loaded;
use crate::core::view::ViewType;
use crate::tui::component::Component;
use crate::tui::components::TableCell;

pub use automations::AutomationsView;
pub use campaigns::CampaignsView;
pub use forms::FormsView;
pub use groups::GroupsView;
pub use list::{ListView, Resource};
pub use subscribers::SubscribersView;

/// Upper bound on one complete fetch, all pages included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A dispatched fetch. Resolves to exactly one `Loaded` for the view that
/// created it.
pub type FetchTask = BoxFuture<'static, Loaded>;

/// Capabilities every resource screen provides to the root model.
pub trait View: Component {
    fn view_type(&self) -> ViewType;

    fn set_size(&mut self, width: u16, height: u16);

    fn set_focused(&mut self, focused: bool);

    /// Enter the loading state and return the work that will end it.
    fn fetch(&mut self) -> FetchTask;

    /// Apply a Loaded message. Messages for other views are ignored.
    fn update(&mut self, loaded: Loaded);

    /// Handle a key while the content area is focused. Returns a fetch when
    /// the key asked for fresh data.
    fn handle_key(&mut self, key: &KeyEvent) -> Option<FetchTask>;

    fn item_count(&self) -> usize;

    fn loading(&self) -> bool;

    fn error(&self) -> Option<&ApiError>;

    fn showing_detail(&self) -> bool;
}

const API_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Table form of an API timestamp: the date only, or blank if unparsable.
pub(crate) fn format_date(raw: Option<&str>) -> String {
    raw.and_then(|s| NaiveDateTime::parse_from_str(s, API_TIME_FORMAT).ok())
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Detail form of an API timestamp. Unparsable values are shown verbatim.
pub(crate) fn format_timestamp(raw: Option<&str>) -> String {
    match raw {
        Some(s) => NaiveDateTime::parse_from_str(s, API_TIME_FORMAT)
            .map(|t| t.format(API_TIME_FORMAT).to_string())
            .unwrap_or_else(|_| s.to_string()),
        None => String::new(),
    }
}

pub(crate) fn yes_no_label(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Green "yes" / red "no" table cell.
pub(crate) fn yes_no_cell(flag: bool) -> TableCell {
    if flag {
        TableCell::styled("yes", Style::default().fg(Color::Green))
    } else {
        TableCell::styled("no", Style::default().fg(Color::Red))
    }
}
