use async_trait::async_trait;

use super::list::{ListView, Resource};
use super::{format_date, format_timestamp};
use crate::api::paginate::fetch_all;
use crate::api::{ApiError, Group, MailerLiteApi};
use crate::core::loaded::{Batch, Loaded};
use crate::core::view::ViewType;
use crate::tui::components::{Column, DetailRow, TableCell};

pub type GroupsView = ListView<Group>;

#[async_trait]
impl Resource for Group {
    type Filter = ();

    const VIEW: ViewType = ViewType::Groups;
    const EMPTY_MESSAGE: &'static str = "No groups found.";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("NAME", 28),
            Column::new("ACTIVE", 8),
            Column::new("SENT", 8),
            Column::new("OPENS", 8),
            Column::new("CLICK RATE", 12),
            Column::new("CREATED", 12),
        ]
    }

    fn row(&self) -> Vec<TableCell> {
        vec![
            self.name.as_str().into(),
            self.active_count.to_string().into(),
            self.sent_count.to_string().into(),
            self.opens_count.to_string().into(),
            self.click_rate.string.as_str().into(),
            format_date(self.created_at.as_deref()).into(),
        ]
    }

    fn detail_title(&self) -> String {
        format!("Group: {}", self.name)
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        vec![
            DetailRow::new("ID", &self.id),
            DetailRow::new("Name", &self.name),
            DetailRow::new("Active", self.active_count.to_string()),
            DetailRow::new("Sent", self.sent_count.to_string()),
            DetailRow::new("Opens", self.opens_count.to_string()),
            DetailRow::new("Open Rate", &self.open_rate.string),
            DetailRow::new("Clicks", self.clicks_count.to_string()),
            DetailRow::new("Click Rate", &self.click_rate.string),
            DetailRow::new("Unsubscribed", self.unsubscribed_count.to_string()),
            DetailRow::new("Bounced", self.bounced_count.to_string()),
            DetailRow::new("Created", format_timestamp(self.created_at.as_deref())),
        ]
    }

    async fn fetch_all(
        api: &dyn MailerLiteApi,
        _filter: (),
        limit: usize,
    ) -> Result<Vec<Self>, ApiError> {
        fetch_all(move |page, per_page| api.list_groups(page, per_page), limit).await
    }

    fn into_loaded(batch: Batch<Self>) -> Loaded {
        Loaded::Groups(batch)
    }

    fn from_loaded(loaded: Loaded) -> Option<Batch<Self>> {
        match loaded {
            Loaded::Groups(batch) => Some(batch),
            _ => None,
        }
    }
}
