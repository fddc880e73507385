use async_trait::async_trait;

use super::list::{ListView, Resource};
use super::{format_timestamp, yes_no_cell, yes_no_label};
use crate::api::paginate::fetch_all;
use crate::api::{ApiError, Automation, MailerLiteApi};
use crate::core::loaded::{Batch, Loaded};
use crate::core::view::ViewType;
use crate::tui::components::{Column, DetailRow, TableCell};

pub type AutomationsView = ListView<Automation>;

#[async_trait]
impl Resource for Automation {
    type Filter = ();

    const VIEW: ViewType = ViewType::Automations;
    const EMPTY_MESSAGE: &'static str = "No automations found.";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("NAME", 30),
            Column::new("ENABLED", 9),
            Column::new("EMAILS", 8),
            Column::new("COMPLETED", 10),
            Column::new("IN QUEUE", 10),
        ]
    }

    fn row(&self) -> Vec<TableCell> {
        vec![
            self.name.as_str().into(),
            yes_no_cell(self.enabled),
            self.emails_count.to_string().into(),
            self.stats.completed_subscribers_count.to_string().into(),
            self.stats.subscribers_in_queue_count.to_string().into(),
        ]
    }

    fn detail_title(&self) -> String {
        format!("Automation: {}", self.name)
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        vec![
            DetailRow::new("ID", &self.id),
            DetailRow::new("Name", &self.name),
            DetailRow::new("Enabled", yes_no_label(self.enabled)),
            DetailRow::new("Emails", self.emails_count.to_string()),
            DetailRow::new(
                "Completed",
                self.stats.completed_subscribers_count.to_string(),
            ),
            DetailRow::new("In Queue", self.stats.subscribers_in_queue_count.to_string()),
            DetailRow::new("Sent", self.stats.sent.to_string()),
            DetailRow::new("Opens", self.stats.opens_count.to_string()),
            DetailRow::new("Clicks", self.stats.clicks_count.to_string()),
            DetailRow::new("Created", format_timestamp(self.created_at.as_deref())),
        ]
    }

    async fn fetch_all(
        api: &dyn MailerLiteApi,
        _filter: (),
        limit: usize,
    ) -> Result<Vec<Self>, ApiError> {
        fetch_all(move |page, per_page| api.list_automations(page, per_page), limit).await
    }

    fn into_loaded(batch: Batch<Self>) -> Loaded {
        Loaded::Automations(batch)
    }

    fn from_loaded(loaded: Loaded) -> Option<Batch<Self>> {
        match loaded {
            Loaded::Automations(batch) => Some(batch),
            _ => None,
        }
    }
}
